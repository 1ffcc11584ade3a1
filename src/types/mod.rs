//! XMP value types
//!
//! This module defines the typed values namespace decoders convert raw
//! property bytes into.

pub mod rational;
pub mod uuid;

pub use rational::{Rational, SRational};
pub use uuid::Uuid;
