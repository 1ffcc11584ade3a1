//! Scalar conversion helpers shared by the namespace decoders

pub mod convert;
pub mod datetime;

pub use datetime::XmpDateTime;
