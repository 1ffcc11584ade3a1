//! XMP Core module
//!
//! This module contains the streaming reader, the property registry and the
//! decoded metadata aggregate.

pub mod error;
pub mod logging;
pub mod metadata;
pub mod namespace;
pub mod options;
pub mod parser;
pub mod reader;
pub mod tag;
pub mod window;

pub use error::{DecodeError, Phase, XmpError, XmpResult};
pub use logging::NoopLogger;
pub use metadata::{
    Aux, Basic, CameraRawSettings, DublinCore, Exif, MediaManagement, NamespaceDecoder, Tiff, Xmp,
};
pub use namespace::{Name, Namespace, Property};
pub use options::XmpReaderOptions;
pub use reader::XmpReader;
pub use tag::{Attribute, Tag, TagKind};
