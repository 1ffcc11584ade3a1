//! XMP Metadata
//!
//! [`Xmp`] is the aggregate filled in by the parser. Each supported
//! namespace has its own record type implementing [`NamespaceDecoder`];
//! [`Xmp::decode`] routes a `(property, value)` pair to exactly one of them.

use crate::core::error::DecodeError;
use crate::core::namespace::{Name, Namespace, Property};

mod basic;
mod crs;
mod dc;
mod exif;
mod exif_aux;
mod media;
mod tiff;

pub use basic::Basic;
pub use crs::CameraRawSettings;
pub use dc::DublinCore;
pub use exif::Exif;
pub use exif_aux::Aux;
pub use media::MediaManagement;
pub use tiff::Tiff;

/// A record that decodes the raw values of one namespace
pub trait NamespaceDecoder {
    /// Store `value` in the field named `name`
    ///
    /// Returns [`DecodeError::Unrecognized`] when the record has no field
    /// for `name`.
    fn decode(&mut self, name: Name, value: &[u8]) -> Result<(), DecodeError>;
}

/// Metadata decoded from one XMP packet
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Xmp {
    /// `xmp:` properties
    pub basic: Basic,
    /// `aux:` properties
    pub aux: Aux,
    /// `dc:` properties
    pub dc: DublinCore,
    /// `tiff:` properties
    pub tiff: Tiff,
    /// `crs:` properties
    pub crs: CameraRawSettings,
    /// `xmpMM:` properties
    pub mm: MediaManagement,
    /// `exif:` properties
    pub exif: Exif,
}

impl Xmp {
    /// Create an empty aggregate
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode one raw value into the record of its namespace
    ///
    /// Structural namespaces (`rdf:`, `x:`, `xml:`, `xmlns:`) carry no
    /// metadata and are accepted without effect.
    ///
    /// ```rust
    /// use xmpstream::{Property, Xmp};
    ///
    /// let mut xmp = Xmp::new();
    /// xmp.decode(Property::from_qualified(b"tiff:Make"), b"Canon").unwrap();
    /// assert_eq!(xmp.tiff.make, "Canon");
    /// ```
    pub fn decode(&mut self, property: Property, value: &[u8]) -> Result<(), DecodeError> {
        let name = property.name();
        match property.namespace() {
            Namespace::Xmp => self.basic.decode(name, value),
            Namespace::XmpMM => self.mm.decode(name, value),
            Namespace::Dc => self.dc.decode(name, value),
            Namespace::Aux => self.aux.decode(name, value),
            Namespace::Exif => self.exif.decode(name, value),
            Namespace::Tiff => self.tiff.decode(name, value),
            Namespace::Crs => self.crs.decode(name, value),
            Namespace::Rdf | Namespace::X | Namespace::Xml | Namespace::Xmlns => Ok(()),
            Namespace::Unknown => Err(DecodeError::Unrecognized),
        }
    }
}
