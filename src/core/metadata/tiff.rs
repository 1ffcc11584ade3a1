use super::NamespaceDecoder;
use crate::core::error::DecodeError;
use crate::core::namespace::Name;
use crate::types::Rational;
use crate::utils::convert::{parse_date, parse_rational, parse_string, parse_u16, parse_u32};
use crate::utils::datetime::XmpDateTime;

/// TIFF namespace (`tiff:`)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Tiff {
    /// Camera manufacturer
    pub make: String,
    /// Camera model
    pub model: String,
    /// EXIF orientation, 1 to 8
    pub orientation: u16,
    /// Width in pixels
    pub image_width: u32,
    /// Height in pixels
    pub image_length: u32,
    /// Horizontal resolution
    pub x_resolution: Rational,
    /// Vertical resolution
    pub y_resolution: Rational,
    /// Unit of the resolutions: 2 inches, 3 centimeters
    pub resolution_unit: u16,
    /// Software that wrote the image
    pub software: String,
    /// Person who created the image
    pub artist: String,
    /// Copyright notice
    pub copyright: String,
    /// When the file was last changed
    pub date_time: XmpDateTime,
}

impl NamespaceDecoder for Tiff {
    fn decode(&mut self, name: Name, value: &[u8]) -> Result<(), DecodeError> {
        match name {
            Name::Make => self.make = parse_string(value),
            Name::Model => self.model = parse_string(value),
            Name::Orientation => self.orientation = parse_u16(value),
            Name::ImageWidth => self.image_width = parse_u32(value),
            Name::ImageLength => self.image_length = parse_u32(value),
            Name::XResolution => self.x_resolution = parse_rational(value),
            Name::YResolution => self.y_resolution = parse_rational(value),
            Name::ResolutionUnit => self.resolution_unit = parse_u16(value),
            Name::Software => self.software = parse_string(value),
            Name::Artist => self.artist = parse_string(value),
            Name::Copyright => self.copyright = parse_string(value),
            Name::DateTime => self.date_time = parse_date(value)?,
            _ => return Err(DecodeError::Unrecognized),
        }
        Ok(())
    }
}
