use super::NamespaceDecoder;
use crate::core::error::DecodeError;
use crate::core::namespace::Name;
use crate::types::{Rational, SRational};
use crate::utils::convert::{parse_date, parse_rational, parse_srational, parse_u16, parse_u32};
use crate::utils::datetime::XmpDateTime;

/// EXIF namespace (`exif:`)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Exif {
    /// Exposure time in seconds
    pub exposure_time: Rational,
    /// Aperture
    pub f_number: Rational,
    /// EXIF exposure program code
    pub exposure_program: u16,
    /// ISO speeds, one per `rdf:Seq` item
    pub iso_speed_ratings: Vec<u32>,
    /// When the image was captured
    pub date_time_original: XmpDateTime,
    /// When the image was digitized
    pub date_time_digitized: XmpDateTime,
    /// Exposure bias in EV
    pub exposure_bias_value: SRational,
    /// Focal length in millimeters
    pub focal_length: Rational,
    /// Valid image width
    pub pixel_x_dimension: u32,
    /// Valid image height
    pub pixel_y_dimension: u32,
}

impl NamespaceDecoder for Exif {
    fn decode(&mut self, name: Name, value: &[u8]) -> Result<(), DecodeError> {
        match name {
            Name::ExposureTime => self.exposure_time = parse_rational(value),
            Name::FNumber => self.f_number = parse_rational(value),
            Name::ExposureProgram => self.exposure_program = parse_u16(value),
            Name::ISOSpeedRatings => self.iso_speed_ratings.push(parse_u32(value)),
            Name::DateTimeOriginal => self.date_time_original = parse_date(value)?,
            Name::DateTimeDigitized => self.date_time_digitized = parse_date(value)?,
            Name::ExposureBiasValue => self.exposure_bias_value = parse_srational(value),
            Name::FocalLength => self.focal_length = parse_rational(value),
            Name::PixelXDimension => self.pixel_x_dimension = parse_u32(value),
            Name::PixelYDimension => self.pixel_y_dimension = parse_u32(value),
            _ => return Err(DecodeError::Unrecognized),
        }
        Ok(())
    }
}
