use super::NamespaceDecoder;
use crate::core::error::DecodeError;
use crate::core::namespace::Name;
use crate::types::{Rational, SRational};
use crate::utils::convert::{parse_rational, parse_srational, parse_string, parse_u32};

/// EXIF auxiliary namespace (`aux:`)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Aux {
    /// Camera body serial number
    pub serial_number: String,
    /// Focal and aperture range: min focal, max focal, min f at min focal, min f at max focal
    pub lens_info: Vec<Rational>,
    /// Lens description
    pub lens: String,
    /// Vendor lens identifier
    pub lens_id: u32,
    /// Lens serial number
    pub lens_serial_number: String,
    /// Shutter count or frame number
    pub image_number: u32,
    /// Flash exposure compensation in EV
    pub flash_compensation: SRational,
    /// Camera firmware version
    pub firmware: String,
    /// Focus distance in meters
    pub approximate_focus_distance: Rational,
}

impl NamespaceDecoder for Aux {
    fn decode(&mut self, name: Name, value: &[u8]) -> Result<(), DecodeError> {
        match name {
            Name::SerialNumber => self.serial_number = parse_string(value),
            Name::LensInfo => {
                self.lens_info = value
                    .split(|b| b.is_ascii_whitespace())
                    .filter(|part| !part.is_empty())
                    .map(parse_rational)
                    .collect();
            }
            Name::Lens => self.lens = parse_string(value),
            Name::LensID => self.lens_id = parse_u32(value),
            Name::LensSerialNumber => self.lens_serial_number = parse_string(value),
            Name::ImageNumber => self.image_number = parse_u32(value),
            Name::FlashCompensation => self.flash_compensation = parse_srational(value),
            Name::Firmware => self.firmware = parse_string(value),
            Name::ApproximateFocusDistance => {
                self.approximate_focus_distance = parse_rational(value)
            }
            _ => return Err(DecodeError::Unrecognized),
        }
        Ok(())
    }
}
