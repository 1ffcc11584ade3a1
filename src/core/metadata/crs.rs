use super::NamespaceDecoder;
use crate::core::error::DecodeError;
use crate::core::namespace::Name;
use crate::utils::convert::{parse_bool, parse_f64, parse_i32, parse_string, parse_u32};

/// Adobe Camera Raw settings namespace (`crs:`)
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CameraRawSettings {
    /// Camera Raw version that wrote the settings
    pub version: String,
    /// Processing engine version
    pub process_version: String,
    /// White balance preset (`As Shot`, `Custom`, ...)
    pub white_balance: String,
    /// Color temperature in kelvin
    pub temperature: u32,
    /// Green/magenta tint
    pub tint: i32,
    /// Exposure adjustment in EV
    pub exposure_2012: f64,
    /// Contrast adjustment
    pub contrast_2012: i32,
    /// Highlight recovery
    pub highlights_2012: i32,
    /// Shadow lift
    pub shadows_2012: i32,
    /// White clipping point
    pub whites_2012: i32,
    /// Black clipping point
    pub blacks_2012: i32,
    /// Local contrast
    pub clarity_2012: i32,
    /// Saturation boost weighted toward muted colors
    pub vibrance: i32,
    /// Uniform saturation adjustment
    pub saturation: i32,
    /// Whether a crop is set
    pub has_crop: bool,
    /// Whether the settings were already baked into the pixels
    pub already_applied: bool,
    /// Name of the raw file the settings belong to
    pub raw_file_name: String,
    /// Camera profile name
    pub camera_profile: String,
}

impl NamespaceDecoder for CameraRawSettings {
    fn decode(&mut self, name: Name, value: &[u8]) -> Result<(), DecodeError> {
        match name {
            Name::Version => self.version = parse_string(value),
            Name::ProcessVersion => self.process_version = parse_string(value),
            Name::WhiteBalance => self.white_balance = parse_string(value),
            Name::Temperature => self.temperature = parse_u32(value),
            Name::Tint => self.tint = parse_i32(value),
            Name::Exposure2012 => self.exposure_2012 = parse_f64(value),
            Name::Contrast2012 => self.contrast_2012 = parse_i32(value),
            Name::Highlights2012 => self.highlights_2012 = parse_i32(value),
            Name::Shadows2012 => self.shadows_2012 = parse_i32(value),
            Name::Whites2012 => self.whites_2012 = parse_i32(value),
            Name::Blacks2012 => self.blacks_2012 = parse_i32(value),
            Name::Clarity2012 => self.clarity_2012 = parse_i32(value),
            Name::Vibrance => self.vibrance = parse_i32(value),
            Name::Saturation => self.saturation = parse_i32(value),
            Name::HasCrop => self.has_crop = parse_bool(value),
            Name::AlreadyApplied => self.already_applied = parse_bool(value),
            Name::RawFileName => self.raw_file_name = parse_string(value),
            Name::CameraProfile => self.camera_profile = parse_string(value),
            _ => return Err(DecodeError::Unrecognized),
        }
        Ok(())
    }
}
