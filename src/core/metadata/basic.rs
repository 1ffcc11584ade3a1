use super::NamespaceDecoder;
use crate::core::error::DecodeError;
use crate::core::namespace::Name;
use crate::utils::convert::{parse_date, parse_i8, parse_string};
use crate::utils::datetime::XmpDateTime;

/// XMP Basic namespace (`xmp:`, legacy `xap:`)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Basic {
    /// When the resource was created
    pub create_date: XmpDateTime,
    /// Name of the first known tool used to create the resource
    pub creator_tool: String,
    /// User-defined collection label
    pub label: String,
    /// When any metadata was last changed
    pub metadata_date: XmpDateTime,
    /// When the resource was last modified
    pub modify_date: XmpDateTime,
    /// User rating: -1 for rejected, 0 for unrated, otherwise 1 to 5
    ///
    /// Stored as written; values outside `i8` read as 0.
    pub rating: i8,
}

impl NamespaceDecoder for Basic {
    fn decode(&mut self, name: Name, value: &[u8]) -> Result<(), DecodeError> {
        match name {
            Name::CreateDate => self.create_date = parse_date(value)?,
            Name::CreatorTool => self.creator_tool = parse_string(value),
            Name::Label => self.label = parse_string(value),
            Name::MetadataDate => self.metadata_date = parse_date(value)?,
            Name::ModifyDate => self.modify_date = parse_date(value)?,
            Name::Rating => self.rating = parse_i8(value),
            _ => return Err(DecodeError::Unrecognized),
        }
        Ok(())
    }
}
