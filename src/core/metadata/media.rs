use super::NamespaceDecoder;
use crate::core::error::DecodeError;
use crate::core::namespace::Name;
use crate::types::Uuid;
use crate::utils::convert::parse_uuid;

/// XMP Media Management namespace (`xmpMM:`, legacy `xapMM:`)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct MediaManagement {
    /// Common identifier for all versions and renditions of a resource
    pub document_id: Uuid,
    /// Identifier of this particular saved instance
    pub instance_id: Uuid,
    /// Document ID of the resource this one was derived from
    pub original_document_id: Uuid,
}

impl NamespaceDecoder for MediaManagement {
    fn decode(&mut self, name: Name, value: &[u8]) -> Result<(), DecodeError> {
        match name {
            Name::DocumentID => self.document_id = parse_uuid(value)?,
            Name::InstanceID => self.instance_id = parse_uuid(value)?,
            Name::OriginalDocumentID => self.original_document_id = parse_uuid(value)?,
            _ => return Err(DecodeError::Unrecognized),
        }
        Ok(())
    }
}
