use super::NamespaceDecoder;
use crate::core::error::DecodeError;
use crate::core::namespace::Name;
use crate::utils::convert::parse_string;

/// Dublin Core namespace (`dc:`)
///
/// List-valued properties (`rdf:Bag` / `rdf:Seq`) collect every item in
/// document order. Language alternatives (`rdf:Alt`) keep the first item,
/// which XMP writers emit as the `x-default` entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct DublinCore {
    /// Entities primarily responsible for the resource
    pub creator: Vec<String>,
    /// Informal rights statement
    pub rights: String,
    /// Title of the resource
    pub title: String,
    /// Textual description of the resource
    pub description: String,
    /// Keywords
    pub subject: Vec<String>,
    /// MIME type of the resource
    pub format: String,
    /// Entities that contributed to the resource
    pub contributor: Vec<String>,
    /// Entities that made the resource available
    pub publisher: Vec<String>,
    /// Languages used in the resource
    pub language: Vec<String>,
}

fn keep_first(field: &mut String, value: &[u8]) {
    if field.is_empty() {
        *field = parse_string(value);
    }
}

impl NamespaceDecoder for DublinCore {
    fn decode(&mut self, name: Name, value: &[u8]) -> Result<(), DecodeError> {
        match name {
            Name::Creator => self.creator.push(parse_string(value)),
            Name::Rights => keep_first(&mut self.rights, value),
            Name::Title => keep_first(&mut self.title, value),
            Name::DcDescription => keep_first(&mut self.description, value),
            Name::Subject => self.subject.push(parse_string(value)),
            Name::Format => self.format = parse_string(value),
            Name::Contributor => self.contributor.push(parse_string(value)),
            Name::Publisher => self.publisher.push(parse_string(value)),
            Name::Language => self.language.push(parse_string(value)),
            _ => return Err(DecodeError::Unrecognized),
        }
        Ok(())
    }
}
