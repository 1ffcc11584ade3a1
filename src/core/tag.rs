//! Tag and attribute values produced by the reader
//!
//! Both are transient: an [`Attribute`] borrows its value from the reader's
//! window and must be dispatched before the reader is advanced again.

use crate::core::namespace::Property;

/// Kind of a tag header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagKind {
    /// `<prefix:name ...>`
    Start,
    /// `</prefix:name>`
    Stop,
    /// `<prefix:name .../>`
    Solo,
}

/// A parsed tag header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tag {
    /// Kind of the tag
    pub kind: TagKind,
    /// Resolved identity of the tag name
    pub property: Property,
    /// Identity of the enclosing tag
    pub parent: Property,
}

impl Tag {
    /// Synthetic start tag standing for `<x:xmpmeta ...>`
    pub fn root() -> Self {
        Self {
            kind: TagKind::Start,
            property: Property::ROOT,
            parent: Property::UNKNOWN,
        }
    }

    /// Whether this is a start tag with a body
    pub fn is_start(&self) -> bool {
        self.kind == TagKind::Start
    }

    /// Whether this is the stop tag closing `property`
    pub fn is_stop_of(&self, property: Property) -> bool {
        self.kind == TagKind::Stop && self.property == property
    }

    /// Whether this is `</x:xmpmeta>`
    pub fn is_root_stop(&self) -> bool {
        self.is_stop_of(Property::ROOT)
    }

    /// Whether this starts an RDF Bag, Seq or Alt
    pub fn is_container(&self) -> bool {
        self.is_start() && self.property.is_container()
    }
}

/// A property value read from an attribute, a tag body or a list item
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Attribute<'a> {
    /// Identity the value is dispatched under
    pub property: Property,
    /// Identity of the enclosing tag
    pub parent: Property,
    /// Raw bytes, not unescaped
    pub value: &'a [u8],
}

impl<'a> Attribute<'a> {
    /// Value of a tag body
    pub fn of_tag(tag: &Tag, value: &'a [u8]) -> Self {
        Self {
            property: tag.property,
            parent: tag.parent,
            value,
        }
    }

    /// The same attribute, reparented onto the list item carrying it
    pub fn within_item(self, item: Property) -> Self {
        Self {
            parent: item,
            ..self
        }
    }

    /// Value of a list item, dispatched under the property owning the list
    pub fn list_item(container: &Tag, value: &'a [u8]) -> Self {
        Self {
            property: container.parent,
            parent: container.property,
            value,
        }
    }
}
