//! Recursive descent over an XMP packet
//!
//! The driver reads tag headers level by level and dispatches every
//! property value it meets, whether it came from an attribute, a tag body
//! or an item of an RDF list, into the [`Xmp`] aggregate as soon as it is
//! read.
//!
//! RDF lists are flattened: for
//!
//! ```xml
//! <dc:subject><rdf:Bag><rdf:li>foo</rdf:li><rdf:li>bar</rdf:li></rdf:Bag></dc:subject>
//! ```
//!
//! `dc:subject` is dispatched twice, with `foo` and then `bar`.

use crate::core::error::{Phase, XmpError, XmpResult};
use crate::core::logging::emit;
use crate::core::metadata::Xmp;
use crate::core::reader::XmpReader;
use crate::core::tag::{Attribute, Tag};
use log::{Level, Log};
use std::io::Read;

/// How a nesting level ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Walk {
    /// The level's own stop tag was read
    Closed,
    /// `</x:xmpmeta>` or `<?` was read; unwind everything
    Finished,
}

/// Decode one value into the aggregate, skipping anything not decodable
pub(crate) fn dispatch(xmp: &mut Xmp, logger: &'static dyn Log, attr: Attribute<'_>) {
    if attr.value.is_empty() || attr.property.is_unknown() {
        return;
    }
    if let Err(err) = xmp.decode(attr.property, attr.value) {
        emit!(
            logger,
            Level::Trace,
            "skipping {} in {}: {}",
            attr.property,
            attr.parent,
            err
        );
    }
}

impl<R: Read> XmpReader<R> {
    /// Parse the first XMP packet in the stream
    ///
    /// Returns `Ok(None)` when the stream holds no `<x:xmpmeta` root tag.
    /// Properties the aggregate has no field for are skipped silently.
    pub fn parse(mut self) -> XmpResult<Option<Xmp>> {
        let Some(root) = self.find_root()? else {
            return Ok(None);
        };
        let mut xmp = Xmp::default();
        self.read_tag(&mut xmp, root, 0)?;
        Ok(Some(xmp))
    }

    fn read_tag(&mut self, xmp: &mut Xmp, parent: Tag, depth: usize) -> XmpResult<Walk> {
        if depth > self.options.max_depth {
            return Err(XmpError::malformed(
                Phase::TagHeader,
                "tag nesting exceeds the depth limit",
            ));
        }
        let logger = self.logger;

        loop {
            let Some(mut tag) = self.read_tag_header(parent.property)? else {
                emit!(logger, Level::Debug, "processing instruction ends the packet");
                return Ok(Walk::Finished);
            };
            if tag.is_stop_of(parent.property) {
                return Ok(Walk::Closed);
            }
            if tag.is_root_stop() {
                return Ok(Walk::Finished);
            }

            while self.pending_attributes {
                if let Some(attr) = self.read_attribute(&mut tag)? {
                    dispatch(xmp, logger, attr);
                }
            }

            let walk = if tag.is_container() {
                self.read_seq_tags(xmp, tag, depth + 1)?
            } else if tag.is_start() {
                let value = self.read_tag_value()?;
                dispatch(xmp, logger, Attribute::of_tag(&tag, value));
                self.read_tag(xmp, tag, depth + 1)?
            } else {
                Walk::Closed
            };
            if walk == Walk::Finished {
                return Ok(Walk::Finished);
            }
        }
    }

    // Items of a Bag, Seq or Alt are dispatched under the property that
    // owns the container.
    fn read_seq_tags(&mut self, xmp: &mut Xmp, container: Tag, depth: usize) -> XmpResult<Walk> {
        let logger = self.logger;

        loop {
            let Some(mut item) = self.read_tag_header(container.property)? else {
                return Ok(Walk::Finished);
            };
            if item.is_stop_of(container.property) {
                return Ok(Walk::Closed);
            }
            if item.is_root_stop() {
                return Ok(Walk::Finished);
            }

            while self.pending_attributes {
                if let Some(attr) = self.read_attribute(&mut item)? {
                    dispatch(xmp, logger, attr.within_item(item.property));
                }
            }

            if item.is_start() {
                let value = self.read_tag_value()?;
                dispatch(xmp, logger, Attribute::list_item(&container, value));
                // structured items (rdf:parseType="Resource") carry fields
                if self.read_tag(xmp, item, depth + 1)? == Walk::Finished {
                    return Ok(Walk::Finished);
                }
            }
        }
    }
}
