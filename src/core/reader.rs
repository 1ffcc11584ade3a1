//! Streaming tag, attribute and value readers
//!
//! [`XmpReader`] walks an XMP packet directly on a [`ByteWindow`]. Each
//! read peeks a block, scans it for the delimiter it needs, grows the
//! peek by one block when the delimiter is not there yet, and finally
//! consumes exactly the bytes it used. Nothing is copied out of the
//! window: values are handed to the caller as borrowed slices.
//!
//! The pure `scan_*` helpers decide what a peeked block contains; the
//! reader methods own the grow-and-retry loops around them.

use crate::core::error::{Phase, XmpError, XmpResult};
use crate::core::logging::{emit, NOOP};
use crate::core::namespace::Property;
use crate::core::options::XmpReaderOptions;
use crate::core::tag::{Attribute, Tag, TagKind};
use crate::core::window::{grow, ByteWindow};
use log::{Level, Log};
use memchr::{memchr, memmem};
use std::io::Read;

/// Literal opening the XMP root tag
pub const ROOT_TAG: &[u8] = b"<x:xmpmeta";

/// Incremental XMP packet reader
///
/// One reader owns one byte stream for one [`parse`](XmpReader::parse)
/// call.
///
/// ```rust
/// use xmpstream::{XmpReader, XmpReaderOptions};
///
/// let packet = br#"<x:xmpmeta><rdf:RDF><rdf:Description xmp:Rating="4"/></rdf:RDF></x:xmpmeta>"#;
/// let xmp = XmpReader::with_options(&packet[..], XmpReaderOptions::default())
///     .parse()
///     .unwrap()
///     .unwrap();
/// assert_eq!(xmp.basic.rating, 4);
/// ```
pub struct XmpReader<R> {
    pub(crate) window: ByteWindow<R>,
    pub(crate) options: XmpReaderOptions,
    pub(crate) logger: &'static dyn Log,
    pub(crate) pending_attributes: bool,
}

pub(crate) fn is_space(b: u8) -> bool {
    matches!(b, b' ' | b'\n' | b'\r' | b'\t')
}

/// Outcome of scanning a block that starts with `<`
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum HeaderScan {
    /// More bytes are needed to decide
    Incomplete,
    /// `<?`: no more structured content
    Instruction,
    /// `<!--`: skip through `-->`
    Comment,
    /// `<!` other than a comment: skip through `>`
    Markup,
    /// A complete tag header, or its name followed by attributes
    Tag {
        kind: TagKind,
        property: Property,
        consumed: usize,
        attributes: bool,
    },
    Malformed(&'static str),
}

pub(crate) fn scan_header(buf: &[u8]) -> HeaderScan {
    let (kind, start) = match buf.get(1) {
        None => return HeaderScan::Incomplete,
        Some(b'/') => (TagKind::Stop, 2),
        Some(b'?') => return HeaderScan::Instruction,
        Some(b'!') => {
            return match buf.get(2..4) {
                None => HeaderScan::Incomplete,
                Some(b"--") => HeaderScan::Comment,
                Some(_) => HeaderScan::Markup,
            }
        }
        Some(_) => (TagKind::Start, 1),
    };

    let name = &buf[start..];
    let Some(len) = name
        .iter()
        .position(|&b| b == b'>' || b == b'/' || is_space(b))
    else {
        return HeaderScan::Incomplete;
    };
    let property = Property::from_qualified(&name[..len]);
    let after = start + len;

    match buf[after] {
        b'>' => HeaderScan::Tag {
            kind,
            property,
            consumed: after + 1,
            attributes: false,
        },
        b'/' => match buf.get(after + 1) {
            None => HeaderScan::Incomplete,
            Some(b'>') => HeaderScan::Tag {
                kind: TagKind::Solo,
                property,
                consumed: after + 2,
                attributes: false,
            },
            Some(_) => HeaderScan::Malformed("'/' in tag name not followed by '>'"),
        },
        _ => HeaderScan::Tag {
            kind,
            property,
            consumed: after,
            attributes: true,
        },
    }
}

/// Outcome of scanning a block for an attribute name
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum AttributeScan {
    Incomplete,
    /// `>` or `/>` closed the header instead
    Close { consumed: usize, solo: bool },
    Name { property: Property, len: usize },
    Malformed(&'static str),
}

// Expects `buf` to start after any leading whitespace.
pub(crate) fn scan_attribute_name(buf: &[u8]) -> AttributeScan {
    match buf {
        [] => AttributeScan::Incomplete,
        [b'>', ..] => AttributeScan::Close {
            consumed: 1,
            solo: false,
        },
        [b'/'] => AttributeScan::Incomplete,
        [b'/', b'>', ..] => AttributeScan::Close {
            consumed: 2,
            solo: true,
        },
        [b'/', ..] => AttributeScan::Malformed("'/' in tag header not followed by '>'"),
        _ => match buf
            .iter()
            .position(|&b| b == b'=' || b == b'>' || b == b'/' || is_space(b))
        {
            Some(len) => AttributeScan::Name {
                property: Property::from_qualified(&buf[..len]),
                len,
            },
            None => AttributeScan::Incomplete,
        },
    }
}

/// Where an attribute ends once its closing quote at `quote` is known
#[derive(Debug, PartialEq, Eq)]
pub(crate) struct ValueEnd {
    pub consumed: usize,
    pub closes_header: bool,
    pub solo: bool,
}

// Needs one byte of lookahead after the quote, two when that byte is '/'.
// At end of stream missing lookahead leaves the header open.
pub(crate) fn scan_after_value(buf: &[u8], quote: usize, eof: bool) -> Option<ValueEnd> {
    let open = ValueEnd {
        consumed: quote + 1,
        closes_header: false,
        solo: false,
    };
    match buf.get(quote + 1) {
        Some(b'>') => Some(ValueEnd {
            consumed: quote + 2,
            closes_header: true,
            solo: false,
        }),
        Some(b'/') => match buf.get(quote + 2) {
            Some(b'>') => Some(ValueEnd {
                consumed: quote + 3,
                closes_header: true,
                solo: true,
            }),
            Some(_) => Some(open),
            None if eof => Some(open),
            None => None,
        },
        Some(_) => Some(open),
        None if eof => Some(open),
        None => None,
    }
}

impl<R: Read> XmpReader<R> {
    /// Create a reader with default options and no logging
    pub fn new(inner: R) -> Self {
        Self::with_options(inner, XmpReaderOptions::default())
    }

    /// Create a reader with explicit options
    pub fn with_options(inner: R, mut options: XmpReaderOptions) -> Self {
        // every fixed-size peek must fit under the ceiling
        options.max_window = options.max_window.max(2 * ROOT_TAG.len());
        options.header_block = options.header_block.clamp(1, options.max_window);
        options.value_block = options.value_block.clamp(1, options.max_window);
        let initial = options.value_block.max(options.header_block);
        Self {
            window: ByteWindow::new(inner, initial, options.max_window),
            options,
            logger: &NOOP,
            pending_attributes: false,
        }
    }

    /// Send diagnostics to `logger`
    ///
    /// Use [`log::logger()`] to reach the globally installed logger.
    pub fn with_logger(mut self, logger: &'static dyn Log) -> Self {
        self.logger = logger;
        self
    }

    /// Options this reader was built with
    pub fn options(&self) -> &XmpReaderOptions {
        &self.options
    }

    fn next_size(&self, size: usize, block: usize, phase: Phase) -> XmpResult<usize> {
        let limit = self.window.limit();
        grow(size, block, limit).ok_or(XmpError::BufferFull { phase, limit })
    }

    /// Locate `<x:xmpmeta` and consume its start tag
    ///
    /// Returns `Ok(None)` when the stream ends without a root tag.
    pub(crate) fn find_root(&mut self) -> XmpResult<Option<Tag>> {
        let block = self.options.header_block.max(2 * ROOT_TAG.len());
        loop {
            let buf = self.window.peek(block).map_err(|e| e.at(Phase::RootTag))?;
            if let Some(at) = memmem::find(buf, ROOT_TAG) {
                self.window.discard(at + ROOT_TAG.len());
                break;
            }
            if buf.len() < block {
                emit!(self.logger, Level::Debug, "no XMP root tag in stream");
                return Ok(None);
            }
            // keep a tail that may hold the start of a split match
            let keep = ROOT_TAG.len() - 1;
            let skip = buf.len() - keep;
            self.window.discard(skip);
        }
        self.skip_through(b">", Phase::RootTag)?;
        emit!(self.logger, Level::Debug, "found XMP root tag");
        Ok(Some(Tag::root()))
    }

    /// Read the next tag header below `parent`
    ///
    /// Returns `Ok(None)` on `<?`, which ends the structured content.
    pub(crate) fn read_tag_header(&mut self, parent: Property) -> XmpResult<Option<Tag>> {
        let block = self.options.header_block;
        'tags: loop {
            self.skip_until(b'<', Phase::TagHeader)?;

            let mut size = block;
            loop {
                let buf = self.window.peek(size).map_err(|e| e.at(Phase::TagHeader))?;
                let short = buf.len() < size;
                match scan_header(buf) {
                    HeaderScan::Incomplete if short => {
                        return Err(XmpError::malformed(
                            Phase::TagHeader,
                            "tag name not terminated",
                        ))
                    }
                    HeaderScan::Incomplete => {
                        size = self.next_size(size, block, Phase::TagHeader)?;
                    }
                    HeaderScan::Instruction => return Ok(None),
                    HeaderScan::Comment => {
                        self.skip_through(b"-->", Phase::TagHeader)?;
                        continue 'tags;
                    }
                    HeaderScan::Markup => {
                        self.skip_through(b">", Phase::TagHeader)?;
                        continue 'tags;
                    }
                    HeaderScan::Malformed(reason) => {
                        return Err(XmpError::malformed(Phase::TagHeader, reason))
                    }
                    HeaderScan::Tag {
                        kind,
                        property,
                        consumed,
                        attributes,
                    } => {
                        self.window.discard(consumed);
                        self.pending_attributes = attributes;
                        return Ok(Some(Tag {
                            kind,
                            property,
                            parent,
                        }));
                    }
                }
            }
        }
    }

    /// Read the next attribute of `tag`'s header
    ///
    /// Returns `Ok(None)` when the header closes instead. A `/>` close
    /// marks `tag` as [`TagKind::Solo`].
    pub(crate) fn read_attribute(&mut self, tag: &mut Tag) -> XmpResult<Option<Attribute<'_>>> {
        self.skip_space(Phase::Attribute)?;

        let block = self.options.header_block;
        let mut size = block;
        let (property, len) = loop {
            let buf = self.window.peek(size).map_err(|e| e.at(Phase::Attribute))?;
            let short = buf.len() < size;
            match scan_attribute_name(buf) {
                AttributeScan::Incomplete if short => {
                    return Err(XmpError::malformed(
                        Phase::Attribute,
                        "attribute name not terminated",
                    ))
                }
                AttributeScan::Incomplete => {
                    size = self.next_size(size, block, Phase::Attribute)?;
                }
                AttributeScan::Close { consumed, solo } => {
                    self.window.discard(consumed);
                    self.pending_attributes = false;
                    if solo {
                        tag.kind = TagKind::Solo;
                    }
                    return Ok(None);
                }
                AttributeScan::Malformed(reason) => {
                    return Err(XmpError::malformed(Phase::Attribute, reason))
                }
                AttributeScan::Name { property, len } => break (property, len),
            }
        };

        self.window.discard(len);
        self.read_attribute_value(tag, property).map(Some)
    }

    // Reads `="..."` and whatever closes the header right after it.
    fn read_attribute_value(&mut self, tag: &mut Tag, property: Property) -> XmpResult<Attribute<'_>> {
        let block = self.options.value_block;
        let mut size = block.max(2);
        // resume point of the closing-quote search across growths
        let mut scanned = 2;
        let (quote, end) = loop {
            let buf = self
                .window
                .peek(size)
                .map_err(|e| e.at(Phase::AttributeValue))?;
            let short = buf.len() < size;
            if buf.len() >= 2 {
                let delim = buf[1];
                if buf[0] != b'=' || !matches!(delim, b'"' | b'\'') {
                    return Err(XmpError::malformed(
                        Phase::AttributeValue,
                        "expected '=' followed by a quote",
                    ));
                }
                match memchr(delim, &buf[scanned..]) {
                    Some(at) => {
                        let quote = scanned + at;
                        if let Some(end) = scan_after_value(buf, quote, short) {
                            break (quote, end);
                        }
                        scanned = quote;
                    }
                    None => scanned = buf.len(),
                }
            }
            if short {
                return Err(XmpError::malformed(
                    Phase::AttributeValue,
                    "attribute value not terminated",
                ));
            }
            size = self.next_size(size, block, Phase::AttributeValue)?;
        };

        if end.closes_header {
            self.pending_attributes = false;
        }
        if end.solo {
            tag.kind = TagKind::Solo;
        }
        let bytes = self.window.consume(end.consumed);
        Ok(Attribute {
            property,
            parent: tag.property,
            value: &bytes[2..quote],
        })
    }

    /// Read character data up to the next `<`
    ///
    /// Leading whitespace is dropped; trailing whitespace is kept.
    pub(crate) fn read_tag_value(&mut self) -> XmpResult<&[u8]> {
        self.skip_space(Phase::TagValue)?;

        let block = self.options.value_block;
        let mut size = block;
        let mut scanned = 0;
        let end = loop {
            let buf = self.window.peek(size).map_err(|e| e.at(Phase::TagValue))?;
            if let Some(at) = memchr(b'<', &buf[scanned..]) {
                break scanned + at;
            }
            if buf.len() < size {
                return Err(XmpError::malformed(
                    Phase::TagValue,
                    "value not terminated by '<'",
                ));
            }
            scanned = buf.len();
            size = self.next_size(size, block, Phase::TagValue)?;
        };
        Ok(self.window.consume(end))
    }

    // Discards whitespace; whitespace runs never have to fit the window.
    fn skip_space(&mut self, phase: Phase) -> XmpResult<()> {
        let block = self.options.header_block;
        loop {
            let buf = self.window.peek(block).map_err(|e| e.at(phase))?;
            if buf.is_empty() {
                return Err(XmpError::malformed(phase, "unexpected end of stream"));
            }
            let spaces = buf.iter().take_while(|&&b| is_space(b)).count();
            let done = spaces < buf.len();
            self.window.discard(spaces);
            if done {
                return Ok(());
            }
        }
    }

    // Discards everything before the next `delim`, leaving `delim` unread.
    fn skip_until(&mut self, delim: u8, phase: Phase) -> XmpResult<()> {
        let block = self.options.header_block;
        loop {
            let buf = self.window.peek(block).map_err(|e| e.at(phase))?;
            if let Some(at) = memchr(delim, buf) {
                self.window.discard(at);
                return Ok(());
            }
            if buf.is_empty() {
                return Err(XmpError::malformed(phase, "unexpected end of stream"));
            }
            let len = buf.len();
            self.window.discard(len);
        }
    }

    // Discards everything up to and including `needle`.
    fn skip_through(&mut self, needle: &[u8], phase: Phase) -> XmpResult<()> {
        let block = self.options.header_block.max(2 * needle.len());
        loop {
            let buf = self.window.peek(block).map_err(|e| e.at(phase))?;
            if let Some(at) = memmem::find(buf, needle) {
                self.window.discard(at + needle.len());
                return Ok(());
            }
            if buf.len() < block {
                return Err(XmpError::malformed(phase, "unexpected end of stream"));
            }
            let skip = buf.len() + 1 - needle.len();
            self.window.discard(skip);
        }
    }
}
