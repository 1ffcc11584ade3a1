//! # xmpstream
//!
//! A streaming reader that extracts image metadata from an embedded XMP
//! packet.
//!
//! The reader scans any [`Read`] source for the `<x:xmpmeta` root tag and
//! walks the RDF/XML below it through a bounded byte window, decoding each
//! property into a typed [`Xmp`] aggregate as it is read. No DOM is built
//! and no general XML parser is involved: entity references are kept
//! verbatim and namespace prefixes are matched by their conventional
//! spelling.
//!
//! ```rust
//! let packet = br#"<?xpacket begin=""?>
//! <x:xmpmeta xmlns:x="adobe:ns:meta/">
//!  <rdf:RDF xmlns:rdf="http://www.w3.org/1999/02/22-rdf-syntax-ns#">
//!   <rdf:Description xmp:Rating="4" tiff:Make="Canon">
//!    <dc:subject><rdf:Bag><rdf:li>beach</rdf:li><rdf:li>sunset</rdf:li></rdf:Bag></dc:subject>
//!   </rdf:Description>
//!  </rdf:RDF>
//! </x:xmpmeta>"#;
//!
//! let xmp = xmpstream::parse(&packet[..]).unwrap().expect("packet present");
//! assert_eq!(xmp.basic.rating, 4);
//! assert_eq!(xmp.tiff.make, "Canon");
//! assert_eq!(xmp.dc.subject, vec!["beach", "sunset"]);
//! ```
//!
//! Buffer limits, nesting depth and the log sink are configured through
//! [`XmpReader`] and [`XmpReaderOptions`].

pub mod core;
pub mod types;
pub mod utils;

pub use crate::core::error::{DecodeError, Phase, XmpError, XmpResult};
pub use crate::core::logging::NoopLogger;
pub use crate::core::metadata::{
    Aux, Basic, CameraRawSettings, DublinCore, Exif, MediaManagement, NamespaceDecoder, Tiff, Xmp,
};
pub use crate::core::namespace::{ns, Name, Namespace, Property};
pub use crate::core::options::XmpReaderOptions;
pub use crate::core::reader::XmpReader;
pub use types::{Rational, SRational, Uuid};
pub use utils::XmpDateTime;

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Parse the first XMP packet in `reader` with default options
///
/// Returns `Ok(None)` when the stream holds no XMP packet.
pub fn parse<R: Read>(reader: R) -> XmpResult<Option<Xmp>> {
    XmpReader::new(reader).parse()
}

/// Open `path` and parse the first XMP packet in it
pub fn parse_file<P: AsRef<Path>>(path: P) -> XmpResult<Option<Xmp>> {
    let file = File::open(path).map_err(|source| XmpError::Io {
        phase: Phase::RootTag,
        source,
    })?;
    parse(BufReader::new(file))
}
