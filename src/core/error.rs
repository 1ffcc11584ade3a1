//! Error types for XMP operations
//!
//! This module defines the errors a parse can end with. Absence of an XMP
//! packet is not an error: [`crate::parse`] reports it as `Ok(None)`.

use std::fmt;
use thiserror::Error;

/// Parsing phase in which an error was raised
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Searching for the `<x:xmpmeta` root tag
    RootTag,
    /// Reading a `<prefix:name ...` tag header
    TagHeader,
    /// Reading an attribute name
    Attribute,
    /// Reading a quoted attribute value
    AttributeValue,
    /// Reading character data between tags
    TagValue,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Phase::RootTag => "root tag",
            Phase::TagHeader => "tag header",
            Phase::Attribute => "attribute",
            Phase::AttributeValue => "attribute value",
            Phase::TagValue => "tag value",
        };
        f.write_str(name)
    }
}

/// Error types for XMP operations
#[derive(Debug, Error)]
pub enum XmpError {
    /// The lookahead window would have to grow past its ceiling
    #[error("Buffer full while reading {phase}: window limit of {limit} bytes reached")]
    BufferFull {
        /// Phase that requested the growth
        phase: Phase,
        /// Configured window ceiling
        limit: usize,
    },

    /// A tag, attribute or value boundary could not be found
    #[error("Malformed {phase}: {reason}")]
    Malformed {
        /// Phase that hit the malformed input
        phase: Phase,
        /// Short description of what was expected
        reason: &'static str,
    },

    /// IO error from the underlying stream
    #[error("IO error while reading {phase}: {source}")]
    Io {
        /// Phase that issued the read
        phase: Phase,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },
}

impl XmpError {
    pub(crate) fn malformed(phase: Phase, reason: &'static str) -> Self {
        XmpError::Malformed { phase, reason }
    }

    /// Phase in which this error was raised
    pub fn phase(&self) -> Phase {
        match self {
            XmpError::BufferFull { phase, .. }
            | XmpError::Malformed { phase, .. }
            | XmpError::Io { phase, .. } => *phase,
        }
    }
}

/// Result type alias for XMP operations
pub type XmpResult<T> = Result<T, XmpError>;

/// Failure reported by a namespace decoder
///
/// The driver never propagates these; they are logged and skipped.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DecodeError {
    /// The decoder has no field for this name
    #[error("property not recognized")]
    Unrecognized,

    /// The raw value could not be converted
    #[error("Bad value: {0}")]
    BadValue(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = XmpError::malformed(Phase::TagHeader, "tag name not terminated");
        assert!(err
            .to_string()
            .contains("Malformed tag header: tag name not terminated"));
    }

    #[test]
    fn test_buffer_full_display() {
        let err = XmpError::BufferFull {
            phase: Phase::AttributeValue,
            limit: 256,
        };
        assert_eq!(
            err.to_string(),
            "Buffer full while reading attribute value: window limit of 256 bytes reached"
        );
        assert_eq!(err.phase(), Phase::AttributeValue);
    }

    #[test]
    fn test_io_error_keeps_source() {
        use std::error::Error as _;

        let err = XmpError::Io {
            phase: Phase::TagValue,
            source: std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed"),
        };
        assert!(err.source().is_some());
        assert!(err.to_string().starts_with("IO error while reading tag value"));
    }
}
