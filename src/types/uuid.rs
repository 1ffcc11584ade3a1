//! UUID values used by the Media Management namespace

use crate::core::error::DecodeError;
use std::fmt;

/// A 16 byte universally unique identifier
///
/// XMP writers decorate identifiers with a scheme prefix
/// (`uuid:`, `xmp.did:`, `adobe:docid:photoshop:`); [`Uuid::parse`]
/// drops everything up to the last `:` before reading the hex digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Uuid([u8; 16]);

impl Uuid {
    /// The all-zero UUID
    pub const NIL: Uuid = Uuid([0; 16]);

    /// Build a UUID from raw bytes
    pub const fn from_bytes(bytes: [u8; 16]) -> Self {
        Self(bytes)
    }

    /// Raw bytes
    pub fn as_bytes(&self) -> &[u8; 16] {
        &self.0
    }

    /// Whether this is the all-zero UUID
    pub fn is_nil(&self) -> bool {
        *self == Self::NIL
    }

    /// Parse the textual form of a UUID
    ///
    /// Accepts the canonical hyphenated form, 32 bare hex digits, and either
    /// wrapped in braces, after an optional `scheme:...:` prefix.
    ///
    /// ```rust
    /// use xmpstream::types::Uuid;
    ///
    /// let id = Uuid::parse(b"xmp.did:8E3C8E5A-1F2B-4C3D-9E4F-5A6B7C8D9E0F").unwrap();
    /// assert_eq!(id.to_string(), "8e3c8e5a-1f2b-4c3d-9e4f-5a6b7c8d9e0f");
    /// ```
    pub fn parse(text: &[u8]) -> Result<Self, DecodeError> {
        let text = match memchr::memrchr(b':', text) {
            Some(colon) => &text[colon + 1..],
            None => text,
        };
        let text = match text {
            [b'{', inner @ .., b'}'] => inner,
            _ => text,
        };

        let hex: Vec<u8> = match text.len() {
            36 => {
                if [8, 13, 18, 23].iter().any(|&i| text[i] != b'-') {
                    return Err(DecodeError::BadValue(format!(
                        "misplaced hyphen in UUID {:?}",
                        String::from_utf8_lossy(text)
                    )));
                }
                text.iter().copied().filter(|&b| b != b'-').collect()
            }
            32 => text.to_vec(),
            len => {
                return Err(DecodeError::BadValue(format!(
                    "UUID has {len} characters, expected 32 or 36"
                )))
            }
        };

        if hex.len() != 32 {
            return Err(DecodeError::BadValue("stray hyphen in UUID".to_string()));
        }

        let mut bytes = [0u8; 16];
        for (slot, pair) in bytes.iter_mut().zip(hex.chunks_exact(2)) {
            *slot = (nibble(pair[0])? << 4) | nibble(pair[1])?;
        }
        Ok(Self(bytes))
    }
}

fn nibble(b: u8) -> Result<u8, DecodeError> {
    match b {
        b'0'..=b'9' => Ok(b - b'0'),
        b'a'..=b'f' => Ok(b - b'a' + 10),
        b'A'..=b'F' => Ok(b - b'A' + 10),
        _ => Err(DecodeError::BadValue(format!(
            "invalid hex digit {:?} in UUID",
            b as char
        ))),
    }
}

impl fmt::Display for Uuid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, b) in self.0.iter().enumerate() {
            if matches!(i, 4 | 6 | 8 | 10) {
                f.write_str("-")?;
            }
            write!(f, "{:02x}", b)?;
        }
        Ok(())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Uuid {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}
