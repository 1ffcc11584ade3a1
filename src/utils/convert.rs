//! Raw value conversions
//!
//! These are deliberately permissive. Integer parsing reads ASCII digits
//! with wrapping arithmetic and no overflow check, and narrowing a value
//! that does not fit the target width yields 0 instead of an error. Only
//! dates and UUIDs report [`DecodeError::BadValue`].

use crate::core::error::DecodeError;
use crate::types::{Rational, SRational, Uuid};
use crate::utils::datetime::XmpDateTime;

/// Parse leading ASCII digits as an unsigned integer
///
/// Parsing stops at the first non-digit byte. Overflow wraps.
pub fn parse_uint(buf: &[u8]) -> u64 {
    buf.iter()
        .take_while(|b| b.is_ascii_digit())
        .fold(0u64, |acc, b| {
            acc.wrapping_mul(10).wrapping_add(u64::from(b - b'0'))
        })
}

/// Parse an optionally signed integer
pub fn parse_int(buf: &[u8]) -> i64 {
    match buf {
        [b'-', rest @ ..] => (parse_uint(rest) as i64).wrapping_neg(),
        [b'+', rest @ ..] => parse_uint(rest) as i64,
        _ => parse_uint(buf) as i64,
    }
}

/// Parse a `u32`, 0 when out of range
pub fn parse_u32(buf: &[u8]) -> u32 {
    u32::try_from(parse_uint(buf)).unwrap_or(0)
}

/// Parse a `u16`, 0 when out of range
pub fn parse_u16(buf: &[u8]) -> u16 {
    u16::try_from(parse_uint(buf)).unwrap_or(0)
}

/// Parse a `u8`, 0 when out of range
pub fn parse_u8(buf: &[u8]) -> u8 {
    u8::try_from(parse_uint(buf)).unwrap_or(0)
}

/// Parse an `i8`, 0 when out of range
pub fn parse_i8(buf: &[u8]) -> i8 {
    i8::try_from(parse_int(buf)).unwrap_or(0)
}

/// Parse an `i32`, 0 when out of range
pub fn parse_i32(buf: &[u8]) -> i32 {
    i32::try_from(parse_int(buf)).unwrap_or(0)
}

/// Parse a float, 0.0 when malformed
pub fn parse_f64(buf: &[u8]) -> f64 {
    std::str::from_utf8(buf)
        .ok()
        .and_then(|s| s.trim().parse().ok())
        .unwrap_or(0.0)
}

/// Parse `True`/`False` as written by Adobe tools
pub fn parse_bool(buf: &[u8]) -> bool {
    buf.eq_ignore_ascii_case(b"true") || buf == b"1"
}

/// Copy the raw bytes into an owned string
pub fn parse_string(buf: &[u8]) -> String {
    String::from_utf8_lossy(buf).into_owned()
}

// Splits on the first '/' only.
fn split_fraction(buf: &[u8]) -> Option<(&[u8], &[u8])> {
    memchr::memchr(b'/', buf).map(|slash| (&buf[..slash], &buf[slash + 1..]))
}

/// Parse `n/d`; input without a `/` yields `0/0`
pub fn parse_rational(buf: &[u8]) -> Rational {
    match split_fraction(buf) {
        Some((n, d)) => Rational::new(parse_u32(n), parse_u32(d)),
        None => Rational::default(),
    }
}

/// Parse a signed `n/d`; input without a `/` yields `0/0`
pub fn parse_srational(buf: &[u8]) -> SRational {
    match split_fraction(buf) {
        Some((n, d)) => SRational::new(parse_i32(n), parse_i32(d)),
        None => SRational::default(),
    }
}

/// Parse a date; an empty value yields the zero date
pub fn parse_date(buf: &[u8]) -> Result<XmpDateTime, DecodeError> {
    if buf.is_empty() {
        return Ok(XmpDateTime::new());
    }
    let text = std::str::from_utf8(buf)
        .map_err(|_| DecodeError::BadValue("date is not valid UTF-8".to_string()))?;
    XmpDateTime::parse(text)
}

/// Parse a UUID with an optional scheme prefix
pub fn parse_uuid(buf: &[u8]) -> Result<Uuid, DecodeError> {
    Uuid::parse(buf)
}
