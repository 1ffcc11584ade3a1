//! XMP Date/Time utilities
//!
//! This module parses the date/time values found in XMP packets. XMP uses
//! an ISO 8601-like format that supports partial dates and time zones;
//! packets written by camera firmware also carry EXIF-style dates such as
//! `2007:09:11 13:53:33`, which are accepted here too.

use crate::core::error::DecodeError;
use std::fmt;

/// XMP Date/Time structure
///
/// Represents a date/time value with optional components.
/// XMP supports partial dates (e.g., just year, or year-month).
/// The all-zero value ([`XmpDateTime::new`]) stands for "no date".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct XmpDateTime {
    /// Year (can be negative for BCE dates)
    pub year: i32,
    /// Month (1-12, 0 means not set)
    pub month: u8,
    /// Day (1-31, 0 means not set)
    pub day: u8,
    /// Hour (0-23)
    pub hour: u8,
    /// Minute (0-59)
    pub minute: u8,
    /// Second (0-59)
    pub second: u8,
    /// Nanoseconds (0-999999999)
    pub nanosecond: u32,
    /// Whether date components are present
    pub has_date: bool,
    /// Whether time components are present
    pub has_time: bool,
    /// Whether timezone is present
    pub has_timezone: bool,
    /// Timezone sign: -1 (west), 0 (UTC), +1 (east)
    pub tz_sign: i8,
    /// Timezone hour offset (0-23)
    pub tz_hour: u8,
    /// Timezone minute offset (0-59)
    pub tz_minute: u8,
}

type ParseResult<T> = Result<T, DecodeError>;

fn bad(msg: &str) -> DecodeError {
    DecodeError::BadValue(msg.to_string())
}

// Parses the ASCII digits in `bytes[start..end]`.
fn digits<T: std::str::FromStr>(bytes: &[u8], start: usize, end: usize, what: &str) -> ParseResult<T> {
    if end == start {
        return Err(bad(what));
    }
    std::str::from_utf8(&bytes[start..end])
        .ok()
        .and_then(|s| s.parse().ok())
        .ok_or_else(|| bad(what))
}

fn scan_digits(bytes: &[u8], mut pos: usize) -> usize {
    while pos < bytes.len() && bytes[pos].is_ascii_digit() {
        pos += 1;
    }
    pos
}

impl XmpDateTime {
    /// Create a new empty XMP date/time
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether this is the empty "no date" value
    pub fn is_zero(&self) -> bool {
        *self == Self::default()
    }

    /// Parse an XMP date/time string
    ///
    /// Accepted forms:
    /// - `YYYY`, `YYYY-MM`, `YYYY-MM-DD`
    /// - `YYYY-MM-DDThh:mm[:ss[.sss]][Z|+hh:mm|-hh:mm]`
    /// - `YYYY-MM-DD hh:mm:ss` (space instead of `T`)
    /// - `YYYY:MM:DD hh:mm:ss` and `YYYY:MM:DDThh:mm:ss` (EXIF style)
    ///
    /// # Example
    ///
    /// ```rust
    /// use xmpstream::utils::datetime::XmpDateTime;
    ///
    /// let dt = XmpDateTime::parse("2023-12-25T10:30:00Z").unwrap();
    /// assert_eq!(dt.year, 2023);
    /// assert_eq!(dt.month, 12);
    /// assert_eq!(dt.day, 25);
    ///
    /// let exif = XmpDateTime::parse("2007:09:11 13:53:33").unwrap();
    /// assert_eq!(exif.hour, 13);
    /// ```
    pub fn parse(s: &str) -> ParseResult<Self> {
        if s.is_empty() {
            return Err(bad("Empty date/time string"));
        }

        let mut owned = s.as_bytes().to_vec();
        normalize_separators(&mut owned);
        let bytes = &owned[..];

        let mut dt = Self::new();
        let mut pos = 0;

        dt.has_date = true;

        // Parse year (may be negative)
        let year_start = pos;
        if bytes[pos] == b'-' {
            pos += 1;
        }
        pos = scan_digits(bytes, pos);
        dt.year = digits(bytes, year_start, pos, "Invalid year value")?;

        if pos >= bytes.len() {
            return Ok(dt);
        }

        // Parse month
        if bytes[pos] != b'-' {
            return Err(bad("Invalid date string, expected '-' after year"));
        }
        pos += 1;
        let month_start = pos;
        pos = scan_digits(bytes, pos);
        let month: u8 = digits(bytes, month_start, pos, "Invalid month value")?;
        dt.month = month.clamp(1, 12);

        if pos >= bytes.len() {
            return Ok(dt);
        }

        // Parse day
        if bytes[pos] != b'-' {
            return Err(bad("Invalid date string, expected '-' after month"));
        }
        pos += 1;
        let day_start = pos;
        pos = scan_digits(bytes, pos);
        let day: u8 = digits(bytes, day_start, pos, "Invalid day value")?;
        dt.day = day.clamp(1, 31);

        if pos >= bytes.len() {
            return Ok(dt);
        }

        // Parse time
        if bytes[pos] != b'T' {
            return Err(bad("Invalid date string, expected 'T' after day"));
        }
        pos += 1;
        dt.has_time = true;

        let hour_start = pos;
        pos = scan_digits(bytes, pos);
        let hour: u8 = digits(bytes, hour_start, pos, "Invalid hour value")?;
        dt.hour = hour.min(23);

        if pos >= bytes.len() || bytes[pos] != b':' {
            return Err(bad("Invalid date string, expected ':' after hour"));
        }
        pos += 1;

        let minute_start = pos;
        pos = scan_digits(bytes, pos);
        let minute: u8 = digits(bytes, minute_start, pos, "Invalid minute value")?;
        dt.minute = minute.min(59);

        if pos >= bytes.len() {
            return Ok(dt);
        }

        // Parse second (optional)
        if bytes[pos] == b':' {
            pos += 1;
            let second_start = pos;
            pos = scan_digits(bytes, pos);
            let second: u8 = digits(bytes, second_start, pos, "Invalid second value")?;
            dt.second = second.min(59);

            // Parse fractional seconds (optional)
            if pos < bytes.len() && bytes[pos] == b'.' {
                pos += 1;
                let frac_start = pos;
                pos = scan_digits(bytes, pos);
                if pos > frac_start {
                    // Normalize to nanoseconds (max 9 digits)
                    let kept = (pos - frac_start).min(9);
                    let mut nanos: u32 =
                        digits(bytes, frac_start, frac_start + kept, "Invalid fractional second value")?;
                    for _ in kept..9 {
                        nanos *= 10;
                    }
                    dt.nanosecond = nanos;
                }
            }
        }

        if pos >= bytes.len() {
            return Ok(dt);
        }

        // Parse timezone
        dt.has_timezone = true;

        if bytes[pos] == b'Z' {
            pos += 1;
        } else if bytes[pos] == b'+' || bytes[pos] == b'-' {
            dt.tz_sign = if bytes[pos] == b'+' { 1 } else { -1 };
            pos += 1;

            let tz_hour_start = pos;
            pos = scan_digits(bytes, pos);
            let tz_hour: u8 = digits(bytes, tz_hour_start, pos, "Invalid timezone hour value")?;
            if tz_hour > 23 {
                return Err(bad("Timezone hour is out of range"));
            }
            dt.tz_hour = tz_hour;

            if pos >= bytes.len() || bytes[pos] != b':' {
                return Err(bad("Invalid date string, expected ':' after timezone hour"));
            }
            pos += 1;

            let tz_minute_start = pos;
            pos = scan_digits(bytes, pos);
            let tz_minute: u8 =
                digits(bytes, tz_minute_start, pos, "Invalid timezone minute value")?;
            if tz_minute > 59 {
                return Err(bad("Timezone minute is out of range"));
            }
            dt.tz_minute = tz_minute;
        }

        if pos < bytes.len() {
            return Err(bad("Invalid date string, extra characters at end"));
        }

        Ok(dt)
    }

    /// Seconds since the Unix epoch
    ///
    /// A value without a time zone is taken to be in UTC. Unset month or
    /// day count as the first.
    pub fn timestamp(&self) -> i64 {
        let days = days_from_civil(
            i64::from(self.year),
            i64::from(self.month.max(1)),
            i64::from(self.day.max(1)),
        );
        let seconds = days * 86_400
            + i64::from(self.hour) * 3_600
            + i64::from(self.minute) * 60
            + i64::from(self.second);
        let offset = i64::from(self.tz_hour) * 3_600 + i64::from(self.tz_minute) * 60;
        seconds - i64::from(self.tz_sign) * offset
    }

    /// The same instant, expressed in UTC
    pub fn to_utc(&self) -> Self {
        if self.is_zero() {
            return *self;
        }
        let ts = self.timestamp();
        let days = ts.div_euclid(86_400);
        let secs = ts.rem_euclid(86_400);
        let (year, month, day) = civil_from_days(days);
        Self {
            year: year as i32,
            month: month as u8,
            day: day as u8,
            hour: (secs / 3_600) as u8,
            minute: (secs % 3_600 / 60) as u8,
            second: (secs % 60) as u8,
            nanosecond: self.nanosecond,
            has_date: true,
            has_time: true,
            has_timezone: true,
            tz_sign: 0,
            tz_hour: 0,
            tz_minute: 0,
        }
    }

    /// Render in XMP form, omitting the parts that are not set
    ///
    /// `2023`, `2023-12`, `2023-12-25T10:30:00.5+08:00`, `2023-12-25T02:30:00Z`.
    pub fn format(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for XmpDateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.has_date {
            write!(f, "{:04}", self.year)?;
            if self.month != 0 {
                write!(f, "-{:02}", self.month)?;
                if self.day != 0 {
                    write!(f, "-{:02}", self.day)?;
                }
            }
        }

        if self.has_time {
            if self.has_date {
                f.write_str("T")?;
            }
            write!(f, "{:02}:{:02}:{:02}", self.hour, self.minute, self.second)?;
            if self.nanosecond != 0 {
                let mut frac = self.nanosecond;
                let mut width = 9;
                while frac % 10 == 0 {
                    frac /= 10;
                    width -= 1;
                }
                write!(f, ".{:0width$}", frac, width = width)?;
            }
        }

        if self.has_timezone {
            match self.tz_sign {
                0 => f.write_str("Z")?,
                sign => {
                    let sign = if sign < 0 { '-' } else { '+' };
                    write!(f, "{}{:02}:{:02}", sign, self.tz_hour, self.tz_minute)?;
                }
            }
        }
        Ok(())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for XmpDateTime {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

// Rewrites EXIF `YYYY:MM:DD` date separators and a space before the time
// into the ISO form.
fn normalize_separators(bytes: &mut [u8]) {
    if bytes.len() >= 10 && bytes[4] == b':' && bytes[7] == b':' {
        bytes[4] = b'-';
        bytes[7] = b'-';
    }
    if bytes.len() > 10 && bytes[10] == b' ' {
        bytes[10] = b'T';
    }
}

// Days since 1970-01-01 for a proleptic Gregorian date.
fn days_from_civil(year: i64, month: i64, day: i64) -> i64 {
    let y = if month <= 2 { year - 1 } else { year };
    let era = y.div_euclid(400);
    let yoe = y - era * 400;
    let mp = (month + 9) % 12;
    let doy = (153 * mp + 2) / 5 + day - 1;
    let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy;
    era * 146_097 + doe - 719_468
}

fn civil_from_days(days: i64) -> (i64, i64, i64) {
    let z = days + 719_468;
    let era = z.div_euclid(146_097);
    let doe = z - era * 146_097;
    let yoe = (doe - doe / 1_460 + doe / 36_524 - doe / 146_096) / 365;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let day = doy - (153 * mp + 2) / 5 + 1;
    let month = if mp < 10 { mp + 3 } else { mp - 9 };
    let year = yoe + era * 400 + i64::from(month <= 2);
    (year, month, day)
}
