//! UTC datetime parsing and comment-date formatting.
//!
//! Provides a lightweight `DateTimeUtc` struct for the ISO-8601 timestamps
//! the comment API returns, without a timezone database.
//!
//! # Examples
//!
//! ```
//! use folio::format_comment_date;
//!
//! assert_eq!(
//!     format_comment_date("2025-01-15T14:30:00.000Z"),
//!     "January 15, 2025, 02:30 PM"
//! );
//! assert_eq!(format_comment_date("yesterday"), "Invalid Date");
//! ```

use anyhow::{Result, bail};

/// Rendering of a timestamp that failed to parse.
pub const INVALID_DATE: &str = "Invalid Date";

const MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Format an ISO-8601 timestamp as `"Month Day, Year, HH:MM AM"` in UTC.
///
/// Unparseable input renders as [`INVALID_DATE`].
pub fn format_comment_date(iso: &str) -> String {
    match DateTimeUtc::parse(iso) {
        Some(dt) => dt.to_display(),
        None => INVALID_DATE.to_string(),
    }
}

/// UTC datetime without timezone complexity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateTimeUtc {
    pub year: u16,
    pub month: u8,
    pub day: u8,
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
}

impl DateTimeUtc {
    pub const fn new(year: u16, month: u8, day: u8, hour: u8, minute: u8, second: u8) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        }
    }

    pub const fn from_ymd(year: u16, month: u8, day: u8) -> Self {
        Self::new(year, month, day, 0, 0, 0)
    }

    /// Parse an ISO-8601 date or datetime.
    ///
    /// Accepts `YYYY-MM-DD` and `YYYY-MM-DDTHH:MM[:SS[.fff]]` followed by an
    /// optional `Z` or `±HH:MM` offset. A space may stand in for `T`.
    /// Offsets are folded into the UTC fields; a missing offset means UTC.
    pub fn parse(s: &str) -> Option<Self> {
        let bytes = s.trim().as_bytes();

        // Minimum: "YYYY-MM-DD" (10 chars)
        if bytes.len() < 10 {
            return None;
        }

        let year = parse_u16(&bytes[0..4])?;
        if bytes[4] != b'-' {
            return None;
        }
        let month = parse_u8(&bytes[5..7])?;
        if bytes[7] != b'-' {
            return None;
        }
        let day = parse_u8(&bytes[8..10])?;

        if bytes.len() == 10 {
            let dt = Self::from_ymd(year, month, day);
            dt.validate().ok()?;
            return Some(dt);
        }

        // Time part: "THH:MM" at minimum
        if !matches!(bytes[10], b'T' | b't' | b' ') || bytes.len() < 16 || bytes[13] != b':' {
            return None;
        }
        let hour = parse_u8(&bytes[11..13])?;
        let minute = parse_u8(&bytes[14..16])?;
        let mut rest = &bytes[16..];

        let mut second = 0;
        if let [b':', s1, s2, tail @ ..] = rest {
            second = parse_u8(&[*s1, *s2])?;
            rest = tail;
        }

        // Fractional seconds are truncated
        if let [b'.', tail @ ..] = rest {
            let digits = tail.iter().take_while(|b| b.is_ascii_digit()).count();
            if digits == 0 {
                return None;
            }
            rest = &tail[digits..];
        }

        let offset_minutes = parse_offset(rest)?;

        let dt = Self::new(year, month, day, hour, minute, second);
        dt.validate().ok()?;
        dt.shift_minutes(-offset_minutes)
    }

    #[allow(clippy::trivially_copy_pass_by_ref)] // Method style is more idiomatic
    pub fn validate(&self) -> Result<()> {
        let Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        } = *self;

        if !(1..=12).contains(&month) {
            bail!("month is invalid: {month}");
        }

        let max_days = Self::days_in_month(year, month);
        if day == 0 || day > max_days {
            bail!("day is invalid: {day}");
        }
        if hour > 23 {
            bail!("hour is invalid: {hour}");
        }
        if minute > 59 {
            bail!("minute is invalid: {minute}");
        }
        if second > 59 {
            bail!("second is invalid: {second}");
        }

        Ok(())
    }

    #[inline]
    #[allow(clippy::manual_is_multiple_of)] // Manual impl for const fn
    const fn is_leap_year(year: u16) -> bool {
        year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
    }

    #[inline]
    const fn days_in_month(year: u16, month: u8) -> u8 {
        match month {
            1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
            4 | 6 | 9 | 11 => 30,
            2 if Self::is_leap_year(year) => 29,
            2 => 28,
            _ => 0,
        }
    }

    /// Move by a signed number of minutes, carrying across days, months
    /// and years.
    ///
    /// Returns `None` when the result falls outside the `u16` year range.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)] // Ranges checked by construction
    pub fn shift_minutes(self, delta: i64) -> Option<Self> {
        if delta == 0 {
            return Some(self);
        }
        let total = self.days_since_epoch() * 1440
            + i64::from(self.hour) * 60
            + i64::from(self.minute)
            + delta;
        let days = total.div_euclid(1440);
        let minute_of_day = total.rem_euclid(1440);
        let (year, month, day) = civil_from_days(days);
        Some(Self::new(
            u16::try_from(year).ok()?,
            month,
            day,
            (minute_of_day / 60) as u8,
            (minute_of_day % 60) as u8,
            self.second,
        ))
    }

    /// Days since 1970-01-01 (proleptic Gregorian).
    fn days_since_epoch(self) -> i64 {
        let y = i64::from(self.year) - i64::from(self.month <= 2);
        let era = y.div_euclid(400);
        let yoe = y - era * 400;
        let m = i64::from(self.month);
        let doy = (153 * (if m > 2 { m - 3 } else { m + 9 }) + 2) / 5 + i64::from(self.day) - 1;
        let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy;
        era * 146_097 + doe - 719_468
    }

    /// Format for comment threads: `January 15, 2025, 02:30 PM`.
    pub fn to_display(self) -> String {
        let (hour12, meridiem) = match self.hour {
            0 => (12, "AM"),
            h @ 1..=11 => (h, "AM"),
            12 => (12, "PM"),
            h => (h - 12, "PM"),
        };
        format!(
            "{} {}, {}, {:02}:{:02} {}",
            MONTHS[(self.month - 1) as usize],
            self.day,
            self.year,
            hour12,
            self.minute,
            meridiem
        )
    }
}

/// Inverse of `days_since_epoch`: (year, month, day).
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)] // month/day ranges are fixed
fn civil_from_days(days: i64) -> (i64, u8, u8) {
    let z = days + 719_468;
    let era = z.div_euclid(146_097);
    let doe = z - era * 146_097;
    let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let day = (doy - (153 * mp + 2) / 5 + 1) as u8;
    let month = (if mp < 10 { mp + 3 } else { mp - 9 }) as u8;
    let year = yoe + era * 400 + i64::from(month <= 2);
    (year, month, day)
}

/// Parse the timezone suffix into an offset in minutes east of UTC.
///
/// Empty and `Z` mean UTC; otherwise `+HH:MM`, `-HH:MM` or `+HHMM`.
fn parse_offset(bytes: &[u8]) -> Option<i64> {
    let (sign, rest) = match bytes {
        [] | [b'Z' | b'z'] => return Some(0),
        [b'+', rest @ ..] => (1, rest),
        [b'-', rest @ ..] => (-1, rest),
        _ => return None,
    };
    let (hh, mm) = match rest {
        [h1, h2, b':', m1, m2] | [h1, h2, m1, m2] => {
            (parse_u8(&[*h1, *h2])?, parse_u8(&[*m1, *m2])?)
        }
        _ => return None,
    };
    if hh > 23 || mm > 59 {
        return None;
    }
    Some(sign * (i64::from(hh) * 60 + i64::from(mm)))
}

/// Parse 2-digit ASCII number
#[inline]
fn parse_u8(bytes: &[u8]) -> Option<u8> {
    if bytes.len() != 2 {
        return None;
    }
    let d1 = bytes[0].wrapping_sub(b'0');
    let d2 = bytes[1].wrapping_sub(b'0');
    if d1 > 9 || d2 > 9 {
        return None;
    }
    Some(d1 * 10 + d2)
}

/// Parse 4-digit ASCII number
#[inline]
fn parse_u16(bytes: &[u8]) -> Option<u16> {
    if bytes.len() != 4 {
        return None;
    }
    let mut result = 0u16;
    for &b in bytes {
        let d = b.wrapping_sub(b'0');
        if d > 9 {
            return None;
        }
        result = result * 10 + u16::from(d);
    }
    Some(result)
}
