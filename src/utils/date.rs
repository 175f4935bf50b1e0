//! Date parsing for `createdAt` values, without timezone dependencies.
//!
//! Header dates are free text written by hand, so several shapes are
//! accepted:
//!
//! | Shape                          | Example                          |
//! |--------------------------------|----------------------------------|
//! | Date                           | `2024-06-15`, `2024/06/15`       |
//! | Date and time                  | `2024-06-15T14:30`, `2024-06-15 14:30:45.250` |
//! | Date, time and offset          | `2024-06-15T14:30:45Z`, `...+02:00`, `...-0500` |
//! | Month name first               | `June 15, 2024`, `Sat, Jun 15 2024 14:30` |
//! | Day first                      | `15 June 2024`, `15 Jun 2024 14:30:45 GMT` |
//!
//! A value without an offset is read as UTC.
//!
//! # Examples
//!
//! ```ignore
//! let dt = DateTimeUtc::parse("2024-06-15").unwrap();
//! assert_eq!(dt.to_unix_millis(), 1_718_409_600_000);
//! ```

use anyhow::{Result, bail};

const MONTHS: [&str; 12] = [
    "january",
    "february",
    "march",
    "april",
    "may",
    "june",
    "july",
    "august",
    "september",
    "october",
    "november",
    "december",
];

const WEEKDAYS: [&str; 7] = [
    "monday",
    "tuesday",
    "wednesday",
    "thursday",
    "friday",
    "saturday",
    "sunday",
];

/// Calendar datetime with a fixed UTC offset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateTimeUtc {
    pub year: u16,
    pub month: u8,
    pub day: u8,
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
    pub millis: u16,
    /// Minutes east of UTC.
    pub offset: i16,
}

/// Time of day as parsed, before it is attached to a date.
#[derive(Debug, Clone, Copy, Default)]
struct Clock {
    hour: u8,
    minute: u8,
    second: u8,
    millis: u16,
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
            millis: 0,
            offset: 0,
        }
    }

    pub const fn from_ymd(year: u16, month: u8, day: u8) -> Self {
        Self::new(year, month, day, 0, 0, 0)
    }

    /// Parse any supported shape (see module docs).
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        let dt = Self::parse_numeric(s).or_else(|| Self::parse_written(s))?;
        dt.validate().ok()?;
        Some(dt)
    }

    /// `YYYY-MM-DD` / `YYYY/MM/DD`, optionally followed by `T` or a space,
    /// a time, and an offset. The reduced forms `YYYY` and `YYYY-MM` start
    /// at the first day of the year or month.
    fn parse_numeric(s: &str) -> Option<Self> {
        let bytes = s.as_bytes();

        match bytes.len() {
            4 => return Some(Self::from_ymd(parse_u16(bytes)?, 1, 1)),
            7 if bytes[4] == b'-' => {
                return Some(Self::from_ymd(
                    parse_u16(&bytes[0..4])?,
                    parse_u8(&bytes[5..7])?,
                    1,
                ));
            }
            _ => {}
        }

        // Minimum: "YYYY-MM-DD" (10 chars)
        if bytes.len() < 10 {
            return None;
        }

        let sep = bytes[4];
        if !matches!(sep, b'-' | b'/') || bytes[7] != sep {
            return None;
        }
        let year = parse_u16(&bytes[0..4])?;
        let month = parse_u8(&bytes[5..7])?;
        let day = parse_u8(&bytes[8..10])?;

        let mut dt = Self::from_ymd(year, month, day);
        if bytes.len() == 10 {
            return Some(dt);
        }
        if !matches!(bytes[10], b'T' | b't' | b' ') {
            return None;
        }

        let (clock, rest) = parse_clock(&s[11..])?;
        dt.set_clock(clock);
        dt.offset = parse_offset(rest)?;
        Some(dt)
    }

    /// `[Weekday] Month D[,] YYYY [time] [zone]` or
    /// `[Weekday] D Month YYYY [time] [zone]`.
    fn parse_written(s: &str) -> Option<Self> {
        let mut tokens = s
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|t| !t.is_empty())
            .peekable();

        if tokens.peek().is_some_and(|t| is_weekday(t)) {
            tokens.next();
        }

        let first = tokens.next()?;
        let second = tokens.next()?;
        let (month, day) = match month_number(first) {
            Some(month) => (month, parse_day(second)?),
            None => (month_number(second)?, parse_day(first)?),
        };
        let year = tokens.next().and_then(|t| {
            (t.len() == 4).then_some(())?;
            parse_u16(t.as_bytes())
        })?;

        let mut dt = Self::from_ymd(year, month, day);
        if let Some(time) = tokens.next() {
            let (clock, rest) = parse_clock(time)?;
            dt.set_clock(clock);
            dt.offset = parse_offset(rest)?;
        }
        if let Some(zone) = tokens.next() {
            dt.offset = parse_zone(zone)?;
        }
        if tokens.next().is_some() {
            return None;
        }
        Some(dt)
    }

    fn set_clock(&mut self, clock: Clock) {
        self.hour = clock.hour;
        self.minute = clock.minute;
        self.second = clock.second;
        self.millis = clock.millis;
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
            millis,
            offset,
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
        if millis > 999 {
            bail!("millisecond is invalid: {millis}");
        }
        if offset.unsigned_abs() >= 24 * 60 {
            bail!("offset is invalid: {offset}");
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

    /// Days since 1970-01-01 for the calendar date (proleptic Gregorian).
    fn days_since_epoch(&self) -> i64 {
        let month = i64::from(self.month);
        let year = i64::from(self.year) - i64::from(month <= 2);
        let era = year.div_euclid(400);
        let year_of_era = year - era * 400;
        let shifted_month = if month > 2 { month - 3 } else { month + 9 };
        let day_of_year = (153 * shifted_month + 2) / 5 + i64::from(self.day) - 1;
        let day_of_era = year_of_era * 365 + year_of_era / 4 - year_of_era / 100 + day_of_year;
        era * 146_097 + day_of_era - 719_468
    }

    /// Milliseconds since the Unix epoch.
    #[allow(clippy::trivially_copy_pass_by_ref)] // Method style is more idiomatic
    pub fn to_unix_millis(&self) -> i64 {
        let seconds = self.days_since_epoch() * 86_400
            + i64::from(self.hour) * 3_600
            + i64::from(self.minute) * 60
            + i64::from(self.second)
            - i64::from(self.offset) * 60;
        seconds * 1_000 + i64::from(self.millis)
    }
}

/// Parse `HH:MM[:SS[.fff]]` at the start of `s`, returning the remainder.
fn parse_clock(s: &str) -> Option<(Clock, &str)> {
    let bytes = s.as_bytes();
    if bytes.len() < 5 || bytes[2] != b':' {
        return None;
    }
    let mut clock = Clock {
        hour: parse_u8(&bytes[0..2])?,
        minute: parse_u8(&bytes[3..5])?,
        ..Clock::default()
    };
    let mut pos = 5;

    if bytes.get(pos) == Some(&b':') {
        clock.second = parse_u8(bytes.get(pos + 1..pos + 3)?)?;
        pos += 3;

        if bytes.get(pos) == Some(&b'.') {
            let digits = bytes[pos + 1..]
                .iter()
                .take_while(|b| b.is_ascii_digit())
                .count();
            if digits == 0 {
                return None;
            }
            // Only millisecond precision is kept.
            let mut millis = 0u16;
            for i in 0..3 {
                let digit = if i < digits { bytes[pos + 1 + i] - b'0' } else { 0 };
                millis = millis * 10 + u16::from(digit);
            }
            clock.millis = millis;
            pos += 1 + digits;
        }
    }

    Some((clock, &s[pos..]))
}

/// Parse a trailing offset: empty, `Z`, `±HH`, `±HH:MM` or `±HHMM`.
fn parse_offset(s: &str) -> Option<i16> {
    let bytes = s.as_bytes();
    let sign = match bytes.first() {
        None => return Some(0),
        Some(b'Z' | b'z') if bytes.len() == 1 => return Some(0),
        Some(b'+') => 1,
        Some(b'-') => -1,
        _ => return None,
    };

    let (hours, minutes) = match &bytes[1..] {
        [h1, h2] => (parse_u8(&[*h1, *h2])?, 0),
        [h1, h2, b':', m1, m2] | [h1, h2, m1, m2] => {
            (parse_u8(&[*h1, *h2])?, parse_u8(&[*m1, *m2])?)
        }
        _ => return None,
    };
    if hours > 23 || minutes > 59 {
        return None;
    }
    Some(sign * (i16::from(hours) * 60 + i16::from(minutes)))
}

/// Parse a standalone zone token (`GMT`, `UTC`, `Z`, or a numeric offset).
fn parse_zone(s: &str) -> Option<i16> {
    if s.eq_ignore_ascii_case("gmt") || s.eq_ignore_ascii_case("utc") {
        return Some(0);
    }
    if s.is_empty() {
        return None;
    }
    parse_offset(s)
}

/// Month number from a full or three-letter English name.
fn month_number(s: &str) -> Option<u8> {
    let lower = s.to_ascii_lowercase();
    let lower = lower.trim_end_matches('.');
    MONTHS
        .iter()
        .position(|name| *name == lower || (lower.len() == 3 && name.starts_with(lower)))
        .or_else(|| (lower == "sept").then_some(8))
        .and_then(|i| u8::try_from(i + 1).ok())
}

fn is_weekday(s: &str) -> bool {
    let lower = s.to_ascii_lowercase();
    let lower = lower.trim_end_matches('.');
    WEEKDAYS
        .iter()
        .any(|name| *name == lower || (lower.len() == 3 && name.starts_with(lower)))
}

/// Parse a 1 or 2 digit day of month.
fn parse_day(s: &str) -> Option<u8> {
    match s.as_bytes() {
        [d] if d.is_ascii_digit() => Some(d - b'0'),
        [d1, d2] => parse_u8(&[*d1, *d2]),
        _ => None,
    }
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
