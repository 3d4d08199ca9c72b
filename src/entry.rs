//! Typed table values
//!
//! An `Entry` is what callers hand to rows and tables. A missing value is
//! its own `Absent` arm, displayed as `NULL`, so it can never be confused
//! with a literal `"NULL"` string.

use std::fmt;
use std::time::Duration;

use chrono::NaiveDateTime;

/// Text shown for an absent value
pub const NULL_TEXT: &str = "NULL";

/// Date-time format used for display and parsing
pub const DATE_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.f";

/// A typed table value
#[derive(Debug, Clone, PartialEq)]
pub enum Entry {
    Text(String),
    Int(i64),
    UInt(u64),
    Float(f64),
    DateTime(NaiveDateTime),
    Duration(Duration),
    Absent,
}

impl Entry {
    pub fn is_absent(&self) -> bool {
        matches!(self, Entry::Absent)
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Entry::Text(s) => f.write_str(s),
            Entry::Int(v) => write!(f, "{}", v),
            Entry::UInt(v) => write!(f, "{}", v),
            Entry::Float(v) => write!(f, "{}", v),
            Entry::DateTime(v) => f.write_str(&format_date_time(v)),
            Entry::Duration(v) => f.write_str(&format_duration(*v)),
            Entry::Absent => f.write_str(NULL_TEXT),
        }
    }
}

impl From<&str> for Entry {
    fn from(v: &str) -> Self {
        Entry::Text(v.to_string())
    }
}

impl From<String> for Entry {
    fn from(v: String) -> Self {
        Entry::Text(v)
    }
}

impl From<i32> for Entry {
    fn from(v: i32) -> Self {
        Entry::Int(v as i64)
    }
}

impl From<i64> for Entry {
    fn from(v: i64) -> Self {
        Entry::Int(v)
    }
}

impl From<u32> for Entry {
    fn from(v: u32) -> Self {
        Entry::UInt(v as u64)
    }
}

impl From<u64> for Entry {
    fn from(v: u64) -> Self {
        Entry::UInt(v)
    }
}

impl From<f64> for Entry {
    fn from(v: f64) -> Self {
        Entry::Float(v)
    }
}

impl From<NaiveDateTime> for Entry {
    fn from(v: NaiveDateTime) -> Self {
        Entry::DateTime(v)
    }
}

impl From<Duration> for Entry {
    fn from(v: Duration) -> Self {
        Entry::Duration(v)
    }
}

impl<T: Into<Entry>> From<Option<T>> for Entry {
    fn from(v: Option<T>) -> Self {
        v.map_or(Entry::Absent, Into::into)
    }
}

pub fn format_date_time(v: &NaiveDateTime) -> String {
    v.format(DATE_TIME_FORMAT).to_string()
}

/// Accepts the display format as well as ISO 8601 (`T` separator)
pub fn parse_date_time(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();
    NaiveDateTime::parse_from_str(s, DATE_TIME_FORMAT)
        .ok()
        .or_else(|| s.parse::<NaiveDateTime>().ok())
}

/// `[<days>d ]HH:MM:SS[.fraction]`
pub fn format_duration(v: Duration) -> String {
    let total = v.as_secs();
    let days = total / 86_400;
    let hours = total % 86_400 / 3_600;
    let minutes = total % 3_600 / 60;
    let seconds = total % 60;

    let mut out = String::new();
    if days > 0 {
        out.push_str(&format!("{}d ", days));
    }
    out.push_str(&format!("{:02}:{:02}:{:02}", hours, minutes, seconds));

    let nanos = v.subsec_nanos();
    if nanos > 0 {
        let frac = format!("{:09}", nanos);
        out.push('.');
        out.push_str(frac.trim_end_matches('0'));
    }
    out
}

pub fn parse_duration(s: &str) -> Option<Duration> {
    let s = s.trim();
    let (days, clock) = match s.split_once("d ") {
        Some((d, rest)) => (d.trim().parse::<u64>().ok()?, rest.trim()),
        None => (0, s),
    };

    let (hms, frac) = match clock.split_once('.') {
        Some((hms, frac)) => (hms, Some(frac)),
        None => (clock, None),
    };

    let parts: Vec<&str> = hms.split(':').collect();
    if parts.len() != 3 {
        return None;
    }
    let hours: u64 = parts[0].parse().ok()?;
    let minutes: u64 = parts[1].parse().ok()?;
    let seconds: u64 = parts[2].parse().ok()?;
    if minutes >= 60 || seconds >= 60 {
        return None;
    }

    let nanos = match frac {
        Some(f) if !f.is_empty() && f.len() <= 9 && f.bytes().all(|b| b.is_ascii_digit()) => {
            format!("{:0<9}", f).parse::<u32>().ok()?
        }
        Some(_) => return None,
        None => 0,
    };

    let secs = days
        .checked_mul(86_400)?
        .checked_add(hours.checked_mul(3_600)?)?
        .checked_add(minutes * 60 + seconds)?;
    Some(Duration::new(secs, nanos))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_absent_is_distinct_from_null_string() {
        let absent: Entry = Option::<i64>::None.into();
        let literal: Entry = "NULL".into();

        assert!(absent.is_absent());
        assert!(!literal.is_absent());
        assert_ne!(absent, literal);
        assert_eq!(absent.to_string(), literal.to_string());
    }

    #[test]
    fn test_option_some_keeps_type() {
        assert_eq!(Entry::from(Some(5u32)), Entry::UInt(5));
        assert_eq!(Entry::from(Some("x")), Entry::Text("x".into()));
    }

    #[test]
    fn test_date_time_text_round_trip() {
        let dt = NaiveDate::from_ymd_opt(2024, 2, 29)
            .unwrap()
            .and_hms_milli_opt(13, 5, 9, 250)
            .unwrap();
        let text = format_date_time(&dt);
        assert_eq!(text, "2024-02-29 13:05:09.250");
        assert_eq!(parse_date_time(&text), Some(dt));
        assert_eq!(parse_date_time("2024-02-29T13:05:09.250"), Some(dt));
    }

    #[test]
    fn test_duration_text_round_trip() {
        let d = Duration::new(2 * 86_400 + 3 * 3_600 + 4 * 60 + 5, 500_000_000);
        assert_eq!(format_duration(d), "2d 03:04:05.5");
        assert_eq!(parse_duration("2d 03:04:05.5"), Some(d));
        assert_eq!(format_duration(Duration::from_secs(61)), "00:01:01");
    }

    #[test]
    fn test_duration_rejects_garbage() {
        assert_eq!(parse_duration("12:99:00"), None);
        assert_eq!(parse_duration("hello"), None);
        assert_eq!(parse_duration("00:00:01.x"), None);
    }
}
