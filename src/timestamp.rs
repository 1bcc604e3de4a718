//! Implied-year timestamps for RFC3164 logs.
//!
//! BSD syslog timestamps carry no year. All timestamps in one run are
//! assumed to fall inside a single calendar year, so records compare by
//! month/day/time alone and the report never prints a year.

use anyhow::{anyhow, Result};
use chrono::{NaiveDate, NaiveDateTime};
use std::fmt;

/// The year every parsed timestamp is pinned to. A leap year, so that
/// Feb 29 lines parse.
const IMPLIED_YEAR: i32 = 2000;

/// A civil datetime inside the implied year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LogTimestamp(NaiveDateTime);

impl LogTimestamp {
    /// Parse a BSD-style timestamp such as `Jan  1 00:00:05`. The day
    /// may be one or two digits; single-digit days may carry a doubled
    /// leading space.
    pub fn parse_bsd(ts: &str) -> Result<Self> {
        let with_year = format!("{} {}", IMPLIED_YEAR, ts);
        let parsed = NaiveDateTime::parse_from_str(&with_year, "%Y %b %d %H:%M:%S")
            .map_err(|e| anyhow!("invalid timestamp {:?}: {}", ts, e))?;
        Ok(Self(parsed))
    }

    /// Latest representable instant in the implied year, used to
    /// initialize `oldest` so the first real comparison always wins.
    pub fn max_sentinel() -> Self {
        Self(sentinel(12, 31, 23, 59, 59))
    }

    /// Earliest representable instant in the implied year, used to
    /// initialize `newest`.
    pub fn min_sentinel() -> Self {
        Self(sentinel(1, 1, 0, 0, 0))
    }
}

fn sentinel(month: u32, day: u32, hour: u32, min: u32, sec: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(IMPLIED_YEAR, month, day)
        .and_then(|d| d.and_hms_opt(hour, min, sec))
        .expect("sentinel dates are valid")
}

impl fmt::Display for LogTimestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%m/%d %H:%M:%S"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_two_digit_day() {
        let ts = LogTimestamp::parse_bsd("Oct 11 22:14:15").unwrap();
        assert_eq!(ts.to_string(), "10/11 22:14:15");
    }

    #[test]
    fn test_parse_single_digit_day_doubled_space() {
        let ts = LogTimestamp::parse_bsd("Jan  1 00:00:05").unwrap();
        assert_eq!(ts.to_string(), "01/01 00:00:05");
    }

    #[test]
    fn test_parse_single_digit_day_single_space() {
        let ts = LogTimestamp::parse_bsd("Jan 1 00:00:05").unwrap();
        assert_eq!(ts.to_string(), "01/01 00:00:05");
    }

    #[test]
    fn test_parse_leap_day() {
        assert!(LogTimestamp::parse_bsd("Feb 29 12:00:00").is_ok());
    }

    #[test]
    fn test_parse_invalid_month() {
        assert!(LogTimestamp::parse_bsd("Foo 11 22:14:15").is_err());
    }

    #[test]
    fn test_parse_invalid_day() {
        assert!(LogTimestamp::parse_bsd("Jan 32 00:00:00").is_err());
    }

    #[test]
    fn test_parse_invalid_time() {
        assert!(LogTimestamp::parse_bsd("Jan 1 24:00:00").is_err());
    }

    #[test]
    fn test_ordering() {
        let early = LogTimestamp::parse_bsd("Jan 1 00:00:00").unwrap();
        let late = LogTimestamp::parse_bsd("Dec 31 23:59:59").unwrap();
        assert!(early < late);
        assert_eq!(early, LogTimestamp::min_sentinel());
        assert_eq!(late, LogTimestamp::max_sentinel());
    }

    #[test]
    fn test_sentinels_bracket_everything() {
        let ts = LogTimestamp::parse_bsd("Jun 15 12:30:45").unwrap();
        assert!(LogTimestamp::min_sentinel() < ts);
        assert!(ts < LogTimestamp::max_sentinel());
    }
}
