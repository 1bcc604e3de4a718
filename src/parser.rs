//! RFC3164 record parsing.
//!
//! The grammar recognized here is a fixed, narrow pattern:
//! `<PRI>MMM DD HH:MM:SS HOST MESSAGE`. Lines that do not match are
//! reported as failures carrying the offending line, never coerced into
//! empty records.

use crate::timestamp::LogTimestamp;
use anyhow::{anyhow, Context, Result};
use regex::Regex;

/// One parsed syslog line, consumed immediately by the aggregator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRecord {
    /// True iff the low 3 bits of PRI encode severity 0 (emergency) or
    /// 1 (alert).
    pub emergency: bool,
    pub timestamp: LogTimestamp,
    pub host: String,
    /// Character count of the free-text message span.
    pub msg_len: usize,
}

pub struct RecordParser {
    pattern: Regex,
}

impl RecordParser {
    pub fn new() -> Result<Self> {
        let pattern = Regex::new(
            r"^<(?P<pri>[0-9]+)>(?P<ts>[A-Za-z]{3}\s{1,2}[0-9]{1,2}\s[0-9]{2}:[0-9]{2}:[0-9]{2})\s(?P<host>\S+)\s(?P<msg>.*)$",
        )
        .context("failed to compile RFC3164 pattern")?;
        Ok(Self { pattern })
    }

    /// Parse one raw line into a record.
    ///
    /// No upper bound is imposed on PRI; `<999>` is accepted and its
    /// severity is `999 & 7`. Only digit runs that overflow the numeric
    /// type are rejected.
    pub fn parse(&self, line: &str) -> Result<LogRecord> {
        let captures = self
            .pattern
            .captures(line)
            .ok_or_else(|| anyhow!("unrecognized syslog line: {:?}", line))?;

        let pri: u32 = captures["pri"]
            .parse()
            .map_err(|_| anyhow!("priority out of range in line: {:?}", line))?;
        let timestamp = LogTimestamp::parse_bsd(&captures["ts"])
            .with_context(|| format!("in line {:?}", line))?;

        Ok(LogRecord {
            emergency: (pri & 7) < 2,
            timestamp,
            host: captures["host"].to_string(),
            msg_len: captures["msg"].chars().count(),
        })
    }
}
