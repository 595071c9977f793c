//! Parsing of `corosync-quorumtool` reports.
//!
//! A healthy three node cluster reports:
//!
//! ```text
//! Quorum information
//! ------------------
//! Date:             Tue Oct 29 14:11:19 2019
//! Quorum provider:  corosync_votequorum
//! Nodes:            3
//! Node ID:          2
//! Ring ID:          1/12
//! Quorate:          Yes
//!
//! Votequorum information
//! ----------------------
//! Expected votes:   3
//! Highest expected: 3
//! Total votes:      3
//! Quorum:           2
//! Flags:            Quorate
//!
//! Membership information
//! ----------------------
//!     Nodeid      Votes    Qdevice Name
//!          1          1         NR 192.168.123.11
//!          2          1         NR 192.168.123.12 (local)
//!          3          1         NR 192.168.123.13
//! ```
//!
//! Each field is searched for independently across the whole report, so a line in an
//! unexpected section will still be matched. A field's token must end at a word boundary.

use lazy_static::lazy_static;
use regex::Regex;

use crate::error::{CorosyncError, Result};
use crate::quorum::QuorumStatus;

const FIELD_QUORATE: &str = "quorate";
const FIELD_VOTES: &str = "total votes";
const FIELD_VOTES_EXPECTED: &str = "expected votes";

lazy_static! {
    static ref RE_QUORATE: Regex = Regex::new(r"Quorate:\s*(Yes|No)\b").expect("failed to compile RE_QUORATE regex");
    static ref RE_VOTES: Regex = Regex::new(r"Total votes:\s*(\d+)\b").expect("failed to compile RE_VOTES regex");
    static ref RE_VOTES_EXPECTED: Regex = Regex::new(r"Expected votes:\s*(\d+)\b").expect("failed to compile RE_VOTES_EXPECTED regex");
}

/// A parser of quorum status reports.
pub trait ReportParser {
    /// Parse the given report into a quorum status.
    fn parse(&self, output: &str) -> Result<QuorumStatus>;
}

/// The human readable report format of `corosync-quorumtool -s`.
#[derive(Clone, Copy, Debug, Default)]
pub struct TextReport;

impl ReportParser for TextReport {
    fn parse(&self, output: &str) -> Result<QuorumStatus> {
        Ok(QuorumStatus {
            quorate: quorate(output)?,
            votes: votes(output)?,
            votes_expected: votes_expected(output)?,
            // The membership table is not parsed.
            nodes: Vec::new(),
        })
    }
}

/// Extract the quorate flag from the given report.
pub fn quorate(output: &str) -> Result<bool> {
    let token = capture(&RE_QUORATE, FIELD_QUORATE, output)?;
    Ok(token == "Yes")
}

/// Extract the total number of votes from the given report.
pub fn votes(output: &str) -> Result<u32> {
    capture_u32(&RE_VOTES, FIELD_VOTES, output)
}

/// Extract the number of expected votes from the given report.
pub fn votes_expected(output: &str) -> Result<u32> {
    capture_u32(&RE_VOTES_EXPECTED, FIELD_VOTES_EXPECTED, output)
}

fn capture<'a>(re: &Regex, field: &'static str, output: &'a str) -> Result<&'a str> {
    re.captures(output)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
        .ok_or(CorosyncError::InvalidOutput { field })
}

fn capture_u32(re: &Regex, field: &'static str, output: &str) -> Result<u32> {
    capture(re, field, output)?
        .parse()
        .map_err(|source| CorosyncError::InvalidNumber { field, source })
}
