//! Corosync quorum status.

mod report;
#[cfg(test)]
mod report_test;

use std::ffi::OsStr;
use std::net::IpAddr;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::process::{CommandRunner, SystemRunner};
pub use report::{quorate, votes, votes_expected, ReportParser, TextReport};

/// The default `corosync-quorumtool` program.
pub const DEFAULT_QUORUMTOOL_PROGRAM: &str = "corosync-quorumtool";
/// The args passed to `corosync-quorumtool`: summary, parseable output, node addresses.
pub const QUORUMTOOL_ARGS: [&str; 3] = ["-s", "-p", "-i"];
/// The exit code `corosync-quorumtool` returns even when the report was produced successfully.
pub const QUORUMTOOL_BENIGN_EXIT_CODE: i32 = 1;

/// The quorum status of a Corosync cluster.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuorumStatus {
    /// Whether the cluster currently holds quorum.
    pub quorate: bool,
    /// The total number of votes present in the cluster.
    pub votes: u32,
    /// The number of votes the cluster expects.
    pub votes_expected: u32,
    /// The cluster's membership.
    ///
    /// This is not yet populated & will always be empty.
    pub nodes: Vec<QuorumNode>,
}

/// A member of a Corosync cluster as seen in the quorum report's membership table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuorumNode {
    /// The node's `nodeid`.
    pub id: u32,
    /// The node's ring address.
    pub addr: IpAddr,
    /// The number of votes held by the node.
    pub votes: u32,
}

/// A client of `corosync-quorumtool`.
#[derive(Clone, Debug)]
pub struct QuorumTool<R = SystemRunner, P = TextReport> {
    program: String,
    runner: R,
    parser: P,
}

impl Default for QuorumTool {
    fn default() -> Self {
        Self::new(DEFAULT_QUORUMTOOL_PROGRAM)
    }
}

impl QuorumTool {
    /// Create a new instance which will invoke the given program.
    pub fn new(program: impl Into<String>) -> Self {
        Self::with_parts(program, SystemRunner, TextReport)
    }
}

impl<R: CommandRunner, P: ReportParser> QuorumTool<R, P> {
    /// Create a new instance from its parts.
    pub fn with_parts(program: impl Into<String>, runner: R, parser: P) -> Self {
        Self {
            program: program.into(),
            runner,
            parser,
        }
    }

    /// Query the cluster's current quorum status.
    ///
    /// Blocks until the tool exits. Any exit status other than success or
    /// `QUORUMTOOL_BENIGN_EXIT_CODE` is returned as an error before the report is parsed.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn status(&self) -> Result<QuorumStatus> {
        let output = self
            .runner
            .run(&self.program, &QUORUMTOOL_ARGS.map(OsStr::new))?
            .accept(&self.program, &[QUORUMTOOL_BENIGN_EXIT_CODE])?;
        let status = self.parser.parse(&output.combined)?;
        tracing::debug!(quorate = status.quorate, votes = status.votes, votes_expected = status.votes_expected, "parsed quorum status");
        Ok(status)
    }
}

/// Query the cluster's current quorum status using the default `corosync-quorumtool` program.
pub fn quorum_status() -> Result<QuorumStatus> {
    QuorumTool::new(DEFAULT_QUORUMTOOL_PROGRAM).status()
}
