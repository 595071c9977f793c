//! Show the cluster's quorum status.

use std::io::Write;

use anyhow::{Context, Result};
use structopt::StructOpt;

use crate::config::Config;
use crate::process::{CommandRunner, SystemRunner};
use crate::quorum::{QuorumTool, TextReport};

/// Show the cluster's quorum status.
#[derive(StructOpt)]
#[structopt(name = "quorum")]
pub struct Quorum {
    /// Print the status as JSON.
    #[structopt(long)]
    json: bool,
}

impl Quorum {
    pub fn run(&self, config: &Config) -> Result<()> {
        self.run_with(config, SystemRunner, &mut std::io::stdout())
    }

    /// Query the quorum status using the given runner, writing the status to `out`.
    pub(crate) fn run_with<R: CommandRunner>(&self, config: &Config, runner: R, out: &mut impl Write) -> Result<()> {
        let status = QuorumTool::with_parts(config.corosync_quorumtool.as_str(), runner, TextReport)
            .status()
            .context("error getting corosync quorum status")?;
        if self.json {
            serde_json::to_writer_pretty(&mut *out, &status).context("error serializing quorum status")?;
            writeln!(out).context("error writing quorum status")?;
        } else {
            writeln!(out, "Quorate:          {}", if status.quorate { "Yes" } else { "No" }).context("error writing quorum status")?;
            writeln!(out, "Expected votes:   {}", status.votes_expected).context("error writing quorum status")?;
            writeln!(out, "Total votes:      {}", status.votes).context("error writing quorum status")?;
        }
        Ok(())
    }
}
