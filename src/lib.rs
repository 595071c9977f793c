//! Helpers for operating a Corosync cluster.
//!
//! This covers rendering `corosync.conf`, generating the cluster authkey with
//! `corosync-keygen`, and reading the cluster's quorum status from `corosync-quorumtool`.

mod cmd;
pub mod config;
pub mod error;
#[cfg(test)]
mod fixtures;
pub mod keygen;
pub mod process;
pub mod quorum;
pub mod render;

use anyhow::Result;
use structopt::StructOpt;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

pub use crate::config::Config;
pub use crate::error::CorosyncError;
pub use crate::keygen::{generate_authkey, Keygen};
pub use crate::quorum::{quorum_status, QuorumNode, QuorumStatus, QuorumTool};
pub use crate::render::{render, ClusterConfig};

/// Corosync cluster operations.
#[derive(StructOpt)]
#[structopt(name = "corosync-ops")]
pub struct CorosyncOps {
    #[structopt(subcommand)]
    action: CorosyncOpsSubcommands,
    /// Enable debug logging.
    #[structopt(short)]
    verbose: bool,
}

impl CorosyncOps {
    pub fn run(self) -> Result<()> {
        // Initialize logging based on CLI config. Logs go to stderr, leaving stdout for output.
        let fmt_layer = fmt::layer().with_target(true).with_writer(std::io::stderr);
        let filter_layer;
        let level_filter;
        if self.verbose {
            filter_layer = EnvFilter::new("debug");
            level_filter = LevelFilter::DEBUG;
        } else {
            filter_layer = EnvFilter::new("info");
            level_filter = LevelFilter::INFO;
        }
        tracing_subscriber::registry()
            .with(filter_layer)
            .with(fmt_layer)
            .with(level_filter)
            .init();

        // Only the subcommands which invoke programs read the env config.
        match &self.action {
            CorosyncOpsSubcommands::Config(inner) => inner.run(),
            CorosyncOpsSubcommands::Authkey(inner) => inner.run(&Config::new()?),
            CorosyncOpsSubcommands::Quorum(inner) => inner.run(&Config::new()?),
        }
    }
}

#[derive(StructOpt)]
pub enum CorosyncOpsSubcommands {
    /// Render a corosync.conf document.
    #[structopt(name = "config")]
    Config(cmd::config::Render),
    /// Generate the cluster authkey.
    #[structopt(name = "authkey")]
    Authkey(cmd::authkey::Authkey),
    /// Show the cluster's quorum status.
    #[structopt(name = "quorum")]
    Quorum(cmd::quorum::Quorum),
}
