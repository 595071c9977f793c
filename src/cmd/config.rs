//! Render a corosync.conf document.

use std::net::IpAddr;
use std::path::PathBuf;

use anyhow::{Context, Result};
use structopt::StructOpt;

use crate::render::ClusterConfig;

/// Render a corosync.conf document.
#[derive(StructOpt)]
#[structopt(name = "config")]
pub struct Render {
    /// The name of the cluster.
    #[structopt(short, long)]
    name: String,
    /// Write the document to this file instead of stdout.
    #[structopt(short, long, parse(from_os_str))]
    output: Option<PathBuf>,
    /// The ring addresses of the cluster's nodes; node IDs are assigned in the order given.
    nodes: Vec<IpAddr>,
}

impl Render {
    pub fn run(&self) -> Result<()> {
        let doc = ClusterConfig::new(self.name.as_str(), self.nodes.clone()).render();
        match &self.output {
            Some(path) => {
                std::fs::write(path, doc).with_context(|| format!("error writing config to {}", path.display()))?;
                tracing::info!(path = %path.display(), nodes = self.nodes.len(), "wrote corosync config");
            }
            None => println!("{}", doc),
        }
        Ok(())
    }
}
