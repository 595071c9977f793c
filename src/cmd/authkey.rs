//! Generate the cluster authkey.

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use structopt::StructOpt;

use crate::config::Config;
use crate::keygen::Keygen;
use crate::process::{CommandRunner, SystemRunner};

/// Generate the cluster authkey.
#[derive(StructOpt)]
#[structopt(name = "authkey")]
pub struct Authkey {
    /// The path to write the key to, defaults to `COROSYNC_AUTHKEY_PATH`.
    #[structopt(short, long, parse(from_os_str))]
    path: Option<PathBuf>,
}

impl Authkey {
    pub fn run(&self, config: &Config) -> Result<()> {
        self.run_with(config, SystemRunner, &mut std::io::stdout())
    }

    /// Generate the key using the given runner, writing the key's path to `out`.
    pub(crate) fn run_with<R: CommandRunner>(&self, config: &Config, runner: R, out: &mut impl Write) -> Result<()> {
        let path = self.path.clone().unwrap_or_else(|| PathBuf::from(&config.corosync_authkey_path));
        let path = Keygen::with_runner(config.corosync_keygen.as_str(), runner)
            .generate(&path)
            .context("error generating corosync authkey")?;
        writeln!(out, "{}", path.display()).context("error writing authkey path")?;
        Ok(())
    }
}
