//! Runtime configuration.

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::keygen::{DEFAULT_AUTHKEY_PATH, DEFAULT_KEYGEN_PROGRAM};
use crate::quorum::DEFAULT_QUORUMTOOL_PROGRAM;

/// Runtime configuration data.
#[derive(Clone, Debug, Deserialize)]
pub struct Config {
    /// The `corosync-keygen` program to invoke.
    #[serde(default = "Config::default_keygen")]
    pub corosync_keygen: String,
    /// The `corosync-quorumtool` program to invoke.
    #[serde(default = "Config::default_quorumtool")]
    pub corosync_quorumtool: String,
    /// The path to which authkeys are written when no path is given.
    #[serde(default = "Config::default_authkey_path")]
    pub corosync_authkey_path: String,
}

impl Config {
    /// Create a new config instance.
    ///
    /// All values are optional & are read from the runtime environment.
    #[allow(clippy::new_without_default)]
    pub fn new() -> Result<Self> {
        envy::from_env().context("error building config from env")
    }

    fn default_keygen() -> String {
        DEFAULT_KEYGEN_PROGRAM.into()
    }

    fn default_quorumtool() -> String {
        DEFAULT_QUORUMTOOL_PROGRAM.into()
    }

    fn default_authkey_path() -> String {
        DEFAULT_AUTHKEY_PATH.into()
    }
}
