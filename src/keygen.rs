//! Corosync authkey generation.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::process::{CommandRunner, SystemRunner};

/// The default `corosync-keygen` program.
pub const DEFAULT_KEYGEN_PROGRAM: &str = "corosync-keygen";
/// The standard location of the Corosync authkey.
pub const DEFAULT_AUTHKEY_PATH: &str = "/etc/corosync/authkey";

/// Use the non-blocking entropy source, so that no interactive input is required.
const ARG_LESS_SECURE: &str = "-l";
/// Write the key to the given path.
const ARG_KEY_FILE: &str = "-k";

/// A generator of Corosync authkeys, backed by `corosync-keygen`.
#[derive(Clone, Debug)]
pub struct Keygen<R = SystemRunner> {
    program: String,
    runner: R,
}

impl Default for Keygen {
    fn default() -> Self {
        Self::new(DEFAULT_KEYGEN_PROGRAM)
    }
}

impl Keygen {
    /// Create a new instance which will invoke the given program.
    pub fn new(program: impl Into<String>) -> Self {
        Self::with_runner(program, SystemRunner)
    }
}

impl<R: CommandRunner> Keygen<R> {
    /// Create a new instance which will invoke the given program through the given runner.
    pub fn with_runner(program: impl Into<String>, runner: R) -> Self {
        Self { program: program.into(), runner }
    }

    /// Generate an authkey at the given path, returning that path.
    ///
    /// The caller is responsible for the target directory being writable and for distributing
    /// the key to the other nodes of the cluster.
    #[tracing::instrument(level = "debug", skip(self, path), fields(path = %path.as_ref().display()))]
    pub fn generate(&self, path: impl AsRef<Path>) -> Result<PathBuf> {
        let path = path.as_ref();
        let args = [OsStr::new(ARG_LESS_SECURE), OsStr::new(ARG_KEY_FILE), path.as_os_str()];
        self.runner
            .run(&self.program, &args)?
            .accept(&self.program, &[])?;
        tracing::info!(path = %path.display(), "generated corosync authkey");
        Ok(path.to_path_buf())
    }
}

/// Generate an authkey at the given path using the default `corosync-keygen` program.
pub fn generate_authkey(path: impl AsRef<Path>) -> Result<PathBuf> {
    Keygen::new(DEFAULT_KEYGEN_PROGRAM).generate(path)
}
