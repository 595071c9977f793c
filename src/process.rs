//! External process execution.

use std::ffi::OsStr;
use std::process::Command;

use crate::error::{CorosyncError, Result};

/// The captured result of running an external program.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CommandOutput {
    /// The exit code of the program, `None` if it was terminated by a signal.
    pub code: Option<i32>,
    /// The program's stdout followed by its stderr.
    pub combined: String,
}

impl CommandOutput {
    /// Check the exit code of this output, treating any of the given codes as success.
    ///
    /// The output is returned unmodified when the exit is accepted.
    pub fn accept(self, program: &str, benign_codes: &[i32]) -> Result<Self> {
        match self.code {
            Some(0) => Ok(self),
            Some(code) if benign_codes.contains(&code) => {
                tracing::debug!(program, code, "masking known benign exit code");
                Ok(self)
            }
            code => Err(CorosyncError::ExitStatus { program: program.into(), code }),
        }
    }
}

/// A type which is able to run external programs to completion.
pub trait CommandRunner {
    /// Run the given program with the given args, blocking until it exits.
    fn run(&self, program: &str, args: &[&OsStr]) -> Result<CommandOutput>;
}

/// A runner which executes programs on the host system.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    #[tracing::instrument(level = "debug", skip(self))]
    fn run(&self, program: &str, args: &[&OsStr]) -> Result<CommandOutput> {
        let output = Command::new(program).args(args).output().map_err(|source| CorosyncError::Spawn {
            program: program.into(),
            source,
        })?;

        let mut combined = String::from_utf8_lossy(&output.stdout).into_owned();
        combined.push_str(&String::from_utf8_lossy(&output.stderr));
        tracing::debug!(code = ?output.status.code(), bytes = combined.len(), "program exited");
        Ok(CommandOutput { code: output.status.code(), combined })
    }
}
