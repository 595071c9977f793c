//! Corosync helper error abstractions.

use std::num::ParseIntError;

use thiserror::Error;

/// The message shared by all report extraction failures.
pub const ERR_INVALID_OUTPUT: &str = "invalid corosync-quorumtool output";

/// Error variants returned from the Corosync helpers.
#[derive(Debug, Error)]
pub enum CorosyncError {
    /// The external program could not be launched or its output could not be collected.
    #[error("error executing {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },
    /// The external program exited with a non-zero status which is not known to be benign.
    #[error("{program} exited unsuccessfully with status {}", display_code(.code))]
    ExitStatus { program: String, code: Option<i32> },
    /// A field pattern did not match anywhere in the quorum report.
    #[error("error getting {field}: {}", ERR_INVALID_OUTPUT)]
    InvalidOutput { field: &'static str },
    /// A matched field could not be converted into an integer.
    #[error("error parsing {field}: {source}")]
    InvalidNumber {
        field: &'static str,
        #[source]
        source: ParseIntError,
    },
}

impl CorosyncError {
    /// Check if this error is the result of the quorum report not matching its expected format.
    pub fn is_invalid_output(&self) -> bool {
        matches!(self, Self::InvalidOutput { .. })
    }
}

fn display_code(code: &Option<i32>) -> String {
    match code {
        Some(code) => code.to_string(),
        None => "<terminated by signal>".into(),
    }
}

/// A result type where the error is a `CorosyncError`.
pub type Result<T> = ::std::result::Result<T, CorosyncError>;
