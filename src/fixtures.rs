use std::cell::RefCell;
use std::ffi::{OsStr, OsString};

use crate::error::{CorosyncError, Result};
use crate::process::{CommandOutput, CommandRunner};

/// A report from a healthy three node cluster.
pub const HEALTHY_REPORT: &str = "Quorum information
------------------
Date:             Tue Oct 29 14:11:19 2019
Quorum provider:  corosync_votequorum
Nodes:            3
Node ID:          2
Ring ID:          1/12
Quorate:          Yes

Votequorum information
----------------------
Expected votes:   3
Highest expected: 3
Total votes:      3
Quorum:           2
Flags:            Quorate

Membership information
----------------------
    Nodeid      Votes    Qdevice Name
         1          1         NR 192.168.123.11
         2          1         NR 192.168.123.12 (local)
         3          1         NR 192.168.123.13
";

/// A runner which records invocations & returns a canned result.
pub struct FakeRunner {
    /// The exit code to report, or `None` to fail as though the program could not be launched.
    pub code: Option<i32>,
    /// The combined output to report.
    pub output: String,
    /// Every invocation made, as `(program, args)`.
    pub calls: RefCell<Vec<(String, Vec<OsString>)>>,
}

impl FakeRunner {
    /// A runner whose program exits with the given code & output.
    pub fn exiting(code: i32, output: &str) -> Self {
        Self {
            code: Some(code),
            output: output.into(),
            calls: RefCell::new(Vec::new()),
        }
    }

    /// A runner whose program can not be launched.
    pub fn missing() -> Self {
        Self {
            code: None,
            output: String::new(),
            calls: RefCell::new(Vec::new()),
        }
    }
}

impl CommandRunner for &FakeRunner {
    fn run(&self, program: &str, args: &[&OsStr]) -> Result<CommandOutput> {
        self.calls
            .borrow_mut()
            .push((program.into(), args.iter().map(|arg| arg.to_os_string()).collect()));
        match self.code {
            Some(code) => Ok(CommandOutput {
                code: Some(code),
                combined: self.output.clone(),
            }),
            None => Err(CorosyncError::Spawn {
                program: program.into(),
                source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such file or directory"),
            }),
        }
    }
}
