//! Process execution for git invocations.
//!
//! Every call receives the working directory explicitly; nothing here
//! touches the process-wide current directory.

use std::io;
use std::path::Path;
use std::process::Command;

/// Captured result of one external process run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProcessOutput {
    /// Raw standard output.
    pub stdout: Vec<u8>,
    /// Raw standard error.
    pub stderr: Vec<u8>,
    /// Exit code, or `None` if the process was killed by a signal.
    pub code: Option<i32>,
}

impl ProcessOutput {
    /// Whether the process exited with status zero.
    #[must_use]
    pub const fn success(&self) -> bool {
        matches!(self.code, Some(0))
    }

    /// Standard output decoded as UTF-8, replacing invalid sequences.
    #[must_use]
    pub fn stdout_lossy(&self) -> String {
        String::from_utf8_lossy(&self.stdout).into_owned()
    }

    /// Standard error decoded as UTF-8, replacing invalid sequences.
    #[must_use]
    pub fn stderr_lossy(&self) -> String {
        String::from_utf8_lossy(&self.stderr).into_owned()
    }
}

/// Capability to run an external program and capture its output.
///
/// Implemented by [`SystemExecutor`] for real processes and by mocks in tests.
pub trait CommandExecutor {
    /// Run `program` with `args` inside `working_dir` and wait for it.
    ///
    /// A non-zero exit is not an error at this level; only failing to start
    /// or wait on the process is.
    ///
    /// # Errors
    /// Returns an I/O error if the process cannot be spawned.
    fn execute(&self, program: &str, args: &[String], working_dir: &Path)
    -> io::Result<ProcessOutput>;
}

/// Runs commands with [`std::process::Command`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemExecutor;

impl CommandExecutor for SystemExecutor {
    fn execute(
        &self,
        program: &str,
        args: &[String],
        working_dir: &Path,
    ) -> io::Result<ProcessOutput> {
        let output = Command::new(program)
            .args(args)
            .current_dir(working_dir)
            .output()?;

        Ok(ProcessOutput {
            stdout: output.stdout,
            stderr: output.stderr,
            code: output.status.code(),
        })
    }
}
