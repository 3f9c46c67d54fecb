//! Repository handle that runs read-only git queries.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::diff::{split_paths, strip_preamble};
use crate::error::{Error, Result};
use crate::log::{CommitRecord, parse_log};
use crate::runner::{CommandExecutor, ProcessOutput, SystemExecutor};

/// Config overrides applied to every diff invocation so paths come back
/// unquoted and usable as pathspecs.
const DIFF_CONFIG: [&str; 2] = ["-c", "core.quotepath=off"];

/// A git repository rooted at a fixed directory.
///
/// The root is handed to the executor on every call, so one process can hold
/// handles to several repositories and query them from different threads.
#[derive(Clone)]
pub struct Repository<E = SystemExecutor> {
    root: PathBuf,
    program: String,
    executor: E,
}

impl Repository<SystemExecutor> {
    /// Open the repository at `root`, running the system `git`.
    ///
    /// # Errors
    /// Returns `NotADirectory` if `root` is not an existing directory.
    pub fn open(root: impl AsRef<Path>) -> Result<Self> {
        Self::with_executor(root, SystemExecutor)
    }
}

impl<E: CommandExecutor> Repository<E> {
    /// Open the repository at `root` with a custom executor.
    ///
    /// # Errors
    /// Returns `NotADirectory` if `root` is not an existing directory.
    pub fn with_executor(root: impl AsRef<Path>, executor: E) -> Result<Self> {
        let root = root.as_ref();
        if !root.is_dir() {
            return Err(Error::NotADirectory(root.to_path_buf()));
        }

        Ok(Self {
            root: root.to_path_buf(),
            program: "git".into(),
            executor,
        })
    }

    /// Use a different git executable.
    #[must_use]
    pub fn with_program(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self
    }

    /// The directory every command runs in.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Run git with `args` in the repository root.
    ///
    /// # Errors
    /// Returns `Spawn` if git cannot be started and `Tool` if it exits
    /// with a non-zero status.
    pub fn run(&self, args: &[&str]) -> Result<ProcessOutput> {
        let args: Vec<String> = args.iter().map(ToString::to_string).collect();
        debug!(root = %self.root.display(), ?args, "running git");

        let output = self.executor.execute(&self.program, &args, &self.root)?;
        if !output.success() {
            return Err(Error::Tool {
                command: args.join(" "),
                stderr: output.stderr_lossy(),
            });
        }

        Ok(output)
    }

    // === History ===

    /// Non-merge commits from HEAD, newest first, skipping `skip` and
    /// returning at most `count`.
    ///
    /// The output shape is pinned against `format.pretty` and
    /// `log.showSignature`, and merges are left out by git, so every block it
    /// counts toward `count` is one the parser keeps.
    ///
    /// # Errors
    /// Returns error if `git log` fails (e.g. HEAD does not exist yet).
    pub fn log_window(&self, skip: usize, count: usize) -> Result<Vec<CommitRecord>> {
        let skip_arg = format!("--skip={skip}");
        let count_arg = format!("--max-count={count}");
        let output = self.run(&[
            "log",
            "--pretty=medium",
            "--date=iso",
            "--no-merges",
            "--no-show-signature",
            "--no-decorate",
            "--no-color",
            &skip_arg,
            &count_arg,
            "HEAD",
        ])?;

        Ok(parse_log(&output.stdout_lossy()))
    }

    // === Diffs ===

    /// Paths that differ between two revisions, in git's listing order.
    ///
    /// # Errors
    /// Returns `InvalidRevision` for option-like revisions, or a git error.
    pub fn changed_files(&self, old: &str, new: &str) -> Result<Vec<String>> {
        check_revision(old)?;
        check_revision(new)?;

        let output = self.run(&[
            DIFF_CONFIG[0],
            DIFF_CONFIG[1],
            "diff",
            "--name-only",
            "--no-color",
            "--no-renames",
            old,
            new,
            "--",
        ])?;

        Ok(split_paths(&output.stdout_lossy()))
    }

    /// Diff of a single path between two revisions, without its preamble.
    ///
    /// # Errors
    /// Returns `InvalidRevision` for option-like revisions, or a git error.
    pub fn file_diff(&self, old: &str, new: &str, path: &str) -> Result<String> {
        check_revision(old)?;
        check_revision(new)?;

        let output = self.run(&[
            DIFF_CONFIG[0],
            DIFF_CONFIG[1],
            "diff",
            "--no-color",
            "--no-ext-diff",
            "--no-renames",
            old,
            new,
            "--",
            path,
        ])?;

        Ok(strip_preamble(&output.stdout_lossy()).to_owned())
    }
}

/// Reject revisions git would parse as options (`--output=...` and friends).
fn check_revision(rev: &str) -> Result<()> {
    if rev.is_empty() || rev.starts_with('-') {
        return Err(Error::InvalidRevision(rev.to_owned()));
    }
    Ok(())
}

impl<E> std::fmt::Debug for Repository<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Repository")
            .field("root", &self.root)
            .field("program", &self.program)
            .finish_non_exhaustive()
    }
}
