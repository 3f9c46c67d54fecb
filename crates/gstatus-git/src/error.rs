//! Error types for gstatus-git.

use std::path::PathBuf;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while querying a repository.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The configured repository root is not an existing directory.
    #[error("not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    /// git ran but exited with a non-zero status.
    #[error("git {command} failed: {stderr}")]
    Tool {
        /// The subcommand and arguments that were run.
        command: String,
        /// Everything git wrote to stderr.
        stderr: String,
    },

    /// git could not be started at all.
    #[error("failed to run git: {0}")]
    Spawn(#[from] std::io::Error),

    /// A revision argument that git would read as an option.
    #[error("invalid revision: {0}")]
    InvalidRevision(String),
}

impl Error {
    /// The diagnostic text to show a user for this failure.
    ///
    /// For a failed git invocation this is exactly the tool's stderr.
    #[must_use]
    pub fn diagnostic(&self) -> String {
        match self {
            Self::Tool { stderr, .. } => stderr.clone(),
            other => other.to_string(),
        }
    }
}
