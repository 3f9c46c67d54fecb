//! Trait abstractions for history queries.
//!
//! This module defines the `HistoryOps` trait which abstracts the git queries
//! the browser needs, enabling dependency injection and testability.

use crate::runner::CommandExecutor;
use crate::{CommitRecord, Repository, Result};

/// Read-only history queries against one repository.
///
/// This trait abstracts git access, allowing for:
/// - Dependency injection in services
/// - Mock implementations for testing
///
/// Queries are synchronous; async callers run them on a blocking thread.
#[allow(clippy::missing_errors_doc)]
pub trait HistoryOps {
    /// Commits reachable from HEAD, newest first, after skipping `skip`,
    /// at most `count` of them.
    fn log_window(&self, skip: usize, count: usize) -> Result<Vec<CommitRecord>>;

    /// Paths changed between two revisions, in the tool's order.
    fn changed_files(&self, old: &str, new: &str) -> Result<Vec<String>>;

    /// Hunks of one path's diff between two revisions, preamble removed.
    fn file_diff(&self, old: &str, new: &str, path: &str) -> Result<String>;
}

impl<E: CommandExecutor> HistoryOps for Repository<E> {
    fn log_window(&self, skip: usize, count: usize) -> Result<Vec<CommitRecord>> {
        Self::log_window(self, skip, count)
    }

    fn changed_files(&self, old: &str, new: &str) -> Result<Vec<String>> {
        Self::changed_files(self, old, new)
    }

    fn file_diff(&self, old: &str, new: &str, path: &str) -> Result<String> {
        Self::file_diff(self, old, new, path)
    }
}
