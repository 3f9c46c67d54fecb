//! Diff extraction between two commits.

use gstatus_git::{HistoryOps, unescape_entities};
use serde::Serialize;
use tracing::debug;

use crate::error::Result;
use crate::highlight::Highlighter;

/// One changed file with its rendered diff.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileDiff {
    pub path: String,
    /// Highlighted markup of the file's hunks.
    pub body: String,
}

/// Every file diff between two commits, in git's listing order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiffSet {
    pub old: String,
    pub new: String,
    pub diffs: Vec<FileDiff>,
}

/// Service for building diff sets.
pub struct DiffService<'a, H: HistoryOps, L: Highlighter> {
    history: &'a H,
    highlighter: &'a L,
}

impl<'a, H: HistoryOps, L: Highlighter> DiffService<'a, H, L> {
    /// Create a new diff service.
    pub const fn new(history: &'a H, highlighter: &'a L) -> Self {
        Self {
            history,
            highlighter,
        }
    }

    /// Diff every changed file between `old` and `new`.
    ///
    /// Files are queried one at a time, in listing order.
    ///
    /// # Errors
    /// Returns error if the listing or any single-file diff fails; no
    /// partial set is returned.
    pub fn diff_commits(&self, old: &str, new: &str) -> Result<DiffSet> {
        let paths = self.history.changed_files(old, new)?;
        debug!(old, new, files = paths.len(), "listed changed files");

        let mut diffs = Vec::with_capacity(paths.len());
        for path in paths {
            let raw = self.history.file_diff(old, new, &path)?;
            let body = self.highlighter.render(&unescape_entities(&raw))?;
            diffs.push(FileDiff { path, body });
        }

        Ok(DiffSet {
            old: old.to_owned(),
            new: new.to_owned(),
            diffs,
        })
    }
}
