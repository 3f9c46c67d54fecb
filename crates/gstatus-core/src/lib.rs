//! # gstatus-core
//!
//! Core library for gstatus: pages through commit history, extracts
//! per-file diffs between two commits, and turns the outcome of either into
//! a [`View`] the presentation layer can always render.

pub mod config;
pub mod diff;
pub mod error;
pub mod highlight;
pub mod log;
pub mod view;

#[cfg(test)]
mod test_mocks;

pub use config::{Config, DEFAULT_PAGE_SIZE};
pub use diff::{DiffService, DiffSet, FileDiff};
pub use error::{Error, Result};
pub use highlight::{Highlighter, PlainHighlighter, SyntectHighlighter, escape_html};
pub use log::{CommitPage, LogService, PageCommit};
pub use view::{QueryError, View, translate};
