//! # gstatus-git
//!
//! Read-only git access for gstatus. Runs the `git` executable against a
//! fixed repository root and parses its log and diff output into typed
//! values.

mod diff;
mod error;
mod log;
mod repository;
mod runner;
mod traits;

pub use diff::{PREAMBLE_LINES, split_paths, strip_preamble, unescape_entities};
pub use error::{Error, Result};
pub use log::{CommitRecord, parse_log};
pub use repository::Repository;
pub use runner::{CommandExecutor, ProcessOutput, SystemExecutor};
pub use traits::HistoryOps;
