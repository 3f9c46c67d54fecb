//! Result shapes handed to the presentation layer.
//!
//! Request handlers run a core operation and pass its `Result` through
//! [`translate`], so the presentation layer always receives something it can
//! render: commits, diffs, or an error message.

use serde::Serialize;
use tracing::warn;

use crate::diff::DiffSet;
use crate::error::{Error, Result};
use crate::log::CommitPage;

/// Uniform failure value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QueryError {
    pub error_msg: String,
}

impl From<&Error> for QueryError {
    fn from(err: &Error) -> Self {
        Self {
            error_msg: err.diagnostic(),
        }
    }
}

/// What a request produced.
///
/// Serializes without a tag: `{commits, page, ..}`, `{old, new, diffs}` or
/// `{error_msg}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum View {
    Commits(CommitPage),
    Diffs(DiffSet),
    Error(QueryError),
}

impl View {
    /// Whether this view carries an error.
    #[must_use]
    pub const fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }

    /// Serialize to pretty-printed JSON.
    ///
    /// # Errors
    /// Returns error if serialization fails.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl From<CommitPage> for View {
    fn from(page: CommitPage) -> Self {
        Self::Commits(page)
    }
}

impl From<DiffSet> for View {
    fn from(set: DiffSet) -> Self {
        Self::Diffs(set)
    }
}

impl From<QueryError> for View {
    fn from(err: QueryError) -> Self {
        Self::Error(err)
    }
}

/// Turn an operation's outcome into a renderable view.
///
/// Every failure is treated the same way regardless of which query failed.
pub fn translate<T: Into<View>>(result: Result<T>) -> View {
    match result {
        Ok(value) => value.into(),
        Err(err) => {
            warn!(error = %err, "query failed");
            View::Error(QueryError::from(&err))
        }
    }
}
