//! History paging.
//!
//! A page is a fixed-size window of `git log` output. One extra commit past
//! the window is fetched so the last visible commit can link to its
//! predecessor; that sentinel is never shown.

use gstatus_git::{CommitRecord, HistoryOps};
use serde::Serialize;
use tracing::debug;

use crate::error::Result;

/// A commit on a history page, linked to the next-older commit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageCommit {
    #[serde(flatten)]
    pub record: CommitRecord,
    /// Id of the commit just before this one in history, if known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous_id: Option<String>,
}

/// One page of history, newest first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommitPage {
    pub commits: Vec<PageCommit>,
    pub page: usize,
    /// Whether history continues past this page.
    pub has_older: bool,
}

/// Service for paging through commit history.
pub struct LogService<'a, H: HistoryOps> {
    history: &'a H,
    step: usize,
}

impl<'a, H: HistoryOps> LogService<'a, H> {
    /// Create a log service showing `step` commits per page.
    ///
    /// A `step` of zero is treated as one.
    pub fn new(history: &'a H, step: usize) -> Self {
        Self {
            history,
            step: step.max(1),
        }
    }

    /// Commits per page.
    #[must_use]
    pub const fn step(&self) -> usize {
        self.step
    }

    /// Fetch page `page` (zero-based) of history.
    ///
    /// # Errors
    /// Returns error if the log query fails; no partial page is returned.
    pub fn fetch_page(&self, page: usize) -> Result<CommitPage> {
        let skip = page.saturating_mul(self.step);
        let fetched = self.history.log_window(skip, self.step.saturating_add(1))?;
        debug!(page, skip, fetched = fetched.len(), "fetched history window");

        Ok(paginate(&fetched, page, self.step))
    }
}

/// Link each record to its successor in the slice, then drop the sentinel.
fn paginate(records: &[CommitRecord], page: usize, step: usize) -> CommitPage {
    let mut commits = Vec::with_capacity(records.len());
    for (index, record) in records.iter().enumerate() {
        let previous_id = records.get(index + 1).map(|older| older.id.clone());
        commits.push(PageCommit {
            record: record.clone(),
            previous_id,
        });
    }

    let has_older = commits.len() > step;
    commits.truncate(step);

    CommitPage {
        commits,
        page,
        has_older,
    }
}
