//! Mock implementations for testing services.
//!
//! `MockHistory` implements `HistoryOps` over an in-memory commit list so
//! service logic can be tested without real git repositories.

use std::cell::RefCell;
use std::collections::HashMap;

use gstatus_git::{CommitRecord, Error as GitError, HistoryOps, Result as GitResult};

use crate::error::Result;
use crate::highlight::Highlighter;

/// A recorded `HistoryOps` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    LogWindow { skip: usize, count: usize },
    ChangedFiles { old: String, new: String },
    FileDiff { path: String },
}

/// Mock implementation of `HistoryOps` for testing.
#[derive(Default)]
pub struct MockHistory {
    /// Whole history, newest first.
    pub commits: Vec<CommitRecord>,
    /// Output of the name-only listing, split into paths.
    pub changed: Vec<String>,
    /// Diff body per path.
    pub bodies: HashMap<String, String>,
    /// Path whose diff invocation fails.
    pub failing_path: Option<String>,
    /// When set, every call fails with this stderr.
    pub stderr: Option<String>,
    pub calls: RefCell<Vec<Call>>,
}

impl MockHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// History of `n` linear commits, newest first, with ids `c<n-1>` .. `c0`.
    pub fn with_linear_history(mut self, n: usize) -> Self {
        self.commits = (0..n)
            .rev()
            .map(|i| CommitRecord {
                id: format!("c{i}"),
                author: "Test User <test@example.com>".into(),
                date: "2024-03-01 10:00:00".into(),
                message: format!("Commit {i}"),
            })
            .collect();
        self
    }

    pub fn with_file(mut self, path: &str, body: &str) -> Self {
        self.changed.push(path.to_string());
        self.bodies.insert(path.to_string(), body.to_string());
        self
    }

    pub fn with_failing_path(mut self, path: &str) -> Self {
        self.failing_path = Some(path.to_string());
        self
    }

    pub fn with_tool_failure(mut self, stderr: &str) -> Self {
        self.stderr = Some(stderr.to_string());
        self
    }

    fn fail_if_configured(&self, command: &str) -> GitResult<()> {
        match &self.stderr {
            Some(stderr) => Err(GitError::Tool {
                command: command.to_string(),
                stderr: stderr.clone(),
            }),
            None => Ok(()),
        }
    }
}

impl HistoryOps for MockHistory {
    fn log_window(&self, skip: usize, count: usize) -> GitResult<Vec<CommitRecord>> {
        self.calls.borrow_mut().push(Call::LogWindow { skip, count });
        self.fail_if_configured("log")?;
        Ok(self.commits.iter().skip(skip).take(count).cloned().collect())
    }

    fn changed_files(&self, old: &str, new: &str) -> GitResult<Vec<String>> {
        self.calls.borrow_mut().push(Call::ChangedFiles {
            old: old.to_string(),
            new: new.to_string(),
        });
        self.fail_if_configured("diff --name-only")?;
        if old == new {
            return Ok(Vec::new());
        }
        Ok(self.changed.clone())
    }

    fn file_diff(&self, _old: &str, _new: &str, path: &str) -> GitResult<String> {
        self.calls.borrow_mut().push(Call::FileDiff {
            path: path.to_string(),
        });
        self.fail_if_configured("diff")?;
        if self.failing_path.as_deref() == Some(path) {
            return Err(GitError::Tool {
                command: format!("diff -- {path}"),
                stderr: format!("fatal: cannot diff {path}\n"),
            });
        }
        Ok(self.bodies.get(path).cloned().unwrap_or_default())
    }
}

/// Highlighter that records its input and returns it unchanged.
#[derive(Default)]
pub struct EchoHighlighter {
    pub inputs: RefCell<Vec<String>>,
}

impl Highlighter for EchoHighlighter {
    fn render(&self, diff_text: &str) -> Result<String> {
        self.inputs.borrow_mut().push(diff_text.to_string());
        Ok(diff_text.to_string())
    }
}
