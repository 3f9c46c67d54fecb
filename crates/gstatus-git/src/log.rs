//! Parsing of `git log` output into commit records.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

/// One block of `git log --date=iso` output.
///
/// Groups: hash, author, date, first message line. Anything else in the block
/// (a `Merge:` header, a missing `Date:`) makes the block fail to match, and
/// the scan moves on to the next `commit` line.
#[allow(clippy::expect_used)]
static COMMIT_BLOCK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"commit\s*(\w+)\nAuthor:\s*(.+)\nDate:\s*(.+)\n\n\s*(.+)")
        .expect("commit block pattern is valid")
});

/// A commit as shown in the history listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommitRecord {
    /// Full commit hash.
    pub id: String,
    /// Author name and email, as git prints them.
    pub author: String,
    /// Commit date without its UTC offset.
    pub date: String,
    /// First line of the commit message.
    pub message: String,
}

/// Parse raw `git log` text into commit records, newest first.
///
/// Blocks that don't have exactly the `commit` / `Author:` / `Date:` /
/// blank / message shape are skipped rather than reported.
#[must_use]
pub fn parse_log(raw: &str) -> Vec<CommitRecord> {
    COMMIT_BLOCK
        .captures_iter(raw)
        .map(|caps| CommitRecord {
            id: caps[1].to_owned(),
            author: caps[2].trim_end().to_owned(),
            date: strip_offset(&caps[3]),
            message: caps[4].trim_end().to_owned(),
        })
        .collect()
}

/// Drop everything from the first `+` on, so `2024-01-02 10:00:00 +0100`
/// displays as `2024-01-02 10:00:00`.
fn strip_offset(date: &str) -> String {
    date.split_once('+')
        .map_or(date, |(local, _)| local)
        .trim_end()
        .to_owned()
}
