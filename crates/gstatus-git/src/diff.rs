//! Helpers for the two shapes of `git diff` output gstatus reads.

/// Lines of per-file preamble in the common case:
/// `diff --git`, `index`, `---` and `+++`.
pub const PREAMBLE_LINES: usize = 4;

/// Split `git diff --name-only` output into paths, in listing order.
///
/// Empty lines (including the one after the trailing newline) are dropped.
#[must_use]
pub fn split_paths(listing: &str) -> Vec<String> {
    listing
        .split('\n')
        .filter(|line| !line.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Strip the per-file preamble from a single-file diff, keeping the hunks.
///
/// The body starts at the first `@@` line. A diff with no hunks (binary
/// files, mode-only changes) loses its first [`PREAMBLE_LINES`] lines instead.
#[must_use]
pub fn strip_preamble(raw: &str) -> &str {
    let mut offset = 0;
    for line in raw.split_inclusive('\n') {
        if line.starts_with("@@") {
            return &raw[offset..];
        }
        offset += line.len();
    }

    let skipped: usize = raw
        .split_inclusive('\n')
        .take(PREAMBLE_LINES)
        .map(str::len)
        .sum();
    &raw[skipped..]
}

/// Undo the `&lt;`, `&gt;` and `&amp;` escapes before highlighting.
#[must_use]
pub fn unescape_entities(text: &str) -> String {
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&amp;", "&")
}
