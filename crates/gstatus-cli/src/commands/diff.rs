//! `gstatus diff` command - print the per-file diff between two commits.

use std::path::Path;

use anyhow::{Result, anyhow, bail};
use gstatus_core::{DiffService, DiffSet, Highlighter, SyntectHighlighter, translate};

use super::utils::{load_config, open_repo};
use crate::output;

/// Highlighter for terminal output: colors each line by its diff marker.
struct TerminalHighlighter;

impl Highlighter for TerminalHighlighter {
    fn render(&self, diff_text: &str) -> gstatus_core::Result<String> {
        let lines: Vec<String> = diff_text.lines().map(output::diff_line).collect();
        Ok(lines.join("\n"))
    }
}

/// Run the diff command.
pub fn run(repo: &Path, old: &str, new: &str, json: bool, config_path: Option<&Path>) -> Result<()> {
    let config = load_config(config_path, None)?;
    let repo = open_repo(repo, &config)?;

    if json {
        let highlighter = SyntectHighlighter::default();
        let view = translate(DiffService::new(&repo, &highlighter).diff_commits(old, new));
        output::essential(&view.to_json()?);
        if view.is_error() {
            bail!("git query failed");
        }
        return Ok(());
    }

    let set = DiffService::new(&repo, &TerminalHighlighter)
        .diff_commits(old, new)
        .map_err(|e| anyhow!("{}", e.diagnostic().trim_end()))?;
    print_diffs(&set);

    Ok(())
}

fn print_diffs(set: &DiffSet) {
    if set.diffs.is_empty() {
        output::warn(&format!("No changes between {} and {}", set.old, set.new));
        return;
    }

    for diff in &set.diffs {
        output::hr();
        output::info(&diff.path);
        output::essential(&diff.body);
    }
}
