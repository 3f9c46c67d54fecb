//! `gstatus log` command - print one page of commit history.

use std::num::NonZeroUsize;
use std::path::Path;

use anyhow::{Result, anyhow, bail};
use gstatus_core::{CommitPage, LogService, translate};

use super::utils::{load_config, open_repo};
use crate::output;

/// Run the log command.
pub fn run(
    repo: &Path,
    page: usize,
    page_size: Option<NonZeroUsize>,
    json: bool,
    config_path: Option<&Path>,
) -> Result<()> {
    let config = load_config(config_path, page_size)?;
    let repo = open_repo(repo, &config)?;

    let service = LogService::new(&repo, config.general.page_size);

    if json {
        let view = translate(service.fetch_page(page));
        output::essential(&view.to_json()?);
        if view.is_error() {
            bail!("git query failed");
        }
        return Ok(());
    }

    let page = service
        .fetch_page(page)
        .map_err(|e| anyhow!("{}", e.diagnostic().trim_end()))?;
    print_page(&page);

    Ok(())
}

/// Print commits in human-readable format.
fn print_page(page: &CommitPage) {
    if page.commits.is_empty() {
        output::warn(&format!("No commits on page {}", page.page));
        return;
    }

    for commit in &page.commits {
        let record = &commit.record;
        let msg = format!(
            "{:<8} {:<20} {:<30} {}",
            output::short_id(&record.id),
            record.date,
            record.author,
            record.message
        );
        output::info(&msg);
    }

    if page.has_older {
        output::info(&format!("More: --page {}", page.page + 1));
    }
}
