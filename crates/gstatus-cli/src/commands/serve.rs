//! `gstatus serve` command - serve the history browser over HTTP.

use std::num::NonZeroUsize;
use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use gstatus_core::SyntectHighlighter;
use tokio::net::TcpListener;

use super::utils::{load_config, open_repo};
use crate::output;
use crate::server::{self, AppState};

/// Run the serve command.
pub fn run(
    repo: &Path,
    port: u16,
    host: Option<String>,
    page_size: Option<NonZeroUsize>,
    config_path: Option<&Path>,
) -> Result<()> {
    let config = load_config(config_path, page_size)?;
    let host = host.unwrap_or_else(|| config.server.host.clone());

    let state = Arc::new(AppState {
        repo: open_repo(repo, &config)?,
        highlighter: SyntectHighlighter::default(),
        page_size: config.general.page_size,
        static_dir: config.server.static_dir.clone(),
    });

    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(async {
        let listener = TcpListener::bind((host.as_str(), port))
            .await
            .with_context(|| format!("Failed to bind {host}:{port}"))?;

        output::success(&format!(
            "Serving {} at http://{}",
            repo.display(),
            listener.local_addr()?
        ));

        server::run(listener, state).await?;
        Ok(())
    })
}
