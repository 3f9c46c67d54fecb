//! Command definitions and dispatch.

use std::num::NonZeroUsize;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

pub mod completions;
pub mod diff;
pub mod log;
pub mod serve;
pub mod utils;

/// gstatus - browse a git repository's commit history.
#[derive(Debug, Parser)]
#[command(name = "gstatus", version, about, propagate_version = true)]
pub struct Cli {
    /// Suppress informational output.
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Path to a TOML config file.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Serve the history browser over HTTP.
    Serve {
        /// Repository root directory.
        #[arg(value_parser = utils::parse_repo_dir)]
        repo: PathBuf,

        /// Port to listen on.
        port: u16,

        /// Address to bind (overrides config).
        #[arg(long)]
        host: Option<String>,

        /// Commits per page (overrides config).
        #[arg(long)]
        page_size: Option<NonZeroUsize>,
    },

    /// Print one page of commit history.
    Log {
        /// Repository root directory.
        #[arg(value_parser = utils::parse_repo_dir)]
        repo: PathBuf,

        /// Zero-based page index.
        #[arg(long, short, default_value_t = 0)]
        page: usize,

        /// Commits per page (overrides config).
        #[arg(long)]
        page_size: Option<NonZeroUsize>,

        /// Output as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Print the per-file diff between two commits.
    Diff {
        /// Repository root directory.
        #[arg(value_parser = utils::parse_repo_dir)]
        repo: PathBuf,

        /// Older commit.
        old: String,

        /// Newer commit.
        new: String,

        /// Output as JSON with highlighted HTML bodies.
        #[arg(long)]
        json: bool,
    },

    /// Generate shell completions.
    Completions {
        /// Shell to generate completions for.
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }
}
