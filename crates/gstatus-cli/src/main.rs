//! gstatus - browse a git repository's commit history.

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod commands;
mod output;
mod server;

use commands::{Cli, Commands};

fn main() {
    let cli = Cli::parse();
    output::set_quiet(cli.quiet);

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = cli.config.as_deref();
    let result = match cli.command {
        Commands::Serve {
            repo,
            port,
            host,
            page_size,
        } => commands::serve::run(&repo, port, host, page_size, config),
        Commands::Log {
            repo,
            page,
            page_size,
            json,
        } => commands::log::run(&repo, page, page_size, json, config),
        Commands::Diff {
            repo,
            old,
            new,
            json,
        } => commands::diff::run(&repo, &old, &new, json, config),
        Commands::Completions { shell } => commands::completions::run(shell),
    };

    if let Err(e) = result {
        output::error(&format!("{e:#}"));
        std::process::exit(1);
    }
}
