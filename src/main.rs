use anyhow::{Context, Result};
use clap::Parser;

use bookshelf::cli::handlers::{self, CommandContext};
use bookshelf::cli::{Cli, Commands};
use bookshelf::config::BookshelfConfig;
use bookshelf::logging;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let cwd = std::env::current_dir()?;
    let (config, config_path) = BookshelfConfig::load(cli.config.as_deref(), &cwd)
        .context("Failed to load bookshelf configuration")?;

    let log_file = cli
        .log_file
        .or_else(|| config.log_file(config_path.as_deref()));
    logging::init(cli.verbose, log_file).context("Failed to initialize logging")?;

    match &config_path {
        Some(path) => tracing::debug!(path = %path.display(), "Loaded configuration"),
        None => tracing::debug!("No configuration file found, using defaults"),
    }

    let ctx = CommandContext::new(&config);

    match cli.command {
        Commands::List { json } => handlers::handle_list(json),
        Commands::Query {
            query,
            file,
            variables,
        } => handlers::handle_query(&ctx, query, file, variables),
        Commands::Schema { output } => handlers::handle_schema(&ctx, output),
    }
}
