use anyhow::{Context, Result};
use clap::Parser;

use bookshelf::cli::handlers::{CommandContext, handle_mutate, handle_query, handle_serve};
use bookshelf::cli::{Cli, Commands};
use bookshelf::config::BookshelfConfig;
use bookshelf::logging;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let cwd = std::env::current_dir()?;
    let config = BookshelfConfig::load(cli.config.as_deref(), &cwd)
        .context("Failed to load bookshelf configuration")?;

    let verbose = cli.verbose || config.logging.verbose;
    let log_file = cli.log_file.clone().or_else(|| config.logging.file.clone());
    logging::init(verbose, log_file.as_deref());

    let ctx = CommandContext::new(config);

    match cli.command {
        Commands::Serve { host, port } => handle_serve(ctx, host, port),
        Commands::Query { query, variables } => handle_query(ctx, query, variables),
        Commands::Mutate {
            mutation,
            variables,
        } => handle_mutate(ctx, mutation, variables),
    }
}
