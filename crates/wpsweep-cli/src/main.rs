//! Wpsweep CLI
//!
//! Database-maintenance subcommands for WordPress-style SQLite
//! databases: find orphaned posts, find and delete orphaned meta rows.

use anyhow::Result;
use clap::Parser;
use wpsweep_core::error::exit_codes;
use wpsweep_core::{Config, Database, SweepError, TableNames, DEFAULT_TABLE_PREFIX};

mod app;
mod commands;

use app::{Cli, Commands};

fn main() {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .init();

    let cli = Cli::parse();

    if let Err(err) = run(cli) {
        eprintln!("Error: {:#}", err);
        std::process::exit(exit_code(&err));
    }
}

fn exit_code(err: &anyhow::Error) -> i32 {
    err.downcast_ref::<SweepError>()
        .map(SweepError::exit_code)
        .unwrap_or(exit_codes::GENERAL_ERROR)
}

fn run(cli: Cli) -> Result<()> {
    let config = Config::load()?;

    // Flag/env first, then config file, then built-in default
    let db_path = cli.db.or(config.database).ok_or_else(|| {
        SweepError::InvalidInput(
            "No database path given (use --db, WPSWEEP_DB or the config file)".to_string(),
        )
    })?;
    let db = Database::open(&db_path)?;

    let prefix = cli
        .table_prefix
        .or(config.table_prefix)
        .unwrap_or_else(|| DEFAULT_TABLE_PREFIX.to_string());
    let tables = TableNames::new(prefix);

    match cli.command {
        Commands::FindOrphanPosts(args) => commands::orphan_posts::run(&args, &db, &tables),
        Commands::FindOrphanMeta(args) => commands::orphan_meta::run(&args, &db, &tables),
    }
}
