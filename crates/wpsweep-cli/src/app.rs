//! CLI argument definitions

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use wpsweep_core::EntityKind;

#[derive(Parser)]
#[command(name = "wpsweep")]
#[command(
    author,
    version,
    about = "Find and remove orphaned rows in a WordPress-style database"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to the SQLite database file
    #[arg(long, global = true, env = "WPSWEEP_DB")]
    pub db: Option<PathBuf>,

    /// Table name prefix
    #[arg(long, global = true, env = "WPSWEEP_TABLE_PREFIX")]
    pub table_prefix: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Find posts whose parent post no longer exists
    FindOrphanPosts(FindOrphanPostsArgs),

    /// Find meta rows whose object no longer exists, optionally delete them
    FindOrphanMeta(FindOrphanMetaArgs),
}

#[derive(Args)]
pub struct FindOrphanPostsArgs {
    /// Comma-separated list of post types to restrict the search to
    #[arg(long)]
    pub object_type: Option<String>,
}

#[derive(Args)]
pub struct FindOrphanMetaArgs {
    /// Object kind: comment, post, term or user
    #[arg(long, default_value = "post")]
    pub kind: EntityKind,

    /// Print the number of found entries instead of their ids
    #[arg(long)]
    pub count: bool,

    /// Delete all found entries
    #[arg(long)]
    pub delete: bool,
}
