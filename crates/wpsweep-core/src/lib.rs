//! Wpsweep Core Library
//!
//! Maintenance queries for WordPress-style SQLite databases:
//! - Orphaned post detection (rows whose parent row is gone)
//! - Orphaned meta detection and deletion for the four meta domains
//!   (comment, post, term, user)
//!
//! All caller-supplied values are bound as statement parameters; only
//! table and column names from the static schema mapping (plus the
//! configured prefix, backtick-quoted) appear in SQL text.

pub mod config;
pub mod db;
pub mod error;
pub mod orphan_meta;
pub mod orphan_posts;
pub mod report;
pub mod tables;

pub use config::Config;
pub use db::{Database, QueryExecutor};
pub use error::{Error, Result, SweepError};
pub use orphan_meta::{delete_found, find_orphan_meta};
pub use orphan_posts::find_orphan_posts;
pub use report::{format_report, ReportMode};
pub use tables::{EntityKind, MetaTables, TableNames};

/// Default config directory name
pub const CONFIG_DIR_NAME: &str = "wpsweep";

/// Physical table prefix of a stock WordPress install
pub const DEFAULT_TABLE_PREFIX: &str = "wp_";
