//! CLI command handlers

pub mod orphan_meta;
pub mod orphan_posts;
