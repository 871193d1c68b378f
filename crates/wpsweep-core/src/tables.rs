//! Static schema mapping: entity kinds, meta table tuples, prefix handling
//!
//! Table and column names come only from this module (plus the
//! configured prefix); user input never reaches SQL text as an
//! identifier.

use crate::error::SweepError;
use std::fmt;
use std::str::FromStr;

/// Posts table columns used by the orphan-post search
pub const POSTS_TABLE: &str = "posts";
pub const POSTS_PK: &str = "ID";
pub const POSTS_PARENT: &str = "post_parent";
pub const POSTS_TYPE: &str = "post_type";

/// The four metadata domains
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Comment,
    Post,
    Term,
    User,
}

/// Per-kind table layout: where the meta rows live, how they point at
/// their object, and where the objects live.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MetaTables {
    pub meta_table: &'static str,
    pub meta_pk: &'static str,
    pub meta_fk: &'static str,
    pub object_table: &'static str,
    pub object_pk: &'static str,
}

impl EntityKind {
    pub const ALL: [EntityKind; 4] = [
        EntityKind::Comment,
        EntityKind::Post,
        EntityKind::Term,
        EntityKind::User,
    ];

    /// The fixed table layout for this kind
    pub fn tables(self) -> MetaTables {
        match self {
            EntityKind::Comment => MetaTables {
                meta_table: "commentmeta",
                meta_pk: "meta_id",
                meta_fk: "comment_id",
                object_table: "comments",
                object_pk: "comment_ID",
            },
            EntityKind::Post => MetaTables {
                meta_table: "postmeta",
                meta_pk: "meta_id",
                meta_fk: "post_id",
                object_table: "posts",
                object_pk: "ID",
            },
            EntityKind::Term => MetaTables {
                meta_table: "termmeta",
                meta_pk: "meta_id",
                meta_fk: "term_id",
                object_table: "terms",
                object_pk: "term_id",
            },
            EntityKind::User => MetaTables {
                meta_table: "usermeta",
                meta_pk: "umeta_id",
                meta_fk: "user_id",
                object_table: "users",
                object_pk: "ID",
            },
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            EntityKind::Comment => "comment",
            EntityKind::Post => "post",
            EntityKind::Term => "term",
            EntityKind::User => "user",
        }
    }
}

impl FromStr for EntityKind {
    type Err = SweepError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "comment" => Ok(EntityKind::Comment),
            "post" => Ok(EntityKind::Post),
            "term" => Ok(EntityKind::Term),
            "user" => Ok(EntityKind::User),
            other => Err(SweepError::InvalidInput(format!(
                "Unknown object kind '{}' (expected one of: comment, post, term, user)",
                other
            ))),
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Physical table name resolution: prefix + logical name
#[derive(Debug, Clone)]
pub struct TableNames {
    prefix: String,
}

impl TableNames {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    /// Physical name of a logical table
    pub fn resolve(&self, base: &str) -> String {
        format!("{}{}", self.prefix, base)
    }

    /// Physical name, quoted for use in SQL text
    pub fn quoted(&self, base: &str) -> String {
        quote_ident(&self.resolve(base))
    }
}

impl Default for TableNames {
    fn default() -> Self {
        Self::new(crate::DEFAULT_TABLE_PREFIX)
    }
}

/// Backtick-quote an identifier, doubling embedded backticks
///
/// The prefix is caller-supplied, so resolved table names cannot be
/// trusted to be bare identifiers.
pub fn quote_ident(name: &str) -> String {
    format!("`{}`", name.replace('`', "``"))
}
