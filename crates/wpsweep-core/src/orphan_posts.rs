//! Orphaned post search
//!
//! Finds rows in the posts table whose `post_parent` points at a
//! primary key that no longer exists, optionally restricted to a set
//! of post types. A parent id of 0 is treated like any other value: if
//! no row has primary key 0, top-level rows are reported too.

use crate::db::QueryExecutor;
use crate::error::Result;
use crate::tables::{quote_ident, TableNames, POSTS_PARENT, POSTS_PK, POSTS_TABLE, POSTS_TYPE};
use rusqlite::ToSql;
use tracing::debug;

/// Build the orphan-post query for a filter of `filter_len` post types.
///
/// Filter values are bound as `?n` placeholders; only static column
/// names and the prefixed, quoted table name appear in the text.
pub fn build_orphan_posts_query(tables: &TableNames, filter_len: usize) -> String {
    let posts = tables.quoted(POSTS_TABLE);
    let pk = quote_ident(POSTS_PK);

    let mut query = format!("SELECT posts.{} FROM {} AS posts WHERE 1=1", pk, posts);
    if filter_len > 0 {
        let placeholders = (1..=filter_len)
            .map(|n| format!("?{}", n))
            .collect::<Vec<_>>()
            .join(", ");
        query.push_str(&format!(
            " AND posts.{} IN ( {} )",
            quote_ident(POSTS_TYPE),
            placeholders
        ));
    }
    query.push_str(&format!(
        " AND NOT EXISTS ( SELECT 1 FROM {} AS parents WHERE parents.{} = posts.{} )",
        posts,
        pk,
        quote_ident(POSTS_PARENT)
    ));
    query
}

/// Find posts whose parent row no longer exists.
///
/// Each filter element is trimmed; an empty slice means every post
/// type. Filter values are not validated against registered types:
/// unknown names simply match nothing. Result order is whatever the
/// engine returns.
pub fn find_orphan_posts<E: QueryExecutor + ?Sized>(
    executor: &E,
    tables: &TableNames,
    type_filter: &[String],
) -> Result<Vec<i64>> {
    let filter: Vec<String> = type_filter.iter().map(|t| t.trim().to_string()).collect();

    let query = build_orphan_posts_query(tables, filter.len());
    debug!(%query, filter = ?filter, "searching for orphaned posts");

    let params: Vec<&dyn ToSql> = filter.iter().map(|t| t as &dyn ToSql).collect();
    let found = executor.select_column(&query, &params)?;
    debug!(found = found.len(), "orphaned post search finished");
    Ok(found)
}
