//! Orphaned meta search and deletion
//!
//! Meta rows are orphaned when their foreign key points at an object
//! row that no longer exists. The finder reads, the deleter removes
//! exactly a previously found id set; the CLI runs both inside one
//! transaction so the set cannot go stale in between.

use crate::db::QueryExecutor;
use crate::error::{Result, SweepError};
use crate::tables::{quote_ident, EntityKind, TableNames};
use rusqlite::ToSql;
use tracing::debug;

/// Build the orphan-meta query for a kind.
pub fn build_orphan_meta_query(tables: &TableNames, kind: EntityKind) -> String {
    let t = kind.tables();
    format!(
        "SELECT {} FROM {} WHERE {} NOT IN ( SELECT {} FROM {} )",
        quote_ident(t.meta_pk),
        tables.quoted(t.meta_table),
        quote_ident(t.meta_fk),
        quote_ident(t.object_pk),
        tables.quoted(t.object_table)
    )
}

/// Find meta rows of `kind` whose object row no longer exists.
///
/// Returns the meta primary keys in engine order.
pub fn find_orphan_meta<E: QueryExecutor + ?Sized>(
    executor: &E,
    tables: &TableNames,
    kind: EntityKind,
) -> Result<Vec<i64>> {
    let query = build_orphan_meta_query(tables, kind);
    debug!(%query, kind = %kind, "searching for orphaned meta rows");

    let found = executor.select_column(&query, &[])?;
    debug!(found = found.len(), "orphaned meta search finished");
    Ok(found)
}

/// Delete exactly the meta rows in `found`.
///
/// `found` must be non-empty; an empty set is a caller error, not a
/// vacuous DELETE. Zero affected rows means the set went stale between
/// find and delete and is reported as [`SweepError::NothingDeleted`].
pub fn delete_found<E: QueryExecutor + ?Sized>(
    executor: &E,
    tables: &TableNames,
    kind: EntityKind,
    found: &[i64],
) -> Result<usize> {
    if found.is_empty() {
        return Err(SweepError::InvalidInput(
            "Refusing to delete an empty id set".to_string(),
        ));
    }

    let t = kind.tables();
    let placeholders = (1..=found.len())
        .map(|n| format!("?{}", n))
        .collect::<Vec<_>>()
        .join(", ");
    let query = format!(
        "DELETE FROM {} WHERE {} IN ( {} )",
        tables.quoted(t.meta_table),
        quote_ident(t.meta_pk),
        placeholders
    );
    debug!(%query, ids = found.len(), "deleting orphaned meta rows");

    let params: Vec<&dyn ToSql> = found.iter().map(|id| id as &dyn ToSql).collect();
    let deleted = executor.execute(&query, &params)?;
    if deleted == 0 {
        return Err(SweepError::NothingDeleted);
    }
    debug!(deleted, "orphaned meta rows deleted");
    Ok(deleted)
}
