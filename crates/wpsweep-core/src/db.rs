//! Database layer for wpsweep
//!
//! A thin handle around a SQLite connection plus the `QueryExecutor`
//! trait the finders and the deleter are written against. The tool
//! never creates or migrates schema; it operates on an existing
//! WordPress-style database.

use crate::error::{Result, SweepError};
use rusqlite::{Connection, ToSql, Transaction};
use std::path::Path;

/// Query execution as seen by the finders and the deleter.
///
/// Implemented by [`Database`] and by rusqlite transactions, so the
/// same find/delete code runs standalone or inside a transaction.
pub trait QueryExecutor {
    /// Run a SELECT and collect the first column of every row
    fn select_column(&self, sql: &str, params: &[&dyn ToSql]) -> Result<Vec<i64>>;

    /// Run a statement and return the affected-row count
    fn execute(&self, sql: &str, params: &[&dyn ToSql]) -> Result<usize>;
}

/// Main database handle
#[derive(Debug)]
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Open an existing database file
    ///
    /// The file must already exist; this tool never creates one.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(SweepError::InvalidInput(format!(
                "Database file not found: {}",
                path.display()
            )));
        }
        let conn = Connection::open(path)?;
        Ok(Self { conn })
    }

    /// Open in-memory database (for testing)
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        Ok(Self { conn })
    }

    /// Execute a batch of semicolon-separated statements (fixtures, pragmas)
    pub fn execute_batch(&self, sql: &str) -> Result<()> {
        self.conn.execute_batch(sql)?;
        Ok(())
    }

    /// Run `f` inside a transaction, committing on success
    ///
    /// An error from `f` rolls the transaction back. Used by the CLI to
    /// hold find and delete in one snapshot, closing the gap between
    /// reading the orphan set and acting on it.
    pub fn with_transaction<T>(&self, f: impl FnOnce(&Transaction<'_>) -> Result<T>) -> Result<T> {
        let tx = self.conn.unchecked_transaction()?;
        let out = f(&tx)?;
        tx.commit()?;
        Ok(out)
    }
}

impl QueryExecutor for Connection {
    fn select_column(&self, sql: &str, params: &[&dyn ToSql]) -> Result<Vec<i64>> {
        let mut stmt = self.prepare(sql)?;
        let values = stmt
            .query_map(params, |row| row.get(0))?
            .collect::<std::result::Result<Vec<i64>, _>>()?;
        Ok(values)
    }

    fn execute(&self, sql: &str, params: &[&dyn ToSql]) -> Result<usize> {
        let affected = Connection::execute(self, sql, params)?;
        Ok(affected)
    }
}

impl QueryExecutor for Database {
    fn select_column(&self, sql: &str, params: &[&dyn ToSql]) -> Result<Vec<i64>> {
        self.conn.select_column(sql, params)
    }

    fn execute(&self, sql: &str, params: &[&dyn ToSql]) -> Result<usize> {
        QueryExecutor::execute(&self.conn, sql, params)
    }
}

impl QueryExecutor for Transaction<'_> {
    fn select_column(&self, sql: &str, params: &[&dyn ToSql]) -> Result<Vec<i64>> {
        (**self).select_column(sql, params)
    }

    fn execute(&self, sql: &str, params: &[&dyn ToSql]) -> Result<usize> {
        QueryExecutor::execute(&**self, sql, params)
    }
}
