//! Target database connection wrapper.
//!
//! [`TargetDb`] owns a DuckDB [`Connection`] and provides helpers for
//! opening the target database and transacting against it.

use crate::error::{DbError, DbResult};
use duckdb::Connection;
use std::path::Path;

/// Wrapper around a DuckDB connection to the deployment target.
///
/// Single-threaded — no `Mutex` needed because script execution is
/// strictly sequential.
pub struct TargetDb {
    conn: Connection,
}

impl TargetDb {
    /// Open (or create) the target database at `path`.
    ///
    /// Handles the `:memory:` special case.
    pub fn open(path: &str) -> DbResult<Self> {
        if path == ":memory:" {
            return Self::open_memory();
        }
        let conn = Connection::open(Path::new(path))
            .map_err(|e| DbError::ConnectionError(format!("{e}: {path}")))?;
        Ok(Self { conn })
    }

    /// Create an in-memory target database.
    ///
    /// Useful for unit tests that don't need persistence.
    pub fn open_memory() -> DbResult<Self> {
        let conn =
            Connection::open_in_memory().map_err(|e| DbError::ConnectionError(e.to_string()))?;
        Ok(Self { conn })
    }

    /// Borrow the underlying DuckDB connection.
    pub fn conn(&self) -> &Connection {
        &self.conn
    }

    /// Execute `body` within a `BEGIN` / `COMMIT` transaction, rolling back
    /// on error.
    pub fn transaction<F, T>(&self, body: F) -> DbResult<T>
    where
        F: FnOnce(&Connection) -> DbResult<T>,
    {
        self.conn
            .execute_batch("BEGIN TRANSACTION")
            .map_err(|e| DbError::TransactionError(format!("BEGIN failed: {e}")))?;

        let result = body(&self.conn);

        match &result {
            Ok(_) => {
                if let Err(commit_err) = self.conn.execute_batch("COMMIT") {
                    let _ = self.conn.execute_batch("ROLLBACK");
                    return Err(DbError::TransactionError(format!(
                        "COMMIT failed: {commit_err}"
                    )));
                }
            }
            Err(_) => {
                let _ = self.conn.execute_batch("ROLLBACK");
            }
        }
        result
    }

    /// Check if a table exists in the target database (for tests and status).
    pub fn table_exists(&self, name: &str) -> DbResult<bool> {
        let (schema, table) = match name.rsplit_once('.') {
            Some((schema, table)) => (schema, table),
            None => ("main", name),
        };

        let count: i64 = self
            .conn
            .query_row(
                "SELECT COUNT(*) FROM information_schema.tables WHERE table_schema = ? AND table_name = ?",
                duckdb::params![schema, table],
                |row| row.get(0),
            )
            .map_err(DbError::DuckDb)?;

        Ok(count > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_memory() {
        let db = TargetDb::open_memory().unwrap();
        assert!(!db.table_exists("anything").unwrap());
    }

    #[test]
    fn test_open_memory_path() {
        let db = TargetDb::open(":memory:").unwrap();
        db.conn().execute_batch("CREATE TABLE t (id INTEGER)").unwrap();
        assert!(db.table_exists("t").unwrap());
    }

    #[test]
    fn test_open_file_path() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("target.duckdb");
        let db = TargetDb::open(path.to_str().unwrap()).unwrap();
        db.conn().execute_batch("CREATE TABLE t (id INTEGER)").unwrap();
        drop(db);

        let reopened = TargetDb::open(path.to_str().unwrap()).unwrap();
        assert!(reopened.table_exists("t").unwrap());
    }

    #[test]
    fn test_transaction_commit() {
        let db = TargetDb::open_memory().unwrap();
        db.transaction(|conn| {
            conn.execute_batch("CREATE TABLE t (id INTEGER); INSERT INTO t VALUES (1);")
                .map_err(DbError::DuckDb)
        })
        .unwrap();

        let count: i64 = db
            .conn()
            .query_row("SELECT COUNT(*) FROM t", [], |row| row.get(0))
            .unwrap();
        assert_eq!(count, 1);
    }

    #[test]
    fn test_transaction_rollback() {
        let db = TargetDb::open_memory().unwrap();
        let result = db.transaction(|conn| {
            conn.execute_batch("CREATE TABLE t (id INTEGER)")
                .map_err(DbError::DuckDb)?;
            Err::<(), _>(DbError::TransactionError("forced".to_string()))
        });
        assert!(result.is_err());

        // The CREATE TABLE must have rolled back with the transaction
        assert!(!db.table_exists("t").unwrap());
    }

    #[test]
    fn test_table_exists_schema_qualified() {
        let db = TargetDb::open_memory().unwrap();
        db.conn()
            .execute_batch("CREATE SCHEMA meta; CREATE TABLE meta.log (id INTEGER);")
            .unwrap();
        assert!(db.table_exists("meta.log").unwrap());
        assert!(!db.table_exists("meta.other").unwrap());
    }
}
