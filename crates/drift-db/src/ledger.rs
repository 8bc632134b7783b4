//! Applied-script ledger.
//!
//! The ledger is a table inside the target database recording which
//! scripts have already been executed, keyed by script name. Entries are
//! append-only; the set of recorded names is the sole source of truth for
//! "already applied".

use crate::error::{DbError, DbResult};
use duckdb::Connection;
use serde::Serialize;
use std::collections::HashSet;

/// Default ledger table name.
pub const DEFAULT_LEDGER_TABLE: &str = "schema_versions";

/// One applied-script record.
///
/// `applied_at` is rendered to text by the database; the ledger never
/// mutates or deletes entries.
#[derive(Debug, Clone, Serialize)]
pub struct LedgerEntry {
    /// Script name (full filename)
    pub script_name: String,

    /// Timestamp the script was applied, as rendered by the database
    pub applied_at: String,
}

/// Handle to the ledger table.
///
/// Every operation takes a `&Connection` so ledger writes compose with
/// the upgrade transaction: rolling back an upgrade also rolls back its
/// ledger entries.
#[derive(Debug, Clone)]
pub struct Ledger {
    table: String,
}

impl Ledger {
    /// Create a handle for `table`.
    ///
    /// The name must already be validated as an identifier (drift-core
    /// config validation) since it is interpolated into SQL text.
    pub fn new(table: impl Into<String>) -> Self {
        Self {
            table: table.into(),
        }
    }

    /// The ledger table name.
    pub fn table(&self) -> &str {
        &self.table
    }

    /// Ensure the ledger table (and its schema, if qualified) exists.
    pub fn ensure_table(&self, conn: &Connection) -> DbResult<()> {
        let mut ddl = String::new();
        if let Some((schema, _)) = self.table.rsplit_once('.') {
            ddl.push_str(&format!("CREATE SCHEMA IF NOT EXISTS {schema};\n"));
        }
        ddl.push_str(&format!(
            "CREATE TABLE IF NOT EXISTS {} (
                 script_name VARCHAR PRIMARY KEY,
                 applied_at  TIMESTAMP NOT NULL DEFAULT now()
             );",
            self.table
        ));

        conn.execute_batch(&ddl)
            .map_err(|e| DbError::LedgerError(format!("failed to create {}: {e}", self.table)))
    }

    /// Names of all scripts recorded as applied.
    pub fn applied_names(&self, conn: &Connection) -> DbResult<HashSet<String>> {
        let sql = format!("SELECT script_name FROM {}", self.table);
        let mut stmt = conn
            .prepare(&sql)
            .map_err(|e| DbError::LedgerError(format!("failed to read {}: {e}", self.table)))?;

        let names = stmt
            .query_map([], |row| row.get::<_, String>(0))
            .and_then(|rows| rows.collect::<Result<HashSet<_>, _>>())
            .map_err(|e| DbError::LedgerError(format!("failed to read {}: {e}", self.table)))?;

        Ok(names)
    }

    /// All ledger entries, oldest first.
    pub fn entries(&self, conn: &Connection) -> DbResult<Vec<LedgerEntry>> {
        let sql = format!(
            "SELECT script_name, CAST(applied_at AS VARCHAR)
             FROM {}
             ORDER BY applied_at, script_name",
            self.table
        );
        let mut stmt = conn
            .prepare(&sql)
            .map_err(|e| DbError::LedgerError(format!("failed to read {}: {e}", self.table)))?;

        let entries = stmt
            .query_map([], |row| {
                Ok(LedgerEntry {
                    script_name: row.get(0)?,
                    applied_at: row.get(1)?,
                })
            })
            .and_then(|rows| rows.collect::<Result<Vec<_>, _>>())
            .map_err(|e| DbError::LedgerError(format!("failed to read {}: {e}", self.table)))?;

        Ok(entries)
    }

    /// Append an entry for a script that just executed successfully.
    pub fn record(&self, conn: &Connection, script_name: &str) -> DbResult<()> {
        let sql = format!("INSERT INTO {} (script_name) VALUES (?)", self.table);
        conn.execute(&sql, duckdb::params![script_name])
            .map_err(|e| {
                DbError::LedgerError(format!("failed to record '{script_name}': {e}"))
            })?;
        Ok(())
    }
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new(DEFAULT_LEDGER_TABLE)
    }
}

#[cfg(test)]
#[path = "ledger_test.rs"]
mod tests;
