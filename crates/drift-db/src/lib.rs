//! drift-db - target database layer for sqldrift
//!
//! Provides the DuckDB connection wrapper, the applied-script ledger, and
//! the migration upgrader that applies script batches transactionally.

pub mod connection;
pub mod error;
pub mod ledger;
pub mod upgrader;

pub use connection::TargetDb;
pub use error::{DbError, DbResult};
pub use ledger::{Ledger, LedgerEntry, DEFAULT_LEDGER_TABLE};
pub use upgrader::{UpgradeReport, Upgrader};
