//! drift-core - shared types for sqldrift
//!
//! Provides project configuration (`sqldrift.yml`), migration script
//! discovery, and the core error type.

pub mod config;
pub mod error;
pub mod script;
pub(crate) mod serde_helpers;

pub use config::{Config, DatabaseConfig, DbType};
pub use error::{CoreError, CoreResult};
pub use script::{BatchKind, Script, ScriptBatch};
