//! Configuration types and parsing for sqldrift.yml

use crate::error::{CoreError, CoreResult};
use crate::serde_helpers::default_true;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main project configuration from sqldrift.yml
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Project name
    pub name: String,

    /// Project version
    #[serde(default = "default_version")]
    pub version: String,

    /// Target database connection configuration
    #[serde(default)]
    pub database: DatabaseConfig,

    /// Directory containing schema scripts, relative to the project root
    #[serde(default = "default_schema_path")]
    pub schema_path: String,

    /// Directory containing data scripts, relative to the project root
    #[serde(default = "default_data_path")]
    pub data_path: String,

    /// Name of the ledger table recording applied scripts
    #[serde(default = "default_ledger_table")]
    pub ledger_table: String,

    /// Whether a failed batch stops the run before the next batch
    /// (data scripts may depend on schema changes)
    #[serde(default = "default_true")]
    pub stop_on_batch_failure: bool,
}

/// Database type selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DbType {
    /// DuckDB (default)
    #[default]
    DuckDb,
}

impl std::fmt::Display for DbType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DbType::DuckDb => write!(f, "duckdb"),
        }
    }
}

/// Database connection configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Database type
    #[serde(rename = "type", default)]
    pub db_type: DbType,

    /// Database path (file-based or :memory:)
    #[serde(default = "default_db_path")]
    pub path: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            db_type: DbType::default(),
            path: default_db_path(),
        }
    }
}

fn default_version() -> String {
    "1.0.0".to_string()
}

fn default_schema_path() -> String {
    "scripts/schema".to_string()
}

fn default_data_path() -> String {
    "scripts/data".to_string()
}

fn default_ledger_table() -> String {
    "schema_versions".to_string()
}

fn default_db_path() -> String {
    "deploy.duckdb".to_string()
}

impl Config {
    /// Load configuration from a file path
    pub fn load(path: &Path) -> CoreResult<Self> {
        if !path.exists() {
            return Err(CoreError::ConfigNotFound {
                path: path.display().to_string(),
            });
        }

        let content = std::fs::read_to_string(path).map_err(|e| CoreError::IoWithPath {
            path: path.display().to_string(),
            source: e,
        })?;
        let config: Config = serde_yaml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a project directory
    /// Looks for sqldrift.yml or sqldrift.yaml
    pub fn load_from_dir(dir: &Path) -> CoreResult<Self> {
        let yml_path = dir.join("sqldrift.yml");
        let yaml_path = dir.join("sqldrift.yaml");

        if yml_path.exists() {
            Self::load(&yml_path)
        } else if yaml_path.exists() {
            Self::load(&yaml_path)
        } else {
            Err(CoreError::ConfigNotFound {
                path: dir.join("sqldrift.yml").display().to_string(),
            })
        }
    }

    /// Validate the configuration
    fn validate(&self) -> CoreResult<()> {
        if self.name.is_empty() {
            return Err(CoreError::ConfigInvalid {
                message: "Project name cannot be empty".to_string(),
            });
        }

        // The ledger table name is interpolated into DDL/DML text, so it
        // must be a plain (optionally schema-qualified) identifier.
        if !is_valid_table_name(&self.ledger_table) {
            return Err(CoreError::ConfigInvalid {
                message: format!(
                    "Invalid ledger_table '{}': must be an identifier like schema_versions or meta.schema_versions",
                    self.ledger_table
                ),
            });
        }

        Ok(())
    }

    /// Get the absolute schema scripts path relative to a project root
    pub fn schema_path_absolute(&self, root: &Path) -> PathBuf {
        root.join(&self.schema_path)
    }

    /// Get the absolute data scripts path relative to a project root
    pub fn data_path_absolute(&self, root: &Path) -> PathBuf {
        root.join(&self.data_path)
    }

    /// Resolve the database path, preferring a CLI --target override
    pub fn resolve_db_path<'a>(&'a self, target: Option<&'a str>) -> &'a str {
        target.unwrap_or(&self.database.path)
    }
}

/// Check that a table name is a plain or schema-qualified SQL identifier
fn is_valid_table_name(name: &str) -> bool {
    !name.is_empty()
        && name.split('.').count() <= 2
        && name.split('.').all(|part| {
            !part.is_empty()
                && !part.starts_with(|c: char| c.is_ascii_digit())
                && part.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
        })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
