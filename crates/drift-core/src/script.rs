//! Migration script representation and discovery
//!
//! Scripts are plain `.sql` files discovered directly inside a batch
//! directory (no recursion). The full filename is the script's identity
//! in the ledger, and lexical filename order is execution order.

use crate::error::{CoreError, CoreResult};
use std::path::{Path, PathBuf};

/// A single SQL migration script, immutable once read
#[derive(Debug, Clone)]
pub struct Script {
    /// Script name: the full filename, e.g. `001_create_table.sql`.
    /// This is the sole identity key in the ledger.
    pub name: String,

    /// Path to the source file
    pub path: PathBuf,

    /// Raw SQL text, executed verbatim
    pub sql: String,
}

impl Script {
    /// Read a script from a file path
    pub fn from_file(path: PathBuf) -> CoreResult<Self> {
        let name = path
            .file_name()
            .and_then(|s| s.to_str())
            .ok_or_else(|| CoreError::InvalidScriptName {
                path: path.display().to_string(),
            })?
            .to_string();

        let sql = std::fs::read_to_string(&path).map_err(|e| CoreError::IoWithPath {
            path: path.display().to_string(),
            source: e,
        })?;

        Ok(Self { name, path, sql })
    }
}

/// Logical script group, applied as one transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BatchKind {
    /// DDL scripts, applied first
    Schema,
    /// DML scripts, applied after schema has committed
    Data,
}

impl BatchKind {
    /// Lowercase name for config keys and log lines
    pub fn as_str(&self) -> &'static str {
        match self {
            BatchKind::Schema => "schema",
            BatchKind::Data => "data",
        }
    }

    /// Capitalized label for console status lines
    pub fn label(&self) -> &'static str {
        match self {
            BatchKind::Schema => "Schema",
            BatchKind::Data => "Data",
        }
    }
}

impl std::fmt::Display for BatchKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// An ordered batch of scripts belonging to one group
#[derive(Debug, Clone)]
pub struct ScriptBatch {
    /// Which group this batch belongs to
    pub kind: BatchKind,

    /// Scripts in execution order (lexical by name, ascending)
    pub scripts: Vec<Script>,
}

impl ScriptBatch {
    /// Discover all `.sql` scripts directly in `dir` (non-recursive).
    ///
    /// An empty directory yields an empty batch; a missing or unreadable
    /// directory is an error, not an empty batch.
    pub fn discover(kind: BatchKind, dir: &Path) -> CoreResult<Self> {
        if !dir.is_dir() {
            return Err(CoreError::ScriptsDirNotFound {
                path: dir.display().to_string(),
            });
        }

        let entries = std::fs::read_dir(dir).map_err(|e| CoreError::IoWithPath {
            path: dir.display().to_string(),
            source: e,
        })?;

        let mut scripts = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| CoreError::IoWithPath {
                path: dir.display().to_string(),
                source: e,
            })?;
            let path = entry.path();

            if path.is_file() && has_sql_extension(&path) {
                scripts.push(Script::from_file(path)?);
            }
        }

        // Name order is execution order; ordinal comparison keeps it
        // stable across platforms and runs.
        scripts.sort_by(|a, b| a.name.cmp(&b.name));

        log::debug!(
            "Discovered {} {} script(s) in {}",
            scripts.len(),
            kind,
            dir.display()
        );

        Ok(Self { kind, scripts })
    }

    /// Whether the batch contains no scripts
    pub fn is_empty(&self) -> bool {
        self.scripts.is_empty()
    }

    /// Number of scripts in the batch
    pub fn len(&self) -> usize {
        self.scripts.len()
    }

    /// Script names in execution order
    pub fn names(&self) -> Vec<&str> {
        self.scripts.iter().map(|s| s.name.as_str()).collect()
    }
}

/// Match the `.sql` extension, ASCII case-insensitive
fn has_sql_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("sql"))
}

#[cfg(test)]
#[path = "script_test.rs"]
mod tests;
