//! Error types for drift-core

use thiserror::Error;

/// Core error type for sqldrift
#[derive(Error, Debug)]
pub enum CoreError {
    /// E001: Configuration file not found
    #[error("[E001] Config file not found: {path}")]
    ConfigNotFound { path: String },

    /// E002: Invalid configuration value
    #[error("[E002] Invalid config: {message}")]
    ConfigInvalid { message: String },

    /// E003: Scripts directory missing or not a directory
    #[error("[E003] Scripts directory not found: {path}")]
    ScriptsDirNotFound { path: String },

    /// E004: IO error with file path context
    #[error("[E004] Failed to read '{path}': {source}")]
    IoWithPath {
        path: String,
        source: std::io::Error,
    },

    /// E005: IO error
    #[error("[E005] IO error: {0}")]
    Io(#[from] std::io::Error),

    /// E006: Config YAML parse error
    #[error("[E006] Failed to parse config: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    /// E007: Script file name is not valid UTF-8
    #[error("[E007] Invalid script file name: {path}")]
    InvalidScriptName { path: String },
}

/// Result type alias for CoreError
pub type CoreResult<T> = Result<T, CoreError>;
