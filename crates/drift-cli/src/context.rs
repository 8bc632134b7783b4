//! Runtime context for CLI commands

use anyhow::{Context, Result};
use drift_core::{BatchKind, Config};
use drift_db::{Ledger, TargetDb};
use std::path::{Path, PathBuf};

use crate::cli::GlobalArgs;

/// Runtime context containing loaded config and database connection
pub struct RuntimeContext {
    /// The loaded project configuration
    pub config: Config,

    /// Project root directory
    pub root: PathBuf,

    /// Target database connection
    pub db: TargetDb,

    /// Verbose output enabled
    pub verbose: bool,
}

impl RuntimeContext {
    /// Create a new runtime context from global arguments
    pub fn new(args: &GlobalArgs) -> Result<Self> {
        let root = PathBuf::from(&args.project_dir);

        // Load config from custom path or project directory
        let config = if let Some(config_path) = &args.config {
            Config::load(Path::new(config_path)).context("Failed to load configuration file")?
        } else {
            Config::load_from_dir(&root).context("Failed to load project configuration")?
        };

        // Connect to the target database (use --target override if provided)
        let db_path = config.resolve_db_path(args.target.as_deref()).to_string();
        let db = TargetDb::open(&db_path).context("Failed to connect to target database")?;
        log::debug!("Connected to target database at {}", db_path);

        Ok(Self {
            config,
            root,
            db,
            verbose: args.verbose,
        })
    }

    /// Print verbose output if enabled
    pub fn verbose(&self, msg: &str) {
        if self.verbose {
            eprintln!("[verbose] {}", msg);
        }
    }

    /// Ledger handle for the configured ledger table
    pub fn ledger(&self) -> Ledger {
        Ledger::new(&self.config.ledger_table)
    }

    /// Script directories in execution order: schema first, then data
    pub fn batch_dirs(&self) -> [(BatchKind, PathBuf); 2] {
        [
            (BatchKind::Schema, self.config.schema_path_absolute(&self.root)),
            (BatchKind::Data, self.config.data_path_absolute(&self.root)),
        ]
    }
}
