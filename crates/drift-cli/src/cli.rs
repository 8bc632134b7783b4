//! CLI argument definitions using clap derive API

use clap::{Args, Parser, Subcommand, ValueEnum};

/// sqldrift - applies pending SQL migration scripts to a target database
#[derive(Parser, Debug)]
#[command(name = "drift")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Global options
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Global arguments available to all commands
#[derive(Args, Debug, Clone)]
pub struct GlobalArgs {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to project directory
    #[arg(short = 'p', long, global = true, default_value = ".")]
    pub project_dir: String,

    /// Override config file path
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Override target database path
    #[arg(short, long, global = true)]
    pub target: Option<String>,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Scaffold a new sqldrift project
    Init(InitArgs),

    /// Apply pending schema and data scripts to the target database
    Migrate(MigrateArgs),

    /// Show applied and pending scripts per batch
    Status(StatusArgs),
}

/// Arguments for the init command
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Name of the project directory to create
    pub name: String,

    /// Target database path written into the generated config
    #[arg(long, default_value = "deploy.duckdb")]
    pub database_path: String,
}

/// Arguments for the migrate command
#[derive(Args, Debug)]
pub struct MigrateArgs {
    /// List pending scripts without executing anything
    #[arg(long)]
    pub dry_run: bool,

    /// Attempt the data batch even if the schema batch failed
    /// (overrides stop_on_batch_failure in the config)
    #[arg(long)]
    pub keep_going: bool,
}

/// Arguments for the status command
#[derive(Args, Debug)]
pub struct StatusArgs {
    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub output: StatusOutput,
}

/// Status output formats
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusOutput {
    /// Human-readable table
    Table,
    /// JSON output
    Json,
}
