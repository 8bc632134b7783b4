//! sqldrift CLI - applies pending SQL migration scripts to a target database

use anyhow::Result;
use clap::Parser;

mod cli;
mod commands;
mod context;

use cli::Cli;
use commands::{init, migrate, status};

fn main() -> Result<()> {
    let cli = Cli::parse();

    match &cli.command {
        cli::Commands::Init(args) => init::execute(args),
        cli::Commands::Migrate(args) => migrate::execute(args, &cli.global),
        cli::Commands::Status(args) => status::execute(args, &cli.global),
    }
}
