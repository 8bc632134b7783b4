//! Migrate command implementation
//!
//! Runs the schema batch, then the data batch, strictly in that order:
//! data scripts may depend on schema changes, so the data batch only
//! starts after the schema transaction has committed.

use anyhow::{Context, Result};
use drift_core::ScriptBatch;
use drift_db::Upgrader;

use crate::cli::{GlobalArgs, MigrateArgs};
use crate::context::RuntimeContext;

/// Execute the migrate command
pub(crate) fn execute(args: &MigrateArgs, global: &GlobalArgs) -> Result<()> {
    let ctx = RuntimeContext::new(global)?;
    let stop_on_failure = ctx.config.stop_on_batch_failure && !args.keep_going;
    let mut failed = false;

    for (kind, dir) in ctx.batch_dirs() {
        // A missing or unreadable scripts directory aborts the whole run
        let batch = ScriptBatch::discover(kind, &dir)
            .with_context(|| format!("Failed to discover {} scripts", kind))?;

        if batch.is_empty() {
            println!("No {} scripts found.", kind);
            continue;
        }

        ctx.verbose(&format!(
            "{} scripts in {}: {}",
            batch.len(),
            dir.display(),
            batch.names().join(", ")
        ));

        let upgrader = Upgrader::new(&ctx.db, ctx.ledger(), batch);

        if args.dry_run {
            let pending = upgrader
                .pending()
                .with_context(|| format!("Failed to compute pending {} scripts", kind))?;
            if pending.is_empty() {
                println!("{} upgrade is not required.", kind.label());
            } else {
                println!("Pending {} scripts:", kind);
                for script in pending {
                    println!("  {}", script.name);
                }
            }
            continue;
        }

        println!("Start executing {} scripts...", kind);

        if !upgrader
            .is_upgrade_required()
            .with_context(|| format!("Failed to read the ledger for the {} batch", kind))?
        {
            println!("{} upgrade is not required.", kind.label());
            continue;
        }

        println!("{} upgrade is required.", kind.label());

        let report = upgrader
            .perform_upgrade()
            .with_context(|| format!("Failed to run the {} batch", kind))?;

        if report.successful {
            ctx.verbose(&format!("Applied: {}", report.applied.join(", ")));
            println!("Success!");
        } else {
            failed = true;
            match &report.error {
                Some(error) => eprintln!("{} upgrade failed: {}", kind.label(), error),
                None => eprintln!("{} upgrade failed.", kind.label()),
            }
            if stop_on_failure {
                break;
            }
        }
    }

    println!("Done");

    if failed {
        // Exit code 4 = database error
        std::process::exit(4);
    }

    Ok(())
}
