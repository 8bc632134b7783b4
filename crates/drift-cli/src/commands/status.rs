//! Status command implementation

use anyhow::{Context, Result};
use drift_core::ScriptBatch;
use drift_db::{LedgerEntry, Upgrader};
use std::collections::HashMap;

use crate::cli::{GlobalArgs, StatusArgs, StatusOutput};
use crate::context::RuntimeContext;

struct BatchStatus {
    kind: &'static str,
    applied: Vec<LedgerEntry>,
    pending: Vec<String>,
}

/// Execute the status command
pub(crate) fn execute(args: &StatusArgs, global: &GlobalArgs) -> Result<()> {
    let ctx = RuntimeContext::new(global)?;
    let ledger = ctx.ledger();

    ledger
        .ensure_table(ctx.db.conn())
        .context("Failed to prepare the ledger table")?;
    let mut entries_by_name: HashMap<String, LedgerEntry> = ledger
        .entries(ctx.db.conn())
        .context("Failed to read the ledger")?
        .into_iter()
        .map(|e| (e.script_name.clone(), e))
        .collect();

    let mut statuses = Vec::new();
    for (kind, dir) in ctx.batch_dirs() {
        let batch = ScriptBatch::discover(kind, &dir)
            .with_context(|| format!("Failed to discover {} scripts", kind))?;

        let applied = batch
            .names()
            .iter()
            .filter_map(|name| entries_by_name.remove(*name))
            .collect();

        let upgrader = Upgrader::new(&ctx.db, ledger.clone(), batch);
        let pending = upgrader
            .pending()
            .with_context(|| format!("Failed to compute pending {} scripts", kind))?
            .iter()
            .map(|s| s.name.clone())
            .collect();

        statuses.push(BatchStatus {
            kind: kind.as_str(),
            applied,
            pending,
        });
    }

    match args.output {
        StatusOutput::Table => print_table(&statuses),
        StatusOutput::Json => print_json(&statuses)?,
    }

    Ok(())
}

fn print_table(statuses: &[BatchStatus]) {
    for status in statuses {
        println!("{}:", status.kind);

        if status.applied.is_empty() && status.pending.is_empty() {
            println!("  (no scripts)");
            continue;
        }

        for entry in &status.applied {
            println!("  applied  {}  ({})", entry.script_name, entry.applied_at);
        }
        for name in &status.pending {
            println!("  pending  {}", name);
        }
    }
}

fn print_json(statuses: &[BatchStatus]) -> Result<()> {
    let batches: Vec<_> = statuses
        .iter()
        .map(|s| {
            serde_json::json!({
                "kind": s.kind,
                "applied": s.applied,
                "pending": s.pending,
            })
        })
        .collect();

    let doc = serde_json::json!({ "batches": batches });
    println!("{}", serde_json::to_string_pretty(&doc)?);
    Ok(())
}
