//! Migration upgrader.
//!
//! Applies the pending subset of a [`ScriptBatch`] to the target database
//! inside a single transaction, recording each script in the ledger as it
//! executes. A batch is either fully applied or not applied at all: any
//! script failure rolls back every script in the batch, ledger entries
//! included.

use crate::connection::TargetDb;
use crate::error::{DbError, DbResult};
use crate::ledger::Ledger;
use drift_core::{BatchKind, Script, ScriptBatch};

/// Outcome of attempting to upgrade one batch.
#[derive(Debug)]
pub struct UpgradeReport {
    /// Which batch this report describes
    pub kind: BatchKind,

    /// Whether the batch applied cleanly (or had nothing to do)
    pub successful: bool,

    /// Script names applied in this run, in execution order.
    /// Empty on failure: nothing persists after rollback.
    pub applied: Vec<String>,

    /// Name of the script whose execution failed
    pub failed_script: Option<String>,

    /// The causing error, on failure
    pub error: Option<DbError>,
}

impl UpgradeReport {
    fn success(kind: BatchKind, applied: Vec<String>) -> Self {
        Self {
            kind,
            successful: true,
            applied,
            failed_script: None,
            error: None,
        }
    }

    fn failure(kind: BatchKind, error: DbError) -> Self {
        Self {
            kind,
            successful: false,
            applied: Vec::new(),
            failed_script: error.failed_script().map(String::from),
            error: Some(error),
        }
    }
}

/// Applies one script batch against a target database.
///
/// The run proceeds as: diff the batch against the ledger, decide whether
/// an upgrade is required, then execute the pending scripts in order
/// inside one transaction.
pub struct Upgrader<'a> {
    db: &'a TargetDb,
    ledger: Ledger,
    batch: ScriptBatch,
}

impl<'a> Upgrader<'a> {
    /// Create an upgrader for `batch`.
    pub fn new(db: &'a TargetDb, ledger: Ledger, batch: ScriptBatch) -> Self {
        Self { db, ledger, batch }
    }

    /// The batch this upgrader will apply.
    pub fn batch(&self) -> &ScriptBatch {
        &self.batch
    }

    /// Scripts in the batch not yet recorded in the ledger, preserving
    /// batch order.
    ///
    /// Ensures the ledger table exists first; a ledger failure here is
    /// fatal, since correctness depends on it.
    pub fn pending(&self) -> DbResult<Vec<&Script>> {
        self.ledger.ensure_table(self.db.conn())?;
        let applied = self.ledger.applied_names(self.db.conn())?;

        Ok(self
            .batch
            .scripts
            .iter()
            .filter(|s| !applied.contains(&s.name))
            .collect())
    }

    /// Whether any script in the batch has not been applied yet.
    pub fn is_upgrade_required(&self) -> DbResult<bool> {
        Ok(!self.pending()?.is_empty())
    }

    /// Apply all pending scripts in one transaction.
    ///
    /// Returns `Ok` with a failure report when a script's SQL fails (the
    /// transaction is rolled back and the report names the failing
    /// script). Infrastructure failures — ledger access, BEGIN/COMMIT —
    /// are returned as `Err`.
    pub fn perform_upgrade(&self) -> DbResult<UpgradeReport> {
        let pending = self.pending()?;

        if pending.is_empty() {
            log::debug!("{} batch: nothing to apply", self.batch.kind);
            return Ok(UpgradeReport::success(self.batch.kind, Vec::new()));
        }

        let result = self.db.transaction(|conn| {
            let mut applied = Vec::with_capacity(pending.len());
            for script in &pending {
                log::debug!("Applying {} script '{}'", self.batch.kind, script.name);

                conn.execute_batch(&script.sql)
                    .map_err(|e| DbError::ScriptFailed {
                        script: script.name.clone(),
                        message: e.to_string(),
                    })?;

                self.ledger.record(conn, &script.name)?;
                applied.push(script.name.clone());
            }
            Ok(applied)
        });

        match result {
            Ok(applied) => Ok(UpgradeReport::success(self.batch.kind, applied)),
            Err(err @ DbError::ScriptFailed { .. }) => {
                Ok(UpgradeReport::failure(self.batch.kind, err))
            }
            Err(other) => Err(other),
        }
    }
}

#[cfg(test)]
#[path = "upgrader_test.rs"]
mod tests;
