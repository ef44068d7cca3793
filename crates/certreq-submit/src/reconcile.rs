use std::collections::BTreeSet;

use certreq_model::{BatchOutcome, ItemResult, StudentId, SubmissionOutcome};

/// Message attached to ids the response failed to account for.
pub const UNRESOLVED_MESSAGE: &str = "no result returned for this item";

/// Match per-item results back to the submitted selection.
///
/// Rows are matched by id, never by position. Every submitted id lands in
/// exactly one of the outcome's `succeeded` / `failed` / `unresolved` sets;
/// an id the response does not mention is `unresolved`, never silently
/// succeeded. Rows for unknown ids, and second rows for an id already
/// reconciled, are logged and dropped.
pub fn reconcile(selected: &[StudentId], results: Vec<ItemResult>) -> BatchOutcome {
    let mut pending: BTreeSet<StudentId> = selected.iter().cloned().collect();
    let mut outcome = BatchOutcome::default();

    for row in results {
        if !pending.remove(&row.target_id) {
            tracing::warn!(
                target = %row.target_id,
                "dropping result row for an id not awaiting reconciliation"
            );
            continue;
        }
        if row.success {
            outcome.succeeded.insert(row.target_id.clone());
        } else {
            outcome.failed.insert(row.target_id.clone());
        }
        outcome.outcomes.push(SubmissionOutcome {
            target_id: row.target_id,
            succeeded: row.success,
            message: row.message,
        });
    }

    for id in pending {
        tracing::warn!(target = %id, "batch response did not account for a submitted id");
        outcome.outcomes.push(SubmissionOutcome {
            target_id: id.clone(),
            succeeded: false,
            message: UNRESOLVED_MESSAGE.to_string(),
        });
        outcome.unresolved.insert(id);
    }

    tracing::info!(
        succeeded = outcome.succeeded.len(),
        failed = outcome.failed.len(),
        unresolved = outcome.unresolved.len(),
        "reconciled batch response"
    );
    outcome
}
