//! Behavior tests for batch-result reconciliation.

use certreq_model::{ItemResult, StudentId};
use certreq_submit::{UNRESOLVED_MESSAGE, reconcile};
use proptest::prelude::*;

fn id(raw: &str) -> StudentId {
    StudentId::new(raw).expect("student id")
}

fn result(raw: &str, success: bool) -> ItemResult {
    ItemResult {
        target_id: id(raw),
        success,
        message: if success { "created" } else { "already requested" }.to_string(),
    }
}

#[test]
fn every_id_lands_in_exactly_one_set() {
    let selected = [id("a"), id("b"), id("c")];
    let outcome = reconcile(
        &selected,
        vec![result("b", false), result("a", true), result("c", true)],
    );

    assert_eq!(outcome.succeeded.len(), 2);
    assert_eq!(outcome.failed.len(), 1);
    assert!(outcome.unresolved.is_empty());
    assert_eq!(outcome.accounted(), selected.len());
    assert!(outcome.succeeded.contains(&id("a")));
    assert!(outcome.failed.contains(&id("b")));
    assert!(outcome.succeeded.is_disjoint(&outcome.failed));
}

#[test]
fn results_are_matched_by_id_not_position() {
    let selected = [id("a"), id("b")];
    let forward = reconcile(&selected, vec![result("a", true), result("b", false)]);
    let reversed = reconcile(&selected, vec![result("b", false), result("a", true)]);
    assert_eq!(forward.succeeded, reversed.succeeded);
    assert_eq!(forward.failed, reversed.failed);
}

// A response that drops an id is a transport-shape anomaly: the missing id is
// explicitly unresolved, never silently treated as succeeded.
#[test]
fn missing_result_row_is_unresolved() {
    let selected = [id("a"), id("b"), id("c")];
    let outcome = reconcile(&selected, vec![result("b", true), result("c", true)]);

    assert!(!outcome.succeeded.contains(&id("a")));
    assert!(outcome.unresolved.contains(&id("a")));
    assert_eq!(outcome.accounted(), 3);

    let row = outcome
        .outcomes
        .iter()
        .find(|row| row.target_id == id("a"))
        .expect("unresolved row present");
    assert!(!row.succeeded);
    assert_eq!(row.message, UNRESOLVED_MESSAGE);
}

#[test]
fn unknown_and_duplicate_rows_are_dropped() {
    let selected = [id("a")];
    let outcome = reconcile(
        &selected,
        vec![
            result("stranger", true),
            result("a", false),
            result("a", true),
        ],
    );

    assert!(outcome.succeeded.is_empty(), "second row for 'a' is ignored");
    assert!(outcome.failed.contains(&id("a")));
    assert_eq!(outcome.accounted(), 1);
}

#[test]
fn clean_batch_reports_clean() {
    let selected = [id("a"), id("b")];
    let outcome = reconcile(&selected, vec![result("a", true), result("b", true)]);
    assert!(outcome.is_clean());
    assert_eq!(outcome.retryable().count(), 0);
}

proptest! {
    // |succeeded| + |failed| + |unresolved| always equals the selection size,
    // and the three sets are pairwise disjoint, regardless of result order
    // and of how many rows the server dropped.
    #[test]
    fn reconciliation_partitions_the_selection(
        count in 1usize..12,
        successes in proptest::collection::vec(any::<bool>(), 12),
        answered in proptest::collection::vec(any::<bool>(), 12),
        reverse in any::<bool>(),
    ) {
        let selected: Vec<StudentId> = (0..count).map(|i| id(&format!("s{i}"))).collect();
        let mut results: Vec<ItemResult> = selected
            .iter()
            .enumerate()
            .filter(|(i, _)| answered[*i])
            .map(|(i, sid)| ItemResult {
                target_id: sid.clone(),
                success: successes[i],
                message: String::new(),
            })
            .collect();
        if reverse {
            results.reverse();
        }

        let outcome = reconcile(&selected, results);
        prop_assert_eq!(outcome.accounted(), count);
        prop_assert_eq!(outcome.outcomes.len(), count);
        prop_assert!(outcome.succeeded.is_disjoint(&outcome.failed));
        prop_assert!(outcome.succeeded.is_disjoint(&outcome.unresolved));
        prop_assert!(outcome.failed.is_disjoint(&outcome.unresolved));
    }
}
