//! State owned by one active list view.
//!
//! A session owns the last-fetched dataset, the filter/pagination cursor, the
//! selection, and the post-submission tracking sets. It is created when the
//! view opens and discarded on navigation; nothing here persists.

use std::collections::BTreeSet;

use certreq_model::{BatchOutcome, Identifiable};

use crate::filter::{FilterState, StatusFilter};
use crate::project::{Projection, project};
use crate::row::ListRow;
use crate::selection::SelectionSet;
use crate::stats::{RosterStats, normalized_name, roster_stats};

/// How an import-driven selection matched the dataset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MatchReport {
    /// Keys that matched at least one dataset row.
    pub matched: usize,
    /// Keys with no corresponding row.
    pub unmatched: usize,
}

#[derive(Debug, Clone)]
pub struct ListSession<T> {
    dataset: Vec<T>,
    state: FilterState,
    selection: SelectionSet,
    not_submitted: BTreeSet<String>,
    submitted: BTreeSet<String>,
    page_size: usize,
}

impl<T: ListRow> ListSession<T> {
    pub fn new(page_size: usize) -> Self {
        Self {
            dataset: Vec::new(),
            state: FilterState::new(),
            selection: SelectionSet::new(),
            not_submitted: BTreeSet::new(),
            submitted: BTreeSet::new(),
            page_size,
        }
    }

    pub fn with_dataset(page_size: usize, dataset: Vec<T>) -> Self {
        let mut session = Self::new(page_size);
        session.replace_dataset(dataset);
        session
    }

    pub fn dataset(&self) -> &[T] {
        &self.dataset
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn filter_state(&self) -> &FilterState {
        &self.state
    }

    /// Replace the dataset after a refetch and prune tracking state of ids
    /// that no longer exist.
    pub fn replace_dataset(&mut self, dataset: Vec<T>) {
        self.dataset = dataset;
        let present: BTreeSet<&str> = self.dataset.iter().map(Identifiable::id).collect();
        let before = self.selection.len();
        self.selection.retain_present(&present);
        self.not_submitted.retain(|id| present.contains(id.as_str()));
        if self.selection.len() < before {
            tracing::debug!(
                pruned = before - self.selection.len(),
                "dropped selections absent from refreshed dataset"
            );
        }
    }

    /// Project the currently visible page.
    pub fn visible(&self) -> Projection<'_, T> {
        project(&self.dataset, &self.state, self.page_size)
    }

    /// Headline counters over the full dataset, independent of filter/page.
    pub fn stats(&self) -> RosterStats {
        roster_stats(&self.dataset)
    }

    pub fn set_filter(&mut self, filter: StatusFilter) {
        self.state.set_filter(filter);
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.state.set_search(search);
    }

    pub fn set_page(&mut self, page: usize) {
        self.state.set_page(page);
    }

    pub fn selection(&self) -> &SelectionSet {
        &self.selection
    }

    pub fn selected_ids(&self) -> Vec<String> {
        self.selection.ids().map(str::to_string).collect()
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selection.is_selected(id)
    }

    pub fn toggle(&mut self, id: &str) -> bool {
        self.selection.toggle(id)
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    /// Select-all scoped to the visible page (toggle semantics, additive
    /// across pages).
    pub fn select_all_visible(&mut self) {
        let visible: Vec<String> = self
            .visible()
            .page_items
            .iter()
            .map(|row| row.id().to_string())
            .collect();
        let refs: Vec<&str> = visible.iter().map(String::as_str).collect();
        self.selection.select_all(&refs);
    }

    /// Replace the selection with the rows whose extracted key appears in
    /// `keys` (whitespace-trimmed, case-insensitive), e.g. emails or subject
    /// codes lifted from an import file.
    pub fn select_matching(
        &mut self,
        keys: &[String],
        extract: impl Fn(&T) -> &str,
    ) -> MatchReport {
        let wanted: BTreeSet<String> = keys.iter().map(|key| normalized_name(key)).collect();
        let mut found: BTreeSet<String> = BTreeSet::new();
        self.selection.clear();
        for row in &self.dataset {
            let key = normalized_name(extract(row));
            if wanted.contains(&key) {
                self.selection.insert(row.id());
                found.insert(key);
            }
        }
        let report = MatchReport {
            matched: found.len(),
            unmatched: wanted.len() - found.len(),
        };
        tracing::debug!(
            matched = report.matched,
            unmatched = report.unmatched,
            "selection driven by imported keys"
        );
        report
    }

    /// Ids retained for correction and retry after the last submission.
    pub fn not_submitted(&self) -> &BTreeSet<String> {
        &self.not_submitted
    }

    pub fn is_not_submitted(&self, id: &str) -> bool {
        self.not_submitted.contains(id)
    }

    /// Selected ids that already succeeded in an earlier submission this
    /// session. Resubmitting them is permitted but worth a warning; whether
    /// the server deduplicates is not guaranteed.
    pub fn duplicate_risk(&self) -> Vec<String> {
        self.selection
            .ids()
            .filter(|id| self.submitted.contains(*id))
            .map(str::to_string)
            .collect()
    }

    /// Fold a reconciled batch outcome back into the session: succeeded ids
    /// leave the selection, failed and unresolved ids replace the
    /// not-submitted tracking set and stay selected for retry.
    pub fn apply_outcome(&mut self, outcome: &BatchOutcome) {
        for id in &outcome.succeeded {
            self.selection.remove(id.as_str());
            self.submitted.insert(id.as_str().to_string());
        }
        self.not_submitted = outcome
            .retryable()
            .map(|id| id.as_str().to_string())
            .collect();
        tracing::info!(
            succeeded = outcome.succeeded.len(),
            failed = outcome.failed.len(),
            unresolved = outcome.unresolved.len(),
            "applied batch outcome to list session"
        );
    }
}
