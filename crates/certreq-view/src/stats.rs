use std::collections::{BTreeMap, BTreeSet};

use certreq_model::RequestStatus;

use crate::row::ListRow;

/// Normalization used for duplicate-name comparison: whitespace-trimmed,
/// case-insensitive.
pub(crate) fn normalized_name(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Normalized names that occur more than once in the dataset.
pub(crate) fn duplicate_names<T: ListRow>(dataset: &[T]) -> BTreeSet<String> {
    let mut counts: BTreeMap<String, usize> = BTreeMap::new();
    for row in dataset {
        *counts.entry(normalized_name(row.display_name())).or_default() += 1;
    }
    counts
        .into_iter()
        .filter(|(_, count)| *count > 1)
        .map(|(name, _)| name)
        .collect()
}

/// Headline counters for a dataset.
///
/// Always computed over the FULL unfiltered dataset so the numbers stay
/// stable while paging or filtering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RosterStats {
    pub total: usize,
    pub pending: usize,
    pub completed: usize,
    pub rejected: usize,
    pub no_certificate: usize,
    pub under_review: usize,
    /// Distinct normalized names appearing more than once.
    pub duplicate_names: usize,
}

impl RosterStats {
    pub fn count_for(&self, status: RequestStatus) -> usize {
        match status {
            RequestStatus::Pending => self.pending,
            RequestStatus::Completed => self.completed,
            RequestStatus::Rejected => self.rejected,
            RequestStatus::NoCertificate => self.no_certificate,
            RequestStatus::UnderReview => self.under_review,
        }
    }
}

pub fn roster_stats<T: ListRow>(dataset: &[T]) -> RosterStats {
    let mut stats = RosterStats {
        total: dataset.len(),
        duplicate_names: duplicate_names(dataset).len(),
        ..RosterStats::default()
    };
    for row in dataset {
        match row.status() {
            Some(RequestStatus::Pending) => stats.pending += 1,
            Some(RequestStatus::Completed) => stats.completed += 1,
            Some(RequestStatus::Rejected) => stats.rejected += 1,
            Some(RequestStatus::NoCertificate) => stats.no_certificate += 1,
            Some(RequestStatus::UnderReview) => stats.under_review += 1,
            None => {}
        }
    }
    stats
}
