use std::collections::BTreeSet;

/// The ids currently chosen for a bulk action.
///
/// Membership is independent of the current page and filter: selecting on
/// page 2 persists while viewing page 1. Ids absent from a refreshed dataset
/// must be pruned by the owner via [`SelectionSet::retain_present`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionSet {
    ids: BTreeSet<String>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.ids.iter().map(String::as_str)
    }

    /// Flip one id; returns whether it is selected afterwards.
    pub fn toggle(&mut self, id: &str) -> bool {
        if self.ids.remove(id) {
            false
        } else {
            self.ids.insert(id.to_string());
            true
        }
    }

    /// Page-scoped select-all with toggle semantics: if every visible id is
    /// already selected, deselect exactly the visible ids; otherwise add them.
    /// Ids selected on other pages are never deselected by the additive arm.
    pub fn select_all(&mut self, visible: &[&str]) {
        if visible.is_empty() {
            return;
        }
        let all_selected = visible.iter().all(|id| self.ids.contains(*id));
        if all_selected {
            for id in visible {
                self.ids.remove(*id);
            }
        } else {
            for id in visible {
                self.ids.insert((*id).to_string());
            }
        }
    }

    pub fn insert(&mut self, id: &str) {
        self.ids.insert(id.to_string());
    }

    pub fn remove(&mut self, id: &str) {
        self.ids.remove(id);
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    /// Prune ids not present in the refreshed dataset.
    pub fn retain_present(&mut self, present: &BTreeSet<&str>) {
        self.ids.retain(|id| present.contains(id.as_str()));
    }
}
