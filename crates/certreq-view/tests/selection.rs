//! Behavior tests for the selection set.

use std::collections::BTreeSet;

use certreq_view::SelectionSet;
use proptest::prelude::*;

#[test]
fn toggle_flips_membership() {
    let mut selection = SelectionSet::new();
    assert!(selection.toggle("s1"));
    assert!(selection.is_selected("s1"));
    assert!(!selection.toggle("s1"));
    assert!(!selection.is_selected("s1"));
}

#[test]
fn select_all_is_scoped_to_the_visible_page() {
    let mut selection = SelectionSet::new();
    selection.toggle("other-page");

    selection.select_all(&["s1", "s2"]);
    assert!(selection.is_selected("s1"));
    assert!(selection.is_selected("s2"));
    assert!(selection.is_selected("other-page"), "additive across pages");

    // Every visible id is selected, so the same call now deselects exactly
    // the visible ids.
    selection.select_all(&["s1", "s2"]);
    assert!(!selection.is_selected("s1"));
    assert!(!selection.is_selected("s2"));
    assert!(selection.is_selected("other-page"));
}

#[test]
fn partially_selected_page_becomes_fully_selected() {
    let mut selection = SelectionSet::new();
    selection.toggle("s2");
    selection.select_all(&["s1", "s2", "s3"]);
    assert_eq!(selection.len(), 3);
}

#[test]
fn prune_drops_ids_missing_from_the_refreshed_dataset() {
    let mut selection = SelectionSet::new();
    selection.toggle("s1");
    selection.toggle("s2");

    let present: BTreeSet<&str> = ["s2", "s3"].into_iter().collect();
    selection.retain_present(&present);

    assert!(!selection.is_selected("s1"));
    assert!(selection.is_selected("s2"));
    assert_eq!(selection.len(), 1);
}

proptest! {
    // Applying select-all twice with no intervening change restores the
    // original selection (page-scoped toggle property). Selections from other
    // pages are disjoint from the visible ids by construction.
    #[test]
    fn select_all_twice_is_identity(
        other_pages in proptest::collection::btree_set("x[0-9]{1,2}", 0..10),
        visible in proptest::collection::btree_set("v[0-9]{1,2}", 1..10),
        page_fully_selected in any::<bool>(),
    ) {
        let mut selection = SelectionSet::new();
        for id in &other_pages {
            selection.toggle(id);
        }
        let visible_refs: Vec<&str> = visible.iter().map(String::as_str).collect();
        if page_fully_selected {
            for id in &visible_refs {
                selection.toggle(id);
            }
        }
        let before: Vec<String> = selection.ids().map(str::to_string).collect();

        selection.select_all(&visible_refs);
        selection.select_all(&visible_refs);

        let after: Vec<String> = selection.ids().map(str::to_string).collect();
        prop_assert_eq!(before, after);
    }
}
