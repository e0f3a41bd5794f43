//! Page reconciliation.
//!
//! The table reports checkbox changes as a snapshot: the complete list of rows
//! on the visible page that are now checked, not a delta. Folding a snapshot
//! into the store therefore clears the page's ids first and re-adds the
//! checked ones. Ids belonging to other pages are never touched.

use log::debug;
use log::warn;

use crate::model::Page;
use crate::model::Record;

use super::SelectionStore;

/// Returns the records of `page` that are selected, in page order.
///
/// This is a view for rendering checkboxes. Recompute it whenever the page or
/// the store changes; the same id can show up on different page loads.
pub fn derived_selection(page: &Page, store: &SelectionStore) -> Vec<Record> {
    page.records()
        .iter()
        .filter(|record| store.contains(record.id()))
        .cloned()
        .collect()
}

/// Folds a selection-changed event for the visible page into the store.
///
/// `checked` is the page's full set of checked rows after the interaction. An
/// empty slice deselects the whole page. Rows that are not on `page` are
/// ignored, so the store only ever holds ids that were seen on a loaded page.
pub fn apply_selection_change(page: &Page, checked: &[Record], store: &mut SelectionStore) {
    let removed = store.remove(page.ids());

    let (on_page, stray): (Vec<&Record>, Vec<&Record>) =
        checked.iter().partition(|record| page.contains(record.id()));
    if !stray.is_empty() {
        let ids: Vec<_> = stray.iter().map(|r| r.id()).collect();
        warn!(
            "Ignoring checked rows not on page {}: {:?}",
            page.current_page(),
            ids
        );
    }

    let added = store.add(on_page.iter().map(|r| r.id()));
    debug!(
        "Selection change on page {}: cleared {}, checked {}, total {}",
        page.current_page(),
        removed.len(),
        added.len(),
        store.len()
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::RecordId;
    use crate::selection::fixtures::page_of;

    fn ids(records: &[Record]) -> Vec<RecordId> {
        records.iter().map(Record::id).collect()
    }

    #[test]
    fn test_derived_selection_keeps_page_order() {
        let page = page_of(&[9, 3, 7, 1]);
        let store: SelectionStore = [1, 9, 42].into_iter().collect();
        assert_eq!(ids(&derived_selection(&page, &store)), vec![9, 1]);
    }

    #[test]
    fn test_derived_selection_follows_store_changes() {
        let page = page_of(&[1, 2]);
        let mut store = SelectionStore::new();
        assert!(derived_selection(&page, &store).is_empty());
        store.add([2]);
        assert_eq!(ids(&derived_selection(&page, &store)), vec![2]);
    }

    #[test]
    fn test_empty_change_clears_only_current_page() {
        let page = page_of(&[2, 3, 4]);
        let mut store: SelectionStore = [1, 2, 3].into_iter().collect();
        apply_selection_change(&page, &[], &mut store);
        assert_eq!(store.ids(), vec![1]);
    }

    #[test]
    fn test_change_is_snapshot_not_delta() {
        let page = page_of(&[2, 3, 4]);
        let mut store: SelectionStore = [1, 2, 3].into_iter().collect();
        let checked = vec![page.records()[2].clone()];
        apply_selection_change(&page, &checked, &mut store);
        assert_eq!(store.ids(), vec![1, 4]);
    }

    #[test]
    fn test_rows_off_page_are_ignored() {
        let page = page_of(&[2, 3]);
        let mut store = SelectionStore::new();
        apply_selection_change(&page, &[Record::new(3), Record::new(77)], &mut store);
        assert_eq!(store.ids(), vec![3]);
    }
}
