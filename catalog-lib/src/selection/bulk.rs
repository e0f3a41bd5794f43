//! Page-wide selection commands.

use log::info;
use log::warn;

use crate::error::Error;
use crate::model::Page;
use crate::model::RecordId;

use super::SelectionCount;
use super::SelectionStore;
use super::validate_count;

/// Selects every record on the page. Other pages' selections are kept.
/// Returns the ids that were newly selected.
pub fn select_all_on_page(page: &Page, store: &mut SelectionStore) -> Vec<RecordId> {
    let added = store.add(page.ids());
    info!(
        "Selected all {} records on page {} ({} new)",
        page.len(),
        page.current_page(),
        added.len()
    );
    added
}

/// Deselects every record on the page. Other pages' selections are kept.
/// Returns the ids that were deselected.
pub fn deselect_all_on_page(page: &Page, store: &mut SelectionStore) -> Vec<RecordId> {
    let removed = store.remove(page.ids());
    info!(
        "Deselected {} records on page {}",
        removed.len(),
        page.current_page()
    );
    removed
}

/// Replaces the whole selection with the first `n` records of the page.
///
/// The prior selection is discarded, including ids on other pages. If the page
/// holds fewer than `n` records, all of them are selected. Returns the number
/// of records now selected.
///
/// # Errors
///
/// [`Error::InvalidInput`] if `n < 1`; the store is left untouched.
pub fn select_first_n(page: &Page, store: &mut SelectionStore, n: i64) -> Result<usize, Error> {
    if let Err(err) = validate_count(n) {
        warn!("Rejected select-first count: {}", err);
        return Err(err.into());
    }

    let count = usize::try_from(n).unwrap_or(usize::MAX).min(page.len());
    let (_, removed) = store.replace_all(page.ids().take(count));
    info!(
        "Selected first {} records on page {}, dropped {} prior selections",
        count,
        page.current_page(),
        removed.len()
    );
    Ok(count)
}

/// Runs [`select_first_n`] with the count the user typed.
///
/// The input is cleared on success and kept on failure.
pub fn select_first_n_from(
    page: &Page,
    store: &mut SelectionStore,
    count: &mut SelectionCount,
) -> Result<usize, Error> {
    let n = match count.parse() {
        Ok(n) => n,
        Err(err) => {
            warn!("Rejected select-first count: {}", err);
            return Err(err.into());
        }
    };
    let selected = select_first_n(page, store, n)?;
    count.clear();
    Ok(selected)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;
    use crate::selection::derived_selection;
    use crate::selection::fixtures::page_of;
    use crate::selection::fixtures::page_range;

    #[test]
    fn test_select_all_is_idempotent() {
        let page = page_of(&[1, 2, 3]);
        let mut once = SelectionStore::new();
        select_all_on_page(&page, &mut once);

        let mut twice = SelectionStore::new();
        select_all_on_page(&page, &mut twice);
        assert!(select_all_on_page(&page, &mut twice).is_empty());

        assert_eq!(once, twice);
    }

    #[test]
    fn test_select_all_commutes_across_pages() {
        let a = page_of(&[1, 2, 3]);
        let b = page_of(&[4, 5, 6]);

        let mut ab = SelectionStore::new();
        select_all_on_page(&a, &mut ab);
        select_all_on_page(&b, &mut ab);

        let mut ba = SelectionStore::new();
        select_all_on_page(&b, &mut ba);
        select_all_on_page(&a, &mut ba);

        assert_eq!(ab, ba);
        assert_eq!(ab.ids(), vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_selection_survives_navigation() {
        let a = page_of(&[1, 2, 3]);
        let b = page_of(&[4, 5, 6]);
        let mut store = SelectionStore::new();

        select_all_on_page(&a, &mut store);
        assert!(derived_selection(&b, &store).is_empty());
        assert_eq!(derived_selection(&a, &store), a.records().to_vec());
    }

    #[test]
    fn test_deselect_all_keeps_other_pages() {
        let a = page_of(&[1, 2]);
        let b = page_of(&[3, 4]);
        let mut store = SelectionStore::new();
        select_all_on_page(&a, &mut store);
        select_all_on_page(&b, &mut store);

        assert_eq!(deselect_all_on_page(&a, &mut store), vec![1, 2]);
        assert_eq!(store.ids(), vec![3, 4]);
    }

    #[test]
    fn test_select_first_n_discards_prior_selection() {
        let page = page_of(&[5, 6, 7]);
        let mut store: SelectionStore = [100, 200].into_iter().collect();
        assert_eq!(select_first_n(&page, &mut store, 2).unwrap(), 2);
        assert_eq!(store.ids(), vec![5, 6]);
    }

    #[test]
    fn test_select_first_n_rejects_non_positive() {
        let page = page_of(&[5, 6, 7]);
        let mut store: SelectionStore = [100, 200].into_iter().collect();
        let before = store.clone();

        for n in [0, -1] {
            let err = select_first_n(&page, &mut store, n).unwrap_err();
            assert!(matches!(
                err,
                Error::InvalidInput(ValidationError::NotPositive(v)) if v == n
            ));
            assert_eq!(store, before);
        }
    }

    #[test]
    fn test_select_first_n_clamps_to_page_len() {
        let page = page_range(1, 12);
        let mut store: SelectionStore = [500].into_iter().collect();
        assert_eq!(select_first_n(&page, &mut store, 1000).unwrap(), 12);
        assert_eq!(store.ids(), (1..=12).collect::<Vec<_>>());
    }

    #[test]
    fn test_select_first_n_on_empty_page_clears() {
        let page = page_of(&[]);
        let mut store: SelectionStore = [1, 2].into_iter().collect();
        assert_eq!(select_first_n(&page, &mut store, 3).unwrap(), 0);
        assert!(store.is_empty());
    }

    #[test]
    fn test_count_input_cleared_only_on_success() {
        let page = page_of(&[5, 6, 7]);
        let mut store = SelectionStore::new();

        let mut count = SelectionCount::new();
        count.set("zero");
        assert!(select_first_n_from(&page, &mut store, &mut count).is_err());
        assert_eq!(count.raw(), Some("zero"));
        assert!(store.is_empty());

        count.set("2");
        assert_eq!(select_first_n_from(&page, &mut store, &mut count).unwrap(), 2);
        assert!(count.is_empty());
        assert_eq!(store.ids(), vec![5, 6]);
    }
}
