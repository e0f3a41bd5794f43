//! Descriptive selection state.

use std::fmt;

use crate::model::Page;

use super::SelectionStore;

/// A label describing the selection relative to the visible page.
///
/// Every operation can move between any two states; the label exists for
/// display only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionState {
    /// Nothing is selected.
    Empty,
    /// Some of the visible page is selected, nothing elsewhere.
    Partial,
    /// Exactly the whole visible page is selected.
    FullPage,
    /// At least one selected record is not on the visible page.
    CrossPage,
}

impl SelectionState {
    /// Classify `store` against the visible `page`.
    pub fn of(page: &Page, store: &SelectionStore) -> Self {
        if store.is_empty() {
            return Self::Empty;
        }
        if store.iter().any(|id| !page.contains(id)) {
            return Self::CrossPage;
        }
        if page.ids().all(|id| store.contains(id)) {
            Self::FullPage
        } else {
            Self::Partial
        }
    }
}

impl fmt::Display for SelectionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Empty => "empty",
            Self::Partial => "partial",
            Self::FullPage => "full page",
            Self::CrossPage => "cross-page",
        };
        f.write_str(label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::selection::fixtures::page_of;

    #[test]
    fn test_states() {
        let page = page_of(&[1, 2, 3]);
        let state = |ids: &[i64]| {
            let store: SelectionStore = ids.iter().copied().collect();
            SelectionState::of(&page, &store)
        };

        assert_eq!(state(&[]), SelectionState::Empty);
        assert_eq!(state(&[2]), SelectionState::Partial);
        assert_eq!(state(&[1, 2, 3]), SelectionState::FullPage);
        assert_eq!(state(&[1, 9]), SelectionState::CrossPage);
    }

    #[test]
    fn test_repeated_page_id_still_full_page() {
        let page = page_of(&[1, 2, 2, 3]);
        let store: SelectionStore = [1, 2, 3].into_iter().collect();
        assert_eq!(SelectionState::of(&page, &store), SelectionState::FullPage);
    }

    #[test]
    fn test_display() {
        assert_eq!(SelectionState::CrossPage.to_string(), "cross-page");
    }
}
