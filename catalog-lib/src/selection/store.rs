//! Selection store.

use std::collections::HashSet;

use crate::model::RecordId;

/// The durable set of selected record ids.
///
/// The store references records by id only, so it survives the current page
/// being replaced. Mutators report the ids they actually changed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionStore {
    selected: HashSet<RecordId>,
}

impl SelectionStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if an id is selected.
    pub fn contains(&self, id: RecordId) -> bool {
        self.selected.contains(&id)
    }

    /// Add ids to the selection.
    /// Returns the ids that were newly selected.
    pub fn add(&mut self, ids: impl IntoIterator<Item = RecordId>) -> Vec<RecordId> {
        ids.into_iter()
            .filter(|&id| self.selected.insert(id))
            .collect()
    }

    /// Remove ids from the selection. Absent ids are ignored.
    /// Returns the ids that were deselected.
    pub fn remove(&mut self, ids: impl IntoIterator<Item = RecordId>) -> Vec<RecordId> {
        ids.into_iter()
            .filter(|id| self.selected.remove(id))
            .collect()
    }

    /// Replace the whole selection with exactly `ids`.
    /// Returns (added, removed) ids, each sorted.
    pub fn replace_all(
        &mut self,
        ids: impl IntoIterator<Item = RecordId>,
    ) -> (Vec<RecordId>, Vec<RecordId>) {
        let next: HashSet<RecordId> = ids.into_iter().collect();

        let mut added: Vec<_> = next.difference(&self.selected).copied().collect();
        let mut removed: Vec<_> = self.selected.difference(&next).copied().collect();
        added.sort_unstable();
        removed.sort_unstable();

        self.selected = next;
        (added, removed)
    }

    /// Clear the selection.
    /// Returns the ids that were deselected, sorted.
    pub fn clear(&mut self) -> Vec<RecordId> {
        let mut removed: Vec<_> = self.selected.drain().collect();
        removed.sort_unstable();
        removed
    }

    /// Get the number of selected ids.
    pub fn len(&self) -> usize {
        self.selected.len()
    }

    /// Check if nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Get all selected ids (sorted for deterministic ordering).
    pub fn ids(&self) -> Vec<RecordId> {
        let mut ids: Vec<_> = self.selected.iter().copied().collect();
        ids.sort_unstable();
        ids
    }

    /// Iterate over the selected ids in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = RecordId> + '_ {
        self.selected.iter().copied()
    }
}

impl FromIterator<RecordId> for SelectionStore {
    fn from_iter<I: IntoIterator<Item = RecordId>>(iter: I) -> Self {
        Self {
            selected: iter.into_iter().collect(),
        }
    }
}
