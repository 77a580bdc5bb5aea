use outreach_common::model::selection::SelectionSnapshot;
use std::collections::HashSet;

/// Supporter ids chosen for the current outreach run.
///
/// Only membership matters. Ids are not checked against the supporter store;
/// stale ones are skipped when the selection is consumed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionSet {
    ids: HashSet<String>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `id` if absent, removes it if present. Returns whether it is selected now.
    pub fn toggle(&mut self, id: &str) -> bool {
        if self.ids.remove(id) {
            false
        } else {
            self.ids.insert(id.to_string());
            true
        }
    }

    /// Replaces the whole selection.
    pub fn select_all<I>(&mut self, ids: I)
    where
        I: IntoIterator<Item = String>,
    {
        self.ids = ids.into_iter().collect();
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn snapshot(&self) -> SelectionSnapshot {
        let mut ids: Vec<String> = self.ids.iter().cloned().collect();
        ids.sort();
        SelectionSnapshot {
            count: ids.len(),
            ids,
        }
    }
}
