//! Which variations are plotted.

use convtrend_common::VariationId;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// The set of plotted variations, in the order they were selected.
///
/// Toggling never removes the last remaining variation, so once a selection
/// has an entry it always keeps at least one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VariationSelection {
    ids: Vec<VariationId>,
}

impl VariationSelection {
    /// Selects every id, dropping duplicates.
    pub fn all(ids: &[VariationId]) -> Self {
        Self::from_ids(ids.iter().cloned())
    }

    /// Selects the given ids in order, dropping duplicates.
    pub fn from_ids<I, T>(ids: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<VariationId>,
    {
        let mut selection = Self::default();
        for id in ids {
            let id = id.into();
            if !selection.contains(id.as_str()) {
                selection.ids.push(id);
            }
        }
        selection
    }

    /// Adds `id` if absent, removes it if present unless it is the only one.
    ///
    /// Returns whether the selection changed.
    pub fn toggle(&mut self, id: impl Into<VariationId>) -> bool {
        let id = id.into();
        match self.ids.iter().position(|v| *v == id) {
            Some(_) if self.ids.len() == 1 => {
                debug!(variation = %id, "Refusing to deselect the last variation");
                false
            }
            Some(index) => {
                self.ids.remove(index);
                true
            }
            None => {
                self.ids.push(id);
                true
            }
        }
    }

    /// True when `id` is selected.
    pub fn contains(&self, id: &str) -> bool {
        self.ids.iter().any(|v| v.as_str() == id)
    }

    /// Selected ids in selection order.
    pub fn ids(&self) -> &[VariationId] {
        &self.ids
    }

    /// Iterates the selected ids.
    pub fn iter(&self) -> impl Iterator<Item = &VariationId> {
        self.ids.iter()
    }

    /// Number of selected ids.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// True when nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

impl<'a> IntoIterator for &'a VariationSelection {
    type Item = &'a VariationId;
    type IntoIter = std::slice::Iter<'a, VariationId>;

    fn into_iter(self) -> Self::IntoIter {
        self.ids.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(values: &[&str]) -> Vec<VariationId> {
        values.iter().map(|v| VariationId::from(*v)).collect()
    }

    #[test]
    fn test_all_selects_everything_once() {
        let selection = VariationSelection::all(&ids(&["0", "10001", "0"]));
        assert_eq!(selection.ids(), ids(&["0", "10001"]).as_slice());
    }

    #[test]
    fn test_toggle_removes_and_appends() {
        let mut selection = VariationSelection::all(&ids(&["0", "10001", "10002"]));

        assert!(selection.toggle("10001"));
        assert_eq!(selection.ids(), ids(&["0", "10002"]).as_slice());

        assert!(selection.toggle("10001"));
        assert_eq!(selection.ids(), ids(&["0", "10002", "10001"]).as_slice());
    }

    #[test]
    fn test_last_variation_cannot_be_removed() {
        let mut selection = VariationSelection::from_ids(["1"]);
        assert!(!selection.toggle("1"));
        assert_eq!(selection.len(), 1);
        assert!(selection.contains("1"));
    }

    #[test]
    fn test_empty_selection_accepts_additions() {
        let mut selection = VariationSelection::default();
        assert!(selection.is_empty());
        assert!(selection.toggle("3"));
        assert_eq!(selection.iter().count(), 1);
    }

    #[test]
    fn test_serializes_as_list() {
        let selection = VariationSelection::from_ids(["0", "2"]);
        assert_eq!(serde_json::to_string(&selection).unwrap(), r#"["0","2"]"#);
    }
}
