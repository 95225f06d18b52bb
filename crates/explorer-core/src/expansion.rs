//! Which folders are currently open.

use std::collections::BTreeSet;

use crate::item::Item;

/// Set of expanded folder names.
///
/// A folder is open exactly when its name is a member; entries themselves
/// carry no expansion flag. Starts empty and lives as long as the view.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExpansionState {
    expanded: BTreeSet<String>,
}

impl ExpansionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_expanded(&self, name: &str) -> bool {
        self.expanded.contains(name)
    }

    /// Flip a folder between open and closed.
    ///
    /// Names that do not match a top-level folder in `items` are ignored.
    /// Returns whether the state changed.
    pub fn toggle_folder(&mut self, items: &[Item], name: &str) -> bool {
        let exists = items
            .iter()
            .any(|item| matches!(item, Item::Folder(folder) if folder.name == name));
        if !exists {
            return false;
        }
        if !self.expanded.remove(name) {
            self.expanded.insert(name.to_string());
        }
        true
    }

    /// Open every folder in `items`.
    pub fn expand_all(&mut self, items: &[Item]) {
        self.expanded.extend(
            items
                .iter()
                .filter_map(Item::as_folder)
                .map(|folder| folder.name.clone()),
        );
    }

    pub fn collapse_all(&mut self) {
        self.expanded.clear();
    }

    pub fn len(&self) -> usize {
        self.expanded.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expanded.is_empty()
    }

    /// Expanded names in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.expanded.iter().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::{FileEntry, FileKind, FolderEntry};

    fn items() -> Vec<Item> {
        vec![
            Item::File(FileEntry::new(FileKind::Pdf, "B.pdf", "2017-01-06")),
            Item::Folder(FolderEntry::new(
                "A",
                vec![FileEntry::new(FileKind::Doc, "x.doc", "2017-01-06")],
            )),
            Item::Folder(FolderEntry::new("C", vec![])),
        ]
    }

    #[test]
    fn test_toggle_opens_and_closes() {
        let items = items();
        let mut state = ExpansionState::new();

        assert!(state.toggle_folder(&items, "A"));
        assert!(state.is_expanded("A"));
        assert!(!state.is_expanded("C"));

        assert!(state.toggle_folder(&items, "A"));
        assert!(!state.is_expanded("A"));
        assert!(state.is_empty());
    }

    #[test]
    fn test_toggle_is_involution() {
        let items = items();
        let mut state = ExpansionState::new();
        state.toggle_folder(&items, "C");

        for name in ["A", "C", "B.pdf", "missing"] {
            let before = state.clone();
            state.toggle_folder(&items, name);
            state.toggle_folder(&items, name);
            assert_eq!(state, before, "double toggle of {name:?}");
        }
    }

    #[test]
    fn test_toggle_unknown_is_noop() {
        let items = items();
        let mut state = ExpansionState::new();

        assert!(!state.toggle_folder(&items, "NonExistent"));
        // A file name is not a folder either.
        assert!(!state.toggle_folder(&items, "B.pdf"));
        assert!(state.is_empty());
    }

    #[test]
    fn test_toggle_leaves_other_folders() {
        let items = items();
        let mut state = ExpansionState::new();
        state.toggle_folder(&items, "C");
        state.toggle_folder(&items, "A");
        state.toggle_folder(&items, "A");
        assert_eq!(state.iter().collect::<Vec<_>>(), ["C"]);
    }

    #[test]
    fn test_expand_and_collapse_all() {
        let items = items();
        let mut state = ExpansionState::new();

        state.expand_all(&items);
        assert_eq!(state.iter().collect::<Vec<_>>(), ["A", "C"]);
        assert_eq!(state.len(), 2);

        state.collapse_all();
        assert!(state.is_empty());
    }
}
