//! Ordering of top-level items.

use std::cmp::Ordering;
use std::fmt;

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

use crate::item::Item;

/// Direction of the name ordering.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    /// Next mode in the header control's cycle: off, ascending, descending.
    pub fn cycle(current: Option<Self>) -> Option<Self> {
        match current {
            None => Some(Self::Ascending),
            Some(Self::Ascending) => Some(Self::Descending),
            Some(Self::Descending) => None,
        }
    }

    fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Self::Ascending => ordering,
            Self::Descending => ordering.reverse(),
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ascending => write!(f, "A-Z"),
            Self::Descending => write!(f, "Z-A"),
        }
    }
}

/// Base letters of a name: canonically decomposed, accents dropped, lowercased.
fn base_letters(name: &str) -> impl Iterator<Item = char> + '_ {
    name.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
}

/// Lowercased decomposition with accents kept.
fn accented_letters(name: &str) -> impl Iterator<Item = char> + '_ {
    name.nfd().flat_map(char::to_lowercase)
}

/// Locale-style name comparison.
///
/// Compares base letters first, ignoring case and accents
/// (`apple < Banana`, `étude < fable`). Names equal on base letters put
/// unaccented before accented (`etude < étude`), then lowercase before
/// uppercase (`a < A`). Identical names are `Equal` so a stable sort keeps
/// their input order.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    base_letters(a)
        .cmp(base_letters(b))
        .then_with(|| accented_letters(a).cmp(accented_letters(b)))
        .then_with(|| {
            a.nfd()
                .zip(b.nfd())
                .find(|(x, y)| x != y)
                .map(|(x, y)| match (x.is_lowercase(), y.is_lowercase()) {
                    (true, false) => Ordering::Less,
                    (false, true) => Ordering::Greater,
                    _ => Ordering::Equal,
                })
                .unwrap_or(Ordering::Equal)
        })
        .then_with(|| a.cmp(b))
}

/// Folders before files in both directions; the direction only reverses
/// the name comparison within each kind.
pub fn compare_items(a: &Item, b: &Item, direction: SortDirection) -> Ordering {
    let partition = match (a.is_folder(), b.is_folder()) {
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        _ => Ordering::Equal,
    };
    partition.then_with(|| direction.apply(compare_names(a.name(), b.name())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::{FileEntry, FileKind, FolderEntry};

    fn file(name: &str) -> Item {
        Item::File(FileEntry::new(FileKind::Pdf, name, "2017-01-06"))
    }

    fn folder(name: &str) -> Item {
        Item::Folder(FolderEntry::new(name, vec![]))
    }

    #[test]
    fn test_compare_names_case_folding() {
        assert_eq!(compare_names("apple", "Banana"), Ordering::Less);
        assert_eq!(compare_names("Banana", "apple"), Ordering::Greater);
        assert_eq!(compare_names("a", "A"), Ordering::Less);
        assert_eq!(compare_names("Cost", "cost"), Ordering::Greater);
        assert_eq!(compare_names("same", "same"), Ordering::Equal);
        assert_eq!(compare_names("Expenses", "Expenses claim"), Ordering::Less);
    }

    #[test]
    fn test_compare_names_accent_folding() {
        assert_eq!(compare_names("étude", "fable"), Ordering::Less);
        assert_eq!(compare_names("Zoë", "Zora"), Ordering::Less);
        assert_eq!(compare_names("etude", "étude"), Ordering::Less);
        assert_eq!(compare_names("étude", "Etude"), Ordering::Greater);
        assert_eq!(compare_names("Étude", "étude"), Ordering::Greater);
        // Precomposed and decomposed spellings sort together.
        assert_eq!(compare_names("caf\u{e9}", "cafe\u{301}s"), Ordering::Less);
    }

    #[test]
    fn test_folders_first_ascending() {
        assert_eq!(
            compare_items(&folder("Z"), &file("A"), SortDirection::Ascending),
            Ordering::Less
        );
        assert_eq!(
            compare_items(&file("A"), &folder("Z"), SortDirection::Ascending),
            Ordering::Greater
        );
        assert_eq!(
            compare_items(&file("A"), &file("B"), SortDirection::Ascending),
            Ordering::Less
        );
    }

    #[test]
    fn test_descending_keeps_folders_first() {
        assert_eq!(
            compare_items(&folder("A"), &file("Z"), SortDirection::Descending),
            Ordering::Less
        );
        assert_eq!(
            compare_items(&folder("A"), &folder("B"), SortDirection::Descending),
            Ordering::Greater
        );
        assert_eq!(
            compare_items(&file("A"), &file("B"), SortDirection::Descending),
            Ordering::Greater
        );
    }

    #[test]
    fn test_cycle() {
        let first = SortDirection::cycle(None);
        assert_eq!(first, Some(SortDirection::Ascending));
        let second = SortDirection::cycle(first);
        assert_eq!(second, Some(SortDirection::Descending));
        assert_eq!(SortDirection::cycle(second), None);
    }
}
