//! The validated list of top-level items.

use std::collections::HashSet;

use crate::error::DatasetError;
use crate::item::{FileEntry, FolderEntry, Item};

/// Ordered top-level items, immutable once loaded.
///
/// Construction checks the invariants the view-model relies on: every entry
/// has a name and folder names are unique.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Dataset {
    items: Vec<Item>,
}

impl Dataset {
    /// Parse and validate a JSON array of items.
    pub fn from_json(json: &str) -> Result<Self, DatasetError> {
        let items: Vec<Item> = serde_json::from_str(json)?;
        Self::new(items)
    }

    /// Validate an already-built item list.
    pub fn new(items: Vec<Item>) -> Result<Self, DatasetError> {
        let mut folders = HashSet::new();
        for (index, item) in items.iter().enumerate() {
            if item.name().trim().is_empty() {
                return Err(DatasetError::EmptyName { index });
            }
            if let Item::Folder(folder) = item {
                if folder.files.iter().any(|f| f.name.trim().is_empty()) {
                    return Err(DatasetError::EmptyName { index });
                }
                if !folders.insert(folder.name.as_str()) {
                    return Err(DatasetError::DuplicateFolder(folder.name.clone()));
                }
            }
        }
        Ok(Self { items })
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn folders(&self) -> impl Iterator<Item = &FolderEntry> {
        self.items.iter().filter_map(Item::as_folder)
    }

    /// Every file in the dataset, top-level and inside folders.
    pub fn all_files(&self) -> impl Iterator<Item = &FileEntry> {
        self.items.iter().flat_map(|item| match item {
            Item::File(file) => std::slice::from_ref(file).iter(),
            Item::Folder(folder) => folder.files.iter(),
        })
    }

    /// Top-level files plus the files of every folder.
    pub fn total_file_count(&self) -> usize {
        self.all_files().count()
    }

    /// Distinct unrecognized kind tags, in first-seen order.
    pub fn unknown_kinds(&self) -> Vec<String> {
        let mut seen = Vec::new();
        for file in self.all_files().filter(|f| !f.kind.is_known()) {
            let tag = file.kind.as_tag().to_string();
            if !seen.contains(&tag) {
                seen.push(tag);
            }
        }
        seen
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::FileKind;

    const SAMPLE: &str = r#"[
        {"type":"pdf","name":"Employee Handbook","added":"2017-01-06"},
        {"type":"pdf","name":"Public Holiday policy","added":"2016-12-06"},
        {"type":"folder","name":"Expenses","files":[
            {"type":"doc","name":"Expenses claim form","added":"2017-05-02"},
            {"type":"doc","name":"Fuel allowances","added":"2017-05-03"}
        ]},
        {"type":"csv","name":"Cost centres","added":"2016-08-12"},
        {"type":"folder","name":"Misc","files":[
            {"type":"doc","name":"Christmas party","added":"2017-12-01"},
            {"type":"mov","name":"Welcome to the company!","added":"2015-04-24"}
        ]}
    ]"#;

    #[test]
    fn test_from_json() {
        let dataset = Dataset::from_json(SAMPLE).expect("sample should load");
        assert_eq!(dataset.items().len(), 5);
        assert_eq!(dataset.folders().count(), 2);
        assert_eq!(dataset.total_file_count(), 7);
    }

    #[test]
    fn test_invalid_json() {
        assert!(matches!(
            Dataset::from_json("{not json"),
            Err(DatasetError::Parse(_))
        ));
        assert!(matches!(
            Dataset::from_json(r#"{"type":"pdf"}"#),
            Err(DatasetError::Parse(_))
        ));
    }

    #[test]
    fn test_empty_name_rejected() {
        let err = Dataset::from_json(r#"[{"type":"pdf","name":"a"},{"type":"pdf","name":" "}]"#)
            .unwrap_err();
        assert!(matches!(err, DatasetError::EmptyName { index: 1 }));

        let err = Dataset::from_json(r#"[{"type":"folder","name":"f","files":[{"name":""}]}]"#)
            .unwrap_err();
        assert!(matches!(err, DatasetError::EmptyName { index: 0 }));
    }

    #[test]
    fn test_duplicate_folder_rejected() {
        let items = vec![
            Item::Folder(FolderEntry::new("A", vec![])),
            Item::File(FileEntry::new(FileKind::Pdf, "A", "2017-01-06")),
            Item::Folder(FolderEntry::new("A", vec![])),
        ];
        let err = Dataset::new(items).unwrap_err();
        assert_eq!(err.to_string(), "duplicate folder name: A");
    }

    #[test]
    fn test_unknown_kinds() {
        let dataset = Dataset::from_json(
            r#"[{"type":"txt","name":"a"},{"type":"pdf","name":"b"},
                {"type":"folder","name":"f","files":[{"type":"xls","name":"c"},{"type":"txt","name":"d"}]}]"#,
        )
        .unwrap();
        assert_eq!(dataset.unknown_kinds(), ["txt", "xls"]);
    }
}
