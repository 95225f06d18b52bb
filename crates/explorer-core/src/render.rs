//! Flattening items and expansion state into display rows.

use crate::expansion::ExpansionState;
use crate::item::{FileEntry, Item};
use crate::sort::{SortDirection, compare_items};

/// Header row of a top-level folder.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FolderRow {
    /// Position of the folder in the dataset.
    pub index: usize,
    pub name: String,
    pub file_count: usize,
    pub expanded: bool,
}

impl FolderRow {
    /// "1 item" / "3 items".
    pub fn count_label(&self) -> String {
        if self.file_count == 1 {
            "1 item".to_string()
        } else {
            format!("{} items", self.file_count)
        }
    }
}

/// A file, either top-level (`folder == None`) or inside an open folder.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileRow {
    pub file: FileEntry,
    pub folder: Option<String>,
    /// Position of the file, or of its folder, in the dataset.
    pub index: usize,
    /// Position within the folder's `files`; `None` at top level.
    pub file_index: Option<usize>,
}

impl FileRow {
    /// Indentation level: 0 at top level, 1 inside a folder.
    pub fn depth(&self) -> usize {
        usize::from(self.folder.is_some())
    }
}

/// One visual row of the explorer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RenderRow {
    Folder(FolderRow),
    File(FileRow),
}

impl RenderRow {
    /// Key for keyed list rendering, built from dataset positions so it is
    /// unique even when names or dates repeat, and unchanged by sorting.
    pub fn key(&self) -> String {
        match self {
            Self::Folder(row) => format!("item:{}", row.index),
            Self::File(FileRow {
                index,
                file_index: None,
                ..
            }) => format!("item:{}", index),
            Self::File(FileRow {
                index,
                file_index: Some(file_index),
                ..
            }) => format!("item:{}/{}", index, file_index),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Folder(row) => &row.name,
            Self::File(row) => &row.file.name,
        }
    }

    pub fn is_folder(&self) -> bool {
        matches!(self, Self::Folder(_))
    }
}

/// Compute the ordered rows for `items`.
///
/// With `sort == None` top-level items keep dataset order; otherwise they are
/// stably sorted with [`compare_items`]. Each folder header is immediately
/// followed by its files, in their own order, only when the folder is
/// expanded. Pure: same inputs always yield the same rows.
pub fn compute_render_sequence(
    items: &[Item],
    expanded: &ExpansionState,
    sort: Option<SortDirection>,
) -> Vec<RenderRow> {
    let mut ordered: Vec<(usize, &Item)> = items.iter().enumerate().collect();
    if let Some(direction) = sort {
        // `sort_by` is stable, so equal keys keep input order.
        ordered.sort_by(|(_, a), (_, b)| compare_items(a, b, direction));
    }

    let mut rows = Vec::with_capacity(items.len());
    for (index, item) in ordered {
        match item {
            Item::File(file) => rows.push(RenderRow::File(FileRow {
                file: file.clone(),
                folder: None,
                index,
                file_index: None,
            })),
            Item::Folder(folder) => {
                let is_open = expanded.is_expanded(&folder.name);
                rows.push(RenderRow::Folder(FolderRow {
                    index,
                    name: folder.name.clone(),
                    file_count: folder.files.len(),
                    expanded: is_open,
                }));
                if is_open {
                    rows.extend(folder.files.iter().enumerate().map(|(file_index, file)| {
                        RenderRow::File(FileRow {
                            file: file.clone(),
                            folder: Some(folder.name.clone()),
                            index,
                            file_index: Some(file_index),
                        })
                    }));
                }
            }
        }
    }
    rows
}
