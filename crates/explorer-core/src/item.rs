//! Dataset entries: files, folders and the tagged union over both.

use std::fmt;

use serde::Deserialize;

use crate::date::AddedDate;

// =============================================================================
// File Kind
// =============================================================================

/// Document type of a file entry.
///
/// The four known kinds are matched exhaustively; anything else lands in
/// [`FileKind::Other`] so the entry still renders with a generic treatment.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum FileKind {
    Pdf,
    Doc,
    Csv,
    Mov,
    /// Unrecognized tag, kept verbatim.
    Other(String),
}

impl FileKind {
    /// Detect kind from the dataset's `type` tag (case-insensitive).
    pub fn from_tag(tag: &str) -> Self {
        match tag.to_ascii_lowercase().as_str() {
            "pdf" => Self::Pdf,
            "doc" => Self::Doc,
            "csv" => Self::Csv,
            "mov" => Self::Mov,
            _ => Self::Other(tag.to_string()),
        }
    }

    /// Tag as written in the dataset.
    pub fn as_tag(&self) -> &str {
        match self {
            Self::Pdf => "pdf",
            Self::Doc => "doc",
            Self::Csv => "csv",
            Self::Mov => "mov",
            Self::Other(tag) => tag,
        }
    }

    /// Badge label (e.g. "PDF"). Unknown kinds show their own tag uppercased,
    /// or "FILE" when the tag is blank.
    pub fn label(&self) -> String {
        match self {
            Self::Other(tag) if tag.trim().is_empty() => "FILE".to_string(),
            other => other.as_tag().to_uppercase(),
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, Self::Other(_))
    }
}

impl fmt::Display for FileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_tag())
    }
}

// =============================================================================
// Entries
// =============================================================================

/// A single document.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileEntry {
    pub kind: FileKind,
    pub name: String,
    pub added: AddedDate,
}

impl FileEntry {
    pub fn new(kind: FileKind, name: &str, added: &str) -> Self {
        Self {
            kind,
            name: name.to_string(),
            added: AddedDate::parse(added),
        }
    }
}

/// A top-level folder holding files (folders never nest).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FolderEntry {
    pub name: String,
    pub files: Vec<FileEntry>,
}

impl FolderEntry {
    pub fn new(name: &str, files: Vec<FileEntry>) -> Self {
        Self {
            name: name.to_string(),
            files,
        }
    }
}

/// Top-level dataset entry.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(from = "RawItem")]
pub enum Item {
    File(FileEntry),
    Folder(FolderEntry),
}

impl Item {
    pub fn name(&self) -> &str {
        match self {
            Self::File(file) => &file.name,
            Self::Folder(folder) => &folder.name,
        }
    }

    pub fn is_folder(&self) -> bool {
        matches!(self, Self::Folder(_))
    }

    pub fn as_folder(&self) -> Option<&FolderEntry> {
        match self {
            Self::Folder(folder) => Some(folder),
            Self::File(_) => None,
        }
    }

    pub fn as_file(&self) -> Option<&FileEntry> {
        match self {
            Self::File(file) => Some(file),
            Self::Folder(_) => None,
        }
    }
}

impl From<FileEntry> for Item {
    fn from(file: FileEntry) -> Self {
        Self::File(file)
    }
}

impl From<FolderEntry> for Item {
    fn from(folder: FolderEntry) -> Self {
        Self::Folder(folder)
    }
}

// =============================================================================
// Wire Format
// =============================================================================

const FOLDER_TAG: &str = "folder";

/// JSON shape shared by files and folders, tagged by `type`.
#[derive(Deserialize)]
struct RawItem {
    #[serde(rename = "type", default)]
    kind: String,
    name: String,
    #[serde(default)]
    added: Option<String>,
    #[serde(default)]
    files: Option<Vec<RawItem>>,
}

impl RawItem {
    fn into_file(self) -> FileEntry {
        FileEntry {
            kind: FileKind::from_tag(&self.kind),
            added: AddedDate::parse(self.added.as_deref().unwrap_or_default()),
            name: self.name,
        }
    }
}

impl From<RawItem> for Item {
    fn from(raw: RawItem) -> Self {
        if raw.kind.eq_ignore_ascii_case(FOLDER_TAG) {
            // Nested folders are not part of the schema; their entries are
            // flattened into plain (fallback) files.
            let files = raw
                .files
                .unwrap_or_default()
                .into_iter()
                .map(RawItem::into_file)
                .collect();
            Item::Folder(FolderEntry {
                name: raw.name,
                files,
            })
        } else {
            Item::File(raw.into_file())
        }
    }
}
