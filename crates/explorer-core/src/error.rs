use thiserror::Error;

/// Errors raised while loading a dataset.
///
/// Only structural problems are errors. Unknown kinds and bad dates degrade
/// to fallback presentation instead.
#[derive(Debug, Error)]
pub enum DatasetError {
    /// The document is not a JSON array of items.
    #[error("dataset parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// An item (or a file inside a folder) has an empty name.
    #[error("entry #{index} has an empty name")]
    EmptyName { index: usize },

    /// Two top-level folders share a name, which would make their expansion
    /// state ambiguous.
    #[error("duplicate folder name: {0}")]
    DuplicateFolder(String),
}
