//! View-model for the document explorer.
//!
//! Everything here is pure and target-independent so it can be tested
//! natively and driven by the Leptos front-end:
//!
//! - [`Item`], [`FileEntry`], [`FolderEntry`], [`FileKind`] - Dataset model
//! - [`AddedDate`] - Lenient ISO date with long-form presentation
//! - [`Dataset`] - Validated, ordered list of top-level items
//! - [`ExpansionState`] - Set of expanded folder names
//! - [`SortDirection`], [`compare_items`] - Folder-first ordering
//! - [`compute_render_sequence`], [`RenderRow`] - Flattened rows for display

mod dataset;
mod date;
mod error;
mod expansion;
mod item;
mod render;
mod sort;

pub use dataset::Dataset;
pub use date::{AddedDate, INVALID_DATE};
pub use error::DatasetError;
pub use expansion::ExpansionState;
pub use item::{FileEntry, FileKind, FolderEntry, Item};
pub use render::{FileRow, FolderRow, RenderRow, compute_render_sequence};
pub use sort::{SortDirection, compare_items, compare_names};
