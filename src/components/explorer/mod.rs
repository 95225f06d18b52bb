//! Document explorer UI components.
//!
//! Components:
//! - [`Explorer`] - Main explorer view
//! - [`Header`] - Title and sort/expand controls
//! - [`FileList`] - Folder headers and file rows
//! - [`Legend`] - Icon legend under the list

#[allow(clippy::module_inception)]
mod explorer;
mod file_list;
mod header;
mod legend;

pub use explorer::Explorer;
pub use file_list::FileList;
pub use header::Header;
pub use legend::Legend;
