//! UI components built with Leptos.
//!
//! - [`Explorer`] - Document explorer page (header, list, legend)
//! - [`explorer`] - Explorer building blocks
//! - [`icons`] - Centralized icon definitions (change theme here)

pub mod explorer;
pub mod icons;

pub use explorer::Explorer;
