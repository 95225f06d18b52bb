//! Application configuration.
//!
//! Centralizes all configuration constants used throughout the application.
//! The document dataset is loaded at compile time using `include_str!`.

use explorer_core::SortDirection;

// =============================================================================
// Data Assets (loaded at compile time)
// =============================================================================

/// Bundled document store shown by the explorer.
pub const DOCUMENTS_JSON: &str = include_str!("../assets/data/documents.json");

// =============================================================================
// Application Metadata
// =============================================================================

/// Title shown above the explorer.
pub const APP_NAME: &str = "Document Storage Explorer";

/// Subtitle displayed under the title.
pub const APP_TAGLINE: &str = "View documents that have been uploaded by an administrator.";

// =============================================================================
// Explorer Configuration
// =============================================================================

/// Sort mode on mount. `None` keeps dataset order.
pub const DEFAULT_SORT: Option<SortDirection> = None;

/// Label of the folder badge in a folder header row.
pub const FOLDER_BADGE: &str = "FOLDER";

/// Prefix before a file's formatted date.
pub const ADDED_PREFIX: &str = "Added:";

// =============================================================================
// UI Configuration
// =============================================================================

/// Icon theme selection.
///
/// Available themes:
/// - `Bootstrap` - Familiar, slightly bolder (default)
/// - `Lucide` - Minimal, thin strokes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(dead_code)]
pub enum IconTheme {
    #[default]
    Bootstrap,
    Lucide,
}

/// Current icon theme used throughout the application.
/// Change this value to switch icon styles globally.
pub const ICON_THEME: IconTheme = IconTheme::Bootstrap;
