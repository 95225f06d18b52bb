//! Centralized icon definitions.
//!
//! Icon theme is configured in `config.rs` via `ICON_THEME`.
//! This module maps semantic icon names to the selected theme's icons.

use icondata::Icon;

use crate::config::IconTheme;

// =============================================================================
// Theme Imports
// =============================================================================

mod lucide {
    pub use icondata::{
        LuArrowDownAZ as SortAscending, LuArrowUpDown as SortOff, LuArrowUpZA as SortDescending,
        LuChevronDown as ChevronDown, LuChevronRight as ChevronRight,
        LuChevronsDownUp as CollapseAll, LuChevronsUpDown as ExpandAll, LuFile as FilePdf,
        LuFile as File, LuFile as FileCsv, LuFileText as FileText, LuFolder as Folder,
        LuVideo as FileVideo,
    };
}

mod bootstrap {
    pub use icondata::{
        BsArrowDownUp as SortOff, BsChevronDown as ChevronDown, BsChevronRight as ChevronRight,
        BsChevronContract as CollapseAll, BsChevronExpand as ExpandAll,
        BsFileEarmark as File, BsFileEarmarkPdf as FilePdf, BsFileEarmarkPlay as FileVideo,
        BsFileEarmarkSpreadsheet as FileCsv, BsFileEarmarkText as FileText,
        BsFolderFill as Folder, BsSortAlphaDown as SortAscending,
        BsSortAlphaUpAlt as SortDescending,
    };
}

// =============================================================================
// Icon Constants (selected based on theme)
// =============================================================================

macro_rules! themed_icon {
    ($name:ident, $theme_name:ident) => {
        pub const $name: Icon = match crate::config::ICON_THEME {
            IconTheme::Lucide => lucide::$theme_name,
            IconTheme::Bootstrap => bootstrap::$theme_name,
        };
    };
}

themed_icon!(CHEVRON_DOWN, ChevronDown);
themed_icon!(CHEVRON_RIGHT, ChevronRight);
themed_icon!(FOLDER, Folder);
themed_icon!(FILE, File);
themed_icon!(FILE_TEXT, FileText);
themed_icon!(FILE_PDF, FilePdf);
themed_icon!(FILE_CSV, FileCsv);
themed_icon!(FILE_VIDEO, FileVideo);
themed_icon!(SORT_OFF, SortOff);
themed_icon!(SORT_ASCENDING, SortAscending);
themed_icon!(SORT_DESCENDING, SortDescending);
themed_icon!(EXPAND_ALL, ExpandAll);
themed_icon!(COLLAPSE_ALL, CollapseAll);
