//! File list component for explorer view.
//!
//! Renders the flattened row sequence: folder headers, and file rows either
//! at top level or indented under an expanded folder.

use explorer_core::{FileKind, FileRow, FolderRow, RenderRow};
use icondata::Icon as IconData;
use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::config::{ADDED_PREFIX, FOLDER_BADGE};

stylance::import_crate_style!(css, "src/components/explorer/file_list.module.css");

/// Get icon for a file kind. Unknown kinds get the generic file icon.
pub fn kind_icon(kind: &FileKind) -> IconData {
    match kind {
        FileKind::Pdf => ic::FILE_PDF,
        FileKind::Doc => ic::FILE_TEXT,
        FileKind::Csv => ic::FILE_CSV,
        FileKind::Mov => ic::FILE_VIDEO,
        FileKind::Other(_) => ic::FILE,
    }
}

/// Colour class for a file kind's icon.
pub fn kind_class(kind: &FileKind) -> &'static str {
    match kind {
        FileKind::Pdf => css::kindPdf,
        FileKind::Doc => css::kindDoc,
        FileKind::Csv => css::kindCsv,
        FileKind::Mov => css::kindMov,
        FileKind::Other(_) => css::kindOther,
    }
}

#[component]
pub fn FileList() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let rows = Memo::new(move |_| ctx.rows());
    let load_error = ctx.load_error.get_value();
    let is_empty = Signal::derive(move || rows.with(|r| r.is_empty()));

    view! {
        <div class=css::list role="tree" aria-label="Documents">
            // Column header
            <div class=css::listHeader>
                <span>"Name & Type"</span>
                <span>"Date Added"</span>
            </div>
            <Show
                when=move || !is_empty.get()
                fallback=move || {
                    let message = load_error
                        .clone()
                        .map(|e| format!("Documents could not be loaded ({})", e))
                        .unwrap_or_else(|| "No documents".to_string());
                    view! { <div class=css::empty>{message}</div> }
                }
            >
                <For
                    each=move || rows.get()
                    key=|row| row.key()
                    children=move |row| match row {
                        RenderRow::Folder(folder) => {
                            view! { <FolderHeader row=folder /> }.into_any()
                        }
                        RenderRow::File(file) => view! { <FileItem row=file /> }.into_any(),
                    }
                />
            </Show>
        </div>
    }
}

/// Clickable folder header. Enter or Space also toggles it.
#[component]
fn FolderHeader(row: FolderRow) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let name = row.name.clone();
    let name_for_check = row.name.clone();
    let name_for_click = row.name.clone();
    let name_for_key = row.name.clone();

    // The row is keyed by dataset position, so expansion must be read reactively here.
    let is_expanded = Signal::derive(move || {
        ctx.explorer
            .expanded
            .with(|e| e.is_expanded(&name_for_check))
    });

    let handle_click = move |_: leptos::ev::MouseEvent| {
        ctx.toggle_folder(&name_for_click);
    };

    let handle_keydown = move |ev: leptos::ev::KeyboardEvent| {
        let key = ev.key();
        if key == "Enter" || key == " " {
            ev.prevent_default();
            ctx.toggle_folder(&name_for_key);
        }
    };

    let aria_label = format!("Folder: {}", row.name);

    view! {
        <div
            class=format!("{} {}", css::row, css::folderRow)
            on:click=handle_click
            on:keydown=handle_keydown
            role="treeitem"
            tabindex="0"
            aria-label=aria_label
            aria-expanded=move || is_expanded.get().to_string()
        >
            <div class=css::nameCell>
                <span class=css::chevron aria-hidden="true">
                    {move || {
                        let icon = if is_expanded.get() { ic::CHEVRON_DOWN } else { ic::CHEVRON_RIGHT };
                        view! { <Icon icon=icon /> }
                    }}
                </span>
                <span class=format!("{} {}", css::icon, css::folderIcon) aria-hidden="true">
                    <Icon icon=ic::FOLDER />
                </span>
                <span class=css::name>{name}</span>
                <span class=format!("{} {}", css::badge, css::folderBadge)>{FOLDER_BADGE}</span>
            </div>
            <span class=css::meta>{row.count_label()}</span>
        </div>
    }
}

#[component]
fn FileItem(row: FileRow) -> impl IntoView {
    let depth = row.depth();
    let file = row.file;

    let icon = kind_icon(&file.kind);
    let icon_class = format!("{} {}", css::icon, kind_class(&file.kind));
    let label = file.kind.label();
    let added = format!("{} {}", ADDED_PREFIX, file.added.format_long());
    let aria_label = format!("File: {}", file.name);

    let row_class = if depth > 0 {
        format!("{} {} {}", css::row, css::fileRow, css::nested)
    } else {
        format!("{} {}", css::row, css::fileRow)
    };

    view! {
        <div class=row_class role="treeitem" aria-label=aria_label attr:aria-level=(depth + 1).to_string()>
            <div class=css::nameCell>
                <span class=icon_class aria-hidden="true"><Icon icon=icon /></span>
                <span class=css::name>{file.name}</span>
                <span class=css::badge>{label}</span>
            </div>
            <span class=css::meta>{added}</span>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_classes_are_distinct() {
        let kinds = [
            FileKind::Pdf,
            FileKind::Doc,
            FileKind::Csv,
            FileKind::Mov,
            FileKind::Other("txt".to_string()),
        ];
        let classes: Vec<_> = kinds.iter().map(kind_class).collect();
        for (i, a) in classes.iter().enumerate() {
            for b in &classes[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_unknown_kinds_share_fallback_class() {
        assert_eq!(
            kind_class(&FileKind::Other("txt".to_string())),
            kind_class(&FileKind::Other("xls".to_string()))
        );
    }
}
