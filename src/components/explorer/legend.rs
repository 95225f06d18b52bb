//! Icon legend shown under the document list.

use explorer_core::FileKind;
use leptos::prelude::*;
use leptos_icons::Icon;

use super::file_list::{kind_class, kind_icon};
use crate::components::icons as ic;

stylance::import_crate_style!(css, "src/components/explorer/explorer.module.css");

const LEGEND_KINDS: [FileKind; 4] = [FileKind::Pdf, FileKind::Doc, FileKind::Csv, FileKind::Mov];

#[component]
pub fn Legend() -> impl IntoView {
    let entries = LEGEND_KINDS
        .iter()
        .map(|kind| {
            let icon = kind_icon(kind);
            let label = format!("{} files", kind.label());
            view! {
                <li class=css::legendItem>
                    <span class=kind_class(kind) aria-hidden="true"><Icon icon=icon /></span>
                    <span>{label}</span>
                </li>
            }
        })
        .collect_view();

    view! {
        <section class=css::legend aria-label="Legend">
            <h3 class=css::legendTitle>"Legend:"</h3>
            <ul class=css::legendGrid>
                {entries}
                <li class=css::legendItem>
                    <span class=css::legendFolder aria-hidden="true"><Icon icon=ic::FOLDER /></span>
                    <span>"Folders (click to expand/collapse)"</span>
                </li>
            </ul>
        </section>
    }
}
