//! Main explorer component.
//!
//! Layout, top to bottom: header with controls, the document list, the legend.

use leptos::prelude::*;

use super::{FileList, Header, Legend};

stylance::import_crate_style!(css, "src/components/explorer/explorer.module.css");

/// Document explorer view component.
#[component]
pub fn Explorer() -> impl IntoView {
    view! {
        <main class=css::explorer>
            <Header />
            <FileList />
            <Legend />
        </main>
    }
}
