//! Explorer header component.
//!
//! Contains the page title and the list controls (sort, expand/collapse all).

use explorer_core::SortDirection;
use icondata::Icon as IconData;
use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::config::{APP_NAME, APP_TAGLINE};

stylance::import_crate_style!(css, "src/components/explorer/explorer.module.css");

/// Explorer header with title and actions.
#[component]
pub fn Header() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let sort = ctx.explorer.sort;
    let current_icon = Memo::new(move |_| sort_icon(sort.get()));
    let current_label = Memo::new(move |_| sort_label(sort.get()));

    let on_sort = move |_: leptos::ev::MouseEvent| ctx.explorer.cycle_sort();
    let on_expand_all = move |_: leptos::ev::MouseEvent| ctx.expand_all();
    let on_collapse_all = move |_: leptos::ev::MouseEvent| ctx.collapse_all();

    let all_collapsed = Signal::derive(move || ctx.explorer.expanded.with(|e| e.is_empty()));

    view! {
        <header class=css::header>
            <div class=css::title>
                <h1 class=css::titleLabel>{APP_NAME}</h1>
                <p class=css::tagline>{APP_TAGLINE}</p>
            </div>

            <div class=css::actions>
                <button
                    class=move || action_button_class(sort.get().is_some())
                    on:click=on_sort
                    title="Change sort order"
                    aria-label=move || current_label.get()
                >
                    {move || view! { <Icon icon=current_icon.get() /> }}
                    <span class=css::actionLabel>{move || current_label.get()}</span>
                </button>
                <button
                    class=css::actionButton
                    on:click=on_expand_all
                    title="Expand all folders"
                >
                    <Icon icon=ic::EXPAND_ALL />
                </button>
                <button
                    class=css::actionButton
                    on:click=on_collapse_all
                    disabled=move || all_collapsed.get()
                    title="Collapse all folders"
                >
                    <Icon icon=ic::COLLAPSE_ALL />
                </button>
            </div>
        </header>
    }
}

fn sort_icon(sort: Option<SortDirection>) -> IconData {
    match sort {
        None => ic::SORT_OFF,
        Some(SortDirection::Ascending) => ic::SORT_ASCENDING,
        Some(SortDirection::Descending) => ic::SORT_DESCENDING,
    }
}

/// Text for the sort control, e.g. "Sort: A-Z".
fn sort_label(sort: Option<SortDirection>) -> String {
    match sort {
        None => "Unsorted".to_string(),
        Some(direction) => format!("Sort: {}", direction),
    }
}

fn action_button_class(active: bool) -> String {
    if active {
        format!("{} {}", css::actionButton, css::actionButtonActive)
    } else {
        css::actionButton.to_string()
    }
}
