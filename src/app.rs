//! Root application module.
//!
//! Contains the main App component, AppContext definition, ExplorerState,
//! and application-level setup logic following Leptos conventions.

use explorer_core::{
    Dataset, ExpansionState, RenderRow, SortDirection, compute_render_sequence,
};
use leptos::prelude::*;

use crate::components::Explorer;
use crate::config::{DEFAULT_SORT, DOCUMENTS_JSON};
use crate::utils::log;

// ============================================================================
// ExplorerState
// ============================================================================

/// Explorer view state managed with Leptos signals.
///
/// Holds the set of expanded folders and the current sort mode. Both start
/// fresh on mount and are never persisted.
///
/// # Note
///
/// This struct is `Copy` because all fields are Leptos signals, which are
/// cheap to copy (they're just pointers to the underlying reactive state).
#[derive(Clone, Copy)]
pub struct ExplorerState {
    /// Names of the folders whose files are visible.
    pub expanded: RwSignal<ExpansionState>,
    /// Sort mode (`None` keeps dataset order).
    pub sort: RwSignal<Option<SortDirection>>,
}

impl ExplorerState {
    /// Creates a new explorer state: every folder collapsed, default sort.
    pub fn new() -> Self {
        Self {
            expanded: RwSignal::new(ExpansionState::new()),
            sort: RwSignal::new(DEFAULT_SORT),
        }
    }

    /// Advances the sort control: off, ascending, descending, off.
    pub fn cycle_sort(&self) {
        self.sort.update(|sort| *sort = SortDirection::cycle(*sort));
    }
}

impl Default for ExplorerState {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// AppContext
// ============================================================================

/// Application-wide reactive context.
///
/// This context is provided at the root of the component tree and can be
/// accessed from any child component using `use_context::<AppContext>()`.
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Explorer state (expanded folders, sort mode).
    pub explorer: ExplorerState,

    /// Document store, immutable for the whole session.
    pub documents: StoredValue<Dataset>,

    /// Why the bundled store could not be loaded, if it failed.
    pub load_error: StoredValue<Option<String>>,
}

impl AppContext {
    /// Creates the context, loading the bundled document store.
    pub fn new() -> Self {
        let (documents, load_error) = load_documents(DOCUMENTS_JSON);
        Self {
            explorer: ExplorerState::new(),
            documents: StoredValue::new(documents),
            load_error: StoredValue::new(load_error),
        }
    }

    /// Flips a folder open or closed. Unknown names are ignored.
    pub fn toggle_folder(&self, name: &str) {
        self.documents.with_value(|documents| {
            self.explorer
                .expanded
                .update(|expanded| {
                    expanded.toggle_folder(documents.items(), name);
                });
        });
    }

    pub fn expand_all(&self) {
        self.documents.with_value(|documents| {
            self.explorer
                .expanded
                .update(|expanded| expanded.expand_all(documents.items()));
        });
    }

    pub fn collapse_all(&self) {
        self.explorer.expanded.update(ExpansionState::collapse_all);
    }

    /// Current rows to display. Tracks the expansion and sort signals.
    pub fn rows(&self) -> Vec<RenderRow> {
        let sort = self.explorer.sort.get();
        self.explorer.expanded.with(|expanded| {
            self.documents
                .with_value(|documents| compute_render_sequence(documents.items(), expanded, sort))
        })
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse the document store, degrading to an empty list on failure.
fn load_documents(json: &str) -> (Dataset, Option<String>) {
    match Dataset::from_json(json) {
        Ok(documents) => {
            let unknown = documents.unknown_kinds();
            if !unknown.is_empty() {
                log::warn(&format!(
                    "Unrecognized document types shown as generic files: {}",
                    unknown.join(", ")
                ));
            }
            log::info(&format!(
                "Loaded {} documents in {} folders",
                documents.total_file_count(),
                documents.folders().count()
            ));
            (documents, None)
        }
        Err(e) => {
            log::warn(&format!("Failed to load document store: {}", e));
            (Dataset::empty(), Some(e.to_string()))
        }
    }
}

/// Root application component with error boundary.
///
/// This component:
/// - Creates and provides the global AppContext
/// - Wraps the app in an ErrorBoundary for graceful error handling
/// - Renders the Explorer component
#[component]
pub fn App() -> impl IntoView {
    let ctx = AppContext::new();
    provide_context(ctx);

    view! {
        <ErrorBoundary
            fallback=|errors| view! {
                <div style="
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    height: 100vh;
                    padding: 2rem;
                    background: #f9fafb;
                    color: #1f2937;
                    font-family: system-ui, sans-serif;
                ">
                    <h1 style="color: #dc2626; margin-bottom: 1rem;">
                        "Something went wrong"
                    </h1>
                    <p style="color: #6b7280; margin-bottom: 2rem;">
                        "The explorer could not be displayed. Please try reloading the page."
                    </p>
                    <ul style="color: #dc2626; font-size: 0.9rem;">
                        {move || errors.get()
                            .into_iter()
                            .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                            .collect::<Vec<_>>()
                        }
                    </ul>
                    <button
                        on:click=move |_| {
                            if let Some(window) = web_sys::window() {
                                let _ = window.location().reload();
                            }
                        }
                        style="
                            background: #2563eb;
                            color: white;
                            border: none;
                            padding: 0.75rem 2rem;
                            border-radius: 4px;
                            cursor: pointer;
                        "
                    >
                        "Reload Page"
                    </button>
                </div>
            }
        >
            <Explorer />
        </ErrorBoundary>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_documents_success() {
        let (documents, error) = load_documents(DOCUMENTS_JSON);
        assert!(error.is_none());
        assert!(!documents.is_empty());
    }

    #[test]
    fn test_load_documents_degrades_to_empty() {
        let (documents, error) = load_documents("[{\"type\":\"pdf\"}]");
        assert!(documents.is_empty());
        assert!(error.is_some_and(|e| e.starts_with("dataset parse error")));
    }

    #[test]
    fn test_load_documents_keeps_unknown_kinds() {
        let (documents, error) =
            load_documents(r#"[{"type":"txt","name":"notes","added":"2017-01-06"}]"#);
        assert!(error.is_none());
        assert_eq!(documents.unknown_kinds(), ["txt"]);
    }
}
