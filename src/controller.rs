use std::collections::BTreeSet;

use tracing::warn;

use crate::builder;
use crate::error::CatalogError;
use crate::index::TagIndex;
use crate::query;
use crate::types::{Catalog, EntryId};

/// Receives the visible set after every query; `None` means "show
/// everything".
pub type VisibilityCallback = Box<dyn FnMut(Option<&BTreeSet<EntryId>>)>;

/// Selection bounds captured from the search entry widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionSpan {
    pub start: usize,
    pub end: usize,
}

/// Saves and restores the search widget's text selection around callback
/// invocations.
///
/// Some text-entry widgets collapse their selection whenever other panes are
/// mutated, which the visibility callback typically does. A registered guard
/// lets the controller snapshot the selection before the callback runs and
/// reapply it afterwards.
pub trait SelectionGuard {
    /// Capture the current selection, or `None` when nothing is selected.
    fn snapshot(&self) -> Option<SelectionSpan>;

    /// Reapply a previously captured selection.
    fn restore(&mut self, span: SelectionSpan);
}

/// Bridges raw UI text notifications to the visibility callback.
///
/// The controller is the sole owner of the active [`TagIndex`] and of the
/// single callback slot, so embedders construct one controller per search
/// box instead of sharing process-wide state. All methods run synchronously
/// on the caller's thread; a catalog rebuild completes before control
/// returns.
#[derive(Default)]
pub struct SearchController {
    index: TagIndex,
    query_text: String,
    visibility: Option<VisibilityCallback>,
    selection: Option<Box<dyn SelectionGuard>>,
}

impl std::fmt::Debug for SearchController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SearchController")
            .field("query_text", &self.query_text)
            .field("indexed_words", &self.index.len())
            .field("has_visibility_callback", &self.visibility.is_some())
            .finish()
    }
}

impl SearchController {
    /// Create a controller with an empty index and no callback.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store the visibility callback. Single slot: a later registration
    /// replaces the former.
    pub fn register_visibility_callback(&mut self, callback: VisibilityCallback) {
        self.visibility = Some(callback);
    }

    /// Store a selection guard wrapped around callback invocations. Single
    /// slot, like the visibility callback.
    pub fn register_selection_guard(&mut self, guard: Box<dyn SelectionGuard>) {
        self.selection = Some(guard);
    }

    /// Re-evaluate after the search text changed and forward the result to
    /// the visibility callback.
    pub fn on_text_changed(&mut self, new_text: &str) {
        self.query_text.clear();
        self.query_text.push_str(new_text);
        self.run_query();
    }

    /// Rebuild the index after the external catalog was mutated.
    ///
    /// On success the fresh index replaces the active one as a unit and the
    /// stored query is re-run so the callback immediately reflects the new
    /// catalog. On failure the previous index stays active and queryable.
    ///
    /// # Errors
    ///
    /// Propagates the [`CatalogError`] reported while iterating the catalog.
    pub fn on_catalog_changed(&mut self, catalog: &dyn Catalog) -> Result<(), CatalogError> {
        match builder::rebuild(catalog) {
            Ok(index) => {
                self.index = index;
                self.run_query();
                Ok(())
            }
            Err(err) => {
                warn!(error = %err, "catalog rebuild failed; keeping previous index");
                Err(err)
            }
        }
    }

    /// The query text the controller last saw.
    #[must_use]
    pub fn query_text(&self) -> &str {
        &self.query_text
    }

    /// The currently active index.
    #[must_use]
    pub fn index(&self) -> &TagIndex {
        &self.index
    }

    fn run_query(&mut self) {
        let found = query::evaluate(&self.index, &self.query_text);
        let Some(visibility) = self.visibility.as_mut() else {
            return;
        };

        // The callback may collapse the widget's selection, so save and
        // restore around it.
        let span = self.selection.as_deref().and_then(|guard| guard.snapshot());
        visibility(found.as_ref());
        if let Some(span) = span
            && let Some(guard) = self.selection.as_deref_mut()
        {
            guard.restore(span);
        }
    }
}
