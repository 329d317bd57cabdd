//! Catalog state management
//!
//! Reactive wrapper around `CatalogView` plus the table's editing state and
//! the last user-facing error notice.

use dioxus::prelude::*;

use crate::application::{CatalogError, CatalogPatch, CatalogView};

use super::RowEdit;

/// Catalog state shared by the page and the table
#[derive(Clone, Copy)]
pub struct CatalogState {
    pub view: Signal<CatalogView>,
    pub edit: Signal<RowEdit>,
    /// Last mutation error, shown above the table until dismissed
    pub notice: Signal<Option<String>>,
    /// A mutation request is in flight
    pub is_saving: Signal<bool>,
}

impl CatalogState {
    /// Create a new CatalogState with an empty list
    pub fn new() -> Self {
        Self {
            view: Signal::new(CatalogView::new()),
            edit: Signal::new(RowEdit::Idle),
            notice: Signal::new(None),
            is_saving: Signal::new(false),
        }
    }

    /// Mark a mutation as in flight and clear the previous notice
    pub fn begin_save(&mut self) {
        self.is_saving.set(true);
        self.notice.set(None);
    }

    /// Settle a mutation. On success the patch lands on the current list
    /// and the open editor closes; on failure the editor stays open and the
    /// error becomes the notice.
    pub fn settle(&mut self, result: Result<CatalogPatch, CatalogError>) {
        self.is_saving.set(false);
        match settle_view(&mut self.view.write(), result) {
            Ok(()) => {
                self.edit.set(RowEdit::Idle);
                self.notice.set(None);
            }
            Err(message) => self.notice.set(Some(message)),
        }
    }

    /// Report an error that happened before any request was sent
    pub fn reject(&mut self, message: impl Into<String>) {
        self.notice.set(Some(message.into()));
    }

    pub fn dismiss_notice(&mut self) {
        self.notice.set(None);
    }
}

impl Default for CatalogState {
    fn default() -> Self {
        Self::new()
    }
}

/// Hook to access the catalog state from context
pub fn use_catalog_state() -> CatalogState {
    use_context::<CatalogState>()
}

fn settle_view(
    view: &mut CatalogView,
    result: Result<CatalogPatch, CatalogError>,
) -> Result<(), String> {
    let applied = result.and_then(|patch| view.apply(patch));
    applied.map_err(|e| {
        tracing::warn!(error = %e, "Catalog change not applied");
        e.to_string()
    })
}
