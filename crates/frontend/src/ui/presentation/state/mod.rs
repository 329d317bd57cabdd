//! UI state held in Dioxus signals

mod catalog_state;
mod row_edit;

pub use catalog_state::{use_catalog_state, CatalogState};
pub use row_edit::{EditorFields, RowEdit};
