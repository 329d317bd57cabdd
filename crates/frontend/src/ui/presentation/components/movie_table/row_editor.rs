//! Inline editor row, used both for adding and for editing a movie

use dioxus::prelude::*;
use moviedesk_domain::MovieField;

use super::columns::MOVIE_COLUMNS;
use crate::presentation::state::{use_catalog_state, EditorFields};

/// Props for RowEditor
#[derive(Props, Clone, PartialEq)]
pub struct RowEditorProps {
    pub fields: EditorFields,
    pub is_saving: bool,
    pub on_save: EventHandler<EditorFields>,
    pub on_cancel: EventHandler<()>,
}

/// One table row of text inputs, one per column, plus save/cancel actions.
/// Keystrokes go straight into the open `RowEdit`.
#[component]
pub fn RowEditor(props: RowEditorProps) -> Element {
    let mut state = use_catalog_state();
    let fields = props.fields.clone();
    let is_saving = props.is_saving;

    rsx! {
        tr {
            class: "movie-table__row movie-table__row--editing",

            for column in MOVIE_COLUMNS {
                td {
                    key: "{column.field}",
                    input {
                        class: "movie-table__input",
                        r#type: if column.field == MovieField::Year { "number" } else { "text" },
                        placeholder: column.title,
                        value: props.fields.get(column.field).to_string(),
                        disabled: is_saving,
                        oninput: move |e| {
                            if let Some(open) = state.edit.write().fields_mut() {
                                open.set(column.field, e.value());
                            }
                        },
                    }
                }
            }

            td {
                class: "movie-table__actions",
                button {
                    class: "movie-table__action",
                    title: "Save",
                    disabled: is_saving,
                    onclick: move |_| props.on_save.call(fields.clone()),
                    "✓"
                }
                button {
                    class: "movie-table__action",
                    title: "Cancel",
                    disabled: is_saving,
                    onclick: move |_| props.on_cancel.call(()),
                    "✗"
                }
            }
        }
    }
}
