//! Catalog page - loads the list and wires the table hooks to the server

use dioxus::prelude::*;
use moviedesk_domain::MovieDraft;

use crate::infrastructure::spawn_task;
use crate::presentation::components::{MovieTable, ProgressBar, RowDelete, RowUpdate};
use crate::presentation::services::use_catalog_sync;
use crate::presentation::state::use_catalog_state;

#[component]
pub fn CatalogPage() -> Element {
    let sync = use_catalog_sync();
    let mut state = use_catalog_state();

    // Initial load, once on mount
    {
        let sync = sync.clone();
        use_effect(move || {
            let sync = sync.clone();
            state.view.write().begin_load();
            spawn_task(async move {
                let result = sync.load().await;
                state.view.write().finish_load(result);
            });
        });
    }

    let on_row_add = {
        let sync = sync.clone();
        move |draft: MovieDraft| {
            let sync = sync.clone();
            state.begin_save();
            spawn_task(async move {
                let result = sync.add_row(draft).await;
                state.settle(result);
            });
        }
    };

    let on_row_update = {
        let sync = sync.clone();
        move |update: RowUpdate| {
            let sync = sync.clone();
            state.begin_save();
            spawn_task(async move {
                let result = sync
                    .update_row(update.index, &update.original, update.edited)
                    .await;
                state.settle(result);
            });
        }
    };

    let on_row_delete = move |delete: RowDelete| {
        let sync = sync.clone();
        state.begin_save();
        spawn_task(async move {
            let result = sync.delete_row(delete.index, &delete.original).await;
            state.settle(result);
        });
    };

    let view = state.view.read().clone();
    let load_error = view.load_error().map(str::to_string);
    let notice = state.notice.read().clone();
    let is_saving = *state.is_saving.read();

    rsx! {
        div {
            class: "catalog-page",

            if view.is_loading() {
                ProgressBar {}
            }

            if let Some(error) = load_error {
                div {
                    class: "catalog-page__banner catalog-page__banner--error",
                    "Could not load movies: {error}"
                }
            }

            if let Some(message) = notice {
                div {
                    class: "catalog-page__banner",
                    span { "{message}" }
                    button {
                        class: "catalog-page__dismiss",
                        onclick: move |_| state.dismiss_notice(),
                        "×"
                    }
                }
            }

            MovieTable {
                movies: view.movies().to_vec(),
                is_saving,
                on_row_add,
                on_row_update,
                on_row_delete,
            }
        }
    }
}
