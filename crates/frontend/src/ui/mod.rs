use dioxus::prelude::*;

pub mod presentation;

use presentation::state::CatalogState;
use presentation::views::CatalogPage;

const CATALOG_CSS: &str = include_str!("../../assets/catalog.css");

pub fn app() -> Element {
    rsx! {
        AppRoot {}
    }
}

#[component]
fn AppRoot() -> Element {
    // Services are provided by the composition root (see `src/main.rs`).
    use_context_provider(CatalogState::new);

    rsx! {
        style { {CATALOG_CSS} }
        div {
            class: "app-shell",
            CatalogPage {}
        }
    }
}
