use dioxus::prelude::*;

/// Indeterminate progress bar shown above the table while the list loads
#[component]
pub fn ProgressBar() -> Element {
    rsx! {
        div {
            class: "progress-bar",
            role: "progressbar",
            "aria-label": "Loading movies",
            div { class: "progress-bar__indicator" }
        }
    }
}
