use dioxus::prelude::*;

use super::columns::{WIKIPEDIA_LOGO_URL, WIKIPEDIA_LOGO_WIDTH};

/// Wikipedia logo linking to the article in a new tab
#[component]
pub fn WikiLink(url: String) -> Element {
    rsx! {
        a {
            href: "{url}",
            target: "_blank",
            rel: "noopener noreferrer",
            img {
                alt: "WikiPedia Logo",
                src: WIKIPEDIA_LOGO_URL,
                width: WIKIPEDIA_LOGO_WIDTH.to_string(),
            }
        }
    }
}
