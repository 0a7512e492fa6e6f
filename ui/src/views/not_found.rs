use dioxus::prelude::*;

use crate::t;

/// Fallback page for unknown routes. `segments` is the unmatched path.
#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    tracing::debug!(path = %segments.join("/"), "no route matched");

    rsx! {
        main { class: "page page-not-found",
            span { class: "page-not-found__mark", aria_hidden: "true", "ॐ" }
            h1 { {t!("not-found-title")} }
            p { {t!("not-found-body")} }
            a { class: "button button--primary", href: "/", {t!("not-found-home")} }
        }
    }
}
