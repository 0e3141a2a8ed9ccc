use dioxus::prelude::*;

use crate::view::{components::Page, render_page};

/// Renders the 404 document with `message` as its explanation.
pub fn render_not_found(message: String) -> String {
    render_page(
        "Not found".to_string(),
        rsx!(NotFoundPage { message: message }),
    )
}

#[component]
pub fn NotFoundPage(message: String) -> Element {
    rsx!(
        Page { class: "flex items-center justify-center",
            div { class: "flex flex-col items-center gap-2",
                h1 { class: "text-2xl font-bold", "Not found" }
                p { "{message}" }
                a { class: "link", href: "/api/docs", "API Docs" }
            }
        }
    )
}
