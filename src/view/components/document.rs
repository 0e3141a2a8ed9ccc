use dioxus::prelude::*;

static DAISYUI_STYLESHEET: &str = "https://cdn.jsdelivr.net/npm/daisyui@5";
static TAILWIND_SCRIPT: &str = "https://cdn.jsdelivr.net/npm/@tailwindcss/browser@4";

/// Head and body of every page; the `<html>` root is written by [`render_page`](crate::view::render_page).
#[component]
pub fn Document(title: String, children: Element) -> Element {
    rsx!(
        head {
            meta { charset: "utf-8" }
            meta {
                name: "viewport",
                content: "width=device-width, initial-scale=1"
            }
            title { "{title}" }
            link {
                rel: "stylesheet",
                r#type: "text/css",
                href: DAISYUI_STYLESHEET
            }
            script { src: TAILWIND_SCRIPT }
        }
        body {
            {children}
        }
    )
}
