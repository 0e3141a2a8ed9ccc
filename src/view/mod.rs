//! HTML views rendered on the server with Dioxus.
//!
//! Pages are regular Dioxus components; [`render_page`] wraps one in the [`Document`]
//! shell and renders it to a complete HTML string with `dioxus-ssr`.

pub mod components;
pub mod pages;

use dioxus::prelude::*;

use crate::view::components::Document;

/// Renders `body` inside the document shell, wrapped in the doctype and `<html>` root.
pub fn render_page(title: String, body: Element) -> String {
    let html = dioxus_ssr::render_element(rsx!(
        Document { title: title,
            {body}
        }
    ));

    format!("<!DOCTYPE html><html lang=\"en\">{}</html>", html)
}
