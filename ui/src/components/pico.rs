//! A set of reusable, lifetime-free Dioxus components for the Pico.css framework.
//! To use, ensure you have pico.min.css linked in your main application.

#![allow(non_snake_case)] // Allow PascalCase for component function names

use dioxus::prelude::*;

//=============================================================================
// Layout Components
//=============================================================================

/// A centered container for your content.
/// Wraps content in a `<main class="container">` element.
#[component]
pub fn Container(children: Element) -> Element {
    rsx! { main { class: "container", {children} } }
}

/// A responsive grid layout.
#[component]
pub fn Grid(children: Element) -> Element {
    rsx! { div { class: "grid", {children} } }
}

//=============================================================================
// Content Components
//=============================================================================

/// A card for grouping related content.
/// Wraps content in an `<article>` element.
#[component]
pub fn Card(children: Element) -> Element {
    rsx! { article { {children} } }
}

/// A card whose header strip carries a title and, optionally, a badge on the right.
#[component]
pub fn TitledCard(title: String, accent: String, badge: Option<String>, children: Element) -> Element {
    rsx! {
        article {
            header {
                class: "card-title",
                style: "background-color: {accent};",
                h2 { style: "margin: 0;", "{title}" }
                if let Some(badge) = badge {
                    div { class: "badge", "{badge}" }
                }
            }
            {children}
        }
    }
}
