use dioxus::prelude::*;

use crate::format::NO_VALUE;

/// A labelled, monospaced hash or address. Long values scroll horizontally.
#[component]
pub fn HashDisplay(label: String, value: String) -> Element {
    let shown = if value.is_empty() {
        NO_VALUE.to_string()
    } else {
        value
    };

    rsx! {
        h3 { class: "field-label", "{label}" }
        p {
            class: "hash-value",
            title: "{shown}",
            code { "{shown}" }
        }
    }
}
