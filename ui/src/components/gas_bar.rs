use api::Block;
use dioxus::prelude::*;

use crate::format::format_gas_value;
use crate::format::gas_usage_percentage;

/// Gas used against the gas limit, as a bar plus the raw counts.
#[component]
pub fn GasBar(block: Block) -> Element {
    let percentage = gas_usage_percentage(Some(&block));
    let used = format_gas_value(Some(block.gas_used));
    let limit = format_gas_value(Some(block.gas_limit));

    rsx! {
        h3 { class: "field-label", "Gas Used / Gas Limit" }
        div {
            class: "gas-track",
            div {
                class: "gas-fill",
                style: "width: {percentage};",
            }
        }
        p {
            style: "font-size: 0.9rem;",
            "{used} / {limit} ({percentage})"
        }
    }
}
