//=============================================================================
// File: src/screens/dashboard.rs
//=============================================================================
use api::Block;
use api::Snapshot;
use dioxus::prelude::*;

use crate::components::empty_state::EmptyState;
use crate::components::gas_bar::GasBar;
use crate::components::hash_display::HashDisplay;
use crate::components::pico::Card;
use crate::components::pico::Grid;
use crate::components::pico::TitledCard;
use crate::dashboard::Presentation;
use crate::dashboard::REFRESH_INTERVAL;
use crate::format::format_block_number;
use crate::format::format_timestamp;
use crate::format::transaction_preview;
use crate::format::TransactionPreview;
use crate::format::NO_VALUE;
use crate::format::PREVIEW_LEN;
use crate::hooks::use_block_poller::use_block_poller;
use crate::AppState;

#[component]
pub fn BlockDashboard() -> Element {
    let app_state = use_context::<AppState>();
    let dashboard = use_block_poller(app_state.client.clone());

    rsx! {
        match dashboard.read().view().presentation() {
            Presentation::Loading => rsx! {
                Card {
                    p { "Loading blockchain data..." }
                    progress {}
                }
            },
            Presentation::Unavailable { message, stale } => rsx! {
                div {
                    class: "error-banner",
                    role: "alert",
                    "{message}"
                }
                if let Some(snapshot) = stale {
                    p {
                        class: "stale-notice",
                        "Showing the last block received before the error."
                    }
                    BlockPanels {
                        snapshot: snapshot.clone(),
                        stale: true,
                    }
                }
            },
            Presentation::Ready { snapshot, refreshing } => rsx! {
                BlockPanels {
                    snapshot: snapshot.clone(),
                    stale: false,
                }
                if refreshing {
                    p { class: "muted", "Refreshing..." }
                }
            },
        }
    }
}

#[component]
fn BlockPanels(snapshot: Snapshot, stale: bool) -> Element {
    let class = if stale { "panels stale" } else { "panels" };
    let secs = REFRESH_INTERVAL.as_secs();

    rsx! {
        div {
            class: "{class}",
            CurrentBlockCard {
                block_number: snapshot.block_number,
                block: snapshot.block.clone(),
            }
            TransactionPreviewCard {
                transactions: snapshot.block.transactions.clone(),
            }
            p {
                class: "muted",
                "Data updates automatically every {secs} seconds"
            }
        }
    }
}

#[component]
fn CurrentBlockCard(block_number: u64, block: Block) -> Element {
    let miner = if block.miner.is_empty() {
        NO_VALUE.to_string()
    } else {
        block.miner.clone()
    };

    rsx! {
        TitledCard {
            title: "Current Block",
            accent: "#4e6096",
            badge: format_block_number(block_number),
            Grid {
                div {
                    h3 { class: "field-label", "Timestamp" }
                    p { "{format_timestamp(Some(block.timestamp))}" }

                    HashDisplay {
                        label: "Miner",
                        value: miner,
                    }

                    h3 { class: "field-label", "Transaction Count" }
                    p { "{block.transaction_count()} transactions" }
                }
                div {
                    GasBar {
                        block: block.clone(),
                    }
                    HashDisplay {
                        label: "Block Hash",
                        value: block.hash.clone(),
                    }
                    HashDisplay {
                        label: "Parent Hash",
                        value: block.parent_hash.clone(),
                    }
                }
            }
        }
    }
}

#[component]
fn TransactionPreviewCard(transactions: Vec<String>) -> Element {
    rsx! {
        TitledCard {
            title: "Transaction Preview",
            accent: "#7e57c2",
            match transaction_preview(&transactions) {
                TransactionPreview::Empty => rsx! {
                    EmptyState {
                        title: "No transactions in this block",
                    }
                },
                TransactionPreview::Listed { shown, total, remaining } => rsx! {
                    p {
                        "Showing the first {PREVIEW_LEN} of {total} transactions in this block:"
                    }
                    for (index, tx) in shown.iter().enumerate() {
                        p {
                            key: "{index}",
                            class: "hash-value",
                            code { "{tx}" }
                        }
                    }
                    if remaining > 0 {
                        p {
                            class: "muted",
                            style: "text-align: center;",
                            "...and {remaining} more transactions"
                        }
                    }
                },
            }
        }
    }
}
