// The client-side Dioxus application logic.

use dioxus::prelude::*;

mod app_state;
pub mod compat;
mod components;
pub mod dashboard;
pub mod format;
pub mod hooks;
mod screens;

use api::ProviderConfig;
use app_state::AppState;
use components::pico::Container;
use screens::dashboard::BlockDashboard;

const PICO_CSS: &str = "https://cdn.jsdelivr.net/npm/@picocss/pico@2/css/pico.cyan.min.css";

//=============================================================================
// MAIN APPLICATION COMPONENT (Client-side)
//=============================================================================

#[allow(non_snake_case)]
pub fn App() -> Element {
    // the provider configuration is read once, when the app first mounts.
    let app_state = use_context_provider(|| AppState::new(ProviderConfig::from_env()));

    let dashboard_css = r#"
    * { box-sizing: border-box; }

    .app-header { text-align: center; margin: 1rem 0 2rem 0; }
    .app-header p { color: var(--pico-muted-color); }

    .card-title {
        display: flex;
        justify-content: space-between;
        align-items: center;
        padding: 10px;
        border-radius: 5px;
        margin-bottom: 20px;
        color: #fff;
    }
    .card-title .badge {
        background-color: #282c34;
        padding: 8px 15px;
        border-radius: 5px;
        font-family: monospace;
        font-size: 1.5rem;
    }

    .field-label { color: #aaa; margin-bottom: 5px; margin-top: 20px; font-size: 1rem; }

    .hash-value {
        font-family: monospace;
        overflow-x: auto;
        font-size: 0.9rem;
        white-space: nowrap;
    }

    .gas-track {
        width: 100%;
        background-color: #282c34;
        height: 20px;
        border-radius: 10px;
        margin-bottom: 5px;
    }
    .gas-fill { background-color: #61dafb; height: 100%; border-radius: 10px; }

    .error-banner {
        background-color: #f44336;
        color: #fff;
        padding: 20px;
        border-radius: 5px;
        margin-bottom: 1rem;
    }
    .panels.stale { opacity: 0.6; }
    .muted, .stale-notice { color: var(--pico-muted-color); }
"#;

    rsx! {
        document::Meta {
            name: "viewport",
            content: "width=device-width, initial-scale=1.0",
        }
        document::Stylesheet {
            href: "{PICO_CSS}",
        }
        style {
            "{dashboard_css}"
        }
        Container {
            header {
                class: "app-header",
                h1 { "Ethereum Block Explorer" }
                p { "Real-time Ethereum blockchain information" }
                small { "network: {app_state.network}" }
            }
            BlockDashboard {}
        }
    }
}
