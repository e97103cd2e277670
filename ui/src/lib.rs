// The client-side Dioxus application logic.

use dioxus::prelude::*;

mod app_state;
pub mod chart;
mod components;
pub mod date_utils;
pub mod hooks;
mod screens;
pub mod series;
pub mod theme;

use app_state::DashboardState;
use components::pico::Container;
use screens::dashboard::DashboardScreen;
use theme::Theme;

//=============================================================================
// MAIN APPLICATION COMPONENT (Client-side)
//=============================================================================

#[allow(non_snake_case)]
pub fn App() -> Element {
    let app_css = r#"
    * { box-sizing: border-box; }

    :root {
        --bg-primary: #ffffff;
        --bg-secondary: #f6f7fb;
        --border-color: #eae8f0;
        --text-primary: #111432;
        --text-muted: #6b7280;
    }

    html, body {
        margin: 0;
        padding: 0;
        background-color: var(--bg-secondary);
        color: var(--text-primary);
        font-family: Inter, system-ui, sans-serif;
    }

    .container {
        max-width: 1200px;
        margin: 0 auto;
        padding: 0 1rem;
    }

    header h1 {
        font-size: 1.5rem;
        margin: 1rem 0;
    }

    .card {
        background: var(--bg-primary);
        border: 1px solid var(--border-color);
        border-radius: 5px;
        margin-bottom: 1rem;
    }
    .card.padded { padding: 1.25rem; }

    .chart-title {
        font-size: 1.125rem;
        font-weight: 600;
        margin: 0 0 1rem 0;
    }

    .muted { color: var(--text-muted); }

    .dashboard-controls {
        display: flex;
        align-items: flex-end;
        gap: 1rem;
    }
    .dashboard-controls label { flex: 1; display: block; }
    .dashboard-controls input {
        display: block;
        width: 100%;
        height: 42px;
        margin-top: 0.25rem;
        padding: 0 0.75rem;
        border: 1px solid var(--border-color);
        border-radius: 4px;
    }

    .btn {
        transition: 0.2s all;
        display: inline-flex;
        align-items: center;
        padding-left: 1rem;
        padding-right: 1rem;
        border-radius: 4px;
        border: 1px solid var(--border-color);
        outline: none;
        font-size: 1rem;
        font-weight: 700;
        cursor: pointer;
    }
    .btn:hover, .btn:active, .btn:focus {
        background: #fafafb;
        border-color: var(--border-color);
    }
    .btn[data-variant]:not([data-variant="none"]):hover {
        box-shadow: inset 10px 50px 10px -20px rgba(0, 0, 0, 0.05);
    }
    .btn:active {
        box-shadow: inset 0 0 40px 0 rgba(0, 0, 0, 0.1);
    }
    .btn:disabled {
        pointer-events: none;
        opacity: 0.3;
    }
    .btn > * { pointer-events: none; }

    .coin-menu {
        position: absolute;
        min-width: 100%;
        z-index: 10;
        list-style: none;
        margin: 0.25rem 0 0 0;
        padding: 0.25rem;
        background-color: var(--bg-primary);
        border: 1px solid var(--border-color);
        border-radius: 4px;
        max-height: 250px;
        overflow-y: auto;
    }
    .coin-menu li {
        display: flex;
        align-items: center;
        cursor: pointer;
        padding: 0.3rem 0.5rem;
        white-space: nowrap;
    }
    .coin-menu li:hover { background: var(--bg-secondary); }
    .coin-check { width: 1.5rem; }
    .coin-check.hidden { visibility: hidden; }
"#;

    // Theme and dashboard state are provided once, at the top of the tree.
    use_context_provider(Theme::default);

    let address = use_signal(String::new);
    let coin = use_signal(|| None);
    use_context_provider(|| DashboardState { address, coin });

    rsx! {
        document::Meta {
            name: "viewport",
            content: "width=device-width, initial-scale=1.0",
        }
        style {
            "{app_css}"
        }
        Container {
            header {
                h1 { "Miner Dashboard" }
            }
            div {
                class: "content",
                DashboardScreen {}
            }
        }
    }
}
