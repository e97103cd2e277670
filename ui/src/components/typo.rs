//! Shared typography pieces.

#![allow(non_snake_case)]

use dioxus::prelude::*;

/// Heading placed above a chart inside a card.
#[component]
pub fn ChartTitle(children: Element) -> Element {
    rsx! { h2 { class: "chart-title", {children} } }
}
