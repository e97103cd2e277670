// ui/src/components/coin_chooser.rs
#![allow(non_snake_case)]

use api::coin::PoolCoin;
use dioxus::prelude::*;

use crate::components::button::Button;
use crate::components::button::ButtonSize;

#[derive(Props, PartialEq, Clone)]
pub struct CoinChooserProps {
    /// A signal holding the currently selected payout coin.
    pub selected: Signal<Option<PoolCoin>>,
    /// The catalog of coins the pool pays out in.
    pub coins: Vec<PoolCoin>,
}

/// A dropdown for picking the payout coin the dashboard shows.
pub fn CoinChooser(mut props: CoinChooserProps) -> Element {
    let mut is_open = use_signal(|| false);

    let label = props
        .selected
        .read()
        .as_ref()
        .map(PoolCoin::display_ticker)
        .unwrap_or_else(|| "Coin".to_string());

    rsx! {
        div {
            style: "position: relative; display: inline-block;",
            Button {
                size: ButtonSize::Sm,
                on_click: move |_| is_open.toggle(),
                "{label} ↓"
            }
            if is_open() {
                // Backdrop to catch clicks outside the dropdown
                div {
                    style: "position: fixed; top: 0; left: 0; width: 100vw; height: 100vh; z-index: 9; background: transparent;",
                    onclick: move |_| is_open.set(false),
                }
                ul {
                    role: "listbox",
                    class: "coin-menu",
                    onclick: |e| e.stop_propagation(),
                    {
                        props.coins.iter().map(|coin| {
                            let ticker = coin.display_ticker();
                            let is_selected =
                                props.selected.read().as_ref() == Some(coin);
                            let choice = coin.clone();
                            rsx! {
                                li {
                                    key: "{ticker}",
                                    onclick: move |_| {
                                        props.selected.set(Some(choice.clone()));
                                        is_open.set(false);
                                    },
                                    if is_selected {
                                        span { class: "coin-check", "✓" }
                                    } else {
                                        span { class: "coin-check hidden", "✓" }
                                    }
                                    span { "{ticker}" }
                                }
                            }
                        })
                    }
                }
            }
        }
    }
}
