//=============================================================================
// File: src/screens/dashboard.rs
//=============================================================================
use dioxus::prelude::*;

use crate::app_state::DashboardState;
use crate::components::coin_chooser::CoinChooser;
use crate::components::payments_chart::PaymentsChart;
use crate::components::pico::Card;

#[allow(non_snake_case)]
#[component]
pub fn DashboardScreen() -> Element {
    let state = use_context::<DashboardState>();
    let mut address = state.address;

    let mut coins = use_resource(move || async move { api::pool_coins().await });

    rsx! {
        match &*coins.read() {
            None => rsx! {
                Card {
                    p { "Loading the coin catalog..." }
                    progress {}
                }
            },
            Some(Err(e)) => rsx! {
                Card {
                    h3 { "Error" }
                    p { "Failed to load the coin catalog: {e}" }
                    button { onclick: move |_| coins.restart(), "Retry" }
                }
            },
            Some(Ok(catalog)) => rsx! {
                Card {
                    div {
                        class: "dashboard-controls",
                        label {
                            "Miner address"
                            input {
                                r#type: "text",
                                name: "address",
                                placeholder: "Your payout address",
                                value: "{address}",
                                oninput: move |evt| address.set(evt.value()),
                            }
                        }
                        CoinChooser {
                            selected: state.coin,
                            coins: catalog.clone(),
                        }
                    }
                }
                PaymentsChart {
                    address: state.address,
                    coin: state.coin,
                }
            },
        }
    }
}
