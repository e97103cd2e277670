//! The payment-history widget: fetches a miner's payouts, converts them
//! to display units, and drives the chart instance across renders.

#![allow(non_snake_case)]

use api::coin::PoolCoin;
use api::error::ApiError;
use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::chart::ChartConfig;
use crate::chart::ChartLifecycle;
use crate::components::button::Button;
use crate::components::button::ButtonSize;
use crate::components::pico::Card;
use crate::components::typo::ChartTitle;
use crate::series;
use crate::series::DisplayPayment;

#[derive(Props, PartialEq, Clone)]
pub struct PaymentsChartProps {
    /// The miner address whose payouts are shown.
    pub address: Signal<String>,
    /// The selected payout coin; the widget idles while `None`.
    pub coin: Signal<Option<PoolCoin>>,
}

pub fn PaymentsChart(props: PaymentsChartProps) -> Element {
    let address = props.address;
    let coin = props.coin;

    // Effect one: on address/coin change, fetch. The previous dataset is
    // never partially overwritten; a failed cycle surfaces below as an
    // error card with a retry.
    let mut payments = use_resource(move || async move {
        let address = address();
        match coin() {
            Some(coin) => {
                let raw = api::payments_chart(&address, &coin.ticker).await?;
                Ok(series::to_display_series(&raw, &coin))
            }
            None => Ok::<Vec<DisplayPayment>, ApiError>(Vec::new()),
        }
    });

    // Effect two: on coin/data change, rebuild the chart. The lifecycle
    // disposes the prior instance before any replacement exists, and the
    // signal dropping on unmount disposes whatever is left.
    let mut chart = use_signal(ChartLifecycle::default);
    use_effect(move || {
        let selected = coin();
        let data = payments.read();
        match (&selected, &*data) {
            (Some(coin), Some(Ok(points))) if !points.is_empty() => {
                let config = ChartConfig::payments(coin);
                chart.with_mut(|lifecycle| {
                    let id = lifecycle.render(&config, points);
                    tracing::debug!("payments chart instance {id} bound to {} points", points.len());
                });
            }
            _ => chart.with_mut(ChartLifecycle::clear),
        }
    });

    use_drop(move || chart.with_mut(ChartLifecycle::clear));

    let body = if coin.read().is_none() {
        rsx! {
            p { class: "muted", "Select a coin to see payment history." }
        }
    } else {
        match &*payments.read() {
            None => rsx! {
                p { "Loading payments..." }
                progress {}
            },
            Some(Err(e)) => rsx! {
                p { "Failed to load payments: {e}" }
                Button {
                    size: ButtonSize::Sm,
                    on_click: move |_| payments.restart(),
                    "Retry"
                }
            },
            Some(Ok(points)) if points.is_empty() => rsx! {
                p { class: "muted", "No payments yet." }
            },
            Some(Ok(_)) => {
                let markup = chart
                    .read()
                    .svg()
                    .unwrap_or_default()
                    .to_string();
                rsx! {
                    div {
                        id: "payments-chart",
                        style: "width: 100%; height: 250px;",
                        dangerous_inner_html: markup,
                    }
                }
            }
        }
    };

    rsx! {
        Card {
            ChartTitle { "Payments This Year" }
            {body}
        }
    }
}
