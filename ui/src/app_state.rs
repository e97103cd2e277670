//! Defines the mutable, reactive state for the dashboard UI.

use api::coin::PoolCoin;
use dioxus::prelude::*;

/// A reactive state provided as a Dioxus context for mutable UI data.
///
/// This struct holds `Signal`s for the state that drives re-fetches and
/// re-renders: the miner address and the selected payout coin.
#[derive(Clone, Copy)]
pub struct DashboardState {
    /// The miner address whose stats the dashboard shows.
    pub address: Signal<String>,
    /// The currently selected payout coin. `None` until the user picks one.
    pub coin: Signal<Option<PoolCoin>>,
}
