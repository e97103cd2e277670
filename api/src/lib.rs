//! This crate contains the wire types and REST client for the pool's
//! public API.

pub mod coin;
pub mod config;
pub mod error;
pub mod payment;

use coin::PoolCoin;
use dioxus_logger::tracing;
use error::ApiError;
use payment::PaymentRecord;

/// Retrieves the catalog of coins the pool pays out in.
pub async fn pool_coins() -> Result<Vec<PoolCoin>, ApiError> {
    const ENDPOINT: &str = "/pool/coins";

    let url = format!("{}{}", config::base_url(), ENDPOINT);
    let client = reqwest::Client::new();
    let resp = client.get(&url).send().await?;

    if !resp.status().is_success() {
        return Err(ApiError::Status {
            status: resp.status(),
            endpoint: ENDPOINT,
        });
    }

    let coins = resp.json::<Vec<PoolCoin>>().await?;
    tracing::info!("loaded {} coins from the pool catalog", coins.len());
    Ok(coins)
}

/// Retrieves the payment history for one miner, newest-first.
///
/// No retry happens here; callers decide how a failed cycle is surfaced.
pub async fn payments_chart(
    address: &str,
    coin: &str,
) -> Result<Vec<PaymentRecord>, ApiError> {
    const ENDPOINT: &str = "/miner/paymentsChart";

    let url = format!("{}{}", config::base_url(), ENDPOINT);
    let client = reqwest::Client::new();
    let resp = client
        .get(&url)
        .query(&[("address", address), ("coin", coin)])
        .send()
        .await?;

    if !resp.status().is_success() {
        tracing::warn!(
            "payments chart request for {address} ({coin}) failed: {}",
            resp.status()
        );
        return Err(ApiError::Status {
            status: resp.status(),
            endpoint: ENDPOINT,
        });
    }

    let records = resp.json::<Vec<PaymentRecord>>().await?;
    tracing::info!(
        "loaded {} payment records for {address} ({coin})",
        records.len()
    );
    Ok(records)
}
