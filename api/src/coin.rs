//! Defines the coins a pool can pay out in, together with their
//! fixed-point scaling rules.

use serde::Deserialize;
use serde::Serialize;

/// A coin supported by the pool, as served by the `/pool/coins` catalog.
///
/// Pool APIs report amounts as integers in the coin's smallest unit
/// (satoshis, wei, ...). `decimal_places` is the exponent that converts
/// those integers into display amounts: `display = raw / 10^decimal_places`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PoolCoin {
    /// Short identifier for the currency, e.g. "btc".
    pub ticker: String,
    /// Number of decimal digits between the smallest unit and one coin.
    pub decimal_places: u8,
}

impl PoolCoin {
    pub fn new(ticker: impl Into<String>, decimal_places: u8) -> Self {
        Self {
            ticker: ticker.into(),
            decimal_places,
        }
    }

    /// The divisor that maps smallest-unit integers to display amounts.
    pub fn scale(&self) -> f64 {
        10_f64.powi(self.decimal_places as i32)
    }

    /// Uppercased ticker for labels ("btc" -> "BTC").
    pub fn display_ticker(&self) -> String {
        self.ticker.to_uppercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scale_is_a_power_of_ten() {
        assert_eq!(PoolCoin::new("btc", 8).scale(), 100_000_000.0);
        assert_eq!(PoolCoin::new("xmr", 12).scale(), 1_000_000_000_000.0);
        assert_eq!(PoolCoin::new("whole", 0).scale(), 1.0);
    }

    #[test]
    fn deserializes_camel_case_wire_names() {
        let coin: PoolCoin =
            serde_json::from_str(r#"{"ticker":"eth","decimalPlaces":18}"#).unwrap();
        assert_eq!(coin, PoolCoin::new("eth", 18));
        assert_eq!(coin.display_ticker(), "ETH");
    }
}
