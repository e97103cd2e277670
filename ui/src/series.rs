//! Turns raw payment records into the display series the chart plots.

use api::coin::PoolCoin;
use api::payment::PaymentRecord;
use chrono::DateTime;
use chrono::Utc;

/// A payment record ready for plotting: calendar instant plus
/// real-valued amounts in whole coins. Derived per render, never stored.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayPayment {
    pub date: DateTime<Utc>,
    pub value: f64,
    pub fee: f64,
}

/// Maps raw records (newest-first, smallest-unit integers) into display
/// records (oldest-first, whole coins).
///
/// Division keeps full f64 precision; rounding happens only where the
/// chart renders tooltips.
pub fn to_display_series(records: &[PaymentRecord], coin: &PoolCoin) -> Vec<DisplayPayment> {
    let scale = coin.scale();
    records
        .iter()
        .rev()
        .map(|record| DisplayPayment {
            date: DateTime::from_timestamp_millis(record.timestamp.saturating_mul(1000))
                .unwrap_or(DateTime::UNIX_EPOCH),
            value: record.value as f64 / scale,
            fee: record.fee as f64 / scale,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(timestamp: i64, value: i64, fee: i64) -> PaymentRecord {
        PaymentRecord {
            timestamp,
            value,
            fee,
        }
    }

    #[test]
    fn scales_amounts_by_decimal_places() {
        let coin = PoolCoin::new("btc", 8);
        let series = to_display_series(&[record(1_700_000_000, 500_000_000, 1_000_000)], &coin);

        assert_eq!(series.len(), 1);
        assert_eq!(series[0].date.timestamp_millis(), 1_700_000_000_000);
        assert_eq!(series[0].value, 5.0);
        assert_eq!(series[0].fee, 0.01);
    }

    #[test]
    fn keeps_sub_display_precision() {
        let coin = PoolCoin::new("btc", 8);
        let series = to_display_series(&[record(1_700_000_000, 1, 0)], &coin);
        assert_eq!(series[0].value, 1e-8);
    }

    #[test]
    fn reverses_newest_first_input_to_chronological_output() {
        let coin = PoolCoin::new("btc", 8);
        let newest_first = [
            record(3_000, 3, 0),
            record(2_000, 2, 0),
            record(1_000, 1, 0),
        ];

        let series = to_display_series(&newest_first, &coin);
        let timestamps: Vec<i64> = series.iter().map(|p| p.date.timestamp()).collect();
        assert_eq!(timestamps, vec![1_000, 2_000, 3_000]);
    }

    #[test]
    fn empty_input_yields_empty_series() {
        let coin = PoolCoin::new("btc", 8);
        assert!(to_display_series(&[], &coin).is_empty());
    }
}
