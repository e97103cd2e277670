//! Wire types for the miner payment endpoints.

use serde::Deserialize;

/// One payout event as served by `/miner/paymentsChart`.
///
/// `value` and `fee` are integers in the coin's smallest unit; the
/// server orders records newest-first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct PaymentRecord {
    /// Seconds since the UNIX epoch.
    pub timestamp: i64,
    /// Amount paid out, in smallest units.
    pub value: i64,
    /// Transaction fee charged for the payout, in smallest units.
    pub fee: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_wire_payload() {
        let records: Vec<PaymentRecord> = serde_json::from_str(
            r#"[{"fee":1000000,"timestamp":1700000000,"value":500000000}]"#,
        )
        .unwrap();
        assert_eq!(
            records,
            vec![PaymentRecord {
                timestamp: 1_700_000_000,
                value: 500_000_000,
                fee: 1_000_000,
            }]
        );
    }
}
