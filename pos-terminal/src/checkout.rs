//! Order assembly for checkout

use crate::money::Totals;
use serde::Serialize;
use shared::models::OrderCreate;
use shared::util::now_millis;

/// Issues receipt numbers of the form `ORD{timestamp_ms}`
///
/// Wall clocks can tick twice in the same millisecond; the sequence bumps
/// past the last issued value so two checkouts never share a number.
#[derive(Debug, Default)]
pub struct OrderIdSeq {
    last_millis: i64,
}

impl OrderIdSeq {
    pub fn new() -> Self {
        Self::default()
    }

    /// Next unique receipt number
    pub fn next_id(&mut self) -> String {
        let mut now = now_millis();
        if now <= self.last_millis {
            now = self.last_millis + 1;
        }
        self.last_millis = now;
        format!("ORD{}", now)
    }
}

/// Receipt view-model for a settled checkout
#[derive(Debug, Clone, Serialize)]
pub struct CheckoutReceipt {
    /// The order exactly as submitted to the ledger
    pub order: OrderCreate,
    /// Totals at settlement, including change due
    pub totals: Totals,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_prefixed_and_unique_under_rapid_calls() {
        let mut seq = OrderIdSeq::new();
        let mut seen = std::collections::HashSet::new();

        for _ in 0..100 {
            let id = seq.next_id();
            assert!(id.starts_with("ORD"));
            assert!(seen.insert(id), "receipt number repeated");
        }
    }

    #[test]
    fn ids_are_monotonic() {
        let mut seq = OrderIdSeq::new();
        let a: i64 = seq.next_id()[3..].parse().unwrap();
        let b: i64 = seq.next_id()[3..].parse().unwrap();
        assert!(b > a);
    }
}
