//! Stock-status derivation: the single source of truth for the OUT/LOW/OK
//! classification. Every view (tables, dashboard, filters, statistics) must
//! go through [`StockStatus::derive`] rather than re-deriving thresholds.

use serde::{Deserialize, Serialize};

/// Derived classification of current stock against the minimum threshold.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StockStatus {
    /// Stock is exhausted (`stock == 0`).
    Out,
    /// Stock is positive but at or below the minimum threshold.
    Low,
    /// Stock is above the minimum threshold.
    Ok,
}

impl StockStatus {
    /// Classify `stock` against `min_stock`.
    pub fn derive(stock: u32, min_stock: u32) -> Self {
        if stock == 0 {
            StockStatus::Out
        } else if stock <= min_stock {
            StockStatus::Low
        } else {
            StockStatus::Ok
        }
    }

    /// Badge text for the presentation adapter.
    pub fn label(self) -> &'static str {
        match self {
            StockStatus::Out => "Out of Stock",
            StockStatus::Low => "Low Stock",
            StockStatus::Ok => "In Stock",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_stock_is_out_regardless_of_threshold() {
        assert_eq!(StockStatus::derive(0, 0), StockStatus::Out);
        assert_eq!(StockStatus::derive(0, 5), StockStatus::Out);
        assert_eq!(StockStatus::derive(0, 1000), StockStatus::Out);
    }

    #[test]
    fn stock_at_threshold_is_low() {
        assert_eq!(StockStatus::derive(5, 5), StockStatus::Low);
        assert_eq!(StockStatus::derive(1, 5), StockStatus::Low);
    }

    #[test]
    fn stock_above_threshold_is_ok() {
        assert_eq!(StockStatus::derive(6, 5), StockStatus::Ok);
        assert_eq!(StockStatus::derive(1, 0), StockStatus::Ok);
    }

    #[test]
    fn serializes_lowercase() {
        assert_eq!(serde_json::to_string(&StockStatus::Out).unwrap(), "\"out\"");
        assert_eq!(serde_json::to_string(&StockStatus::Low).unwrap(), "\"low\"");
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: the three states partition (stock, min_stock) space.
            #[test]
            fn classification_is_total_and_consistent(stock in 0u32..10_000, min_stock in 0u32..10_000) {
                let status = StockStatus::derive(stock, min_stock);
                match status {
                    StockStatus::Out => prop_assert_eq!(stock, 0),
                    StockStatus::Low => prop_assert!(stock > 0 && stock <= min_stock),
                    StockStatus::Ok => prop_assert!(stock > min_stock),
                }
            }

            /// Property: zero stock is always OUT, whatever the threshold.
            #[test]
            fn zero_stock_is_always_out(min_stock in 0u32..u32::MAX) {
                prop_assert_eq!(StockStatus::derive(0, min_stock), StockStatus::Out);
            }
        }
    }
}
