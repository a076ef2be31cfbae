//! Dashboard statistics, recomputed on demand from the live collections.

use serde::Serialize;

use crate::category::Category;
use crate::product::Product;
use crate::status::StockStatus;

/// Aggregate figures shown on the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryStats {
    pub total_products: usize,
    /// Σ price × stock over all products.
    pub total_value: f64,
    /// Count of products whose derived status is LOW.
    pub low_stock: usize,
    pub total_categories: usize,
}

pub(crate) fn compute(products: &[Product], categories: &[Category]) -> InventoryStats {
    InventoryStats {
        total_products: products.len(),
        total_value: products
            .iter()
            .map(|p| p.price * f64::from(p.stock))
            .sum(),
        low_stock: products
            .iter()
            .filter(|p| StockStatus::derive(p.stock, p.min_stock) == StockStatus::Low)
            .count(),
        total_categories: categories.len(),
    }
}
