use serde::{Deserialize, Serialize};

use stockroom_core::CategoryId;
use stockroom_inventory::{Product, StockStatus};

/// Filter criteria for product queries.
///
/// Absent fields match everything, so `ProductFilter::default()` selects the
/// full collection.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductFilter {
    /// Case-insensitive substring matched against name or description.
    pub text: Option<String>,
    /// Exact category match.
    pub category_id: Option<CategoryId>,
    /// Derived stock-status match (the UI offers LOW and OUT).
    pub stock_state: Option<StockStatus>,
}

/// Return the products matching `filter`, preserving insertion order.
pub fn filter_products<'a>(products: &'a [Product], filter: &ProductFilter) -> Vec<&'a Product> {
    products.iter().filter(|p| matches(p, filter)).collect()
}

fn matches(product: &Product, filter: &ProductFilter) -> bool {
    if let Some(text) = &filter.text {
        let needle = text.to_lowercase();
        let in_name = product.name.to_lowercase().contains(&needle);
        let in_description = product
            .description
            .as_deref()
            .is_some_and(|d| d.to_lowercase().contains(&needle));
        if !in_name && !in_description {
            return false;
        }
    }

    if let Some(category_id) = filter.category_id {
        if product.category_id != Some(category_id) {
            return false;
        }
    }

    if let Some(state) = filter.stock_state {
        if StockStatus::derive(product.stock, product.min_stock) != state {
            return false;
        }
    }

    true
}
