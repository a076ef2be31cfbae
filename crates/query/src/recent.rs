use stockroom_core::Entity;
use stockroom_inventory::Product;

/// Up to `n` products ordered by `created_at` descending (most recent
/// first). Ties keep the collection's original order: the sort is stable.
pub fn recent_products(products: &[Product], n: usize) -> Vec<&Product> {
    let mut by_recency: Vec<&Product> = products.iter().collect();
    by_recency.sort_by(|a, b| b.created_at().cmp(&a.created_at()));
    by_recency.truncate(n);
    by_recency
}
