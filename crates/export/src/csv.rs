use stockroom_core::Entity;
use stockroom_inventory::InventoryStore;

/// Placeholder category name for uncategorized or unresolvable references.
const UNCATEGORIZED: &str = "Uncategorized";

const HEADER: &str = "ID,Name,Category,Price,Stock,MinStock,Description";

/// Render the product list as CSV, one row per product. Category ids are
/// resolved to names; text fields are quoted. One-way: there is no CSV
/// import.
pub fn export_csv(store: &InventoryStore) -> String {
    let mut out = String::from(HEADER);
    out.push('\n');

    for product in store.products() {
        let category = product
            .category_id
            .and_then(|id| store.category(id))
            .map(|c| c.name.as_str())
            .unwrap_or(UNCATEGORIZED);

        out.push_str(&format!(
            "{},{},{},{},{},{},{}\n",
            product.id(),
            quote(&product.name),
            quote(category),
            product.price,
            product.stock,
            product.min_stock,
            quote(product.description.as_deref().unwrap_or("")),
        ));
    }

    out
}

/// Quote a text field, doubling embedded quotes.
fn quote(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}
