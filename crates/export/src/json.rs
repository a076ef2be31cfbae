use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use stockroom_core::{InventoryError, InventoryResult};
use stockroom_inventory::{Category, InventoryStore, Product};

/// The JSON export document: full product list, full category list, and the
/// export timestamp. This is exactly the shape [`parse_import`] accepts.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportDocument {
    pub products: Vec<Product>,
    pub categories: Vec<Category>,
    pub export_date: DateTime<Utc>,
}

/// Serialize the store's state as a pretty-printed export document.
pub fn export_json(store: &InventoryStore) -> InventoryResult<String> {
    let document = ExportDocument {
        products: store.products().to_vec(),
        categories: store.categories().to_vec(),
        export_date: Utc::now(),
    };
    let raw = serde_json::to_string_pretty(&document)
        .map_err(|e| InventoryError::storage(format!("encode export document: {e}")))?;

    tracing::info!(
        products = document.products.len(),
        categories = document.categories.len(),
        "inventory exported to JSON"
    );
    Ok(raw)
}

/// A parsed, validated import document awaiting user confirmation.
#[derive(Debug, Clone)]
pub struct ImportPreview {
    products: Vec<Product>,
    categories: Vec<Category>,
}

impl ImportPreview {
    pub fn product_count(&self) -> usize {
        self.products.len()
    }

    pub fn category_count(&self) -> usize {
        self.categories.len()
    }

    /// Replace both collections wholesale and persist. No merge.
    pub fn apply(self, store: &mut InventoryStore) -> InventoryResult<()> {
        store.replace_collections(self.products, self.categories)
    }
}

/// Validate raw import file content.
///
/// Fails with `Parse` when the content is not JSON at all and `Format` when
/// it is JSON but not an export document (both a products and a categories
/// list are required). Never touches the store.
pub fn parse_import(raw: &str) -> InventoryResult<ImportPreview> {
    let value: serde_json::Value =
        serde_json::from_str(raw).map_err(|e| InventoryError::parse(e.to_string()))?;

    let object = value
        .as_object()
        .ok_or_else(|| InventoryError::format("expected a JSON object"))?;
    let has_products = object.get("products").is_some_and(|v| v.is_array());
    let has_categories = object.get("categories").is_some_and(|v| v.is_array());
    if !has_products || !has_categories {
        return Err(InventoryError::format(
            "document must contain a products list and a categories list",
        ));
    }

    let products: Vec<Product> = serde_json::from_value(object["products"].clone())
        .map_err(|e| InventoryError::format(format!("product record: {e}")))?;
    let categories: Vec<Category> = serde_json::from_value(object["categories"].clone())
        .map_err(|e| InventoryError::format(format!("category record: {e}")))?;

    tracing::info!(
        products = products.len(),
        categories = categories.len(),
        "import document parsed"
    );
    Ok(ImportPreview {
        products,
        categories,
    })
}
