use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use stockroom_core::{CategoryId, Entity, ProductId};

/// Minimum-stock threshold applied when none is supplied.
pub const DEFAULT_MIN_STOCK: u32 = 5;

/// A catalog product.
///
/// Field names serialize in camelCase; this is both the persisted record
/// shape and the export/import wire shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    id: ProductId,
    pub name: String,
    /// `None` means uncategorized.
    pub category_id: Option<CategoryId>,
    pub price: f64,
    pub stock: u32,
    pub min_stock: u32,
    #[serde(default)]
    pub description: Option<String>,
    /// Opaque reference string (URL, data URI, ...); never interpreted.
    #[serde(default)]
    pub image: Option<String>,
    created_at: DateTime<Utc>,
}

impl Product {
    pub(crate) fn new(id: ProductId, input: NewProduct, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            name: input.name,
            category_id: input.category_id,
            price: input.price,
            stock: input.stock,
            min_stock: input.min_stock.unwrap_or(DEFAULT_MIN_STOCK),
            description: input.description,
            image: input.image,
            created_at,
        }
    }

    /// Merge patch fields into this record. `id` and `created_at` are
    /// untouched by design; the patch must already be validated.
    pub(crate) fn apply_patch(&mut self, patch: ProductPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(category_id) = patch.category_id {
            self.category_id = category_id;
        }
        if let Some(price) = patch.price {
            self.price = price;
        }
        if let Some(stock) = patch.stock {
            self.stock = stock;
        }
        if let Some(min_stock) = patch.min_stock {
            self.min_stock = min_stock;
        }
        if let Some(description) = patch.description {
            self.description = Some(description);
        }
        if let Some(image) = patch.image {
            self.image = Some(image);
        }
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> ProductId {
        self.id
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

/// Input for product creation, as supplied by the presentation adapter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewProduct {
    pub name: String,
    pub category_id: Option<CategoryId>,
    pub price: f64,
    pub stock: u32,
    /// Defaults to [`DEFAULT_MIN_STOCK`] when `None`.
    pub min_stock: Option<u32>,
    pub description: Option<String>,
    pub image: Option<String>,
}

/// Partial update for an existing product.
///
/// `None` fields are left unchanged. `category_id` is doubly optional so a
/// patch can also clear the category (`Some(None)`).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductPatch {
    pub name: Option<String>,
    pub category_id: Option<Option<CategoryId>>,
    pub price: Option<f64>,
    pub stock: Option<u32>,
    pub min_stock: Option<u32>,
    pub description: Option<String>,
    pub image: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn patch_leaves_unspecified_fields_alone() {
        let input = NewProduct {
            name: "Hammer".to_string(),
            category_id: Some(CategoryId::new(1)),
            price: 9.99,
            stock: 3,
            min_stock: None,
            description: Some("claw hammer".to_string()),
            image: None,
        };
        let mut product = Product::new(ProductId::FIRST, input, Utc::now());
        let before_created = product.created_at();

        product.apply_patch(ProductPatch {
            price: Some(12.5),
            category_id: Some(None),
            ..Default::default()
        });

        assert_eq!(product.price, 12.5);
        assert_eq!(product.category_id, None);
        assert_eq!(product.name, "Hammer");
        assert_eq!(product.stock, 3);
        assert_eq!(product.min_stock, DEFAULT_MIN_STOCK);
        assert_eq!(product.created_at(), before_created);
    }

    #[test]
    fn wire_shape_uses_camel_case_field_names() {
        let input = NewProduct {
            name: "Hammer".to_string(),
            category_id: None,
            price: 9.99,
            stock: 0,
            min_stock: Some(2),
            description: None,
            image: None,
        };
        let product = Product::new(ProductId::FIRST, input, Utc::now());
        let json = serde_json::to_value(&product).unwrap();

        assert_eq!(json["minStock"], 2);
        assert!(json.get("categoryId").is_some());
        assert!(json.get("createdAt").is_some());
        assert!(json.get("min_stock").is_none());
    }
}
