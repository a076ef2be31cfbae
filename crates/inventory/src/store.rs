//! The inventory store: authoritative owner of both collections.
//!
//! Operations follow validate-then-apply: every check runs before the first
//! mutation, so a failed operation leaves the collections untouched. Each
//! successful mutation is written back to the key-value backend in full
//! (both records are small; no partial updates).

use std::sync::Arc;

use chrono::Utc;

use stockroom_core::{CategoryId, Entity, InventoryError, InventoryResult, ProductId};
use stockroom_storage::{KeyValueStore, CATEGORIES_KEY, PRODUCTS_KEY};

use crate::category::{self, Category, CategoryPatch, NewCategory};
use crate::product::{NewProduct, Product, ProductPatch};
use crate::stats::{self, InventoryStats};
use crate::validate;

/// Owner of the product and category collections.
///
/// Construct with [`InventoryStore::open`]; pass by reference to callers.
/// There is intentionally no ambient/global instance.
pub struct InventoryStore {
    products: Vec<Product>,
    categories: Vec<Category>,
    storage: Arc<dyn KeyValueStore>,
}

impl std::fmt::Debug for InventoryStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InventoryStore")
            .field("products", &self.products)
            .field("categories", &self.categories)
            .finish_non_exhaustive()
    }
}

impl InventoryStore {
    /// Load both collections from storage.
    ///
    /// A missing product record means an empty catalog; a missing category
    /// record seeds the four default categories and persists them.
    pub fn open(storage: Arc<dyn KeyValueStore>) -> InventoryResult<Self> {
        let products: Vec<Product> = match storage.get(PRODUCTS_KEY)? {
            Some(raw) => serde_json::from_str(&raw)
                .map_err(|e| InventoryError::parse(format!("persisted product record: {e}")))?,
            None => Vec::new(),
        };

        let categories: Vec<Category> = match storage.get(CATEGORIES_KEY)? {
            Some(raw) => serde_json::from_str(&raw)
                .map_err(|e| InventoryError::parse(format!("persisted category record: {e}")))?,
            None => {
                let seeded = category::default_categories(Utc::now());
                persist(&storage, CATEGORIES_KEY, &seeded)?;
                tracing::info!("seeded {} default categories", seeded.len());
                seeded
            }
        };

        tracing::info!(
            products = products.len(),
            categories = categories.len(),
            "inventory store opened"
        );

        Ok(Self {
            products,
            categories,
            storage,
        })
    }

    /// Read-only snapshot of the product collection, in insertion order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Read-only snapshot of the category collection, in insertion order.
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn product(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id() == id)
    }

    pub fn category(&self, id: CategoryId) -> Option<&Category> {
        self.categories.iter().find(|c| c.id() == id)
    }

    /// Number of products referencing `id` (the category table badge).
    pub fn products_in_category(&self, id: CategoryId) -> usize {
        self.products
            .iter()
            .filter(|p| p.category_id == Some(id))
            .count()
    }

    /// Dashboard statistics, recomputed from the live collections.
    pub fn statistics(&self) -> InventoryStats {
        stats::compute(&self.products, &self.categories)
    }

    // ---- products ----

    /// Create a product: assign the next id, stamp `created_at`, append.
    pub fn create_product(&mut self, input: NewProduct) -> InventoryResult<Product> {
        validate::name(&input.name)?;
        validate::price(input.price)?;
        if let Some(category_id) = input.category_id {
            self.ensure_category_exists(category_id)?;
        }

        let id = self.next_product_id();
        let created = Product::new(id, input, Utc::now());
        self.products.push(created.clone());
        persist(&self.storage, PRODUCTS_KEY, &self.products)?;

        tracing::info!(%id, name = %created.name, "product created");
        Ok(created)
    }

    /// Merge `patch` into the product with `id`. `id` and `created_at` are
    /// preserved.
    pub fn update_product(&mut self, id: ProductId, patch: ProductPatch) -> InventoryResult<Product> {
        if let Some(name) = &patch.name {
            validate::name(name)?;
        }
        if let Some(price) = patch.price {
            validate::price(price)?;
        }
        if let Some(Some(category_id)) = patch.category_id {
            self.ensure_category_exists(category_id)?;
        }

        let index = self
            .products
            .iter()
            .position(|p| p.id() == id)
            .ok_or_else(|| InventoryError::not_found("product", id.get()))?;

        self.products[index].apply_patch(patch);
        persist(&self.storage, PRODUCTS_KEY, &self.products)?;

        tracing::info!(%id, "product updated");
        Ok(self.products[index].clone())
    }

    /// Remove the product with `id`. Deleting an absent id is an error.
    pub fn delete_product(&mut self, id: ProductId) -> InventoryResult<()> {
        let index = self
            .products
            .iter()
            .position(|p| p.id() == id)
            .ok_or_else(|| InventoryError::not_found("product", id.get()))?;

        self.products.remove(index);
        persist(&self.storage, PRODUCTS_KEY, &self.products)?;

        tracing::info!(%id, "product deleted");
        Ok(())
    }

    // ---- categories ----

    pub fn create_category(&mut self, input: NewCategory) -> InventoryResult<Category> {
        validate::name(&input.name)?;

        let id = self.next_category_id();
        let created = Category::new(id, input, Utc::now());
        self.categories.push(created.clone());
        persist(&self.storage, CATEGORIES_KEY, &self.categories)?;

        tracing::info!(%id, name = %created.name, "category created");
        Ok(created)
    }

    pub fn update_category(
        &mut self,
        id: CategoryId,
        patch: CategoryPatch,
    ) -> InventoryResult<Category> {
        if let Some(name) = &patch.name {
            validate::name(name)?;
        }

        let index = self
            .categories
            .iter()
            .position(|c| c.id() == id)
            .ok_or_else(|| InventoryError::not_found("category", id.get()))?;

        self.categories[index].apply_patch(patch);
        persist(&self.storage, CATEGORIES_KEY, &self.categories)?;

        tracing::info!(%id, "category updated");
        Ok(self.categories[index].clone())
    }

    /// Remove the category with `id`.
    ///
    /// Blocked while any product still references it; the error carries the
    /// dependent-product count for the notification message.
    pub fn delete_category(&mut self, id: CategoryId) -> InventoryResult<()> {
        let dependents = self.products_in_category(id);
        if dependents > 0 {
            return Err(InventoryError::conflict(dependents));
        }

        let index = self
            .categories
            .iter()
            .position(|c| c.id() == id)
            .ok_or_else(|| InventoryError::not_found("category", id.get()))?;

        self.categories.remove(index);
        persist(&self.storage, CATEGORIES_KEY, &self.categories)?;

        tracing::info!(%id, "category deleted");
        Ok(())
    }

    // ---- wholesale replacement (import) ----

    /// Replace both collections and persist them. No merge: the previous
    /// contents are discarded. Callers are expected to have confirmed the
    /// replacement with the user.
    pub fn replace_collections(
        &mut self,
        products: Vec<Product>,
        categories: Vec<Category>,
    ) -> InventoryResult<()> {
        persist(&self.storage, PRODUCTS_KEY, &products)?;
        persist(&self.storage, CATEGORIES_KEY, &categories)?;

        tracing::info!(
            products = products.len(),
            categories = categories.len(),
            "collections replaced from import"
        );
        self.products = products;
        self.categories = categories;
        Ok(())
    }

    // ---- internals ----

    fn ensure_category_exists(&self, id: CategoryId) -> InventoryResult<()> {
        if self.category(id).is_none() {
            return Err(InventoryError::validation(format!(
                "category {id} does not exist"
            )));
        }
        Ok(())
    }

    /// `max(existing) + 1`, starting at 1. Ids are never reused, which holds
    /// because deletion cannot lower the maximum below a future assignment.
    fn next_product_id(&self) -> ProductId {
        self.products
            .iter()
            .map(|p| p.id())
            .max()
            .map(ProductId::next)
            .unwrap_or(ProductId::FIRST)
    }

    fn next_category_id(&self) -> CategoryId {
        self.categories
            .iter()
            .map(|c| c.id())
            .max()
            .map(CategoryId::next)
            .unwrap_or(CategoryId::FIRST)
    }
}

fn persist<T: serde::Serialize>(
    storage: &Arc<dyn KeyValueStore>,
    key: &str,
    collection: &[T],
) -> InventoryResult<()> {
    let raw = serde_json::to_string(collection)
        .map_err(|e| InventoryError::storage(format!("encode '{key}': {e}")))?;
    storage.put(key, &raw)?;
    Ok(())
}
