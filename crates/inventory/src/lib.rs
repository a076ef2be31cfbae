//! Inventory domain module.
//!
//! This crate owns the product and category collections: id assignment,
//! CRUD with validate-then-apply semantics, the referential-integrity guard
//! on category deletion, stock-status derivation, and on-demand statistics.
//! Every mutation is persisted to the configured key-value backend before
//! the operation returns.

pub mod category;
pub mod product;
pub mod stats;
pub mod status;
pub mod store;

mod validate;

pub use category::{Category, CategoryPatch, NewCategory};
pub use product::{NewProduct, Product, ProductPatch, DEFAULT_MIN_STOCK};
pub use stats::InventoryStats;
pub use status::StockStatus;
pub use store::InventoryStore;
