//! Query/filter engine: derived read views over the store's collections.
//!
//! Everything here is a pure function over borrowed slices; the store is
//! never mutated and results preserve insertion order unless an operation
//! explicitly sorts.

pub mod filter;
pub mod recent;

#[cfg(test)]
mod testutil;

pub use filter::{filter_products, ProductFilter};
pub use recent::recent_products;
