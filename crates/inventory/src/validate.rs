//! Input validation shared by the store's create/update paths.
//!
//! Checks run before any mutation, so a rejected input leaves the
//! collections untouched.

use stockroom_core::{InventoryError, InventoryResult};

pub(crate) fn name(name: &str) -> InventoryResult<()> {
    if name.trim().is_empty() {
        return Err(InventoryError::validation("name cannot be empty"));
    }
    Ok(())
}

pub(crate) fn price(price: f64) -> InventoryResult<()> {
    if !price.is_finite() {
        return Err(InventoryError::validation("price must be a finite number"));
    }
    if price < 0.0 {
        return Err(InventoryError::validation("price cannot be negative"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_names_are_rejected() {
        assert!(name("   ").is_err());
        assert!(name("").is_err());
        assert!(name("Hammer").is_ok());
    }

    #[test]
    fn negative_and_non_finite_prices_are_rejected() {
        assert!(price(-0.01).is_err());
        assert!(price(f64::NAN).is_err());
        assert!(price(f64::INFINITY).is_err());
        assert!(price(0.0).is_ok());
        assert!(price(9.99).is_ok());
    }
}
