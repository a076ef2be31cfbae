//! Strongly-typed identifiers used across the domain.
//!
//! Ids are small positive integers assigned sequentially (`max + 1`,
//! starting at 1) and never reused after deletion. This is safe only under
//! the single-writer model; see the concurrency notes before reusing these
//! in any multi-writer context.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::InventoryError;

/// Identifier of a product.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(u32);

/// Identifier of a category.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryId(u32);

macro_rules! impl_sequential_id {
    ($t:ty, $name:literal) => {
        impl $t {
            /// First id in an empty collection.
            pub const FIRST: Self = Self(1);

            pub fn new(value: u32) -> Self {
                Self(value)
            }

            pub fn get(self) -> u32 {
                self.0
            }

            /// The id following this one in assignment order.
            pub fn next(self) -> Self {
                Self(self.0 + 1)
            }
        }

        impl core::fmt::Display for $t {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                core::fmt::Display::fmt(&self.0, f)
            }
        }

        impl From<u32> for $t {
            fn from(value: u32) -> Self {
                Self(value)
            }
        }

        impl From<$t> for u32 {
            fn from(value: $t) -> Self {
                value.0
            }
        }

        impl FromStr for $t {
            type Err = InventoryError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let value: u32 = s
                    .parse()
                    .map_err(|e| InventoryError::validation(format!("{}: {}", $name, e)))?;
                if value == 0 {
                    return Err(InventoryError::validation(format!(
                        "{}: must be a positive integer",
                        $name
                    )));
                }
                Ok(Self(value))
            }
        }
    };
}

impl_sequential_id!(ProductId, "ProductId");
impl_sequential_id!(CategoryId, "CategoryId");
