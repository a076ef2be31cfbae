//! Entity trait: identity + continuity across state changes.

use chrono::{DateTime, Utc};

/// Entity marker + minimal interface.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Copy + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier. Immutable after creation.
    fn id(&self) -> Self::Id;

    /// Creation timestamp. Immutable after creation.
    fn created_at(&self) -> DateTime<Utc>;
}
