//! Category domain model.
//!
//! # Invariants
//! - `id` is store-assigned and never reused for another category.
//! - `name` is unique across all categories (enforced by the store).

use serde::{Deserialize, Serialize};

/// Stable identifier for a persisted category.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type CategoryId = i64;

/// A named grouping that owns zero or more products.
///
/// Owned products are reached through explicit repository queries
/// (`products_by_category`), not through a loaded collection on this struct.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Store-assigned row id.
    pub id: CategoryId,
    /// Unique display name.
    pub name: String,
}
