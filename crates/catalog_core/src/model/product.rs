//! Product domain model.
//!
//! # Invariants
//! - `id` is store-assigned and never reused for another product.
//! - A non-null `category_id` always references an existing category;
//!   the foreign key makes any other state unrepresentable in storage.

use crate::model::category::CategoryId;
use serde::{Deserialize, Serialize};

/// Stable identifier for a persisted product.
pub type ProductId = i64;

/// A priced item belonging to at most one category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Store-assigned row id.
    pub id: ProductId,
    /// Display name. Not unique.
    pub name: String,
    /// Monetary amount. Non-negative by convention; the store does not
    /// enforce a range.
    pub price: f64,
    /// Owning category, or `None` for an unassigned product.
    pub category_id: Option<CategoryId>,
}

impl Product {
    /// Returns whether this product is assigned to the given category.
    pub fn is_in_category(&self, category_id: CategoryId) -> bool {
        self.category_id == Some(category_id)
    }
}
