//! Catalog domain records.
//!
//! # Responsibility
//! - Define the explicit row-shaped structs returned by the repository.
//! - Keep entity identity and ownership semantics documented in one place.
//!
//! # Invariants
//! - Every record is identified by a store-assigned integer id.
//! - Deleting a category destroys its products; the model never carries
//!   dangling references.

pub mod category;
pub mod product;
