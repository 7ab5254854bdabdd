//! Core persistence logic for the product catalog.
//! This crate is the single source of truth for catalog storage invariants.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::category::{Category, CategoryId};
pub use model::product::{Product, ProductId};
pub use repo::catalog_repo::{CatalogRepository, RepoError, RepoResult, SqliteCatalogRepository};
pub use service::catalog_service::CatalogService;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
