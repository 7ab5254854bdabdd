//! Catalog use-case service.
//!
//! # Responsibility
//! - Provide stable CRUD entry points for catalog callers.
//! - Delegate persistence to repository implementations.
//!
//! # Invariants
//! - Service APIs never bypass repository persistence contracts.
//! - Service layer remains storage-agnostic.

use crate::model::category::{Category, CategoryId};
use crate::model::product::{Product, ProductId};
use crate::repo::catalog_repo::{CatalogRepository, RepoResult};
use log::info;

/// Use-case service wrapper for catalog CRUD operations.
pub struct CatalogService<R: CatalogRepository> {
    repo: R,
}

impl<R: CatalogRepository> CatalogService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Creates a new category.
    ///
    /// # Contract
    /// - Fails with `ConstraintViolation` when `name` is already taken.
    pub fn create_category(&self, name: &str) -> RepoResult<Category> {
        let category = self.repo.create_category(name)?;
        info!(
            "event=category_created module=service status=ok category_id={}",
            category.id
        );
        Ok(category)
    }

    /// Creates a new product under an existing category.
    ///
    /// # Contract
    /// - Fails with `ConstraintViolation` when `category_id` does not
    ///   reference an existing category.
    pub fn create_product(
        &self,
        name: &str,
        price: f64,
        category_id: CategoryId,
    ) -> RepoResult<Product> {
        let product = self.repo.create_product(name, price, category_id)?;
        info!(
            "event=product_created module=service status=ok product_id={} category_id={}",
            product.id, category_id
        );
        Ok(product)
    }

    /// Lists all products assigned to one category.
    pub fn products_by_category(&self, category_id: CategoryId) -> RepoResult<Vec<Product>> {
        self.repo.products_by_category(category_id)
    }

    /// Moves a product to another category.
    ///
    /// Returns `Ok(None)` when the product does not exist; a missing target
    /// category fails with `ConstraintViolation`.
    pub fn update_product_category(
        &self,
        product_id: ProductId,
        new_category_id: CategoryId,
    ) -> RepoResult<Option<Product>> {
        let updated = self.repo.update_product_category(product_id, new_category_id)?;
        match &updated {
            Some(product) => info!(
                "event=product_moved module=service status=ok product_id={} category_id={}",
                product.id, new_category_id
            ),
            None => info!(
                "event=product_moved module=service status=not_found product_id={product_id}"
            ),
        }
        Ok(updated)
    }

    /// Deletes a category together with every product it owns.
    ///
    /// A nonexistent id is a no-op, not an error.
    pub fn delete_category_and_products(&self, category_id: CategoryId) -> RepoResult<()> {
        self.repo.delete_category_and_products(category_id)?;
        info!(
            "event=category_deleted module=service status=ok category_id={category_id}"
        );
        Ok(())
    }

    /// Gets one product by id.
    pub fn get_product(&self, product_id: ProductId) -> RepoResult<Option<Product>> {
        self.repo.get_product(product_id)
    }

    /// Lists all categories.
    pub fn list_categories(&self) -> RepoResult<Vec<Category>> {
        self.repo.list_categories()
    }

    /// Lists all products.
    pub fn list_products(&self) -> RepoResult<Vec<Product>> {
        self.repo.list_products()
    }
}
