//! Catalog repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide stable CRUD APIs over the `categories` and `products` tables.
//! - Keep SQL details inside the persistence boundary.
//!
//! # Invariants
//! - Every write is a single autocommit statement; an operation either
//!   commits fully or leaves prior state unchanged.
//! - Cascade removal of owned products rides on the `ON DELETE CASCADE`
//!   foreign key, so category deletion stays one atomic statement.
//! - Missing rows on update/delete are normal outcomes, not errors.

use crate::db::migrations::latest_version;
use crate::db::DbError;
use crate::model::category::{Category, CategoryId};
use crate::model::product::{Product, ProductId};
use rusqlite::{params, Connection, ErrorCode, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};

const CATEGORY_SELECT_SQL: &str = "SELECT id, name FROM categories";
const PRODUCT_SELECT_SQL: &str = "SELECT id, name, price, category_id FROM products";

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for catalog persistence and query operations.
#[derive(Debug)]
pub enum RepoError {
    /// A uniqueness or foreign-key rule rejected the write.
    ConstraintViolation(String),
    Db(DbError),
    UninitializedConnection {
        expected_version: u32,
        actual_version: u32,
    },
    MissingRequiredTable(&'static str),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ConstraintViolation(message) => {
                write!(f, "constraint violation: {message}")
            }
            Self::Db(err) => write!(f, "{err}"),
            Self::UninitializedConnection {
                expected_version,
                actual_version,
            } => write!(
                f,
                "connection is not bootstrapped: schema version {actual_version}, expected {expected_version}"
            ),
            Self::MissingRequiredTable(table) => {
                write!(f, "required table `{table}` does not exist")
            }
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            _ => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        // UNIQUE and FOREIGN KEY failures are part of the caller contract;
        // everything else stays a transport-level DB error.
        if let rusqlite::Error::SqliteFailure(ffi_err, message) = &value {
            if ffi_err.code == ErrorCode::ConstraintViolation {
                let detail = message.clone().unwrap_or_else(|| {
                    "uniqueness or foreign-key rule rejected the statement".to_string()
                });
                return Self::ConstraintViolation(detail);
            }
        }
        Self::Db(DbError::Sqlite(value))
    }
}

/// Repository interface for catalog CRUD operations.
pub trait CatalogRepository {
    /// Persists a new category and returns the stored record.
    fn create_category(&self, name: &str) -> RepoResult<Category>;
    /// Persists a new product linked to `category_id`.
    fn create_product(&self, name: &str, price: f64, category_id: CategoryId)
        -> RepoResult<Product>;
    /// Returns all products assigned to `category_id`; empty when the
    /// category is unused or does not exist.
    fn products_by_category(&self, category_id: CategoryId) -> RepoResult<Vec<Product>>;
    /// Reassigns a product to another category. `Ok(None)` when the product
    /// does not exist.
    fn update_product_category(
        &self,
        product_id: ProductId,
        new_category_id: CategoryId,
    ) -> RepoResult<Option<Product>>;
    /// Deletes a category and, via cascade, every product it owns. No-op
    /// when the category does not exist.
    fn delete_category_and_products(&self, category_id: CategoryId) -> RepoResult<()>;
    /// Gets one product by id.
    fn get_product(&self, product_id: ProductId) -> RepoResult<Option<Product>>;
    /// Returns all categories ordered by id.
    fn list_categories(&self) -> RepoResult<Vec<Category>>;
    /// Returns all products ordered by id.
    fn list_products(&self) -> RepoResult<Vec<Product>>;
}

/// SQLite-backed catalog repository.
pub struct SqliteCatalogRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteCatalogRepository<'conn> {
    /// Constructs a repository from a migrated/ready connection.
    ///
    /// # Errors
    /// - `UninitializedConnection` when the schema version does not match
    ///   what this binary expects (the connection skipped `open_db`).
    /// - `MissingRequiredTable` when a catalog table is absent despite a
    ///   matching schema version.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_connection_ready(conn)?;
        Ok(Self { conn })
    }
}

impl CatalogRepository for SqliteCatalogRepository<'_> {
    fn create_category(&self, name: &str) -> RepoResult<Category> {
        self.conn.execute(
            "INSERT INTO categories (name) VALUES (?1);",
            params![name],
        )?;

        Ok(Category {
            id: self.conn.last_insert_rowid(),
            name: name.to_string(),
        })
    }

    fn create_product(
        &self,
        name: &str,
        price: f64,
        category_id: CategoryId,
    ) -> RepoResult<Product> {
        self.conn.execute(
            "INSERT INTO products (name, price, category_id) VALUES (?1, ?2, ?3);",
            params![name, price, category_id],
        )?;

        Ok(Product {
            id: self.conn.last_insert_rowid(),
            name: name.to_string(),
            price,
            category_id: Some(category_id),
        })
    }

    fn products_by_category(&self, category_id: CategoryId) -> RepoResult<Vec<Product>> {
        let mut stmt = self.conn.prepare(&format!(
            "{PRODUCT_SELECT_SQL}
             WHERE category_id = ?1
             ORDER BY id ASC;"
        ))?;

        let mut rows = stmt.query(params![category_id])?;
        let mut products = Vec::new();
        while let Some(row) = rows.next()? {
            products.push(parse_product_row(row)?);
        }

        Ok(products)
    }

    fn update_product_category(
        &self,
        product_id: ProductId,
        new_category_id: CategoryId,
    ) -> RepoResult<Option<Product>> {
        let changed = self.conn.execute(
            "UPDATE products
             SET category_id = ?2
             WHERE id = ?1;",
            params![product_id, new_category_id],
        )?;

        if changed == 0 {
            return Ok(None);
        }

        self.get_product(product_id)
    }

    fn delete_category_and_products(&self, category_id: CategoryId) -> RepoResult<()> {
        // Cascade removes owned products inside the same statement. Zero
        // affected rows means the category never existed; that is a no-op.
        self.conn.execute(
            "DELETE FROM categories WHERE id = ?1;",
            params![category_id],
        )?;

        Ok(())
    }

    fn get_product(&self, product_id: ProductId) -> RepoResult<Option<Product>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{PRODUCT_SELECT_SQL} WHERE id = ?1;"))?;

        let mut rows = stmt.query(params![product_id])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_product_row(row)?));
        }

        Ok(None)
    }

    fn list_categories(&self) -> RepoResult<Vec<Category>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{CATEGORY_SELECT_SQL} ORDER BY id ASC;"))?;

        let mut rows = stmt.query([])?;
        let mut categories = Vec::new();
        while let Some(row) = rows.next()? {
            categories.push(parse_category_row(row)?);
        }

        Ok(categories)
    }

    fn list_products(&self) -> RepoResult<Vec<Product>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{PRODUCT_SELECT_SQL} ORDER BY id ASC;"))?;

        let mut rows = stmt.query([])?;
        let mut products = Vec::new();
        while let Some(row) = rows.next()? {
            products.push(parse_product_row(row)?);
        }

        Ok(products)
    }
}

fn ensure_connection_ready(conn: &Connection) -> RepoResult<()> {
    let expected_version = latest_version();
    let actual_version: u32 = conn.query_row("PRAGMA user_version;", [], |row| row.get(0))?;
    if actual_version != expected_version {
        return Err(RepoError::UninitializedConnection {
            expected_version,
            actual_version,
        });
    }

    for table in ["categories", "products"] {
        let exists: i64 = conn.query_row(
            "SELECT EXISTS(
                SELECT 1
                FROM sqlite_master
                WHERE type = 'table' AND name = ?1
            );",
            [table],
            |row| row.get(0),
        )?;
        if exists == 0 {
            return Err(RepoError::MissingRequiredTable(table));
        }
    }

    Ok(())
}

fn parse_category_row(row: &Row<'_>) -> RepoResult<Category> {
    Ok(Category {
        id: row.get("id")?,
        name: row.get("name")?,
    })
}

fn parse_product_row(row: &Row<'_>) -> RepoResult<Product> {
    Ok(Product {
        id: row.get("id")?,
        name: row.get("name")?,
        price: row.get("price")?,
        category_id: row.get("category_id")?,
    })
}
