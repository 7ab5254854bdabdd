//! CLI demo entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to exercise `catalog_core` end to end.
//! - Keep output deterministic for quick local sanity checks.

use catalog_core::db::{open_db, open_db_in_memory};
use catalog_core::{CatalogService, SqliteCatalogRepository};
use std::error::Error;
use std::process::ExitCode;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("catalog_cli error: {err}");
            ExitCode::FAILURE
        }
    }
}

/// Seeds a small catalog and walks through every store operation.
///
/// Takes an optional database path argument; defaults to in-memory so
/// repeated runs stay deterministic.
fn run() -> Result<(), Box<dyn Error>> {
    println!("catalog_core version={}", catalog_core::core_version());

    let conn = match std::env::args().nth(1) {
        Some(path) => open_db(path)?,
        None => open_db_in_memory()?,
    };
    let service = CatalogService::new(SqliteCatalogRepository::try_new(&conn)?);

    let electronics = service.create_category("Electronics")?;
    let clothing = service.create_category("Clothing")?;

    service.create_product("Laptop", 999.99, electronics.id)?;
    service.create_product("Smartphone", 499.99, electronics.id)?;
    let jeans = service.create_product("Jeans", 39.99, clothing.id)?;

    println!("products in {}:", electronics.name);
    for product in service.products_by_category(electronics.id)? {
        println!("  {} ({:.2})", product.name, product.price);
    }

    match service.update_product_category(jeans.id, electronics.id)? {
        Some(moved) => println!("moved {} to {}", moved.name, electronics.name),
        None => println!("product {} not found", jeans.id),
    }

    service.delete_category_and_products(clothing.id)?;

    println!("categories after deletion:");
    for category in service.list_categories()? {
        println!("  {} (id={})", category.name, category.id);
    }
    println!("products after deletion:");
    for product in service.list_products()? {
        println!(
            "  {} (category_id={:?})",
            product.name, product.category_id
        );
    }

    Ok(())
}
