use catalog_core::{Category, Product};
use serde_json::json;

#[test]
fn category_serializes_with_column_field_names() {
    let category = Category {
        id: 1,
        name: "Electronics".to_string(),
    };

    let value = serde_json::to_value(&category).unwrap();
    assert_eq!(value, json!({ "id": 1, "name": "Electronics" }));
}

#[test]
fn product_serializes_null_category_for_unassigned_rows() {
    let product = Product {
        id: 7,
        name: "Loose screw".to_string(),
        price: 0.05,
        category_id: None,
    };

    let value = serde_json::to_value(&product).unwrap();
    assert_eq!(
        value,
        json!({ "id": 7, "name": "Loose screw", "price": 0.05, "category_id": null })
    );
}

#[test]
fn product_deserializes_from_row_shaped_json() {
    let product: Product = serde_json::from_value(json!({
        "id": 3,
        "name": "Jeans",
        "price": 39.99,
        "category_id": 2
    }))
    .unwrap();

    assert_eq!(product.id, 3);
    assert!(product.is_in_category(2));
    assert!(!product.is_in_category(1));
}
