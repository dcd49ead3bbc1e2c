//! Shared test helpers for markt_core tests.

#![allow(dead_code)]

use markt_core::catalog::{Catalog, ProductResult};

/// A small catalog: two subcategories, three brands, five products.
pub fn sample_catalog() -> Catalog {
    Catalog::from_json(
        r#"{
    "brands": [
        {"id": 1, "name": "Nike"},
        {"id": 2, "name": "Adidas"},
        {"id": 3, "name": "Puma"}
    ],
    "subcategories": [
        {"id": 10, "uri": "running", "name": "Running"},
        {"id": 20, "uri": "hiking", "name": "Hiking"},
        {"id": 30, "uri": "climbing", "name": "Climbing"}
    ],
    "products": [
        {"id": 1, "uri": "air-zoom", "name": "Air Zoom Shoe", "price": "120.00", "is_in_stock": true,
         "subcategory_id": 10, "brand_id": 1, "seller_name": "Ana", "seller_username": "ana",
         "date_time": "2024-01-10T09:00:00+00:00", "images": ["/img/air-zoom.png"]},
        {"id": 2, "uri": "ultraboost", "name": "Ultraboost", "price": "99.99", "is_in_stock": true,
         "subcategory_id": 10, "brand_id": 2, "date_time": "2024-02-15T12:30:00+00:00"},
        {"id": 3, "uri": "velocity", "name": "Velocity Nitro", "price": "100", "is_in_stock": false,
         "subcategory_id": 10, "brand_id": 3, "date_time": "2024-03-20T18:00:00+00:00"},
        {"id": 4, "uri": "trail-shoe", "name": "Trail shoe", "price": "12.50", "is_in_stock": true,
         "subcategory_id": 20, "brand_id": 1, "date_time": "2023-12-01T08:00:00+00:00"},
        {"id": 5, "uri": "terrex", "name": "Terrex Boot", "price": "150.25", "is_in_stock": true,
         "subcategory_id": 20, "brand_id": 2, "date_time": "2024-04-01T00:00:00+00:00"}
    ]
}"#,
    )
    .expect("Failed to parse sample catalog")
}

/// Product ids of listing results, in order.
pub fn ids(results: &[ProductResult]) -> Vec<i64> {
    results.iter().map(|result| result.id).collect()
}

/// Route engine logs through the test harness. Safe to call from every test.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
