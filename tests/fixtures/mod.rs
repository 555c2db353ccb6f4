//! Shared catalogue used by the integration tests.

#![allow(dead_code)]

use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct Product {
    pub id: u32,
    pub name: &'static str,
    pub brand: &'static str,
    pub sku: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<&'static str>,
}

const fn product(id: u32, name: &'static str, brand: &'static str, sku: &'static str) -> Product {
    Product {
        id,
        name,
        brand,
        sku,
        notes: None,
    }
}

pub fn catalogue() -> Vec<Product> {
    vec![
        product(1, "apple", "Orchard", "549"),
        product(2, "Apple pie", "Orchard", "1002"),
        product(6, "chips & apple", "Orchard", "1006"),
        product(3, "chips", "Snackery", "1003"),
        product(4, "olive oil", "Grove", "1004"),
        Product {
            notes: Some("alcoholic"),
            ..product(5, "perfume oil", "Scentique", "1005")
        },
        product(7, "non alcoholic perfume oil", "Scentique", "1007"),
        product(8, "coconut oil", "Tropic", "1008"),
    ]
}

pub fn ids(results: &[std::sync::Arc<Product>]) -> Vec<u32> {
    results.iter().map(|p| p.id).collect()
}
