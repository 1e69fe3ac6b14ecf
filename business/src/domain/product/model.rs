use serde::{Deserialize, Serialize};

use crate::domain::shared::value_objects::{Money, ProductId};

/// Catalog entry as served by `GET /api/products`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: Money,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default)]
    pub category: String,
    #[serde(default = "default_in_stock")]
    pub in_stock: bool,
}

fn default_in_stock() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    #[test]
    fn should_parse_backend_payload() {
        let json = r#"{
            "id": "7",
            "name": "MULTI VITA RADIANCE SERUM",
            "price": 330,
            "description": "Brightening serum",
            "image": "/images/serum.jpg",
            "category": "Serum",
            "inStock": false
        }"#;

        let product: Product = serde_json::from_str(json).unwrap();

        assert_eq!(product.id, ProductId::new("7"));
        assert_eq!(product.price, Decimal::from(330));
        assert_eq!(product.image.as_deref(), Some("/images/serum.jpg"));
        assert!(!product.in_stock);
    }

    #[test]
    fn should_default_optional_fields() {
        let json = r#"{"id": "8", "name": "Toner", "price": 120.5}"#;

        let product: Product = serde_json::from_str(json).unwrap();

        assert_eq!(product.price, Decimal::new(1205, 1));
        assert!(product.description.is_empty());
        assert!(product.image.is_none());
        assert!(product.in_stock);
    }
}
