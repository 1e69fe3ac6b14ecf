use rust_decimal::Decimal;

use super::model::Product;
use crate::domain::shared::value_objects::ProductId;

/// Product shown by the detail screen when the catalog cannot be reached.
/// Keeps the requested id so the screen stays consistent with navigation.
pub fn sample_product(id: &ProductId) -> Product {
    Product {
        id: id.clone(),
        name: "Microneedle Roller".to_string(),
        price: Decimal::from(230),
        description: "Skin stimulator to promote collagen production and transdermal nutrient \
                      delivery. Professional microneedling device for effective skin \
                      regeneration. Manufactured in South Korea."
            .to_string(),
        image: Some("/images/genosys-microneedling-devices.jpg".to_string()),
        category: "Microneedling".to_string(),
        in_stock: true,
    }
}
