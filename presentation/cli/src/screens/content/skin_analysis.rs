use std::sync::Arc;

use business::domain::content::skin::SkinType;
use business::domain::product::filter::ProductFilter;
use business::domain::product::model::Product;
use business::domain::product::use_cases::get_all::{GetAllProductsParams, GetAllProductsUseCase};

use crate::screens::alert::ScreenResult;
use crate::screens::format::money;

pub struct SkinAnalysisScreen {
    get_all_products_use_case: Arc<dyn GetAllProductsUseCase>,
}

impl SkinAnalysisScreen {
    pub fn new(get_all_products_use_case: Arc<dyn GetAllProductsUseCase>) -> Self {
        Self {
            get_all_products_use_case,
        }
    }

    /// Without a skin type the screen lists the choices.
    pub async fn show(&self, skin_type: Option<SkinType>) -> ScreenResult {
        let Some(skin_type) = skin_type else {
            return Ok(skin_types());
        };

        let catalog = self
            .get_all_products_use_case
            .execute(GetAllProductsParams {
                filter: ProductFilter::default(),
            })
            .await
            .into_inner();

        Ok(analysis(skin_type, &skin_type.recommend(&catalog)))
    }
}

fn skin_types() -> String {
    let mut lines = vec![
        "Skin Analysis".to_string(),
        "Select your skin type to get personalized recommendations".to_string(),
        String::new(),
    ];
    for skin_type in SkinType::ALL {
        let profile = skin_type.profile();
        lines.push(format!("{:<12} {}", skin_type.to_string(), profile.name));
        lines.push(format!("             {}", profile.description));
    }
    lines.join("\n")
}

/// Falls back to the recommended product names when none of them is in the catalog.
fn analysis(skin_type: SkinType, matches: &[Product]) -> String {
    let profile = skin_type.profile();
    let mut lines = vec![
        "Analysis Complete!".to_string(),
        String::new(),
        profile.name.to_string(),
        profile.description.to_string(),
        String::new(),
        "Characteristics:".to_string(),
    ];
    lines.extend(profile.characteristics.iter().map(|c| format!("  - {}", c)));
    lines.push(String::new());
    lines.push("Recommended Products:".to_string());
    if matches.is_empty() {
        lines.extend(
            profile
                .recommended_products
                .iter()
                .map(|name| format!("  - {}", name)),
        );
    } else {
        lines.extend(
            matches
                .iter()
                .map(|p| format!("  - [{}] {} | {}", p.id, p.name, money(p.price))),
        );
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use business::domain::shared::value_objects::ProductId;
    use rust_decimal::Decimal;

    #[test]
    fn should_list_all_skin_types() {
        let rendered = skin_types();

        for skin_type in SkinType::ALL {
            assert!(rendered.contains(skin_type.profile().name));
        }
    }

    #[test]
    fn should_fall_back_to_recommended_names() {
        let rendered = analysis(SkinType::Dry, &[]);

        assert!(rendered.contains("Dry Skin"));
        assert!(rendered.contains("  - Tight feeling"));
        assert!(rendered.contains("  - MOISTURE REPLENISHING HYALURON CREAM"));
    }

    #[test]
    fn should_show_matching_catalog_products() {
        let product = Product {
            id: ProductId::new("12"),
            name: "GENO-LED IR II".to_string(),
            price: Decimal::from(1200),
            description: String::new(),
            image: None,
            category: "Device".to_string(),
            in_stock: true,
        };

        let rendered = analysis(SkinType::Mature, &[product]);

        assert!(rendered.contains("  - [12] GENO-LED IR II | AED 1200.00"));
        assert!(!rendered.contains("BIO-FERMENT"));
    }
}
