use crate::domain::product::model::Product;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkinType {
    Normal,
    Dry,
    Oily,
    Combination,
    Sensitive,
    Mature,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkinProfile {
    pub name: &'static str,
    pub description: &'static str,
    pub characteristics: &'static [&'static str],
    pub recommended_products: &'static [&'static str],
}

impl SkinType {
    pub const ALL: [SkinType; 6] = [
        SkinType::Normal,
        SkinType::Dry,
        SkinType::Oily,
        SkinType::Combination,
        SkinType::Sensitive,
        SkinType::Mature,
    ];

    pub fn profile(&self) -> SkinProfile {
        match self {
            SkinType::Normal => SkinProfile {
                name: "Normal Skin",
                description: "Well-balanced skin with minimal imperfections",
                characteristics: &[
                    "Even texture",
                    "Small pores",
                    "No sensitivity",
                    "Good circulation",
                ],
                recommended_products: &["MULTI VITA RADIANCE CREAM", "EyeCell EYE ZONE CARE"],
            },
            SkinType::Dry => SkinProfile {
                name: "Dry Skin",
                description: "Skin that lacks moisture and may feel tight",
                characteristics: &[
                    "Tight feeling",
                    "Flaky patches",
                    "Dull appearance",
                    "Fine lines",
                ],
                recommended_products: &[
                    "MOISTURE REPLENISHING HYALURON CREAM",
                    "SKIN RESCUE OVERNIGHT CREAM MASK",
                ],
            },
            SkinType::Oily => SkinProfile {
                name: "Oily Skin",
                description: "Skin that produces excess sebum",
                characteristics: &[
                    "Shiny appearance",
                    "Large pores",
                    "Prone to breakouts",
                    "Thick texture",
                ],
                recommended_products: &[
                    "EPI TURNOVER BOOSTING PEELING GEL",
                    "INTENSIVE PROBLEM CONTROL TONER",
                ],
            },
            SkinType::Combination => SkinProfile {
                name: "Combination Skin",
                description: "Mix of oily and dry areas",
                characteristics: &[
                    "Oily T-zone",
                    "Dry cheeks",
                    "Variable texture",
                    "Mixed concerns",
                ],
                recommended_products: &[
                    "MULTI VITA RADIANCE SERUM",
                    "SKIN CARING BLEMISH BALM CUSHION",
                ],
            },
            SkinType::Sensitive => SkinProfile {
                name: "Sensitive Skin",
                description: "Skin that reacts easily to products and environment",
                characteristics: &[
                    "Redness",
                    "Irritation",
                    "Burning sensation",
                    "Reactive to changes",
                ],
                recommended_products: &[
                    "MICROBIOME ENERGY INFUSING MIST",
                    "ULTRA SHIELD SUN CREAM",
                ],
            },
            SkinType::Mature => SkinProfile {
                name: "Mature Skin",
                description: "Skin showing signs of aging",
                characteristics: &["Fine lines", "Loss of firmness", "Age spots", "Dullness"],
                recommended_products: &["BIO-FERMENT AGE DEFYING POWDER MASK", "GENO-LED IR II"],
            },
        }
    }

    /// Catalog products whose name matches one of the profile's recommendations.
    pub fn recommend(&self, products: &[Product]) -> Vec<Product> {
        let wanted = self.profile().recommended_products;
        products
            .iter()
            .filter(|p| wanted.iter().any(|name| name.eq_ignore_ascii_case(p.name.trim())))
            .cloned()
            .collect()
    }
}

impl std::fmt::Display for SkinType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SkinType::Normal => write!(f, "normal"),
            SkinType::Dry => write!(f, "dry"),
            SkinType::Oily => write!(f, "oily"),
            SkinType::Combination => write!(f, "combination"),
            SkinType::Sensitive => write!(f, "sensitive"),
            SkinType::Mature => write!(f, "mature"),
        }
    }
}

impl std::str::FromStr for SkinType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "normal" => Ok(SkinType::Normal),
            "dry" => Ok(SkinType::Dry),
            "oily" => Ok(SkinType::Oily),
            "combination" => Ok(SkinType::Combination),
            "sensitive" => Ok(SkinType::Sensitive),
            "mature" => Ok(SkinType::Mature),
            _ => Err(format!("Invalid skin type: {}", s)),
        }
    }
}
