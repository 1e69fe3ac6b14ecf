use super::model::Product;

/// Categories offered by the catalog, in display order.
pub const CATEGORIES: [&str; 13] = [
    "Microneedling",
    "Device",
    "PRO Solution",
    "Cleanser",
    "Peeling",
    "Toner/Mist",
    "Eye care",
    "Serum",
    "Cream",
    "Mask",
    "Sun",
    "Cushion BB",
    "Scalp/Hair",
];

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    #[default]
    All,
    Named(String),
}

impl std::fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CategoryFilter::All => write!(f, "All"),
            CategoryFilter::Named(name) => write!(f, "{}", name),
        }
    }
}

impl std::str::FromStr for CategoryFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("all") {
            return Ok(CategoryFilter::All);
        }
        CATEGORIES
            .iter()
            .find(|c| c.eq_ignore_ascii_case(trimmed))
            .map(|c| CategoryFilter::Named(c.to_string()))
            .ok_or_else(|| format!("Invalid product category: {}", s))
    }
}

/// Search box plus category chip of the products screen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductFilter {
    pub query: Option<String>,
    pub category: CategoryFilter,
}

impl ProductFilter {
    pub fn new(query: Option<String>, category: CategoryFilter) -> Self {
        let query = query.filter(|q| !q.trim().is_empty());
        Self { query, category }
    }

    /// Case-insensitive substring match on name or description, then exact category match.
    pub fn matches(&self, product: &Product) -> bool {
        if let Some(query) = &self.query {
            let needle = query.to_lowercase();
            let hit = product.name.to_lowercase().contains(&needle)
                || product.description.to_lowercase().contains(&needle);
            if !hit {
                return false;
            }
        }

        match &self.category {
            CategoryFilter::All => true,
            CategoryFilter::Named(name) => &product.category == name,
        }
    }

    pub fn apply(&self, products: Vec<Product>) -> Vec<Product> {
        products.into_iter().filter(|p| self.matches(p)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::shared::value_objects::ProductId;
    use rust_decimal::Decimal;

    fn product(id: &str, name: &str, description: &str, category: &str) -> Product {
        Product {
            id: ProductId::new(id),
            name: name.to_string(),
            price: Decimal::from(100),
            description: description.to_string(),
            image: None,
            category: category.to_string(),
            in_stock: true,
        }
    }

    fn catalog() -> Vec<Product> {
        vec![
            product("1", "Microneedle Roller", "Skin stimulator", "Microneedling"),
            product("2", "Hyaluron Serum", "Moisture replenishing", "Serum"),
            product("3", "Radiance Cream", "Vitamin serum-like texture", "Cream"),
        ]
    }

    #[test]
    fn should_return_everything_with_default_filter() {
        let result = ProductFilter::default().apply(catalog());
        assert_eq!(result.len(), 3);
    }

    #[test]
    fn should_match_query_against_name_and_description() {
        let filter = ProductFilter::new(Some("SERUM".to_string()), CategoryFilter::All);

        let ids: Vec<_> = filter
            .apply(catalog())
            .into_iter()
            .map(|p| p.id.to_string())
            .collect();

        assert_eq!(ids, vec!["2", "3"]);
    }

    #[test]
    fn should_combine_query_and_category() {
        let filter = ProductFilter::new(
            Some("serum".to_string()),
            CategoryFilter::Named("Cream".to_string()),
        );

        let result = filter.apply(catalog());

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].name, "Radiance Cream");
    }

    #[test]
    fn should_ignore_blank_query() {
        let filter = ProductFilter::new(Some("  ".to_string()), CategoryFilter::All);
        assert!(filter.query.is_none());
    }

    #[test]
    fn should_parse_category_case_insensitively() {
        assert_eq!(
            "eye CARE".parse::<CategoryFilter>(),
            Ok(CategoryFilter::Named("Eye care".to_string()))
        );
        assert_eq!("All".parse::<CategoryFilter>(), Ok(CategoryFilter::All));
        assert!("Shampoo".parse::<CategoryFilter>().is_err());
    }
}
