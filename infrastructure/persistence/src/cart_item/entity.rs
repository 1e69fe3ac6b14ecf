use std::str::FromStr;

use rust_decimal::Decimal;
use sqlx::FromRow;

use business::domain::cart::model::CartItem;
use business::domain::errors::RepositoryError;
use business::domain::shared::value_objects::ProductId;

#[derive(Debug, FromRow)]
pub struct CartItemEntity {
    pub product_id: String,
    pub name: String,
    pub price: String,
    pub quantity: i64,
    pub category: String,
    pub image: Option<String>,
}

impl CartItemEntity {
    /// Rows with an unparseable price or a quantity outside `1..=u32::MAX` are corrupted.
    pub fn into_domain(self) -> Result<CartItem, RepositoryError> {
        let price = Decimal::from_str(&self.price).map_err(|_| RepositoryError::Corrupted)?;
        let quantity = u32::try_from(self.quantity)
            .ok()
            .filter(|q| *q > 0)
            .ok_or(RepositoryError::Corrupted)?;

        Ok(CartItem::from_repository(
            ProductId::new(self.product_id),
            self.name,
            price,
            quantity,
            self.category,
            self.image,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entity(price: &str, quantity: i64) -> CartItemEntity {
        CartItemEntity {
            product_id: "1".to_string(),
            name: "GENO-LED IR II".to_string(),
            price: price.to_string(),
            quantity,
            category: "Device".to_string(),
            image: None,
        }
    }

    #[test]
    fn should_parse_decimal_price() {
        let item = entity("1250.50", 1).into_domain().unwrap();

        assert_eq!(item.price, Decimal::new(125050, 2));
    }

    #[test]
    fn should_flag_bad_price_as_corrupted() {
        assert!(matches!(
            entity("abc", 1).into_domain(),
            Err(RepositoryError::Corrupted)
        ));
    }

    #[test]
    fn should_flag_non_positive_quantity_as_corrupted() {
        assert!(matches!(
            entity("10", 0).into_domain(),
            Err(RepositoryError::Corrupted)
        ));
        assert!(matches!(
            entity("10", -3).into_domain(),
            Err(RepositoryError::Corrupted)
        ));
    }
}
