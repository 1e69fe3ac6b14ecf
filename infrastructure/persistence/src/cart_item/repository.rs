use async_trait::async_trait;
use sqlx::SqlitePool;

use business::domain::cart::model::CartItem;
use business::domain::cart::repository::CartRepository;
use business::domain::errors::RepositoryError;

use super::entity::CartItemEntity;

pub struct CartRepositorySqlite {
    pool: SqlitePool,
}

impl CartRepositorySqlite {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CartRepository for CartRepositorySqlite {
    async fn load(&self) -> Result<Vec<CartItem>, RepositoryError> {
        let entities = sqlx::query_as::<_, CartItemEntity>(
            "SELECT product_id, name, price, quantity, category, image FROM cart_items ORDER BY position",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        entities.into_iter().map(|e| e.into_domain()).collect()
    }

    async fn replace_all(&self, items: &[CartItem]) -> Result<(), RepositoryError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|_| RepositoryError::DatabaseError)?;

        sqlx::query("DELETE FROM cart_items")
            .execute(&mut *tx)
            .await
            .map_err(|_| RepositoryError::DatabaseError)?;

        for (position, item) in items.iter().enumerate() {
            sqlx::query(
                r#"INSERT INTO cart_items (product_id, position, name, price, quantity, category, image)
                VALUES ($1, $2, $3, $4, $5, $6, $7)"#,
            )
            .bind(item.id.as_str())
            .bind(position as i64)
            .bind(&item.name)
            .bind(item.price.to_string())
            .bind(i64::from(item.quantity))
            .bind(&item.category)
            .bind(&item.image)
            .execute(&mut *tx)
            .await
            .map_err(|_| RepositoryError::DatabaseError)?;
        }

        tx.commit()
            .await
            .map_err(|_| RepositoryError::Persistence)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::test_pool;
    use business::domain::cart::model::NewCartItemProps;
    use business::domain::shared::value_objects::ProductId;
    use rust_decimal::Decimal;

    fn item(id: &str, price: Decimal, quantity: u32) -> CartItem {
        CartItem::new(NewCartItemProps {
            id: ProductId::new(id),
            name: format!("Product {}", id),
            price,
            quantity,
            category: "Serum".to_string(),
            image: Some(format!("/images/{}.jpg", id)),
        })
        .unwrap()
    }

    #[tokio::test]
    async fn should_load_empty_cart_from_fresh_database() {
        let repository = CartRepositorySqlite::new(test_pool().await);

        assert!(repository.load().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn should_round_trip_items_in_order() {
        let repository = CartRepositorySqlite::new(test_pool().await);
        let items = vec![
            item("b", Decimal::new(33050, 2), 2),
            item("a", Decimal::from(580), 1),
        ];

        repository.replace_all(&items).await.unwrap();

        assert_eq!(repository.load().await.unwrap(), items);
    }

    #[tokio::test]
    async fn should_replace_previous_contents() {
        let repository = CartRepositorySqlite::new(test_pool().await);
        repository
            .replace_all(&[item("a", Decimal::from(10), 1), item("b", Decimal::from(20), 1)])
            .await
            .unwrap();

        repository
            .replace_all(&[item("c", Decimal::from(30), 4)])
            .await
            .unwrap();

        let loaded = repository.load().await.unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].id.as_str(), "c");
        assert_eq!(loaded[0].quantity, 4);
    }

    #[tokio::test]
    async fn should_empty_table_when_cart_cleared() {
        let repository = CartRepositorySqlite::new(test_pool().await);
        repository
            .replace_all(&[item("a", Decimal::from(10), 1)])
            .await
            .unwrap();

        repository.replace_all(&[]).await.unwrap();

        assert!(repository.load().await.unwrap().is_empty());
    }
}
