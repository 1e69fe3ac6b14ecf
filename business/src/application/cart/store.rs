use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::cart::model::{Cart, CartItem};
use crate::domain::cart::repository::CartRepository;
use crate::domain::cart::store::CartStore;
use crate::domain::logger::Logger;
use crate::domain::shared::value_objects::{Money, ProductId};

pub struct CartStoreImpl {
    repository: Arc<dyn CartRepository>,
    logger: Arc<dyn Logger>,
    state: Mutex<Cart>,
}

impl CartStoreImpl {
    pub fn new(repository: Arc<dyn CartRepository>, logger: Arc<dyn Logger>) -> Self {
        Self {
            repository,
            logger,
            state: Mutex::new(Cart::new()),
        }
    }

    /// Applies `change` and, when it reports a modification, writes the cart through
    /// while still holding the lock so storage sees mutations in order.
    async fn mutate<F>(&self, action: &str, change: F)
    where
        F: FnOnce(&mut Cart) -> bool + Send,
    {
        let mut cart = self.state.lock().await;
        if !change(&mut cart) {
            self.logger
                .debug(&format!("Cart {} left the cart unchanged", action));
            return;
        }

        if let Err(e) = self.repository.replace_all(cart.items()).await {
            self.logger.warn(&format!(
                "Failed to persist cart after {}: {}",
                action, e
            ));
        }
    }
}

#[async_trait]
impl CartStore for CartStoreImpl {
    async fn restore(&self) {
        match self.repository.load().await {
            Ok(items) => {
                let restored = Cart::from_items(items);
                self.logger
                    .info(&format!("Restored cart with {} line items", restored.len()));
                *self.state.lock().await = restored;
            }
            Err(e) => {
                self.logger
                    .warn(&format!("Failed to restore cart, starting empty: {}", e));
            }
        }
    }

    async fn items(&self) -> Vec<CartItem> {
        self.state.lock().await.items().to_vec()
    }

    async fn snapshot(&self) -> Cart {
        self.state.lock().await.clone()
    }

    async fn add_to_cart(&self, item: CartItem) {
        self.logger
            .info(&format!("Adding {} x {} to cart", item.quantity, item.id));
        self.mutate("add", move |cart| {
            cart.add(item);
            true
        })
        .await;
    }

    async fn remove_from_cart(&self, id: &ProductId) {
        self.logger.info(&format!("Removing {} from cart", id));
        self.mutate("remove", |cart| cart.remove(id)).await;
    }

    async fn update_quantity(&self, id: &ProductId, quantity: i64) {
        self.logger
            .info(&format!("Setting quantity of {} to {}", id, quantity));
        self.mutate("update", |cart| cart.update_quantity(id, quantity))
            .await;
    }

    async fn clear_cart(&self) {
        self.logger.info("Clearing cart");
        self.mutate("clear", Cart::clear).await;
    }

    async fn is_in_cart(&self, id: &ProductId) -> bool {
        self.state.lock().await.contains(id)
    }

    async fn total_items(&self) -> u64 {
        self.state.lock().await.total_items()
    }

    async fn total_price(&self) -> Money {
        self.state.lock().await.total_price()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::cart::model::NewCartItemProps;
    use crate::domain::errors::RepositoryError;
    use mockall::mock;
    use mockall::predicate::always;
    use rust_decimal::Decimal;

    mock! {
        pub CartRepo {}

        #[async_trait]
        impl CartRepository for CartRepo {
            async fn load(&self) -> Result<Vec<CartItem>, RepositoryError>;
            async fn replace_all(&self, items: &[CartItem]) -> Result<(), RepositoryError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    fn item(id: &str, price: i64, quantity: u32) -> CartItem {
        CartItem::new(NewCartItemProps {
            id: ProductId::new(id),
            name: format!("Product {}", id),
            price: Decimal::from(price),
            quantity,
            category: "Serum".to_string(),
            image: None,
        })
        .unwrap()
    }

    fn accepting_repo() -> MockCartRepo {
        let mut repo = MockCartRepo::new();
        repo.expect_replace_all().returning(|_| Ok(()));
        repo
    }

    #[tokio::test]
    async fn should_merge_repeated_adds_of_same_product() {
        let store = CartStoreImpl::new(Arc::new(accepting_repo()), mock_logger());

        store.add_to_cart(item("1", 100, 1)).await;
        store.add_to_cart(item("1", 100, 2)).await;

        let items = store.items().await;
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].quantity, 3);
        assert_eq!(store.total_price().await, Decimal::from(300));
        assert_eq!(store.total_items().await, 3);
    }

    #[tokio::test]
    async fn should_report_removed_item_as_absent() {
        let store = CartStoreImpl::new(Arc::new(accepting_repo()), mock_logger());
        store.add_to_cart(item("1", 100, 1)).await;

        store.remove_from_cart(&ProductId::new("1")).await;

        assert!(!store.is_in_cart(&ProductId::new("1")).await);
    }

    #[tokio::test]
    async fn should_remove_item_when_quantity_set_to_zero() {
        let store = CartStoreImpl::new(Arc::new(accepting_repo()), mock_logger());
        store.add_to_cart(item("1", 100, 2)).await;

        store.update_quantity(&ProductId::new("1"), 0).await;

        assert!(store.items().await.is_empty());
    }

    #[tokio::test]
    async fn should_zero_totals_after_clear() {
        let store = CartStoreImpl::new(Arc::new(accepting_repo()), mock_logger());
        store.add_to_cart(item("1", 100, 2)).await;
        store.add_to_cart(item("2", 40, 1)).await;

        store.clear_cart().await;

        assert!(store.items().await.is_empty());
        assert_eq!(store.total_items().await, 0);
        assert_eq!(store.total_price().await, Decimal::ZERO);
    }

    #[tokio::test]
    async fn should_write_through_full_cart_on_each_change() {
        let mut repo = MockCartRepo::new();
        repo.expect_replace_all()
            .withf(|items: &[CartItem]| items.len() == 1 && items[0].quantity == 1)
            .times(1)
            .returning(|_| Ok(()));
        repo.expect_replace_all()
            .withf(|items: &[CartItem]| items.len() == 1 && items[0].quantity == 5)
            .times(1)
            .returning(|_| Ok(()));
        let store = CartStoreImpl::new(Arc::new(repo), mock_logger());

        store.add_to_cart(item("1", 100, 1)).await;
        store.update_quantity(&ProductId::new("1"), 5).await;
    }

    #[tokio::test]
    async fn should_skip_write_for_unknown_id() {
        let mut repo = MockCartRepo::new();
        repo.expect_replace_all().never();
        let store = CartStoreImpl::new(Arc::new(repo), mock_logger());

        store.remove_from_cart(&ProductId::new("missing")).await;
        store.update_quantity(&ProductId::new("missing"), 3).await;
        store.clear_cart().await;
    }

    #[tokio::test]
    async fn should_keep_in_memory_change_when_persistence_fails() {
        let mut repo = MockCartRepo::new();
        repo.expect_replace_all()
            .returning(|_| Err(RepositoryError::DatabaseError));
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        logger.expect_warn().with(always()).times(1).returning(|_| ());
        let store = CartStoreImpl::new(Arc::new(repo), Arc::new(logger));

        store.add_to_cart(item("1", 100, 1)).await;

        assert!(store.is_in_cart(&ProductId::new("1")).await);
    }

    #[tokio::test]
    async fn should_restore_persisted_items() {
        let mut repo = MockCartRepo::new();
        repo.expect_load()
            .returning(|| Ok(vec![item("1", 100, 1), item("2", 50, 2)]));
        let store = CartStoreImpl::new(Arc::new(repo), mock_logger());

        store.restore().await;

        assert_eq!(store.total_items().await, 3);
        assert_eq!(store.total_price().await, Decimal::from(200));
    }

    #[tokio::test]
    async fn should_start_empty_when_restore_fails() {
        let mut repo = MockCartRepo::new();
        repo.expect_load()
            .returning(|| Err(RepositoryError::Corrupted));
        let store = CartStoreImpl::new(Arc::new(repo), mock_logger());

        store.restore().await;

        assert!(store.items().await.is_empty());
    }
}
