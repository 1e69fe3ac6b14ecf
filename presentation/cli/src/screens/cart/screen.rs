use std::sync::Arc;

use business::domain::cart::store::CartStore;
use business::domain::shared::value_objects::ProductId;

use super::view;
use crate::screens::alert::ScreenResult;

pub struct CartScreen {
    cart_store: Arc<dyn CartStore>,
}

impl CartScreen {
    pub fn new(cart_store: Arc<dyn CartStore>) -> Self {
        Self { cart_store }
    }

    pub async fn show(&self) -> ScreenResult {
        Ok(view::cart_summary(&self.cart_store.snapshot().await))
    }

    /// Unknown ids leave the cart as it was.
    pub async fn remove(&self, id: ProductId) -> ScreenResult {
        self.cart_store.remove_from_cart(&id).await;
        self.show().await
    }

    /// A quantity of zero or less removes the item.
    pub async fn update(&self, id: ProductId, quantity: i64) -> ScreenResult {
        self.cart_store.update_quantity(&id, quantity).await;
        self.show().await
    }

    pub async fn clear(&self) -> ScreenResult {
        self.cart_store.clear_cart().await;
        self.show().await
    }
}
