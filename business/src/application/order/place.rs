use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::auth::store::AuthStore;
use crate::domain::cart::store::CartStore;
use crate::domain::logger::Logger;
use crate::domain::order::errors::OrderError;
use crate::domain::order::model::{NewOrder, NewOrderProps, OrderReceipt, ShippingAddress};
use crate::domain::order::services::OrderGateway;
use crate::domain::order::use_cases::place::{PlaceOrderParams, PlaceOrderUseCase};

pub struct PlaceOrderUseCaseImpl {
    pub gateway: Arc<dyn OrderGateway>,
    pub auth_store: Arc<dyn AuthStore>,
    pub cart_store: Arc<dyn CartStore>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl PlaceOrderUseCase for PlaceOrderUseCaseImpl {
    async fn execute(&self, params: PlaceOrderParams) -> Result<OrderReceipt, OrderError> {
        let session = self
            .auth_store
            .session()
            .await
            .ok_or(OrderError::NotAuthenticated)?;

        let cart = self.cart_store.snapshot().await;
        if cart.is_empty() {
            return Err(OrderError::EmptyCart);
        }

        let shipping_address = ShippingAddress::new(params.shipping_address)?;
        let order = NewOrder::from_cart(
            &cart,
            NewOrderProps {
                user_id: session.user.id.clone(),
                shipping_address,
                payment_method: params.payment_method,
                notes: params.notes.trim().to_string(),
            },
        )?;

        self.logger.info(&format!(
            "Placing order for user {} ({} items, total {})",
            order.user_id,
            cart.total_items(),
            order.total
        ));

        let receipt = self
            .gateway
            .submit(&order, &session.token)
            .await
            .inspect_err(|e| {
                self.logger
                    .error(&format!("Failed to place order, cart kept: {}", e))
            })?;

        self.cart_store.clear_cart().await;
        self.logger
            .info(&format!("Order {} placed", receipt.id));

        Ok(receipt)
    }
}
