use async_trait::async_trait;

use crate::domain::order::errors::OrderError;
use crate::domain::order::model::{OrderReceipt, ShippingAddressProps};
use crate::domain::order::value_objects::PaymentMethod;

pub struct PlaceOrderParams {
    pub shipping_address: ShippingAddressProps,
    pub payment_method: PaymentMethod,
    pub notes: String,
}

#[async_trait]
pub trait PlaceOrderUseCase: Send + Sync {
    async fn execute(&self, params: PlaceOrderParams) -> Result<OrderReceipt, OrderError>;
}
