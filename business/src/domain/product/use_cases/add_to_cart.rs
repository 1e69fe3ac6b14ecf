use async_trait::async_trait;

use crate::domain::cart::model::CartItem;
use crate::domain::product::errors::ProductError;
use crate::domain::shared::value_objects::ProductId;

pub struct AddProductToCartParams {
    pub product_id: ProductId,
    pub quantity: u32,
}

#[async_trait]
pub trait AddProductToCartUseCase: Send + Sync {
    async fn execute(&self, params: AddProductToCartParams) -> Result<CartItem, ProductError>;
}
