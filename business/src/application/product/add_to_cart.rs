use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::model::CartItem;
use crate::domain::cart::store::CartStore;
use crate::domain::errors::NetworkError;
use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::services::ProductCatalog;
use crate::domain::product::use_cases::add_to_cart::{
    AddProductToCartParams, AddProductToCartUseCase,
};

pub struct AddProductToCartUseCaseImpl {
    pub catalog: Arc<dyn ProductCatalog>,
    pub cart_store: Arc<dyn CartStore>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl AddProductToCartUseCase for AddProductToCartUseCaseImpl {
    async fn execute(&self, params: AddProductToCartParams) -> Result<CartItem, ProductError> {
        self.logger.info(&format!(
            "Adding product {} (x{}) to cart",
            params.product_id, params.quantity
        ));

        let product = self
            .catalog
            .get_by_id(&params.product_id)
            .await
            .map_err(|e| match e {
                NetworkError::UnexpectedStatus(404) => ProductError::NotFound,
                other => ProductError::Network(other),
            })?;

        let item = CartItem::from_product(&product, params.quantity)?;
        self.cart_store.add_to_cart(item.clone()).await;

        Ok(item)
    }
}
