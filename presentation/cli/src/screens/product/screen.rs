use std::sync::Arc;

use business::domain::cart::store::CartStore;
use business::domain::product::filter::ProductFilter;
use business::domain::product::use_cases::add_to_cart::{
    AddProductToCartParams, AddProductToCartUseCase,
};
use business::domain::product::use_cases::get_all::{GetAllProductsParams, GetAllProductsUseCase};
use business::domain::product::use_cases::get_by_id::{
    GetProductByIdParams, GetProductByIdUseCase,
};
use business::domain::shared::value_objects::ProductId;

use super::view;
use crate::screens::alert::{IntoAlert, ScreenResult};

pub struct ProductScreen {
    get_all_use_case: Arc<dyn GetAllProductsUseCase>,
    get_by_id_use_case: Arc<dyn GetProductByIdUseCase>,
    add_to_cart_use_case: Arc<dyn AddProductToCartUseCase>,
    cart_store: Arc<dyn CartStore>,
}

impl ProductScreen {
    pub fn new(
        get_all_use_case: Arc<dyn GetAllProductsUseCase>,
        get_by_id_use_case: Arc<dyn GetProductByIdUseCase>,
        add_to_cart_use_case: Arc<dyn AddProductToCartUseCase>,
        cart_store: Arc<dyn CartStore>,
    ) -> Self {
        Self {
            get_all_use_case,
            get_by_id_use_case,
            add_to_cart_use_case,
            cart_store,
        }
    }

    pub async fn list(&self, filter: ProductFilter) -> ScreenResult {
        let outcome = self
            .get_all_use_case
            .execute(GetAllProductsParams {
                filter: filter.clone(),
            })
            .await;

        Ok(view::product_list(&outcome, &filter))
    }

    pub async fn detail(&self, id: ProductId) -> ScreenResult {
        let outcome = self
            .get_by_id_use_case
            .execute(GetProductByIdParams { id })
            .await;

        Ok(view::product_detail(&outcome))
    }

    pub async fn add(&self, product_id: ProductId, quantity: u32) -> ScreenResult {
        let item = self
            .add_to_cart_use_case
            .execute(AddProductToCartParams {
                product_id,
                quantity,
            })
            .await
            .map_err(|e| e.into_alert())?;

        Ok(view::added_to_cart(&item, self.cart_store.total_items().await))
    }
}
