use std::sync::Arc;

use business::domain::cart::store::CartStore;
use business::domain::order::use_cases::get_all::GetOrdersUseCase;
use business::domain::order::use_cases::place::{PlaceOrderParams, PlaceOrderUseCase};

use super::view;
use crate::screens::alert::{IntoAlert, ScreenResult};

pub struct OrderScreen {
    place_order_use_case: Arc<dyn PlaceOrderUseCase>,
    get_orders_use_case: Arc<dyn GetOrdersUseCase>,
    cart_store: Arc<dyn CartStore>,
}

impl OrderScreen {
    pub fn new(
        place_order_use_case: Arc<dyn PlaceOrderUseCase>,
        get_orders_use_case: Arc<dyn GetOrdersUseCase>,
        cart_store: Arc<dyn CartStore>,
    ) -> Self {
        Self {
            place_order_use_case,
            get_orders_use_case,
            cart_store,
        }
    }

    pub async fn checkout(&self, params: PlaceOrderParams) -> ScreenResult {
        let cart = self.cart_store.snapshot().await;
        let payment_method = params.payment_method;

        let receipt = self
            .place_order_use_case
            .execute(params)
            .await
            .map_err(|e| e.into_alert())?;

        Ok(view::order_placed(&cart, payment_method, &receipt))
    }

    pub async fn orders(&self) -> ScreenResult {
        let outcome = self
            .get_orders_use_case
            .execute()
            .await
            .map_err(|e| e.into_alert())?;

        Ok(view::order_list(&outcome))
    }
}
