use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::auth::store::AuthStore;
use crate::domain::logger::Logger;
use crate::domain::order::errors::OrderError;
use crate::domain::order::model::Order;
use crate::domain::order::samples::sample_orders;
use crate::domain::order::services::OrderGateway;
use crate::domain::order::use_cases::get_all::GetOrdersUseCase;
use crate::domain::shared::fetch::FetchOutcome;

pub struct GetOrdersUseCaseImpl {
    pub gateway: Arc<dyn OrderGateway>,
    pub auth_store: Arc<dyn AuthStore>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetOrdersUseCase for GetOrdersUseCaseImpl {
    async fn execute(&self) -> Result<FetchOutcome<Vec<Order>>, OrderError> {
        let session = self
            .auth_store
            .session()
            .await
            .ok_or(OrderError::NotAuthenticated)?;

        self.logger
            .info(&format!("Fetching orders for user {}", session.user.id));

        match self
            .gateway
            .get_by_user(&session.user.id, &session.token)
            .await
        {
            Ok(orders) => Ok(FetchOutcome::Live(orders)),
            Err(e) => {
                self.logger
                    .error(&format!("Failed to fetch orders, showing samples: {}", e));
                Ok(FetchOutcome::Fallback(sample_orders(Some(
                    &session.user.name,
                ))))
            }
        }
    }
}
