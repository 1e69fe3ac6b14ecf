use async_trait::async_trait;

use crate::domain::order::errors::OrderError;
use crate::domain::order::model::Order;
use crate::domain::shared::fetch::FetchOutcome;

/// Lists the signed-in user's orders, falling back to sample history.
#[async_trait]
pub trait GetOrdersUseCase: Send + Sync {
    async fn execute(&self) -> Result<FetchOutcome<Vec<Order>>, OrderError>;
}
