use async_trait::async_trait;

use super::model::{NewOrder, Order, OrderReceipt};
use crate::domain::auth::model::AuthToken;
use crate::domain::errors::NetworkError;
use crate::domain::shared::value_objects::UserId;

/// Service port for the remote order API. The client only submits and reads back;
/// order lifecycle beyond that belongs to the backend.
#[async_trait]
pub trait OrderGateway: Send + Sync {
    async fn submit(
        &self,
        order: &NewOrder,
        token: &AuthToken,
    ) -> Result<OrderReceipt, NetworkError>;
    async fn get_by_user(
        &self,
        user_id: &UserId,
        token: &AuthToken,
    ) -> Result<Vec<Order>, NetworkError>;
}
