use async_trait::async_trait;

use super::model::Product;
use crate::domain::errors::NetworkError;
use crate::domain::shared::value_objects::ProductId;

/// Service port for the remote product catalog.
///
/// Implementations report every transport or status failure as a `NetworkError`;
/// a missing product surfaces as `UnexpectedStatus(404)`.
#[async_trait]
pub trait ProductCatalog: Send + Sync {
    async fn get_all(&self) -> Result<Vec<Product>, NetworkError>;
    async fn get_by_id(&self, id: &ProductId) -> Result<Product, NetworkError>;
}
