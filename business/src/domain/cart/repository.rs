use async_trait::async_trait;

use crate::domain::errors::RepositoryError;

use super::model::CartItem;

/// Local persistence for the device cart. The store writes the full item list
/// through after every effective mutation.
#[async_trait]
pub trait CartRepository: Send + Sync {
    async fn load(&self) -> Result<Vec<CartItem>, RepositoryError>;
    async fn replace_all(&self, items: &[CartItem]) -> Result<(), RepositoryError>;
}
