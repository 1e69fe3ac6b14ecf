use async_trait::async_trait;

use crate::domain::errors::RepositoryError;

use super::model::Session;

/// Local storage for the signed-in session (token plus profile).
#[async_trait]
pub trait SessionRepository: Send + Sync {
    async fn load(&self) -> Result<Option<Session>, RepositoryError>;
    async fn save(&self, session: &Session) -> Result<(), RepositoryError>;
    async fn clear(&self) -> Result<(), RepositoryError>;
}
