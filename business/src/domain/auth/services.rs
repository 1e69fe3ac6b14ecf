use async_trait::async_trait;

use super::errors::AuthError;
use super::model::{Credentials, Registration, Session};

/// Service port for the backend's account endpoints.
///
/// Rejected credentials map to `AuthError::InvalidCredentials`, a refused
/// sign-up to `AuthError::RegistrationRejected`, anything else to `AuthError::Network`.
#[async_trait]
pub trait Authenticator: Send + Sync {
    async fn login(&self, credentials: &Credentials) -> Result<Session, AuthError>;
    async fn register(&self, registration: &Registration) -> Result<Session, AuthError>;
}
