use async_trait::async_trait;

use super::errors::AuthError;
use super::model::{RegisterParams, Session, User};

/// Holds the current session for the app's runtime.
///
/// A failed `login` or `register` never touches the current session.
#[async_trait]
pub trait AuthStore: Send + Sync {
    /// Loads a persisted session, if any, into memory.
    async fn restore(&self);
    async fn session(&self) -> Option<Session>;
    async fn current_user(&self) -> Option<User>;
    async fn is_authenticated(&self) -> bool;
    async fn login(&self, email: &str, password: &str) -> Result<User, AuthError>;
    async fn register(&self, params: RegisterParams) -> Result<User, AuthError>;
    /// Clears the session unconditionally.
    async fn logout(&self);
}
