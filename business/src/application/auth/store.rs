use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::auth::errors::AuthError;
use crate::domain::auth::model::{Credentials, RegisterParams, Registration, Session, User};
use crate::domain::auth::repository::SessionRepository;
use crate::domain::auth::services::Authenticator;
use crate::domain::auth::store::AuthStore;
use crate::domain::logger::Logger;

pub struct AuthStoreImpl {
    authenticator: Arc<dyn Authenticator>,
    repository: Arc<dyn SessionRepository>,
    logger: Arc<dyn Logger>,
    state: RwLock<Option<Session>>,
}

impl AuthStoreImpl {
    pub fn new(
        authenticator: Arc<dyn Authenticator>,
        repository: Arc<dyn SessionRepository>,
        logger: Arc<dyn Logger>,
    ) -> Self {
        Self {
            authenticator,
            repository,
            logger,
            state: RwLock::new(None),
        }
    }

    async fn establish(&self, session: Session) -> User {
        let user = session.user.clone();
        let mut state = self.state.write().await;
        if let Err(e) = self.repository.save(&session).await {
            self.logger
                .warn(&format!("Failed to persist session for {}: {}", user.id, e));
        }
        *state = Some(session);
        user
    }
}

#[async_trait]
impl AuthStore for AuthStoreImpl {
    async fn restore(&self) {
        match self.repository.load().await {
            Ok(Some(session)) => {
                self.logger
                    .info(&format!("Restored session for user {}", session.user.id));
                *self.state.write().await = Some(session);
            }
            Ok(None) => self.logger.debug("No persisted session"),
            Err(e) => self
                .logger
                .warn(&format!("Failed to restore session, signed out: {}", e)),
        }
    }

    async fn session(&self) -> Option<Session> {
        self.state.read().await.clone()
    }

    async fn current_user(&self) -> Option<User> {
        self.state.read().await.as_ref().map(|s| s.user.clone())
    }

    async fn is_authenticated(&self) -> bool {
        self.state.read().await.is_some()
    }

    async fn login(&self, email: &str, password: &str) -> Result<User, AuthError> {
        let credentials = Credentials::new(email, password)?;
        self.logger
            .info(&format!("Signing in as {}", credentials.email));

        let session = self
            .authenticator
            .login(&credentials)
            .await
            .inspect_err(|e| self.logger.warn(&format!("Sign in failed: {}", e)))?;

        Ok(self.establish(session).await)
    }

    async fn register(&self, params: RegisterParams) -> Result<User, AuthError> {
        let registration = Registration::new(params)?;
        self.logger.info(&format!(
            "Registering {} as {}",
            registration.email, registration.role
        ));

        let session = self
            .authenticator
            .register(&registration)
            .await
            .inspect_err(|e| self.logger.warn(&format!("Registration failed: {}", e)))?;

        Ok(self.establish(session).await)
    }

    async fn logout(&self) {
        self.logger.info("Signing out");
        let mut state = self.state.write().await;
        *state = None;
        if let Err(e) = self.repository.clear().await {
            self.logger
                .warn(&format!("Failed to clear persisted session: {}", e));
        }
    }
}
