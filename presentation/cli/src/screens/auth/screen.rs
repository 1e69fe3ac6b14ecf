use std::sync::Arc;

use business::domain::auth::errors::AuthError;
use business::domain::auth::model::RegisterParams;
use business::domain::auth::store::AuthStore;

use super::view;
use crate::screens::alert::{IntoAlert, ScreenResult};

pub struct AuthScreen {
    auth_store: Arc<dyn AuthStore>,
}

impl AuthScreen {
    pub fn new(auth_store: Arc<dyn AuthStore>) -> Self {
        Self { auth_store }
    }

    pub async fn login(&self, email: &str, password: &str) -> ScreenResult {
        let user = self
            .auth_store
            .login(email, password)
            .await
            .map_err(|e| e.into_alert())?;

        Ok(view::welcome(&user, false))
    }

    pub async fn register(&self, params: RegisterParams) -> ScreenResult {
        let user = self.auth_store.register(params).await.map_err(|e| match e {
            AuthError::Network(_) => AuthError::RegistrationRejected.into_alert(),
            other => other.into_alert(),
        })?;

        Ok(view::welcome(&user, true))
    }

    pub async fn logout(&self) -> ScreenResult {
        self.auth_store.logout().await;
        Ok("You have been logged out.".to_string())
    }

    pub async fn profile(&self) -> ScreenResult {
        let user = self.auth_store.current_user().await;
        Ok(view::profile(user.as_ref()))
    }
}
