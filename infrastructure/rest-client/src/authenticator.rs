use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use business::domain::auth::errors::AuthError;
use business::domain::auth::model::{AuthToken, Credentials, Registration, Role, Session, User};
use business::domain::auth::services::Authenticator;

use crate::client::ApiClient;

#[derive(Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RegisterRequest<'a> {
    first_name: &'a str,
    last_name: &'a str,
    email: &'a str,
    password: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    company: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    phone: Option<&'a str>,
    role: Role,
}

#[derive(Deserialize)]
struct AuthResponse {
    token: AuthToken,
    user: User,
}

pub struct AuthenticatorHttp {
    client: Arc<ApiClient>,
}

impl AuthenticatorHttp {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Authenticator for AuthenticatorHttp {
    async fn login(&self, credentials: &Credentials) -> Result<Session, AuthError> {
        let request = self
            .client
            .client
            .post(self.client.url("/api/auth/login"))
            .json(&LoginRequest {
                email: &credentials.email,
                password: &credentials.password,
            });
        let response = self.client.send(request).await?;

        if ApiClient::is_unauthorized(response.status()) {
            return Err(AuthError::InvalidCredentials);
        }

        let body: AuthResponse =
            ApiClient::read_json(ApiClient::ensure_success(response)?).await?;
        Ok(Session::new(body.token, body.user))
    }

    async fn register(&self, registration: &Registration) -> Result<Session, AuthError> {
        let request = self
            .client
            .client
            .post(self.client.url("/api/auth/register"))
            .json(&RegisterRequest {
                first_name: &registration.first_name,
                last_name: &registration.last_name,
                email: &registration.email,
                password: &registration.password,
                company: registration.company.as_deref(),
                phone: registration.phone.as_deref(),
                role: registration.role,
            });
        let response = self.client.send(request).await?;

        if response.status().is_client_error() {
            return Err(AuthError::RegistrationRejected);
        }

        let body: AuthResponse =
            ApiClient::read_json(ApiClient::ensure_success(response)?).await?;
        Ok(Session::new(body.token, body.user))
    }
}
