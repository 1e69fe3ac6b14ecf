use std::time::Duration;

use reqwest::{Client, RequestBuilder, Response, StatusCode, Url};
use serde::de::DeserializeOwned;

use business::domain::auth::model::AuthToken;
use business::domain::errors::NetworkError;

/// Shared storefront HTTP client configuration.
pub struct ApiClient {
    pub client: Client,
    pub base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_default();

        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Absolute URL for an API path such as `/api/products`.
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// URL for `path` followed by `segment` as a single percent-encoded path segment,
    /// so ids containing `/`, `?` or `#` cannot reach another endpoint.
    pub fn resource_url(&self, path: &str, segment: &str) -> Result<Url, NetworkError> {
        let mut url = Url::parse(&self.url(path)).map_err(|e| {
            tracing::debug!("Invalid API base URL {}: {}", self.base_url, e);
            NetworkError::Unreachable
        })?;
        url.path_segments_mut()
            .map_err(|_| NetworkError::Unreachable)?
            .push(segment);
        Ok(url)
    }

    /// Builds the authorization header value.
    pub fn auth_header(token: &AuthToken) -> String {
        format!("Bearer {}", token.as_str())
    }

    pub async fn send(&self, request: RequestBuilder) -> Result<Response, NetworkError> {
        request.send().await.map_err(|e| {
            tracing::debug!("Request failed: {}", e);
            if e.is_timeout() {
                NetworkError::Timeout
            } else {
                NetworkError::Unreachable
            }
        })
    }

    /// Fails with `UnexpectedStatus` on any non-2xx status.
    pub fn ensure_success(response: Response) -> Result<Response, NetworkError> {
        let status = response.status();
        if !status.is_success() {
            tracing::debug!("Unexpected status {} from {}", status, response.url());
            return Err(NetworkError::UnexpectedStatus(status.as_u16()));
        }
        Ok(response)
    }

    pub async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, NetworkError> {
        response.json::<T>().await.map_err(|e| {
            tracing::debug!("Invalid response payload: {}", e);
            if e.is_timeout() {
                NetworkError::Timeout
            } else {
                NetworkError::InvalidPayload
            }
        })
    }

    pub fn is_unauthorized(status: StatusCode) -> bool {
        status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN
    }
}
