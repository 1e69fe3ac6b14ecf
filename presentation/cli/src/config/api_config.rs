use std::env;
use std::time::Duration;

pub const DEFAULT_API_URL: &str = "https://genosys.ae";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Storefront API access
///
/// Environment variables:
/// - STOREFRONT_API_URL: Base URL of the storefront backend (default: https://genosys.ae)
/// - STOREFRONT_API_TIMEOUT_SECS: Request timeout in seconds (default: 30)
pub struct ApiConfig {
    pub base_url: String,
    pub timeout: Duration,
}

impl ApiConfig {
    pub fn from_env() -> Self {
        let base_url =
            env::var("STOREFRONT_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        let timeout_secs = env::var("STOREFRONT_API_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .filter(|secs| *secs > 0)
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        Self {
            base_url,
            timeout: Duration::from_secs(timeout_secs),
        }
    }
}
