//! Client builder for constructing [`AwxClient`] instances.
//!
//! This module is responsible for:
//! - Providing a fluent builder API for client configuration
//! - Validating required configuration (base_url, auth_strategy)
//! - Normalizing the base URL (removing trailing slashes)
//! - Configuring the underlying HTTP client (timeouts, TLS verification)
//!
//! # Invariants
//! - `base_url` and `auth_strategy` are required and must be set before `build()`
//! - `skip_verify` only affects HTTPS connections; HTTP connections log a warning

use std::time::Duration;

use crate::auth::AuthStrategy;
use crate::client::AwxClient;
use crate::error::{ClientError, Result};
use awx_config::{
    Config,
    constants::{DEFAULT_MAX_REDIRECTS, DEFAULT_MAX_RETRIES, DEFAULT_TIMEOUT_SECS},
};

/// Builder for creating a new [`AwxClient`].
pub struct AwxClientBuilder {
    base_url: Option<String>,
    auth_strategy: Option<AuthStrategy>,
    skip_verify: bool,
    timeout: Duration,
    max_retries: usize,
}

impl Default for AwxClientBuilder {
    fn default() -> Self {
        Self {
            base_url: None,
            auth_strategy: None,
            skip_verify: false,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            max_retries: DEFAULT_MAX_RETRIES,
        }
    }
}

impl AwxClientBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the base URL of the AWX server, e.g. `https://awx.example.com`.
    ///
    /// Trailing slashes will be automatically removed.
    pub fn base_url(mut self, url: String) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Set the authentication strategy.
    pub fn auth_strategy(mut self, strategy: AuthStrategy) -> Self {
        self.auth_strategy = Some(strategy);
        self
    }

    /// Set whether to skip TLS certificate verification.
    ///
    /// # Security Warning
    /// Only use this in development or testing environments.
    pub fn skip_verify(mut self, skip: bool) -> Self {
        self.skip_verify = skip;
        self
    }

    /// Set the request timeout. Default is 30 seconds.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the maximum number of retries for rate-limited requests.
    pub fn max_retries(mut self, retries: usize) -> Self {
        self.max_retries = retries;
        self
    }

    /// Pre-configure the builder from loaded configuration.
    pub fn from_config(mut self, config: &Config) -> Self {
        self.base_url = Some(config.connection.base_url.clone());
        self.auth_strategy = Some(AuthStrategy::from(&config.auth.strategy));
        self.skip_verify = config.connection.skip_verify;
        self.timeout = config.connection.timeout;
        self.max_retries = config.connection.max_retries;
        self
    }

    fn normalize_base_url(url: String) -> String {
        url.trim_end_matches('/').to_string()
    }

    /// Build the [`AwxClient`] with the configured options.
    ///
    /// # Errors
    ///
    /// - [`ClientError::InvalidUrl`] if `base_url` was not provided.
    /// - [`ClientError::AuthFailed`] if `auth_strategy` was not provided.
    /// - `ClientError::HttpError` if the HTTP client fails to build.
    pub fn build(self) -> Result<AwxClient> {
        let base_url = self
            .base_url
            .ok_or_else(|| ClientError::InvalidUrl("base_url is required".to_string()))?;
        let base_url = Self::normalize_base_url(base_url);

        let auth = self
            .auth_strategy
            .ok_or_else(|| ClientError::AuthFailed("auth_strategy is required".to_string()))?;

        let mut http_builder = reqwest::Client::builder()
            .timeout(self.timeout)
            .redirect(reqwest::redirect::Policy::limited(DEFAULT_MAX_REDIRECTS));

        if self.skip_verify {
            if base_url.starts_with("https://") {
                http_builder = http_builder.danger_accept_invalid_certs(true);
            } else {
                tracing::warn!(
                    "skip_verify=true has no effect on HTTP URLs. TLS verification only applies to HTTPS connections."
                );
            }
        }

        let http = http_builder.build()?;

        Ok(AwxClient {
            http,
            base_url,
            auth,
            max_retries: self.max_retries,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::SecretString;

    #[test]
    fn test_from_config_with_api_token() {
        let config = Config::with_api_token(
            "https://awx.example.com".to_string(),
            SecretString::new("test-token".to_string().into()),
        );

        let client = AwxClient::builder().from_config(&config).build().unwrap();
        assert_eq!(client.base_url(), "https://awx.example.com");
        assert!(client.is_api_token_auth());
    }

    #[test]
    fn test_from_config_with_basic_auth() {
        let config = Config::with_basic_auth(
            "https://awx.example.com".to_string(),
            "admin".to_string(),
            SecretString::new("test-password".to_string().into()),
        );

        let client = AwxClient::builder().from_config(&config).build().unwrap();
        assert!(!client.is_api_token_auth());
    }

    #[test]
    fn test_from_config_preserves_settings() {
        let mut config = Config::with_api_token(
            "https://awx.example.com".to_string(),
            SecretString::new("test-token".to_string().into()),
        );
        config.connection.skip_verify = true;
        config.connection.timeout = Duration::from_secs(120);
        config.connection.max_retries = 7;

        let builder = AwxClient::builder().from_config(&config);

        assert_eq!(builder.base_url, Some("https://awx.example.com".to_string()));
        assert!(builder.skip_verify);
        assert_eq!(builder.timeout, Duration::from_secs(120));
        assert_eq!(builder.max_retries, 7);
    }

    #[test]
    fn test_normalize_base_url_multiple_trailing_slashes() {
        assert_eq!(
            AwxClientBuilder::normalize_base_url("https://awx.example.com//".to_string()),
            "https://awx.example.com"
        );
    }
}
