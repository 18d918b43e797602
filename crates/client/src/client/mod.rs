//! Main AWX REST API client and API methods.
//!
//! This module provides the primary [`AwxClient`] for interacting with the
//! AWX REST API (`/api/v2`).
//!
//! # Submodules
//! - [`builder`]: Client construction and configuration
//! - `inventory_sources`: Inventory source methods
//!
//! # What this module does NOT handle:
//! - Direct HTTP request implementation (delegated to [`crate::endpoints`])

pub mod builder;

mod inventory_sources;

use crate::auth::AuthStrategy;

/// AWX REST API client.
///
/// # Creating a Client
///
/// ```rust,ignore
/// use awx_client::{AwxClient, AuthStrategy};
/// use secrecy::SecretString;
///
/// let client = AwxClient::builder()
///     .base_url("https://awx.example.com".to_string())
///     .auth_strategy(AuthStrategy::ApiToken {
///         token: SecretString::new("my-token".to_string().into()),
///     })
///     .build()?;
/// ```
#[derive(Debug, Clone)]
pub struct AwxClient {
    pub(crate) http: reqwest::Client,
    pub(crate) base_url: String,
    pub(crate) auth: AuthStrategy,
    pub(crate) max_retries: usize,
}

impl AwxClient {
    /// Create a new client builder.
    pub fn builder() -> builder::AwxClientBuilder {
        builder::AwxClientBuilder::new()
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Whether requests authenticate with a bearer token.
    pub fn is_api_token_auth(&self) -> bool {
        matches!(self.auth, AuthStrategy::ApiToken { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ClientError;
    use secrecy::SecretString;

    fn token() -> AuthStrategy {
        AuthStrategy::ApiToken {
            token: SecretString::new("test-token".to_string().into()),
        }
    }

    #[test]
    fn test_client_builder_with_api_token() {
        let client = AwxClient::builder()
            .base_url("https://awx.example.com".to_string())
            .auth_strategy(token())
            .build()
            .unwrap();

        assert_eq!(client.base_url(), "https://awx.example.com");
        assert!(client.is_api_token_auth());
    }

    #[test]
    fn test_client_builder_missing_base_url() {
        let client = AwxClient::builder().auth_strategy(token()).build();
        assert!(matches!(client.unwrap_err(), ClientError::InvalidUrl(_)));
    }

    #[test]
    fn test_client_builder_missing_auth() {
        let client = AwxClient::builder()
            .base_url("https://awx.example.com".to_string())
            .build();
        assert!(matches!(client.unwrap_err(), ClientError::AuthFailed(_)));
    }

    #[test]
    fn test_client_builder_normalizes_base_url() {
        let client = AwxClient::builder()
            .base_url("https://awx.example.com/".to_string())
            .auth_strategy(token())
            .build()
            .unwrap();

        assert_eq!(client.base_url(), "https://awx.example.com");
    }

    #[test]
    fn test_skip_verify_with_http_url() {
        // Succeeds but logs that skip_verify has no effect
        let client = AwxClient::builder()
            .base_url("http://localhost:8052".to_string())
            .auth_strategy(token())
            .skip_verify(true)
            .build();

        assert!(client.is_ok());
    }
}
