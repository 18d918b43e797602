//! Configuration types for the AWX console.
//!
//! Responsibilities:
//! - Define connection settings (URL, TLS verification, timeout, retries).
//! - Define authentication strategies (bearer token, basic credentials).
//! - Define the main `Config` structure combining connection and auth.
//!
//! Does NOT handle:
//! - Configuration loading from files/env (see `loader` module).
//! - Actual network connections (see client crate).
//!
//! Invariants:
//! - All secret values use `secrecy::SecretString` so they never show up in `Debug` output.

use crate::constants::{DEFAULT_MAX_RETRIES, DEFAULT_TIMEOUT_SECS};
use secrecy::SecretString;
use std::time::Duration;

/// Strategy for authenticating with AWX.
#[derive(Debug, Clone)]
pub enum AuthStrategy {
    /// OAuth2 or personal access token, sent as `Authorization: Bearer`.
    ApiToken { token: SecretString },
    /// Username and password, sent as HTTP basic auth.
    Basic {
        username: String,
        password: SecretString,
    },
}

/// Authentication configuration.
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// The authentication strategy to use.
    pub strategy: AuthStrategy,
}

/// Connection configuration for the AWX server.
#[derive(Debug, Clone)]
pub struct ConnectionConfig {
    /// Base URL of the AWX server (e.g., https://awx.example.com)
    pub base_url: String,
    /// Whether to skip TLS verification (for self-signed certificates)
    pub skip_verify: bool,
    /// Request timeout
    pub timeout: Duration,
    /// Maximum number of retries for rate-limited requests
    pub max_retries: usize,
}

/// Main configuration structure.
#[derive(Debug, Clone)]
pub struct Config {
    /// Connection settings
    pub connection: ConnectionConfig,
    /// Authentication settings
    pub auth: AuthConfig,
}

impl Config {
    /// Create a new config with the specified base URL and API token.
    pub fn with_api_token(base_url: String, token: SecretString) -> Self {
        Self {
            connection: ConnectionConfig::new(base_url),
            auth: AuthConfig {
                strategy: AuthStrategy::ApiToken { token },
            },
        }
    }

    /// Create a new config with the specified base URL and basic credentials.
    pub fn with_basic_auth(base_url: String, username: String, password: SecretString) -> Self {
        Self {
            connection: ConnectionConfig::new(base_url),
            auth: AuthConfig {
                strategy: AuthStrategy::Basic { username, password },
            },
        }
    }
}

impl ConnectionConfig {
    fn new(base_url: String) -> Self {
        Self {
            base_url,
            skip_verify: false,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            max_retries: DEFAULT_MAX_RETRIES,
        }
    }
}
