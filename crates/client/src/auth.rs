//! Authentication strategies for AWX requests.

use reqwest::RequestBuilder;
use secrecy::{ExposeSecret, SecretString};

/// Strategy for authenticating with AWX.
#[derive(Debug, Clone)]
pub enum AuthStrategy {
    /// OAuth2 or personal access token (bearer token authentication).
    /// This is preferred for automation.
    ApiToken { token: SecretString },
    /// Username and password sent with every request as HTTP basic auth.
    Basic {
        username: String,
        password: SecretString,
    },
}

impl AuthStrategy {
    /// Attach credentials to an outgoing request.
    pub(crate) fn apply(&self, builder: RequestBuilder) -> RequestBuilder {
        match self {
            Self::ApiToken { token } => builder.bearer_auth(token.expose_secret()),
            Self::Basic { username, password } => {
                builder.basic_auth(username, Some(password.expose_secret()))
            }
        }
    }
}

impl From<&awx_config::AuthStrategy> for AuthStrategy {
    fn from(strategy: &awx_config::AuthStrategy) -> Self {
        match strategy {
            awx_config::AuthStrategy::ApiToken { token } => Self::ApiToken {
                token: token.clone(),
            },
            awx_config::AuthStrategy::Basic { username, password } => Self::Basic {
                username: username.clone(),
                password: password.clone(),
            },
        }
    }
}
