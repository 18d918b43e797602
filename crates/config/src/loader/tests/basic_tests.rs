//! Basic loader tests: auth selection and required fields.

use crate::loader::builder::ConfigLoader;
use crate::loader::error::ConfigError;
use crate::types::AuthStrategy;
use secrecy::ExposeSecret;

#[test]
fn test_loader_with_api_token() {
    let config = ConfigLoader::new()
        .with_base_url("https://awx.example.com".to_string())
        .with_api_token("test-token".to_string())
        .build()
        .unwrap();

    match config.auth.strategy {
        AuthStrategy::ApiToken { token } => assert_eq!(token.expose_secret(), "test-token"),
        other => panic!("expected API token auth, got {:?}", other),
    }
}

#[test]
fn test_loader_with_basic_auth() {
    let config = ConfigLoader::new()
        .with_base_url("https://awx.example.com".to_string())
        .with_username("admin".to_string())
        .with_password("password".to_string())
        .build()
        .unwrap();

    assert!(matches!(
        config.auth.strategy,
        AuthStrategy::Basic { ref username, .. } if username == "admin"
    ));
}

#[test]
fn test_loader_missing_base_url() {
    let result = ConfigLoader::new()
        .with_api_token("test-token".to_string())
        .build();
    assert!(matches!(result, Err(ConfigError::MissingBaseUrl)));
}

#[test]
fn test_loader_missing_auth() {
    let result = ConfigLoader::new()
        .with_base_url("https://awx.example.com".to_string())
        .build();
    assert!(matches!(result, Err(ConfigError::MissingAuth)));
}

#[test]
fn test_username_without_password_is_missing_auth() {
    let result = ConfigLoader::new()
        .with_base_url("https://awx.example.com".to_string())
        .with_username("admin".to_string())
        .build();
    assert!(matches!(result, Err(ConfigError::MissingAuth)));
}

#[test]
fn test_api_token_takes_precedence() {
    let config = ConfigLoader::new()
        .with_base_url("https://awx.example.com".to_string())
        .with_username("admin".to_string())
        .with_password("password".to_string())
        .with_api_token("api-token".to_string())
        .build()
        .unwrap();

    assert!(matches!(
        config.auth.strategy,
        AuthStrategy::ApiToken { .. }
    ));
}

#[test]
fn test_defaults_applied() {
    let config = ConfigLoader::new()
        .with_base_url("https://awx.example.com".to_string())
        .with_api_token("test-token".to_string())
        .build()
        .unwrap();

    assert_eq!(config.connection.timeout.as_secs(), 30);
    assert_eq!(config.connection.max_retries, 3);
    assert!(!config.connection.skip_verify);
}
