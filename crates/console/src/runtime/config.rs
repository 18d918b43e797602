//! Configuration loading for the console.
//!
//! Responsibilities:
//! - Load connection configuration with CLI overrides.
//!
//! Does NOT handle:
//! - Creating the AWX client (see `AwxClient::builder().from_config`).
//!
//! Invariants:
//! - Configuration precedence: CLI args > env vars (including `.env`) > defaults.

use awx_config::{Config, ConfigError, ConfigLoader};

use crate::cli::Cli;

/// Load configuration from `.env`, the environment, and CLI overrides.
pub fn load_config(cli: &Cli) -> Result<Config, ConfigError> {
    let mut loader = ConfigLoader::new().load_dotenv()?.from_env()?;

    if let Some(url) = &cli.base_url {
        loader = loader.with_base_url(url.clone());
    }
    if let Some(username) = &cli.username {
        loader = loader.with_username(username.clone());
    }
    if cli.skip_verify {
        loader = loader.with_skip_verify(true);
    }

    loader.build()
}
