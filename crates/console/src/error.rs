//! Submit failures and process exit codes.
//!
//! Responsibilities:
//! - Define [`SubmitFailure`], the single error kind the add controller exposes.
//! - Define structured [`ExitCode`]s and map client, config and submit errors to them.
//!
//! Does NOT handle:
//! - Rendering the failure (see `ui`).
//! - Retrying failed creates; a failed submit stays failed until the user submits again.

use awx_client::ClientError;
use awx_config::ConfigError;
use thiserror::Error;

/// Message shown when a failed create carries no `detail`.
pub const GENERIC_SUBMIT_ERROR: &str = "An error occurred while saving the inventory source.";

/// A failed inventory source create, as surfaced to the form.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}", self.message())]
pub struct SubmitFailure {
    detail: Option<String>,
    status: Option<u16>,
    transport: bool,
}

impl SubmitFailure {
    pub fn new(detail: Option<String>, status: Option<u16>) -> Self {
        Self {
            detail,
            status,
            transport: false,
        }
    }

    /// The server's `detail` text when it sent one, otherwise the generic message.
    pub fn message(&self) -> &str {
        self.detail.as_deref().unwrap_or(GENERIC_SUBMIT_ERROR)
    }

    pub fn detail(&self) -> Option<&str> {
        self.detail.as_deref()
    }

    pub fn status(&self) -> Option<u16> {
        self.status
    }

    /// Whether the request never got an answer from the server.
    pub fn is_transport(&self) -> bool {
        self.transport
    }
}

impl From<&ClientError> for SubmitFailure {
    fn from(err: &ClientError) -> Self {
        Self {
            detail: err.detail().map(str::to_string),
            status: err.status(),
            transport: err.is_connection_error(),
        }
    }
}

/// Structured exit codes for awx-console.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// The form navigated (saved or cancelled) or the user quit.
    Success = 0,

    /// General error - unhandled or generic failure.
    GeneralError = 1,

    /// Authentication failure - missing, invalid or rejected credentials.
    AuthenticationFailed = 2,

    /// Connection error - network, timeout, or DNS failure.
    ConnectionError = 3,

    /// Validation error - the draft was rejected locally or by the server.
    ValidationError = 5,
}

impl ExitCode {
    /// Convert the exit code to an i32 for use with std::process::exit().
    pub const fn as_i32(self) -> i32 {
        self as u8 as i32
    }
}

impl From<&ClientError> for ExitCode {
    fn from(err: &ClientError) -> Self {
        if err.is_auth_error() {
            return ExitCode::AuthenticationFailed;
        }
        if err.is_connection_error() {
            return ExitCode::ConnectionError;
        }
        match err {
            ClientError::ApiError { status: 400, .. } => ExitCode::ValidationError,
            ClientError::InvalidResponse(_) => ExitCode::ValidationError,
            _ => ExitCode::GeneralError,
        }
    }
}

impl From<&SubmitFailure> for ExitCode {
    fn from(failure: &SubmitFailure) -> Self {
        match failure.status {
            Some(401) | Some(403) => ExitCode::AuthenticationFailed,
            Some(400) => ExitCode::ValidationError,
            _ if failure.transport => ExitCode::ConnectionError,
            _ => ExitCode::GeneralError,
        }
    }
}

impl From<&ConfigError> for ExitCode {
    fn from(err: &ConfigError) -> Self {
        match err {
            ConfigError::MissingAuth => ExitCode::AuthenticationFailed,
            _ => ExitCode::GeneralError,
        }
    }
}

/// Determine the exit code for a top-level error.
///
/// Walks the error chain looking for a client, config or submit error;
/// anything else is a general error.
pub fn exit_code_for(err: &anyhow::Error) -> ExitCode {
    for cause in err.chain() {
        if let Some(client_err) = cause.downcast_ref::<ClientError>() {
            return ExitCode::from(client_err);
        }
        if let Some(failure) = cause.downcast_ref::<SubmitFailure>() {
            return ExitCode::from(failure);
        }
        if let Some(config_err) = cause.downcast_ref::<ConfigError>() {
            return ExitCode::from(config_err);
        }
    }
    ExitCode::GeneralError
}
