//! Centralized constants for the AWX console workspace.
//!
//! Default values shared between the config, client and console crates.

// =============================================================================
// Connection & Timeout Defaults
// =============================================================================

/// Default HTTP request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Maximum allowed request timeout in seconds (1 hour).
pub const MAX_TIMEOUT_SECS: u64 = 3600;

/// Default maximum number of HTTP redirects to follow.
pub const DEFAULT_MAX_REDIRECTS: usize = 5;

/// Default maximum number of retries for rate-limited requests.
pub const DEFAULT_MAX_RETRIES: usize = 3;

/// Upper bound accepted for `max_retries`.
pub const MAX_MAX_RETRIES: usize = 10;

// =============================================================================
// API Layout
// =============================================================================

/// Root of the versioned AWX REST API.
pub const API_V2_PREFIX: &str = "/api/v2";

// =============================================================================
// Console Defaults
// =============================================================================

/// Default channel capacity for action messages.
pub const DEFAULT_CHANNEL_CAPACITY: usize = 64;

/// Default UI tick interval in milliseconds.
pub const DEFAULT_UI_TICK_MS: u64 = 250;
