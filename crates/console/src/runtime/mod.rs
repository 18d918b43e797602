//! Runtime components for the console.
//!
//! This module contains the runtime infrastructure:
//! - Configuration loading with CLI overrides
//! - Tracing subscriber setup
//! - Async side effect handlers for API calls
//! - Headless (`--no-tui`) runs
//! - Terminal management (TerminalGuard)
//!
//! Does NOT handle:
//! - UI rendering or input handling (see `awx_console::app` and `awx_console::ui`).
//! - REST calls themselves (see `awx_client`).

pub mod config;
pub mod headless;
pub mod logging;
pub mod side_effects;
pub mod terminal;
