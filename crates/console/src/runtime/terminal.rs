//! Terminal state management and cleanup.
//!
//! Responsibilities:
//! - Ensure terminal state is restored on exit, even during panics.
//!
//! Does NOT handle:
//! - Initial terminal setup (done in `main.rs`).
//!
//! Invariants / Assumptions:
//! - Must be created after terminal setup is complete.
//! - Must live for the duration of the interactive session.
//! - Drop implementation must not panic.

use crossterm::{
    execute,
    terminal::{LeaveAlternateScreen, disable_raw_mode},
};

/// Guard that restores the terminal (raw mode off, main screen) on drop.
pub struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        // Errors are ignored: drop must not panic, and main() has usually
        // restored the terminal already.
        let _ = disable_raw_mode();
        let _ = execute!(std::io::stdout(), LeaveAlternateScreen);
    }
}
