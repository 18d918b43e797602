//! Terminal console for adding AWX inventory sources.
//!
//! The [`controller::InventorySourceAdd`] controller sits between the form
//! ([`form`], rendered by [`ui`]) and the inventory sources API ([`api`]):
//! cancel navigates back to the sources list, submit flattens the draft,
//! creates the source, and navigates to its details or keeps the failure for
//! display.

pub mod action;
pub mod api;
pub mod app;
pub mod cli;
pub mod controller;
pub mod error;
pub mod form;
pub mod navigation;
pub mod routes;
pub mod runtime;
pub mod ui;

pub use controller::{InventorySourceAdd, SubmitState};
pub use error::{ExitCode, SubmitFailure};
pub use navigation::{History, Navigator};
pub use routes::Route;
