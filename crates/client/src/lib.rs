//! AWX REST API client.
//!
//! This crate provides a type-safe client for the inventory sources endpoints
//! of the AWX REST API v2, along with the draft and payload models the console
//! uses to create inventory sources.

mod auth;
pub mod client;
pub mod endpoints;
pub mod error;
pub mod models;

#[cfg(any(feature = "test-utils", test))]
pub mod testing;

pub use auth::AuthStrategy;
pub use client::AwxClient;
pub use client::builder::AwxClientBuilder;
pub use error::{ClientError, Result};
pub use models::{
    CreatedInventorySource, InventorySourceDraft, InventorySourceOptions, InventorySourcePayload,
    NamedRef, SourceChoice, Verbosity, flatten_references,
};
