//! Data models for AWX API responses and request bodies.

mod common;
mod inventory_sources;

pub use common::ErrorBody;
pub use inventory_sources::{
    CreatedInventorySource, InventorySourceDraft, InventorySourceOptions, InventorySourcePayload,
    NamedRef, SourceChoice, Verbosity, flatten_references,
};
