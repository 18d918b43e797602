//! REST API endpoint implementations.

mod inventory_sources;
mod request;

pub use inventory_sources::{create_inventory_source, get_inventory_source_options};
pub use request::send_request_with_retry;
