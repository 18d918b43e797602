//! Inventory source API methods for [`AwxClient`].
//!
//! # What this module does NOT handle:
//! - Low-level endpoint HTTP calls (in [`crate::endpoints`])
//! - Flattening form drafts into payloads (in [`crate::models`])

use crate::client::AwxClient;
use crate::endpoints;
use crate::error::Result;
use crate::models::{CreatedInventorySource, InventorySourceOptions, InventorySourcePayload};

impl AwxClient {
    /// Create a new inventory source.
    pub async fn create_inventory_source(
        &self,
        payload: &InventorySourcePayload,
    ) -> Result<CreatedInventorySource> {
        endpoints::create_inventory_source(
            &self.http,
            &self.base_url,
            &self.auth,
            payload,
            self.max_retries,
        )
        .await
    }

    /// Fetch the field metadata used to populate the inventory source form.
    pub async fn inventory_source_options(&self) -> Result<InventorySourceOptions> {
        endpoints::get_inventory_source_options(
            &self.http,
            &self.base_url,
            &self.auth,
            self.max_retries,
        )
        .await
    }
}
