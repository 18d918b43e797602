//! The create call the add controller depends on.
//!
//! [`AwxClient`] is the production implementation; tests substitute an
//! in-memory fake.

use awx_client::{AwxClient, ClientError, CreatedInventorySource, InventorySourcePayload};

/// Inventory source creation, as seen by the controller.
#[allow(async_fn_in_trait)]
pub trait InventorySourceApi {
    async fn create_inventory_source(
        &self,
        payload: &InventorySourcePayload,
    ) -> Result<CreatedInventorySource, ClientError>;
}

impl InventorySourceApi for AwxClient {
    async fn create_inventory_source(
        &self,
        payload: &InventorySourcePayload,
    ) -> Result<CreatedInventorySource, ClientError> {
        AwxClient::create_inventory_source(self, payload).await
    }
}
