//! Inventory source endpoints.

use reqwest::{Client, Method};

use crate::auth::AuthStrategy;
use crate::endpoints::send_request_with_retry;
use crate::error::{ClientError, Result};
use crate::models::{CreatedInventorySource, InventorySourceOptions, InventorySourcePayload};
use awx_config::constants::API_V2_PREFIX;

fn inventory_sources_url(base_url: &str) -> String {
    format!("{}{}/inventory_sources/", base_url, API_V2_PREFIX)
}

/// Create a new inventory source.
pub async fn create_inventory_source(
    client: &Client,
    base_url: &str,
    auth: &AuthStrategy,
    payload: &InventorySourcePayload,
    max_retries: usize,
) -> Result<CreatedInventorySource> {
    let url = inventory_sources_url(base_url);

    let builder = auth.apply(client.post(&url)).json(payload);
    let response = send_request_with_retry(builder, max_retries).await?;

    let created: CreatedInventorySource = response.json().await.map_err(|e| {
        ClientError::InvalidResponse(format!("Failed to parse created inventory source: {}", e))
    })?;

    Ok(created)
}

/// Fetch field metadata (source and verbosity choices) for inventory sources.
pub async fn get_inventory_source_options(
    client: &Client,
    base_url: &str,
    auth: &AuthStrategy,
    max_retries: usize,
) -> Result<InventorySourceOptions> {
    let url = inventory_sources_url(base_url);

    let builder = auth.apply(client.request(Method::OPTIONS, &url));
    let response = send_request_with_retry(builder, max_retries).await?;

    let resp: serde_json::Value = response.json().await?;

    InventorySourceOptions::from_options_response(&resp).ok_or_else(|| {
        ClientError::InvalidResponse(
            "Missing actions.POST.source.choices in inventory source options".to_string(),
        )
    })
}
