//! Retry helper for HTTP requests with exponential backoff.
//!
//! Requests answered with HTTP 429 (Too Many Requests) are retried with
//! exponential backoff. Every other non-success response is turned into a
//! `ClientError::ApiError` carrying the parsed AWX error body.

use reqwest::{RequestBuilder, Response};
use tracing::debug;

use crate::error::{ClientError, Result};
use crate::models::ErrorBody;

/// Maximum number of retry attempts when the caller passes 0.
const DEFAULT_MAX_RETRIES: usize = 3;

/// Sends an HTTP request with automatic retry logic for HTTP 429 responses.
///
/// - Backoff is `2^attempt` seconds (1s, 2s, 4s, ...).
/// - Bodies that cannot be cloned (streams) get a single attempt.
///
/// # Errors
///
/// - `ClientError::MaxRetriesExceeded` when all retry attempts are exhausted.
/// - `ClientError::ApiError` for any other non-2xx response.
/// - `ClientError::HttpError` for transport failures.
pub async fn send_request_with_retry(
    builder: RequestBuilder,
    max_retries: usize,
) -> Result<Response> {
    let max_retries = if max_retries == 0 {
        DEFAULT_MAX_RETRIES
    } else {
        max_retries
    };

    for attempt in 0..=max_retries {
        let attempt_builder = match builder.try_clone() {
            Some(cloned) => cloned,
            None => {
                if attempt == 0 {
                    debug!("Request builder cannot be cloned, single attempt only");
                    let response = builder.send().await?;
                    return check_status(response).await;
                } else {
                    debug!("Cannot clone request builder for retry");
                    return Err(ClientError::MaxRetriesExceeded(attempt));
                }
            }
        };

        let response = attempt_builder.send().await?;

        if ClientError::is_retryable_status(response.status().as_u16()) {
            if attempt < max_retries {
                let backoff_secs = 2u64.pow(attempt as u32);
                debug!(
                    attempt = attempt + 1,
                    max_retries = max_retries + 1,
                    backoff_secs = backoff_secs,
                    "Rate limited (HTTP 429), retrying with exponential backoff"
                );
                tokio::time::sleep(tokio::time::Duration::from_secs(backoff_secs)).await;
                continue;
            }
            debug!(
                attempts = attempt + 1,
                "Max retries exhausted for rate-limited request"
            );
            return Err(ClientError::MaxRetriesExceeded(max_retries + 1));
        }

        if attempt > 0 {
            debug!(attempt = attempt + 1, "Request succeeded after retry");
        }
        return check_status(response).await;
    }

    Err(ClientError::MaxRetriesExceeded(max_retries + 1))
}

/// Pass successful responses through; convert failures into `ApiError`.
async fn check_status(response: Response) -> Result<Response> {
    if response.status().is_success() {
        return Ok(response);
    }

    let status = response.status().as_u16();
    let url = response.url().to_string();
    let body = response
        .text()
        .await
        .unwrap_or_else(|_| "Could not read error response body".to_string());

    let parsed = ErrorBody::parse(&body);
    let detail = parsed.as_ref().and_then(|b| b.detail.clone());
    let message = parsed
        .as_ref()
        .and_then(ErrorBody::summary)
        .unwrap_or(body);

    debug!(status, %url, "AWX returned an error response");

    Err(ClientError::ApiError {
        status,
        url,
        message,
        detail,
    })
}
