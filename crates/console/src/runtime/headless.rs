//! Headless (`--no-tui`) runs of the add form.
//!
//! Responsibilities:
//! - Validate a flag-built draft against the server's source choices.
//! - Run the controller's submit or cancel and report the outcome.
//!
//! Does NOT handle:
//! - Printing (the binary prints the outcome).
//!
//! Invariants:
//! - A failed source choices fetch never blocks the submit; the server validates instead.

use awx_client::{AwxClient, InventorySourceDraft, InventorySourceOptions, NamedRef};
use tracing::warn;

use crate::api::InventorySourceApi;
use crate::controller::InventorySourceAdd;
use crate::error::{ExitCode, SubmitFailure};
use crate::form::{FieldError, validate_draft};
use crate::navigation::History;
use crate::routes::Route;

/// How a headless run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeadlessOutcome {
    Navigated(Route),
    /// The draft failed client-side validation; nothing was sent.
    Invalid(Vec<FieldError>),
    Failed(SubmitFailure),
}

impl HeadlessOutcome {
    pub fn exit_code(&self) -> ExitCode {
        match self {
            Self::Navigated(_) => ExitCode::Success,
            Self::Invalid(_) => ExitCode::ValidationError,
            Self::Failed(failure) => ExitCode::from(failure),
        }
    }
}

/// Fetch the source choices, then validate and submit `draft`.
pub async fn run_headless(
    client: &AwxClient,
    inventory: NamedRef,
    draft: &InventorySourceDraft,
) -> HeadlessOutcome {
    let options = match client.inventory_source_options().await {
        Ok(options) => Some(options),
        Err(e) => {
            warn!(error = %e, "Failed to load inventory source options, submitting unchecked");
            None
        }
    };
    submit_headless(client, options.as_ref(), inventory, draft).await
}

/// Validate and submit `draft` under `inventory`.
///
/// Without `options` the source is only checked for presence.
pub async fn submit_headless<A: InventorySourceApi>(
    api: &A,
    options: Option<&InventorySourceOptions>,
    inventory: NamedRef,
    draft: &InventorySourceDraft,
) -> HeadlessOutcome {
    let errors = validate_draft(draft, options);
    if !errors.is_empty() {
        warn!(errors = errors.len(), "Draft failed validation");
        return HeadlessOutcome::Invalid(errors);
    }

    let mut controller = InventorySourceAdd::new(inventory, History::new());
    match controller.submit(api, draft).await {
        Some(route) => HeadlessOutcome::Navigated(route),
        None => HeadlessOutcome::Failed(
            controller
                .failure()
                .cloned()
                .unwrap_or_else(|| SubmitFailure::new(None, None)),
        ),
    }
}

/// Leave the form for the parent inventory's sources list.
pub fn cancel_headless(inventory: NamedRef) -> HeadlessOutcome {
    let mut controller = InventorySourceAdd::new(inventory, History::new());
    HeadlessOutcome::Navigated(controller.cancel())
}
