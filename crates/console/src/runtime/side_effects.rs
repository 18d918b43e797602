//! Async side effect handlers for console actions.
//!
//! Responsibilities:
//! - Apply actions to the app and run the side effects they call for.
//! - Spawn the options fetch and the create call as tracked tasks.
//! - Send results back via the action channel.
//!
//! Does NOT handle:
//! - Direct application state modification from tasks (they send actions).
//! - UI rendering or terminal management.
//!
//! Invariants:
//! - API calls never run on the event loop itself.
//! - Every spawned call reports back with exactly one action.

use std::sync::Arc;

use awx_client::AwxClient;
use tokio::sync::mpsc::Sender;
use tokio_util::task::TaskTracker;

use crate::action::Action;
use crate::app::App;
use crate::error::SubmitFailure;

/// Shared client handle for async tasks.
pub type SharedClient = Arc<AwxClient>;

/// Apply `action` to `app`, then run its side effects and those of any follow-up.
pub fn dispatch(
    app: &mut App,
    action: Action,
    client: &SharedClient,
    tx: &Sender<Action>,
    task_tracker: &TaskTracker,
) {
    let followup = app.update(action.clone());
    handle_side_effects(action, client.clone(), tx.clone(), task_tracker);
    if let Some(followup) = followup {
        handle_side_effects(followup, client.clone(), tx.clone(), task_tracker);
    }
}

/// Spawn the API call an action stands for, if any.
pub fn handle_side_effects(
    action: Action,
    client: SharedClient,
    tx: Sender<Action>,
    task_tracker: &TaskTracker,
) {
    match action {
        Action::LoadOptions => {
            task_tracker.spawn(async move {
                let result = client.inventory_source_options().await.map_err(Arc::new);
                let _ = tx.send(Action::OptionsLoaded(result)).await;
            });
        }
        Action::CreateInventorySource(payload) => {
            task_tracker.spawn(async move {
                let result = client
                    .create_inventory_source(&payload)
                    .await
                    .map_err(|e| SubmitFailure::from(&e));
                let _ = tx.send(Action::SubmitFinished(result)).await;
            });
        }
        _ => {}
    }
}
