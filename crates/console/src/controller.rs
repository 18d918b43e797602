//! Inventory source add controller.
//!
//! Responsibilities:
//! - Navigate back to the sources list on cancel without touching the network.
//! - Flatten the draft into a create payload and issue exactly one create per submit.
//! - Navigate to the created source's details on success.
//! - Hold the failure for the form to display on error.
//!
//! Does NOT handle:
//! - Field rendering or client-side validation (see `form` and `ui`).
//! - Fetching field metadata (see `runtime::side_effects`).
//!
//! Invariants:
//! - Navigation happens at most once per submit, and only on success.
//! - A failed submit keeps the form mounted; starting a new submit clears the failure.

use awx_client::{
    CreatedInventorySource, InventorySourceDraft, InventorySourcePayload, NamedRef,
    flatten_references,
};
use tracing::{debug, info, warn};

use crate::api::InventorySourceApi;
use crate::error::SubmitFailure;
use crate::navigation::Navigator;
use crate::routes::Route;

/// Where the controller is in its submit lifecycle.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SubmitState {
    #[default]
    Idle,
    Submitting,
    /// The form was left for this route.
    Navigated(Route),
    /// The last submit failed; behaves like `Idle` with an error to show.
    Failed(SubmitFailure),
}

/// Controller for the "add inventory source" form of one parent inventory.
#[derive(Debug)]
pub struct InventorySourceAdd<N: Navigator> {
    inventory: NamedRef,
    navigator: N,
    state: SubmitState,
}

impl<N: Navigator> InventorySourceAdd<N> {
    pub fn new(inventory: NamedRef, navigator: N) -> Self {
        Self {
            inventory,
            navigator,
            state: SubmitState::Idle,
        }
    }

    /// The parent inventory sources are created under.
    pub fn inventory(&self) -> &NamedRef {
        &self.inventory
    }

    pub fn state(&self) -> &SubmitState {
        &self.state
    }

    pub fn navigator(&self) -> &N {
        &self.navigator
    }

    pub fn into_navigator(self) -> N {
        self.navigator
    }

    /// The failure to display, if the last submit failed.
    pub fn failure(&self) -> Option<&SubmitFailure> {
        match &self.state {
            SubmitState::Failed(failure) => Some(failure),
            _ => None,
        }
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self.state, SubmitState::Submitting)
    }

    /// The route navigated to, once the form has been left.
    pub fn navigated_to(&self) -> Option<Route> {
        match self.state {
            SubmitState::Navigated(route) => Some(route),
            _ => None,
        }
    }

    /// Leave the form for the parent inventory's sources list.
    pub fn cancel(&mut self) -> Route {
        let route = Route::InventorySources {
            inventory_id: self.inventory.id,
        };
        info!(inventory_id = self.inventory.id, "Inventory source add cancelled");
        self.navigate(route);
        route
    }

    /// Start a submit: clear any previous failure and build the create payload.
    ///
    /// The caller performs the create and reports back through
    /// [`complete_submit`](Self::complete_submit).
    pub fn begin_submit(&mut self, draft: &InventorySourceDraft) -> InventorySourcePayload {
        self.state = SubmitState::Submitting;
        let payload = flatten_references(draft, self.inventory.id);
        debug!(
            inventory_id = payload.inventory,
            source = %payload.source,
            source_project = ?payload.source_project,
            credential = ?payload.credential,
            "Submitting inventory source"
        );
        payload
    }

    /// Finish a submit with the create result.
    ///
    /// Returns the route navigated to on success. Results that arrive when no
    /// submit is in flight (for example after a cancel) are ignored.
    pub fn complete_submit(
        &mut self,
        result: Result<CreatedInventorySource, SubmitFailure>,
    ) -> Option<Route> {
        if !self.is_submitting() {
            debug!("Ignoring create result with no submit in flight");
            return None;
        }

        match result {
            Ok(created) => {
                info!(
                    source_id = created.id,
                    inventory_id = created.inventory,
                    "Inventory source created"
                );
                let route = Route::InventorySourceDetails {
                    inventory_id: created.inventory,
                    source_id: created.id,
                };
                self.navigate(route);
                Some(route)
            }
            Err(failure) => {
                warn!(
                    status = ?failure.status(),
                    message = %failure.message(),
                    "Inventory source create failed"
                );
                self.state = SubmitState::Failed(failure);
                None
            }
        }
    }

    /// Submit `draft` through `api`, navigating on success.
    ///
    /// Failures are kept on the controller (see [`failure`](Self::failure)),
    /// never returned as errors.
    pub async fn submit<A: InventorySourceApi>(
        &mut self,
        api: &A,
        draft: &InventorySourceDraft,
    ) -> Option<Route> {
        let payload = self.begin_submit(draft);
        let result = api
            .create_inventory_source(&payload)
            .await
            .map_err(|e| SubmitFailure::from(&e));
        self.complete_submit(result)
    }

    fn navigate(&mut self, route: Route) {
        self.navigator.navigate(route);
        self.state = SubmitState::Navigated(route);
    }
}
