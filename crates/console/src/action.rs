//! Actions flowing through the console event loop.
//!
//! Input events, user intents and async results all travel the same channel.
//! Error payloads are wrapped so actions stay cheap to clone.

use std::sync::Arc;

use awx_client::{ClientError, CreatedInventorySource, InventorySourceOptions, InventorySourcePayload};
use crossterm::event::KeyEvent;

use crate::error::SubmitFailure;

#[derive(Debug, Clone)]
pub enum Action {
    Input(KeyEvent),
    Resize(u16, u16),
    Tick,
    Quit,

    /// Fetch source choices for the form.
    LoadOptions,
    OptionsLoaded(Result<InventorySourceOptions, Arc<ClientError>>),

    Cancel,
    Submit,
    /// Perform the create call for a submit that has started.
    CreateInventorySource(InventorySourcePayload),
    SubmitFinished(Result<CreatedInventorySource, SubmitFailure>),
}
