//! Console application state and key handling.
//!
//! Responsibilities:
//! - Own the form model and the add controller for one parent inventory.
//! - Translate key presses into actions.
//! - Apply actions to state, returning any side effect to run.
//!
//! Does NOT handle:
//! - Performing API calls (see `runtime::side_effects`).
//! - Drawing (see `ui`).
//!
//! Invariants:
//! - The form is locked while a submit is in flight; only quit and cancel are accepted.
//! - A submit only reaches the controller when client-side validation passes.

use awx_client::{InventorySourceDraft, NamedRef};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::{debug, warn};

use crate::action::Action;
use crate::controller::InventorySourceAdd;
use crate::form::InventorySourceForm;
use crate::navigation::History;

/// Spinner frames shown next to "Saving...".
const SPINNER: [&str; 4] = ["|", "/", "-", "\\"];

pub struct App {
    pub form: InventorySourceForm,
    pub controller: InventorySourceAdd<History>,
    pub options_loading: bool,
    pub options_error: Option<String>,
    pub should_quit: bool,
    spinner_frame: usize,
}

impl App {
    pub fn new(inventory: NamedRef, draft: InventorySourceDraft) -> Self {
        Self {
            form: InventorySourceForm::new(draft),
            controller: InventorySourceAdd::new(inventory, History::new()),
            options_loading: false,
            options_error: None,
            should_quit: false,
            spinner_frame: 0,
        }
    }

    /// Whether the event loop should stop: the user quit or the form navigated away.
    pub fn is_done(&self) -> bool {
        self.should_quit || self.controller.navigated_to().is_some()
    }

    pub fn spinner(&self) -> &'static str {
        SPINNER[self.spinner_frame % SPINNER.len()]
    }

    /// Handle a key press, returning an action for the event loop when the key
    /// expresses an intent beyond editing.
    pub fn handle_input(&mut self, key: KeyEvent) -> Option<Action> {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Char('c') if ctrl => return Some(Action::Quit),
            KeyCode::Esc => return Some(Action::Cancel),
            _ => {}
        }

        if self.controller.is_submitting() {
            debug!(?key, "Ignoring input while saving");
            return None;
        }

        match key.code {
            KeyCode::Char('s') if ctrl => Some(Action::Submit),
            KeyCode::Tab | KeyCode::Down => {
                self.form.focus_next();
                None
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.form.focus_prev();
                None
            }
            KeyCode::Enter => {
                if !self.form.insert_newline() {
                    self.form.focus_next();
                }
                None
            }
            KeyCode::Left | KeyCode::Right => {
                self.form.toggle();
                None
            }
            KeyCode::Backspace => {
                self.form.backspace();
                None
            }
            KeyCode::Char(c) if !ctrl => {
                self.form.insert_char(c);
                None
            }
            _ => None,
        }
    }

    /// Apply an action. Returns a follow-up side effect, if one is needed.
    pub fn update(&mut self, action: Action) -> Option<Action> {
        match action {
            Action::Quit => {
                self.should_quit = true;
                None
            }
            Action::Tick => {
                if self.controller.is_submitting() {
                    self.spinner_frame = self.spinner_frame.wrapping_add(1);
                }
                None
            }
            Action::LoadOptions => {
                self.options_loading = true;
                self.options_error = None;
                None
            }
            Action::OptionsLoaded(Ok(options)) => {
                self.options_loading = false;
                self.form.set_options(options);
                None
            }
            Action::OptionsLoaded(Err(e)) => {
                self.options_loading = false;
                warn!(error = %e, "Failed to load inventory source options");
                self.options_error = Some(e.to_string());
                None
            }
            Action::Cancel => {
                self.controller.cancel();
                None
            }
            Action::Submit => {
                if self.controller.is_submitting() {
                    debug!("Submit already in flight");
                    return None;
                }
                if !self.form.validate() {
                    warn!(
                        errors = self.form.errors().len(),
                        "Inventory source form failed validation"
                    );
                    return None;
                }
                let payload = self.controller.begin_submit(self.form.draft());
                Some(Action::CreateInventorySource(payload))
            }
            Action::SubmitFinished(result) => {
                self.controller.complete_submit(result);
                None
            }
            Action::Input(_) | Action::Resize(_, _) | Action::CreateInventorySource(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SubmitFailure;
    use crate::form::Field;
    use awx_client::{CreatedInventorySource, InventorySourceOptions, SourceChoice};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn options() -> InventorySourceOptions {
        InventorySourceOptions {
            source_choices: vec![SourceChoice {
                value: "ec2".to_string(),
                label: "Amazon EC2".to_string(),
            }],
            verbosity_choices: vec![],
        }
    }

    fn valid_app() -> App {
        let mut app = App::new(
            NamedRef::new(2, "Production"),
            InventorySourceDraft {
                name: "EC2 hosts".to_string(),
                source: "ec2".to_string(),
                ..Default::default()
            },
        );
        app.update(Action::OptionsLoaded(Ok(options())));
        app
    }

    #[test]
    fn test_key_bindings() {
        let mut app = valid_app();
        assert!(matches!(app.handle_input(ctrl('s')), Some(Action::Submit)));
        assert!(matches!(app.handle_input(ctrl('c')), Some(Action::Quit)));
        assert!(matches!(app.handle_input(key(KeyCode::Esc)), Some(Action::Cancel)));
        assert!(app.handle_input(key(KeyCode::Char('x'))).is_none());
        assert_eq!(app.form.draft().name, "EC2 hostsx");
    }

    #[test]
    fn test_invalid_submit_does_not_start() {
        let mut app = App::new(NamedRef::new(2, ""), InventorySourceDraft::default());

        assert!(app.update(Action::Submit).is_none());
        assert!(!app.controller.is_submitting());
        assert!(app.form.error_for(Field::Name).is_some());
    }

    #[test]
    fn test_submit_produces_create_effect() {
        let mut app = valid_app();

        let effect = app.update(Action::Submit);

        match effect {
            Some(Action::CreateInventorySource(payload)) => {
                assert_eq!(payload.inventory, 2);
                assert_eq!(payload.source, "ec2");
            }
            other => panic!("expected create effect, got {:?}", other),
        }
        assert!(app.controller.is_submitting());
    }

    #[test]
    fn test_second_submit_while_saving_is_ignored() {
        let mut app = valid_app();
        app.update(Action::Submit);

        assert!(app.handle_input(ctrl('s')).is_none());
        assert!(app.update(Action::Submit).is_none());
    }

    #[test]
    fn test_input_locked_while_saving() {
        let mut app = valid_app();
        app.update(Action::Submit);

        app.handle_input(key(KeyCode::Char('x')));
        assert_eq!(app.form.draft().name, "EC2 hosts");
    }

    #[test]
    fn test_success_finishes_app() {
        let mut app = valid_app();
        app.update(Action::Submit);

        app.update(Action::SubmitFinished(Ok(CreatedInventorySource {
            id: 57,
            inventory: 2,
            name: "EC2 hosts".to_string(),
            source: "ec2".to_string(),
            status: None,
        })));

        assert!(app.is_done());
        assert_eq!(
            app.controller.navigated_to().map(|r| r.path()),
            Some("/inventories/inventory/2/sources/57/details".to_string())
        );
    }

    #[test]
    fn test_failure_keeps_app_running() {
        let mut app = valid_app();
        app.update(Action::Submit);

        app.update(Action::SubmitFinished(Err(SubmitFailure::new(
            Some("An error occurred".to_string()),
            Some(400),
        ))));

        assert!(!app.is_done());
        assert_eq!(
            app.controller.failure().map(|f| f.message()),
            Some("An error occurred")
        );
    }

    #[test]
    fn test_source_typed_after_options_failure() {
        let mut app = App::new(
            NamedRef::new(2, ""),
            InventorySourceDraft {
                name: "EC2 hosts".to_string(),
                ..Default::default()
            },
        );
        app.update(Action::LoadOptions);
        app.update(Action::OptionsLoaded(Err(std::sync::Arc::new(
            awx_client::ClientError::InvalidResponse("no POST actions".to_string()),
        ))));
        assert!(app.options_error.is_some());

        app.handle_input(key(KeyCode::Tab));
        app.handle_input(key(KeyCode::Tab));
        for c in "ec2".chars() {
            app.handle_input(key(KeyCode::Char(c)));
        }
        assert_eq!(app.form.draft().source, "ec2");

        match app.update(Action::Submit) {
            Some(Action::CreateInventorySource(payload)) => assert_eq!(payload.source, "ec2"),
            other => panic!("expected create effect, got {:?}", other),
        }
    }

    #[test]
    fn test_cancel_finishes_app() {
        let mut app = valid_app();
        app.update(Action::Cancel);
        assert!(app.is_done());
    }
}
