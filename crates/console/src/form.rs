//! Inventory source form model.
//!
//! Responsibilities:
//! - Hold the draft, the loaded source choices, and the focused field.
//! - Decide which fields are visible for the selected source.
//! - Apply edits (text input, backspace, toggles, choice cycling).
//! - Validate the draft before it is submitted.
//!
//! Does NOT handle:
//! - Rendering (see `ui`).
//! - Key bindings (see `app`).
//!
//! Invariants:
//! - The focused field is always one of the visible fields.
//! - Numeric fields only ever hold values that fit their type.

use awx_client::{InventorySourceDraft, InventorySourceOptions, NamedRef};

/// Source value that pulls inventory from a project.
pub const SCM_SOURCE: &str = "scm";

/// A form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Description,
    Source,
    SourcePath,
    Project,
    Credential,
    Verbosity,
    Overwrite,
    OverwriteVars,
    UpdateOnLaunch,
    CacheTimeout,
    SourceVars,
}

/// How a field is edited.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Multiline,
    /// Cycled through a fixed set of values.
    Choice,
    Toggle,
    /// Related object, entered by id.
    Lookup,
    Number,
}

impl Field {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Description => "Description",
            Self::Source => "Source",
            Self::SourcePath => "Inventory file",
            Self::Project => "Project",
            Self::Credential => "Credential",
            Self::Verbosity => "Verbosity",
            Self::Overwrite => "Overwrite",
            Self::OverwriteVars => "Overwrite variables",
            Self::UpdateOnLaunch => "Update on launch",
            Self::CacheTimeout => "Cache timeout (seconds)",
            Self::SourceVars => "Source variables",
        }
    }

    pub fn kind(&self) -> FieldKind {
        match self {
            Self::Name | Self::Description | Self::SourcePath => FieldKind::Text,
            Self::SourceVars => FieldKind::Multiline,
            Self::Source | Self::Verbosity => FieldKind::Choice,
            Self::Overwrite | Self::OverwriteVars | Self::UpdateOnLaunch => FieldKind::Toggle,
            Self::Project | Self::Credential => FieldKind::Lookup,
            Self::CacheTimeout => FieldKind::Number,
        }
    }
}

/// A validation message attached to one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: Field,
    pub message: String,
}

impl FieldError {
    fn new(field: Field, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// Validate a draft against the loaded source choices.
///
/// When `options` is `None` the source is only checked for presence.
pub fn validate_draft(
    draft: &InventorySourceDraft,
    options: Option<&InventorySourceOptions>,
) -> Vec<FieldError> {
    let mut errors = Vec::new();

    if draft.name.trim().is_empty() {
        errors.push(FieldError::new(Field::Name, "This field must not be blank."));
    }

    if draft.source.is_empty() {
        errors.push(FieldError::new(Field::Source, "Select a source."));
    } else if let Some(options) = options
        && !options.is_valid_source(&draft.source)
    {
        errors.push(FieldError::new(
            Field::Source,
            format!(
                "Select a valid choice. {} is not one of the available choices.",
                draft.source
            ),
        ));
    }

    if draft.source == SCM_SOURCE && draft.source_project.is_none() {
        errors.push(FieldError::new(
            Field::Project,
            "Project required for scm type sources.",
        ));
    }

    if let Err(message) = check_source_vars(&draft.source_vars) {
        errors.push(FieldError::new(Field::SourceVars, message));
    }

    errors
}

/// Source variables must be empty or a YAML/JSON mapping.
fn check_source_vars(text: &str) -> Result<(), String> {
    if text.trim().is_empty() {
        return Ok(());
    }
    match serde_yaml::from_str::<serde_yaml::Value>(text) {
        Ok(serde_yaml::Value::Null) | Ok(serde_yaml::Value::Mapping(_)) => Ok(()),
        Ok(_) => Err("Source variables must be a YAML or JSON mapping.".to_string()),
        Err(e) => Err(format!("Invalid YAML or JSON: {}", e)),
    }
}

/// Editable state of the add form.
#[derive(Debug, Clone, Default)]
pub struct InventorySourceForm {
    draft: InventorySourceDraft,
    options: Option<InventorySourceOptions>,
    focus: usize,
    errors: Vec<FieldError>,
}

impl InventorySourceForm {
    pub fn new(draft: InventorySourceDraft) -> Self {
        Self {
            draft,
            ..Default::default()
        }
    }

    pub fn draft(&self) -> &InventorySourceDraft {
        &self.draft
    }

    pub fn options(&self) -> Option<&InventorySourceOptions> {
        self.options.as_ref()
    }

    pub fn set_options(&mut self, options: InventorySourceOptions) {
        self.options = Some(options);
    }

    /// Fields shown for the current source, in display order.
    pub fn visible_fields(&self) -> Vec<Field> {
        let mut fields = vec![Field::Name, Field::Description, Field::Source];
        if self.draft.source == SCM_SOURCE {
            fields.extend([Field::SourcePath, Field::Project]);
        }
        if !self.draft.source.is_empty() {
            fields.extend([
                Field::Credential,
                Field::Verbosity,
                Field::Overwrite,
                Field::OverwriteVars,
                Field::UpdateOnLaunch,
                Field::CacheTimeout,
                Field::SourceVars,
            ]);
        }
        fields
    }

    pub fn focused(&self) -> Field {
        let fields = self.visible_fields();
        fields
            .get(self.focus.min(fields.len() - 1))
            .copied()
            .unwrap_or(Field::Name)
    }

    pub fn focus_next(&mut self) {
        let len = self.visible_fields().len();
        self.focus = (self.focus.min(len - 1) + 1) % len;
    }

    pub fn focus_prev(&mut self) {
        let len = self.visible_fields().len();
        self.focus = (self.focus.min(len - 1) + len - 1) % len;
    }

    /// Type a character into the focused field.
    pub fn insert_char(&mut self, c: char) {
        let field = self.focused();
        match field.kind() {
            FieldKind::Text | FieldKind::Multiline => {
                if let Some(text) = self.text_mut(field) {
                    text.push(c);
                }
            }
            FieldKind::Lookup => {
                if let Some(digit) = c.to_digit(10) {
                    let slot = self.lookup_mut(field);
                    let id = slot.as_ref().map_or(0, |r| r.id);
                    if let Some(id) = id.checked_mul(10).and_then(|v| v.checked_add(digit.into()))
                        && id > 0
                    {
                        *slot = Some(NamedRef::new(id, String::new()));
                    }
                }
            }
            FieldKind::Number => {
                if let Some(digit) = c.to_digit(10)
                    && let Some(value) = self
                        .draft
                        .update_cache_timeout
                        .checked_mul(10)
                        .and_then(|v| v.checked_add(digit))
                {
                    self.draft.update_cache_timeout = value;
                }
            }
            FieldKind::Choice | FieldKind::Toggle => {
                if self.source_is_free_text(field) {
                    if !c.is_whitespace() {
                        let mut source = self.draft.source.clone();
                        source.push(c);
                        self.set_source(source);
                    }
                } else if c == ' ' {
                    self.toggle();
                }
            }
        }
    }

    /// Without loaded choices the source is typed in by value.
    fn source_is_free_text(&self, field: Field) -> bool {
        field == Field::Source && self.options.is_none()
    }

    /// Insert a line break; only the multiline field accepts one.
    pub fn insert_newline(&mut self) -> bool {
        if self.focused().kind() == FieldKind::Multiline {
            self.draft.source_vars.push('\n');
            true
        } else {
            false
        }
    }

    pub fn backspace(&mut self) {
        let field = self.focused();
        match field.kind() {
            FieldKind::Text | FieldKind::Multiline => {
                if let Some(text) = self.text_mut(field) {
                    text.pop();
                }
            }
            FieldKind::Lookup => {
                let slot = self.lookup_mut(field);
                let id = slot.as_ref().map_or(0, |r| r.id) / 10;
                *slot = (id > 0).then(|| NamedRef::new(id, String::new()));
            }
            FieldKind::Number => self.draft.update_cache_timeout /= 10,
            FieldKind::Choice | FieldKind::Toggle => {
                if self.source_is_free_text(field) {
                    let mut source = self.draft.source.clone();
                    source.pop();
                    self.set_source(source);
                }
            }
        }
    }

    /// Flip a toggle or advance a choice field.
    pub fn toggle(&mut self) {
        match self.focused() {
            Field::Overwrite => self.draft.overwrite = !self.draft.overwrite,
            Field::OverwriteVars => self.draft.overwrite_vars = !self.draft.overwrite_vars,
            Field::UpdateOnLaunch => self.draft.update_on_launch = !self.draft.update_on_launch,
            Field::Verbosity => self.draft.verbosity = self.draft.verbosity.cycle(),
            Field::Source => self.cycle_source(),
            _ => {}
        }
    }

    /// Select the next source choice, wrapping back to "no source".
    fn cycle_source(&mut self) {
        let Some(options) = &self.options else {
            return;
        };
        let choices = &options.source_choices;
        let next = match choices.iter().position(|c| c.value == self.draft.source) {
            Some(i) if i + 1 < choices.len() => choices[i + 1].value.clone(),
            Some(_) => String::new(),
            None => choices.first().map(|c| c.value.clone()).unwrap_or_default(),
        };
        self.set_source(next);
    }

    /// Change the source, clearing project fields when leaving `scm`.
    pub fn set_source(&mut self, source: String) {
        if self.draft.source == SCM_SOURCE && source != SCM_SOURCE {
            self.draft.source_path.clear();
            self.draft.source_project = None;
        }
        self.draft.source = source;
        self.errors.retain(|e| e.field != Field::Source);
    }

    /// Run validation, keeping the errors for display. Returns true when valid.
    pub fn validate(&mut self) -> bool {
        self.errors = validate_draft(&self.draft, self.options.as_ref());
        self.errors.is_empty()
    }

    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    pub fn error_for(&self, field: Field) -> Option<&str> {
        self.errors
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }

    /// Display text for a field's current value.
    pub fn value_text(&self, field: Field) -> String {
        let draft = &self.draft;
        match field {
            Field::Name => draft.name.clone(),
            Field::Description => draft.description.clone(),
            Field::Source => {
                if draft.source.is_empty() && self.options.is_none() {
                    "Type a source (e.g. scm, ec2)".to_string()
                } else if draft.source.is_empty() {
                    "Choose a source".to_string()
                } else {
                    self.options
                        .as_ref()
                        .and_then(|o| o.source_label(&draft.source))
                        .unwrap_or(&draft.source)
                        .to_string()
                }
            }
            Field::SourcePath => draft.source_path.clone(),
            Field::Project => lookup_text(draft.source_project.as_ref()),
            Field::Credential => lookup_text(draft.credential.as_ref()),
            Field::Verbosity => draft.verbosity.label().to_string(),
            Field::Overwrite => checkbox(draft.overwrite),
            Field::OverwriteVars => checkbox(draft.overwrite_vars),
            Field::UpdateOnLaunch => checkbox(draft.update_on_launch),
            Field::CacheTimeout => draft.update_cache_timeout.to_string(),
            Field::SourceVars => draft.source_vars.clone(),
        }
    }

    fn text_mut(&mut self, field: Field) -> Option<&mut String> {
        match field {
            Field::Name => Some(&mut self.draft.name),
            Field::Description => Some(&mut self.draft.description),
            Field::SourcePath => Some(&mut self.draft.source_path),
            Field::SourceVars => Some(&mut self.draft.source_vars),
            _ => None,
        }
    }

    fn lookup_mut(&mut self, field: Field) -> &mut Option<NamedRef> {
        match field {
            Field::Project => &mut self.draft.source_project,
            _ => &mut self.draft.credential,
        }
    }
}

fn lookup_text(reference: Option<&NamedRef>) -> String {
    match reference {
        Some(r) if !r.name.is_empty() => format!("{} (ID {})", r.name, r.id),
        Some(r) => format!("ID {}", r.id),
        None => String::new(),
    }
}

fn checkbox(checked: bool) -> String {
    let mark = if checked { "[x]" } else { "[ ]" };
    mark.to_string()
}
