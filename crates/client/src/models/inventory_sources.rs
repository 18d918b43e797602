//! Inventory source models for the AWX inventory sources API.
//!
//! This module contains the form-side draft, the wire payload sent on create,
//! the created resource returned by the server, and the OPTIONS metadata used to
//! populate the source select.
//!
//! # Invariants
//! - The draft may hold full `{id, name}` references; the payload only ever
//!   carries bare ids (or `null`).
//! - `source_script` and `execution_environment` are always present in the
//!   serialized payload, as `null` when absent.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A related object held by a lookup field: its id plus a display name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedRef {
    pub id: u64,
    #[serde(default)]
    pub name: String,
}

impl NamedRef {
    pub fn new(id: u64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// Job verbosity for inventory updates.
///
/// Serialized as the bare integer AWX expects (`0`, `1`, `2`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum Verbosity {
    Warning,
    #[default]
    Info,
    Debug,
}

impl Verbosity {
    pub const ALL: [Verbosity; 3] = [Self::Warning, Self::Info, Self::Debug];

    /// Label shown by the form, matching the server's choice labels.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Warning => "0 (WARNING)",
            Self::Info => "1 (INFO)",
            Self::Debug => "2 (DEBUG)",
        }
    }

    /// The next verbosity level, wrapping around.
    pub fn cycle(self) -> Self {
        match self {
            Self::Warning => Self::Info,
            Self::Info => Self::Debug,
            Self::Debug => Self::Warning,
        }
    }
}

impl From<Verbosity> for u8 {
    fn from(value: Verbosity) -> Self {
        match value {
            Verbosity::Warning => 0,
            Verbosity::Info => 1,
            Verbosity::Debug => 2,
        }
    }
}

impl TryFrom<u8> for Verbosity {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Warning),
            1 => Ok(Self::Info),
            2 => Ok(Self::Debug),
            other => Err(format!("invalid verbosity {other}, expected 0, 1 or 2")),
        }
    }
}

impl fmt::Display for Verbosity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// In-progress, unsaved inventory source form state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InventorySourceDraft {
    pub name: String,
    pub description: String,
    /// One of the server-supplied source choices (e.g. `scm`, `ec2`).
    pub source: String,
    /// Inventory file path inside the project, for `scm` sources.
    pub source_path: String,
    pub source_project: Option<NamedRef>,
    pub credential: Option<NamedRef>,
    pub source_script: Option<u64>,
    pub execution_environment: Option<u64>,
    /// Raw YAML or JSON text.
    pub source_vars: String,
    pub update_on_launch: bool,
    /// Seconds a completed update stays current when `update_on_launch` is set.
    pub update_cache_timeout: u32,
    pub overwrite: bool,
    pub overwrite_vars: bool,
    pub verbosity: Verbosity,
}

impl Default for InventorySourceDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            source: String::new(),
            source_path: String::new(),
            source_project: None,
            credential: None,
            source_script: None,
            execution_environment: None,
            source_vars: "---\n".to_string(),
            update_on_launch: false,
            update_cache_timeout: 0,
            overwrite: false,
            overwrite_vars: false,
            verbosity: Verbosity::default(),
        }
    }
}

/// The JSON body sent to `POST /api/v2/inventory_sources/`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InventorySourcePayload {
    pub inventory: u64,
    pub name: String,
    pub description: String,
    pub source: String,
    pub source_path: String,
    pub source_project: Option<u64>,
    pub credential: Option<u64>,
    pub source_script: Option<u64>,
    pub execution_environment: Option<u64>,
    pub source_vars: String,
    pub update_on_launch: bool,
    pub update_cache_timeout: u32,
    pub overwrite: bool,
    pub overwrite_vars: bool,
    pub verbosity: Verbosity,
}

/// Replace nested object references in `draft` with their bare ids.
///
/// Every other field is carried over unchanged; `inventory` is the parent
/// inventory the source is created under.
pub fn flatten_references(draft: &InventorySourceDraft, inventory: u64) -> InventorySourcePayload {
    InventorySourcePayload {
        inventory,
        name: draft.name.clone(),
        description: draft.description.clone(),
        source: draft.source.clone(),
        source_path: draft.source_path.clone(),
        source_project: draft.source_project.as_ref().map(|project| project.id),
        credential: draft.credential.as_ref().map(|credential| credential.id),
        source_script: draft.source_script,
        execution_environment: draft.execution_environment,
        source_vars: draft.source_vars.clone(),
        update_on_launch: draft.update_on_launch,
        update_cache_timeout: draft.update_cache_timeout,
        overwrite: draft.overwrite,
        overwrite_vars: draft.overwrite_vars,
        verbosity: draft.verbosity,
    }
}

/// Inventory source as returned by a successful create.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreatedInventorySource {
    pub id: u64,
    pub inventory: u64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub source: String,
    #[serde(default)]
    pub status: Option<String>,
}

/// One entry of the server's `source` choice list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceChoice {
    pub value: String,
    pub label: String,
}

/// Field metadata from `OPTIONS /api/v2/inventory_sources/`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct InventorySourceOptions {
    pub source_choices: Vec<SourceChoice>,
    pub verbosity_choices: Vec<(u8, String)>,
}

impl InventorySourceOptions {
    /// Parse the `actions.POST` section of an OPTIONS response.
    ///
    /// Returns `None` when the response carries no `source` choices, which is
    /// what AWX sends to users without create permission.
    pub fn from_options_response(value: &serde_json::Value) -> Option<Self> {
        let post = value.get("actions")?.get("POST")?;
        let source_choices = post
            .get("source")?
            .get("choices")?
            .as_array()?
            .iter()
            .filter_map(|pair| {
                let pair = pair.as_array()?;
                Some(SourceChoice {
                    value: pair.first()?.as_str()?.to_string(),
                    label: pair.get(1)?.as_str()?.to_string(),
                })
            })
            .collect();

        let verbosity_choices = post
            .get("verbosity")
            .and_then(|v| v.get("choices"))
            .and_then(|c| c.as_array())
            .map(|choices| {
                choices
                    .iter()
                    .filter_map(|pair| {
                        let pair = pair.as_array()?;
                        let value = u8::try_from(pair.first()?.as_u64()?).ok()?;
                        Some((value, pair.get(1)?.as_str()?.to_string()))
                    })
                    .collect()
            })
            .unwrap_or_default();

        Some(Self {
            source_choices,
            verbosity_choices,
        })
    }

    /// Whether `value` is one of the server-supplied source choices.
    pub fn is_valid_source(&self, value: &str) -> bool {
        self.source_choices.iter().any(|c| c.value == value)
    }

    /// Display label for a source value.
    pub fn source_label(&self, value: &str) -> Option<&str> {
        self.source_choices
            .iter()
            .find(|c| c.value == value)
            .map(|c| c.label.as_str())
    }
}
