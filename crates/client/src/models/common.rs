//! Common types shared across AWX API models.
//!
//! This module holds the error body shapes AWX returns on failed requests. It
//! does NOT contain resource-specific models.

use serde_json::Value;

/// Parsed AWX error response body.
///
/// AWX answers failed requests either with `{"detail": "..."}` or with field
/// errors such as `{"name": ["This field is required."]}`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ErrorBody {
    /// The `detail` message, when present.
    pub detail: Option<String>,
    /// Field name and messages, sorted by field name.
    pub field_errors: Vec<(String, Vec<String>)>,
}

impl ErrorBody {
    /// Parse an error body. Returns `None` for non-JSON or non-object bodies.
    pub fn parse(body: &str) -> Option<Self> {
        let value: Value = serde_json::from_str(body).ok()?;
        let object = value.as_object()?;

        let mut parsed = Self::default();
        for (key, value) in object {
            if key == "detail" {
                parsed.detail = value.as_str().map(str::to_string);
                continue;
            }
            let messages = match value {
                Value::String(s) => vec![s.clone()],
                Value::Array(items) => items
                    .iter()
                    .map(|item| match item {
                        Value::String(s) => s.clone(),
                        other => other.to_string(),
                    })
                    .collect(),
                other => vec![other.to_string()],
            };
            parsed.field_errors.push((key.clone(), messages));
        }

        Some(parsed)
    }

    /// One-line summary: the detail if present, otherwise `field: message` pairs.
    pub fn summary(&self) -> Option<String> {
        if let Some(detail) = &self.detail {
            return Some(detail.clone());
        }
        if self.field_errors.is_empty() {
            return None;
        }
        Some(
            self.field_errors
                .iter()
                .map(|(field, messages)| format!("{}: {}", field, messages.join(" ")))
                .collect::<Vec<_>>()
                .join("; "),
        )
    }
}
