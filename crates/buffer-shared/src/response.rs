//! Error bodies returned by the API.
//!
//! Two shapes exist: `{"error": "<message>"}` for lookups and server failures,
//! and a field map `{"<field>": ["<message>", ...]}` for rejected payloads.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use validator::ValidationErrors;

/// Key used for errors that are not tied to a single field.
pub const NON_FIELD_ERRORS: &str = "non_field_errors";

/// Simple `{"error": ...}` body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }

    pub fn not_found(entity: &str) -> Self {
        Self::new(format!("{entity} not found"))
    }

    /// Stable body for server failures. The detail is logged, never returned.
    pub fn internal_error() -> Self {
        Self::new("Internal server error")
    }
}

/// Validation failures keyed by field name, each with one or more messages.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, Vec<String>>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// A single error that is not attached to any field.
    pub fn non_field(message: impl Into<String>) -> Self {
        let mut errors = Self::new();
        errors.add(NON_FIELD_ERRORS, message);
        errors
    }

    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.0
            .entry(field.to_string())
            .or_default()
            .push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.0.get(field).map(Vec::as_slice)
    }

    pub fn merge(&mut self, other: FieldErrors) {
        for (field, messages) in other.0 {
            self.0.entry(field).or_default().extend(messages);
        }
    }

    /// Fold constraint failures reported by `validator` into this map.
    pub fn extend_from_validation(&mut self, errors: &ValidationErrors) {
        for (field, failures) in errors.field_errors() {
            for failure in failures.iter() {
                let message = failure
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| failure.code.to_string());
                self.add(&field.to_string(), message);
            }
        }
    }

    /// `Ok(())` when empty, otherwise the map itself as the error.
    pub fn into_result(self) -> Result<(), FieldErrors> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}
