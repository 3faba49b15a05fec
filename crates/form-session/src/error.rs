//! Error types for forms.

use std::collections::BTreeMap;

use serde::Serialize;
use thiserror::Error;

use crate::schema::FieldKind;

/// Usage errors raised by the form engine.
///
/// These signal that the caller is out of sync with the schema. Validation
/// failures are never reported through this type; see [`ValidationErrors`].
#[derive(Debug, Error)]
pub enum FormError {
    /// Two schema fields share a name.
    #[error("duplicate field name in schema: {0}")]
    DuplicateField(String),

    /// A field's default value does not match its semantic type.
    #[error("default value for field {field} is not a valid {expected} value")]
    InvalidDefault { field: String, expected: FieldKind },

    /// The named field is not part of the schema.
    #[error("unknown field: {0}")]
    FieldNotFound(String),

    /// The input cannot be expressed in the field's type.
    #[error("input {input} cannot be applied to {kind} field {field}")]
    TypeMismatch {
        field: String,
        kind: FieldKind,
        input: String,
    },

    /// Reset was requested while the session holds its initial values.
    #[error("reset requested on a pristine form")]
    ResetWhilePristine,

    /// A pattern constraint failed to compile.
    #[error("invalid pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    /// Form values could not be serialized.
    #[error("failed to serialize form values: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Validation errors keyed by field name.
///
/// Each field carries at most one message: the first failing check wins.
/// Fields that pass are absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors {
    /// Errors keyed by field name.
    pub errors: BTreeMap<String, String>,
}

impl ValidationErrors {
    /// Creates a new empty ValidationErrors.
    pub fn new() -> Self {
        Self {
            errors: BTreeMap::new(),
        }
    }

    /// Records an error for a field unless it already has one.
    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.errors
            .entry(field.to_string())
            .or_insert_with(|| message.into());
    }

    /// Returns whether there are any errors.
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns the number of fields with errors.
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Returns the error for a specific field.
    pub fn get(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }

    /// Returns whether the field has an error.
    pub fn contains(&self, field: &str) -> bool {
        self.errors.contains_key(field)
    }

    /// Iterates over `(field, message)` pairs in field-name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.errors
            .iter()
            .map(|(field, message)| (field.as_str(), message.as_str()))
    }
}

impl std::fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (field, message) in &self.errors {
            writeln!(f, "{field}: {message}")?;
        }
        Ok(())
    }
}

/// Result type alias for form operations.
pub type Result<T> = std::result::Result<T, FormError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_error_wins() {
        let mut errors = ValidationErrors::new();
        errors.add("age", "Valid age is required");
        errors.add("age", "Enter a valid number.");

        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get("age"), Some("Valid age is required"));
    }

    #[test]
    fn test_display_lists_fields_in_order() {
        let mut errors = ValidationErrors::new();
        errors.add("notes", "too long");
        errors.add("age", "required");

        assert_eq!(errors.to_string(), "age: required\nnotes: too long\n");
    }

    #[test]
    fn test_serializes_as_flat_map() {
        let mut errors = ValidationErrors::new();
        errors.add("firstName", "First name is required");

        let json = serde_json::to_string(&errors).unwrap();
        assert_eq!(json, r#"{"firstName":"First name is required"}"#);
    }

    #[test]
    fn test_type_mismatch_message() {
        let err = FormError::TypeMismatch {
            field: "employed".to_string(),
            kind: FieldKind::Boolean,
            input: "\"maybe\"".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "input \"maybe\" cannot be applied to boolean field employed"
        );
    }
}
