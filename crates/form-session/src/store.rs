//! Session state: values, touched flags and the pristine snapshot.

use std::collections::BTreeMap;
use std::sync::Arc;

use serde::Serialize;

use crate::error::{FormError, Result, ValidationErrors};
use crate::schema::FormSchema;
use crate::value::{FormValues, RawInput};

/// Per-field touched flags.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Touched {
    fields: BTreeMap<String, bool>,
}

impl Touched {
    fn untouched(schema: &FormSchema) -> Self {
        Self {
            fields: schema.names().map(|name| (name.to_string(), false)).collect(),
        }
    }

    /// Returns whether the field has been touched.
    pub fn is_touched(&self, field: &str) -> bool {
        self.fields.get(field).copied().unwrap_or(false)
    }

    /// Returns whether no field has been touched.
    pub fn none(&self) -> bool {
        !self.fields.values().any(|touched| *touched)
    }

    /// Returns whether every field has been touched.
    pub fn all(&self) -> bool {
        self.fields.values().all(|touched| *touched)
    }

    /// Iterates over `(field, touched)` pairs in field-name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, bool)> {
        self.fields
            .iter()
            .map(|(field, touched)| (field.as_str(), *touched))
    }

    fn mark(&mut self, field: &str) {
        if let Some(touched) = self.fields.get_mut(field) {
            *touched = true;
        }
    }

    fn mark_all(&mut self) {
        for touched in self.fields.values_mut() {
            *touched = true;
        }
    }
}

/// The state of one mounted form.
///
/// Values always hold exactly one entry per schema field. Whether the form is
/// dirty is derived from the values on every call, never stored.
#[derive(Debug, Clone)]
pub struct Session {
    schema: Arc<FormSchema>,
    initial_values: FormValues,
    values: FormValues,
    touched: Touched,
    errors: ValidationErrors,
}

impl Session {
    /// Starts a session from the schema's defaults.
    pub fn initialize(schema: Arc<FormSchema>) -> Self {
        let initial_values = schema.initial_values();
        let touched = Touched::untouched(&schema);
        Self {
            values: initial_values.clone(),
            initial_values,
            touched,
            errors: ValidationErrors::new(),
            schema,
        }
    }

    /// Returns the schema this session was created from.
    pub fn schema(&self) -> &FormSchema {
        &self.schema
    }

    /// Returns the values the session started with.
    pub const fn initial_values(&self) -> &FormValues {
        &self.initial_values
    }

    /// Returns the current values.
    pub const fn values(&self) -> &FormValues {
        &self.values
    }

    /// Returns the touched flags.
    pub const fn touched(&self) -> &Touched {
        &self.touched
    }

    /// Returns the errors from the last validation.
    pub const fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    /// Returns whether the values differ from the initial values.
    pub fn is_dirty(&self) -> bool {
        self.values != self.initial_values
    }

    /// Applies input to a field.
    ///
    /// Multi-select fields toggle the given option instead of replacing the
    /// whole value. The session is unchanged when an error is returned.
    pub fn set_value(&mut self, field: &str, input: impl Into<RawInput>) -> Result<()> {
        let input = input.into();
        let schema = self.schema.get_field(field)?;
        let current = self
            .values
            .get(field)
            .cloned()
            .unwrap_or_else(|| schema.kind.empty_value());
        let next = schema
            .apply_input(&current, &input)
            .ok_or_else(|| FormError::TypeMismatch {
                field: field.to_string(),
                kind: schema.kind,
                input: input.to_string(),
            })?;
        self.values.insert(field, next);
        Ok(())
    }

    /// Marks a field as touched.
    pub fn touch(&mut self, field: &str) -> Result<()> {
        self.schema.get_field(field)?;
        self.touched.mark(field);
        Ok(())
    }

    /// Marks every field as touched.
    pub fn touch_all(&mut self) {
        self.touched.mark_all();
    }

    /// Restores the initial values and clears touched flags and errors.
    ///
    /// Fails on a pristine session: the reset control should be disabled.
    pub fn reset(&mut self) -> Result<()> {
        if !self.is_dirty() {
            return Err(FormError::ResetWhilePristine);
        }
        self.values = self.initial_values.clone();
        self.touched = Touched::untouched(&self.schema);
        self.errors = ValidationErrors::new();
        Ok(())
    }

    pub(crate) fn set_errors(&mut self, errors: ValidationErrors) {
        self.errors = errors;
    }
}
