//! Field validators and whole-form validation.

use regex::Regex;

use crate::error::{Result, ValidationErrors};
use crate::schema::FormSchema;
use crate::value::{FieldValue, FormValues, NumberValue};

/// Message used when a value is missing from the form entirely.
const MISSING_VALUE: &str = "This field is required.";

/// Validates every field of `values` against `schema`.
///
/// All fields are checked on every call. A field whose value is missing is
/// reported as an error rather than skipped.
pub fn validate(schema: &FormSchema, values: &FormValues) -> ValidationErrors {
    let mut errors = ValidationErrors::new();
    for field in schema.fields() {
        let outcome = values
            .get(&field.name)
            .map_or_else(|| Err(MISSING_VALUE.to_string()), |value| field.check(value));
        if let Err(message) = outcome {
            errors.add(&field.name, message);
        }
    }
    errors
}

/// Trait for field validators.
///
/// Validators run only on non-empty values and pass values of a type they do
/// not constrain.
pub trait Validator: Send + Sync {
    /// Validates a value and returns an error message if invalid.
    fn validate(&self, value: &FieldValue) -> std::result::Result<(), String>;
}

/// Checks a number value with `accept`, failing malformed input as well.
fn check_number(
    value: &FieldValue,
    message: &str,
    accept: impl Fn(f64) -> bool,
) -> std::result::Result<(), String> {
    match value {
        FieldValue::Number(NumberValue::Valid(n)) if !accept(*n) => Err(message.to_string()),
        FieldValue::Number(NumberValue::Invalid(_)) => Err(message.to_string()),
        _ => Ok(()),
    }
}

/// Validator that enforces a maximum length in characters.
#[derive(Debug, Clone)]
pub struct MaxLengthValidator {
    max_length: usize,
    message: String,
}

impl MaxLengthValidator {
    /// Creates a new MaxLengthValidator.
    pub fn new(max_length: usize) -> Self {
        Self {
            max_length,
            message: format!("Ensure this value has at most {max_length} characters."),
        }
    }

    /// Creates a new MaxLengthValidator with custom message.
    pub fn with_message(max_length: usize, message: impl Into<String>) -> Self {
        Self {
            max_length,
            message: message.into(),
        }
    }
}

impl Validator for MaxLengthValidator {
    fn validate(&self, value: &FieldValue) -> std::result::Result<(), String> {
        match value.as_text() {
            Some(text) if text.chars().count() > self.max_length => Err(self.message.clone()),
            _ => Ok(()),
        }
    }
}

/// Validator that enforces a minimum length in characters.
#[derive(Debug, Clone)]
pub struct MinLengthValidator {
    min_length: usize,
    message: String,
}

impl MinLengthValidator {
    /// Creates a new MinLengthValidator.
    pub fn new(min_length: usize) -> Self {
        Self {
            min_length,
            message: format!("Ensure this value has at least {min_length} characters."),
        }
    }

    /// Creates a new MinLengthValidator with custom message.
    pub fn with_message(min_length: usize, message: impl Into<String>) -> Self {
        Self {
            min_length,
            message: message.into(),
        }
    }
}

impl Validator for MinLengthValidator {
    fn validate(&self, value: &FieldValue) -> std::result::Result<(), String> {
        match value.as_text() {
            Some(text) if text.chars().count() < self.min_length => Err(self.message.clone()),
            _ => Ok(()),
        }
    }
}

/// Validator using a custom regex pattern.
#[derive(Debug, Clone)]
pub struct RegexValidator {
    pattern: Regex,
    message: String,
}

impl RegexValidator {
    /// Creates a new RegexValidator.
    pub fn new(pattern: &str, message: impl Into<String>) -> Result<Self> {
        Ok(Self {
            pattern: Regex::new(pattern)?,
            message: message.into(),
        })
    }
}

impl Validator for RegexValidator {
    fn validate(&self, value: &FieldValue) -> std::result::Result<(), String> {
        match value.as_text() {
            Some(text) if !self.pattern.is_match(text) => Err(self.message.clone()),
            _ => Ok(()),
        }
    }
}

/// Validator requiring a number greater than zero.
#[derive(Debug, Clone)]
pub struct PositiveValidator {
    message: String,
}

impl PositiveValidator {
    /// Creates a new PositiveValidator with default message.
    pub fn new() -> Self {
        Self {
            message: "Ensure this value is greater than 0.".to_string(),
        }
    }

    /// Creates a new PositiveValidator with custom message.
    pub fn with_message(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl Default for PositiveValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl Validator for PositiveValidator {
    fn validate(&self, value: &FieldValue) -> std::result::Result<(), String> {
        check_number(value, &self.message, |n| n > 0.0)
    }
}

/// Validator requiring a whole number.
#[derive(Debug, Clone)]
pub struct IntegerValidator {
    message: String,
}

impl IntegerValidator {
    /// Creates a new IntegerValidator with default message.
    pub fn new() -> Self {
        Self {
            message: "Enter a whole number.".to_string(),
        }
    }

    /// Creates a new IntegerValidator with custom message.
    pub fn with_message(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl Default for IntegerValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl Validator for IntegerValidator {
    fn validate(&self, value: &FieldValue) -> std::result::Result<(), String> {
        check_number(value, &self.message, |n| n.fract() == 0.0)
    }
}

/// Validator for numeric range.
#[derive(Debug, Clone)]
pub struct RangeValidator {
    min: Option<f64>,
    max: Option<f64>,
    message: String,
}

impl RangeValidator {
    /// Creates a new RangeValidator with min and max bounds.
    pub fn new(min: Option<f64>, max: Option<f64>) -> Self {
        let message = match (min, max) {
            (Some(min), Some(max)) => format!("Value must be between {min} and {max}."),
            (Some(min), None) => format!("Value must be at least {min}."),
            (None, Some(max)) => format!("Value must be at most {max}."),
            (None, None) => "Invalid value.".to_string(),
        };
        Self { min, max, message }
    }

    /// Creates a new RangeValidator with custom message.
    pub fn with_message(min: Option<f64>, max: Option<f64>, message: impl Into<String>) -> Self {
        Self {
            min,
            max,
            message: message.into(),
        }
    }
}

impl Validator for RangeValidator {
    fn validate(&self, value: &FieldValue) -> std::result::Result<(), String> {
        check_number(value, &self.message, |n| {
            self.min.is_none_or(|min| n >= min) && self.max.is_none_or(|max| n <= max)
        })
    }
}
