//! The personal profile form.
//!
//! Eight fields: first and last name, age, employment, favorite color,
//! condiment preferences, a favorite stooge and free-text notes. Names are
//! lowercased on submit.

use std::sync::Arc;

use serde_json::json;

use crate::controller::FormController;
use crate::error::Result;
use crate::fields::{boolean_field, choice_field, multiple_choice_field, radio_field, text_area};
use crate::schema::{Control, FieldKind, FieldSchema, FormBuilder, FormSchema};
use crate::validation::{IntegerValidator, MaxLengthValidator, PositiveValidator, RegexValidator};
use crate::value::{FieldValue, FormValues};

/// Letters and spaces only.
pub const NAME_PATTERN: &str = r"^[A-Za-z ]+$";

/// Maximum length of the notes field.
pub const NOTES_MAX_LENGTH: usize = 100;

/// Fields lowercased before submission.
pub const NAME_FIELDS: [&str; 2] = ["firstName", "lastName"];

const AGE_MESSAGE: &str = "Valid age is required";

/// Color options, starting with a blank entry.
pub fn colors() -> Vec<(&'static str, &'static str)> {
    vec![
        ("", ""),
        ("red", "Red"),
        ("blue", "Blue"),
        ("green", "Green"),
        ("yellow", "Yellow"),
    ]
}

/// Sauce options.
pub fn sauces() -> Vec<(&'static str, &'static str)> {
    vec![
        ("ketchup", "Ketchup"),
        ("mustard", "Mustard"),
        ("mayonnaise", "Mayonnaise"),
        ("guacamole", "Guacamole"),
    ]
}

/// Stooge options.
pub fn stooges() -> Vec<(&'static str, &'static str)> {
    vec![("larry", "Larry"), ("curly", "Curly"), ("moe", "Moe")]
}

fn name_field(name: &str, label: &str, required_message: &str) -> Result<FieldSchema> {
    let pattern = RegexValidator::new(
        NAME_PATTERN,
        format!("{label} must contain only letters and spaces"),
    )?;
    Ok(FieldSchema::new(name, label, FieldKind::Text)
        .required_with_message(required_message)
        .placeholder(label)
        .validator(pattern))
}

/// Builds the profile form schema.
pub fn profile_schema() -> Result<FormSchema> {
    let age = FieldSchema::new("age", "Age", FieldKind::Integer)
        .required_with_message(AGE_MESSAGE)
        .invalid_message(AGE_MESSAGE)
        .control(Control::NumberInput {
            min: Some(0.0),
            max: Some(120.0),
        })
        .placeholder("Age")
        .default_value(0)
        .validator(PositiveValidator::with_message(AGE_MESSAGE))
        .validator(IntegerValidator::with_message(AGE_MESSAGE));

    let notes = text_area("notes", "Notes", 4, None)
        .placeholder("Note")
        .validator(MaxLengthValidator::with_message(
            NOTES_MAX_LENGTH,
            format!("Notes must be less than or equal to {NOTES_MAX_LENGTH} characters"),
        ));

    FormBuilder::new()
        .field(name_field("firstName", "First Name", "First name is required")?)
        .field(name_field("lastName", "Last Name", "Last name is required")?)
        .field(age)
        .field(boolean_field("employed", "Employed"))
        .field(choice_field("favoriteColor", "Favorite Color", colors(), false))
        .field(multiple_choice_field("sauces", "Sauces", sauces(), false))
        .field(radio_field("stooge", "Best Stooge", stooges(), "larry"))
        .field(notes)
        .build()
}

/// Returns a copy of `values` with the name fields lowercased.
pub fn lowercase_names(values: &FormValues) -> FormValues {
    let mut normalized = values.clone();
    for field in NAME_FIELDS {
        if let Some(name) = values.text(field) {
            normalized.insert(field, FieldValue::Text(name.to_lowercase()));
        }
    }
    normalized
}

/// What the display shows before anything has been entered.
pub fn pristine_display() -> serde_json::Value {
    json!({
        "stooge": "larry",
        "employed": false,
    })
}

/// Creates a controller for the profile form.
pub fn profile_form(on_submit: impl FnMut(FormValues) + 'static) -> Result<FormController> {
    let schema = Arc::new(profile_schema()?);
    Ok(FormController::new(schema, on_submit)
        .transform(lowercase_names)
        .pristine_display(pristine_display()))
}
