//! Text field types.

use crate::schema::{Control, FieldKind, FieldSchema};
use crate::validation::MaxLengthValidator;

/// Creates a character field (text input with optional max length).
pub fn char_field(
    name: &str,
    label: &str,
    max_length: Option<usize>,
    required: bool,
) -> FieldSchema {
    let mut field = FieldSchema::new(name, label, FieldKind::Text);

    if let Some(max) = max_length {
        field = field.validator(MaxLengthValidator::new(max));
    }

    if required {
        field = field.required();
    }

    field
}

/// Creates a text area field.
pub fn text_area(name: &str, label: &str, rows: usize, max_length: Option<usize>) -> FieldSchema {
    let mut field =
        FieldSchema::new(name, label, FieldKind::Text).control(Control::Textarea { rows });

    if let Some(max) = max_length {
        field = field.validator(MaxLengthValidator::new(max));
    }

    field
}
