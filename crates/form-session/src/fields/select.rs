//! Select field types.

use crate::schema::{Control, FieldKind, FieldSchema};

/// Creates a choice field (select/dropdown).
pub fn choice_field(
    name: &str,
    label: &str,
    choices: Vec<(&str, &str)>,
    required: bool,
) -> FieldSchema {
    let mut field = FieldSchema::new(name, label, FieldKind::SingleSelect).choices(choices);

    if required {
        field = field.required();
    }

    field
}

/// Creates a radio group field, starting on `initial`.
pub fn radio_field(
    name: &str,
    label: &str,
    choices: Vec<(&str, &str)>,
    initial: &str,
) -> FieldSchema {
    FieldSchema::new(name, label, FieldKind::SingleSelect)
        .control(Control::RadioGroup)
        .choices(choices)
        .default_value(initial)
}

/// Creates a multiple choice field (checkbox group).
pub fn multiple_choice_field(
    name: &str,
    label: &str,
    choices: Vec<(&str, &str)>,
    required: bool,
) -> FieldSchema {
    let mut field = FieldSchema::new(name, label, FieldKind::MultiSelect).choices(choices);

    if required {
        field = field.required();
    }

    field
}
