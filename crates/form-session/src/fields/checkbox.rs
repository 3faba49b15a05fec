//! Checkbox field types.

use crate::schema::{FieldKind, FieldSchema};

/// Creates a boolean field (checkbox), unchecked by default.
pub fn boolean_field(name: &str, label: &str) -> FieldSchema {
    FieldSchema::new(name, label, FieldKind::Boolean).default_value(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::Control;
    use crate::value::FieldValue;

    #[test]
    fn test_boolean_field() {
        let field = boolean_field("employed", "Employed");
        assert_eq!(field.name, "employed");
        assert!(!field.required);
        assert_eq!(field.control, Control::Checkbox);
        assert_eq!(field.initial_value(), FieldValue::Bool(false));
    }
}
