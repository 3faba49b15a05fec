//! Numeric field types.

use crate::schema::{FieldKind, FieldSchema};
use crate::validation::IntegerValidator;

/// Creates an integer field (number input accepting whole numbers).
pub fn integer_field(name: &str, label: &str, required: bool) -> FieldSchema {
    let mut field =
        FieldSchema::new(name, label, FieldKind::Integer).validator(IntegerValidator::new());

    if required {
        field = field.required();
    }

    field
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::{FieldValue, NumberValue};

    #[test]
    fn test_integer_field() {
        let field = integer_field("count", "Count", true);
        assert_eq!(field.kind, FieldKind::Integer);
        assert!(field.required);
        assert_eq!(field.validators.len(), 1);
    }

    #[test]
    fn test_integer_field_rejects_fractions() {
        let field = integer_field("count", "Count", false);
        let value = FieldValue::Number(NumberValue::parse("2.5"));
        assert_eq!(field.check(&value), Err("Enter a whole number.".to_string()));
    }
}
