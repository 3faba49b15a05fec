//! Form schema definitions.

use std::collections::{BTreeSet, HashSet};

use crate::error::{FormError, Result};
use crate::validation::Validator;
use crate::value::{FieldValue, FormValues, NumberValue, RawInput};

/// Default message for a missing required value.
const REQUIRED_MESSAGE: &str = "This field is required.";

/// Semantic type of a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Free text.
    Text,
    /// A number.
    Integer,
    /// A checkbox.
    Boolean,
    /// One value out of the field's choices.
    SingleSelect,
    /// Any subset of the field's choices.
    MultiSelect,
}

impl FieldKind {
    /// Returns the empty value for this kind.
    pub fn empty_value(self) -> FieldValue {
        match self {
            Self::Text | Self::SingleSelect => FieldValue::Text(String::new()),
            Self::Integer => FieldValue::Number(NumberValue::Empty),
            Self::Boolean => FieldValue::Bool(false),
            Self::MultiSelect => FieldValue::Set(BTreeSet::new()),
        }
    }

    /// Returns whether `value` has the shape this kind stores.
    pub const fn accepts(self, value: &FieldValue) -> bool {
        matches!(
            (self, value),
            (Self::Text | Self::SingleSelect, FieldValue::Text(_))
                | (Self::Integer, FieldValue::Number(_))
                | (Self::Boolean, FieldValue::Bool(_))
                | (Self::MultiSelect, FieldValue::Set(_))
        )
    }

    /// Returns the default control used to edit this kind.
    pub const fn default_control(self) -> Control {
        match self {
            Self::Text => Control::TextInput,
            Self::Integer => Control::NumberInput {
                min: None,
                max: None,
            },
            Self::Boolean => Control::Checkbox,
            Self::SingleSelect => Control::Select,
            Self::MultiSelect => Control::CheckboxGroup,
        }
    }
}

impl std::fmt::Display for FieldKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Text => "text",
            Self::Integer => "integer",
            Self::Boolean => "boolean",
            Self::SingleSelect => "single-select",
            Self::MultiSelect => "multi-select",
        };
        f.write_str(name)
    }
}

/// The control a UI should render for a field.
///
/// Control attributes such as number bounds are hints for the UI; they are
/// not enforced by validation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Control {
    /// Single-line text input.
    TextInput,
    /// Multi-line text input.
    Textarea { rows: usize },
    /// Number input with optional `min`/`max` attributes.
    NumberInput { min: Option<f64>, max: Option<f64> },
    /// A single checkbox.
    Checkbox,
    /// Dropdown select.
    Select,
    /// Radio button group.
    RadioGroup,
    /// Checkbox group.
    CheckboxGroup,
}

/// One option of a select, radio group or checkbox group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choice {
    /// Submitted value.
    pub value: String,
    /// Display label.
    pub label: String,
}

impl Choice {
    /// Creates a new choice.
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// Definition of a form field.
pub struct FieldSchema {
    /// Field name.
    pub name: String,
    /// Field label.
    pub label: String,
    /// Semantic type.
    pub kind: FieldKind,
    /// Control hint for the UI.
    pub control: Control,
    /// Whether the field is required.
    pub required: bool,
    /// Message reported when a required value is empty.
    pub required_message: Option<String>,
    /// Message reported when a value is not valid for the field's type.
    pub invalid_message: Option<String>,
    /// Options for select fields.
    pub choices: Vec<Choice>,
    /// Initial value.
    pub default: Option<FieldValue>,
    /// Placeholder text.
    pub placeholder: Option<String>,
    /// Validators, run in order.
    pub validators: Vec<Box<dyn Validator>>,
}

impl std::fmt::Debug for FieldSchema {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FieldSchema")
            .field("name", &self.name)
            .field("label", &self.label)
            .field("kind", &self.kind)
            .field("control", &self.control)
            .field("required", &self.required)
            .field("choices", &self.choices)
            .field("default", &self.default)
            .finish_non_exhaustive()
    }
}

impl FieldSchema {
    /// Creates a new field definition.
    pub fn new(name: impl Into<String>, label: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            kind,
            control: kind.default_control(),
            required: false,
            required_message: None,
            invalid_message: None,
            choices: Vec::new(),
            default: None,
            placeholder: None,
            validators: Vec::new(),
        }
    }

    /// Makes the field required.
    #[must_use]
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Makes the field required with a custom message.
    #[must_use]
    pub fn required_with_message(mut self, message: impl Into<String>) -> Self {
        self.required = true;
        self.required_message = Some(message.into());
        self
    }

    /// Sets the message for values that are not valid for the field's type.
    #[must_use]
    pub fn invalid_message(mut self, message: impl Into<String>) -> Self {
        self.invalid_message = Some(message.into());
        self
    }

    /// Sets the control hint.
    #[must_use]
    pub fn control(mut self, control: Control) -> Self {
        self.control = control;
        self
    }

    /// Sets the choices from `(value, label)` pairs.
    #[must_use]
    pub fn choices(mut self, choices: Vec<(&str, &str)>) -> Self {
        self.choices = choices
            .into_iter()
            .map(|(value, label)| Choice::new(value, label))
            .collect();
        self
    }

    /// Sets the initial value.
    #[must_use]
    pub fn default_value(mut self, value: impl Into<FieldValue>) -> Self {
        self.default = Some(value.into());
        self
    }

    /// Sets placeholder text.
    #[must_use]
    pub fn placeholder(mut self, text: impl Into<String>) -> Self {
        self.placeholder = Some(text.into());
        self
    }

    /// Adds a validator.
    #[must_use]
    pub fn validator(mut self, validator: impl Validator + 'static) -> Self {
        self.validators.push(Box::new(validator));
        self
    }

    /// Returns the value a new session starts with.
    pub fn initial_value(&self) -> FieldValue {
        self.default
            .clone()
            .unwrap_or_else(|| self.kind.empty_value())
    }

    /// Returns whether `value` is one of the declared choices.
    ///
    /// Fields without choices accept any value.
    pub fn has_choice(&self, value: &str) -> bool {
        self.choices.is_empty() || self.choices.iter().any(|c| c.value == value)
    }

    /// Checks a value against this field: required first, then the type's
    /// own rules, then each validator in order.
    pub(crate) fn check(&self, value: &FieldValue) -> std::result::Result<(), String> {
        if value.is_empty() {
            if self.required {
                return Err(self
                    .required_message
                    .clone()
                    .unwrap_or_else(|| REQUIRED_MESSAGE.to_string()));
            }
            return Ok(());
        }

        self.check_type(value)?;

        for validator in &self.validators {
            validator.validate(value)?;
        }
        Ok(())
    }

    fn check_type(&self, value: &FieldValue) -> std::result::Result<(), String> {
        let valid = match (self.kind, value) {
            (FieldKind::Integer, FieldValue::Number(n)) => !matches!(n, NumberValue::Invalid(_)),
            (FieldKind::SingleSelect, FieldValue::Text(s)) => self.has_choice(s),
            (FieldKind::MultiSelect, FieldValue::Set(items)) => {
                items.iter().all(|item| self.has_choice(item))
            }
            (kind, value) => kind.accepts(value),
        };
        if valid {
            return Ok(());
        }

        let fallback = match self.kind {
            FieldKind::Integer => "Enter a valid number.",
            FieldKind::SingleSelect | FieldKind::MultiSelect => "Select a valid choice.",
            FieldKind::Text | FieldKind::Boolean => "Enter a valid value.",
        };
        Err(self
            .invalid_message
            .clone()
            .unwrap_or_else(|| fallback.to_string()))
    }

    /// Computes the value that results from applying `input` to `current`.
    ///
    /// Multi-select input toggles the membership of one option. Returns
    /// `None` when the input cannot be expressed in this field's type.
    pub(crate) fn apply_input(&self, current: &FieldValue, input: &RawInput) -> Option<FieldValue> {
        match (self.kind, input) {
            (FieldKind::Text | FieldKind::SingleSelect, RawInput::Text(s)) => {
                Some(FieldValue::Text(s.clone()))
            }
            (FieldKind::Text | FieldKind::SingleSelect, RawInput::Number(n)) => {
                Some(FieldValue::Text(n.to_string()))
            }
            (FieldKind::Integer, RawInput::Text(s)) => {
                Some(FieldValue::Number(NumberValue::parse(s)))
            }
            (FieldKind::Integer, RawInput::Number(n)) => {
                Some(FieldValue::Number(NumberValue::from_f64(*n)))
            }
            (FieldKind::Boolean, RawInput::Checked(b)) => Some(FieldValue::Bool(*b)),
            (FieldKind::Boolean, RawInput::Text(s)) => parse_checked(s).map(FieldValue::Bool),
            (FieldKind::MultiSelect, RawInput::Text(target)) => {
                let mut items = current.as_set().cloned().unwrap_or_default();
                if !items.remove(target) {
                    items.insert(target.clone());
                }
                Some(FieldValue::Set(items))
            }
            _ => None,
        }
    }
}

/// Parses the textual states a checkbox may report.
fn parse_checked(raw: &str) -> Option<bool> {
    match raw.trim() {
        "true" | "on" | "1" => Some(true),
        "false" | "off" | "0" | "" => Some(false),
        _ => None,
    }
}

/// An ordered set of uniquely named fields.
#[derive(Debug)]
pub struct FormSchema {
    fields: Vec<FieldSchema>,
}

impl FormSchema {
    /// Creates a schema, rejecting duplicate names and mistyped defaults.
    pub fn new(fields: Vec<FieldSchema>) -> Result<Self> {
        let mut seen = HashSet::new();
        for field in &fields {
            if !seen.insert(field.name.as_str()) {
                return Err(FormError::DuplicateField(field.name.clone()));
            }
            if let Some(default) = &field.default {
                if !field.kind.accepts(default) {
                    return Err(FormError::InvalidDefault {
                        field: field.name.clone(),
                        expected: field.kind,
                    });
                }
            }
        }
        Ok(Self { fields })
    }

    /// Returns the fields in declaration order.
    pub fn fields(&self) -> &[FieldSchema] {
        &self.fields
    }

    /// Returns a field by name.
    pub fn field(&self, name: &str) -> Option<&FieldSchema> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Returns a field by name, failing for unknown names.
    pub fn get_field(&self, name: &str) -> Result<&FieldSchema> {
        self.field(name)
            .ok_or_else(|| FormError::FieldNotFound(name.to_string()))
    }

    /// Returns the field names in declaration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|f| f.name.as_str())
    }

    /// Returns the number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns whether the schema has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Builds the values every field starts with.
    pub fn initial_values(&self) -> FormValues {
        self.fields
            .iter()
            .map(|f| (f.name.clone(), f.initial_value()))
            .collect()
    }
}

/// A builder for declaring a form schema field by field.
#[derive(Debug, Default)]
pub struct FormBuilder {
    fields: Vec<FieldSchema>,
}

impl FormBuilder {
    /// Creates a new form builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a field to the form.
    #[must_use]
    pub fn field(mut self, field: FieldSchema) -> Self {
        self.fields.push(field);
        self
    }

    /// Validates the field list and returns the schema.
    pub fn build(self) -> Result<FormSchema> {
        FormSchema::new(self.fields)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_builder() {
        let field = FieldSchema::new("firstName", "First Name", FieldKind::Text)
            .required_with_message("First name is required")
            .placeholder("First Name");

        assert_eq!(field.name, "firstName");
        assert_eq!(field.label, "First Name");
        assert!(field.required);
        assert_eq!(field.control, Control::TextInput);
        assert_eq!(field.placeholder.as_deref(), Some("First Name"));
    }

    #[test]
    fn test_form_builder_keeps_order() {
        let schema = FormBuilder::new()
            .field(FieldSchema::new("b", "B", FieldKind::Text))
            .field(FieldSchema::new("a", "A", FieldKind::Boolean))
            .build()
            .unwrap();

        assert_eq!(schema.len(), 2);
        assert_eq!(schema.names().collect::<Vec<_>>(), vec!["b", "a"]);
    }

    #[test]
    fn test_duplicate_field_rejected() {
        let result = FormBuilder::new()
            .field(FieldSchema::new("name", "Name", FieldKind::Text))
            .field(FieldSchema::new("name", "Other", FieldKind::Integer))
            .build();

        assert!(matches!(result, Err(FormError::DuplicateField(name)) if name == "name"));
    }

    #[test]
    fn test_mistyped_default_rejected() {
        let result = FormBuilder::new()
            .field(FieldSchema::new("age", "Age", FieldKind::Integer).default_value("ten"))
            .build();

        assert!(matches!(
            result,
            Err(FormError::InvalidDefault { expected: FieldKind::Integer, .. })
        ));
    }

    #[test]
    fn test_initial_values_use_defaults_then_empty() {
        let schema = FormBuilder::new()
            .field(FieldSchema::new("name", "Name", FieldKind::Text))
            .field(FieldSchema::new("age", "Age", FieldKind::Integer).default_value(0))
            .field(FieldSchema::new("tags", "Tags", FieldKind::MultiSelect))
            .build()
            .unwrap();

        let values = schema.initial_values();
        assert_eq!(values.get("name"), Some(&FieldValue::from("")));
        assert_eq!(values.get("age"), Some(&FieldValue::from(0)));
        assert_eq!(values.get("tags"), Some(&FieldValue::set(Vec::<String>::new())));
    }

    #[test]
    fn test_apply_input_toggles_multi_select() {
        let field = FieldSchema::new("sauces", "Sauces", FieldKind::MultiSelect);
        let empty = field.initial_value();

        let once = field.apply_input(&empty, &"ketchup".into()).unwrap();
        assert_eq!(once, FieldValue::set(["ketchup"]));

        let twice = field.apply_input(&once, &"ketchup".into()).unwrap();
        assert_eq!(twice, empty);
    }

    #[test]
    fn test_apply_input_rejects_mismatched_input() {
        let text = FieldSchema::new("name", "Name", FieldKind::Text);
        assert!(text.apply_input(&text.initial_value(), &true.into()).is_none());

        let flag = FieldSchema::new("employed", "Employed", FieldKind::Boolean);
        assert_eq!(
            flag.apply_input(&flag.initial_value(), &"on".into()),
            Some(FieldValue::Bool(true))
        );
        assert!(flag.apply_input(&flag.initial_value(), &"maybe".into()).is_none());
    }

    #[test]
    fn test_check_order_required_then_type_then_validators() {
        let field = FieldSchema::new("color", "Color", FieldKind::SingleSelect)
            .required()
            .choices(vec![("red", "Red"), ("blue", "Blue")]);

        assert_eq!(field.check(&"".into()), Err(REQUIRED_MESSAGE.to_string()));
        assert_eq!(
            field.check(&"green".into()),
            Err("Select a valid choice.".to_string())
        );
        assert!(field.check(&"red".into()).is_ok());
    }

    #[test]
    fn test_optional_empty_skips_constraints() {
        let field = FieldSchema::new("count", "Count", FieldKind::Integer);
        assert!(field.check(&field.initial_value()).is_ok());
        assert_eq!(
            field.check(&FieldValue::Number(NumberValue::parse("x"))),
            Err("Enter a valid number.".to_string())
        );
    }
}
