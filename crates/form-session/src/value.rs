//! Field values and raw UI input.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize, Serializer};

/// Largest magnitude at which every integer is exactly representable as f64.
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

/// The value held by a number field.
///
/// Number inputs may be blank or hold text that is not a number at all; both
/// are kept so the validator can report them rather than losing the input.
#[derive(Debug, Clone, PartialEq)]
pub enum NumberValue {
    /// Nothing entered.
    Empty,
    /// A finite number.
    Valid(f64),
    /// Raw input that does not parse as a finite number.
    Invalid(String),
}

impl NumberValue {
    /// Parses raw input, trimming surrounding whitespace.
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Self::Empty;
        }
        match trimmed.parse::<f64>() {
            Ok(n) if n.is_finite() => Self::Valid(n),
            _ => Self::Invalid(trimmed.to_string()),
        }
    }

    /// Converts a number, rejecting NaN and infinities.
    pub fn from_f64(n: f64) -> Self {
        if n.is_finite() {
            Self::Valid(n)
        } else {
            Self::Invalid(n.to_string())
        }
    }

    /// Returns the parsed number, if any.
    pub const fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Valid(n) => Some(*n),
            _ => None,
        }
    }
}

impl Serialize for NumberValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Empty => serializer.serialize_none(),
            #[allow(clippy::cast_possible_truncation)]
            Self::Valid(n) if n.fract() == 0.0 && n.abs() <= MAX_EXACT_INTEGER => {
                serializer.serialize_i64(*n as i64)
            }
            Self::Valid(n) => serializer.serialize_f64(*n),
            Self::Invalid(raw) => serializer.serialize_str(raw),
        }
    }
}

/// The current value of a single field.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// Text and single-select values.
    Text(String),
    /// Number input.
    Number(NumberValue),
    /// Checkbox state.
    Bool(bool),
    /// Multi-select values.
    Set(BTreeSet<String>),
}

impl FieldValue {
    /// Returns whether the value is its type's empty sentinel.
    ///
    /// Text is empty only when it has no characters at all. Booleans are
    /// never empty.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Text(s) => s.is_empty(),
            Self::Number(n) => *n == NumberValue::Empty,
            Self::Bool(_) => false,
            Self::Set(items) => items.is_empty(),
        }
    }

    /// Returns the text content of a text value.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the number of a parsed number value.
    pub const fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => n.as_f64(),
            _ => None,
        }
    }

    /// Returns the state of a boolean value.
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the members of a set value.
    pub const fn as_set(&self) -> Option<&BTreeSet<String>> {
        match self {
            Self::Set(items) => Some(items),
            _ => None,
        }
    }

    /// Creates a set value from its members.
    pub fn set<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Set(items.into_iter().map(Into::into).collect())
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        Self::Number(NumberValue::from_f64(value))
    }
}

impl From<i32> for FieldValue {
    fn from(value: i32) -> Self {
        Self::Number(NumberValue::Valid(f64::from(value)))
    }
}

/// Input reported by a UI control on change.
///
/// Text-like controls report their text, checkboxes report their checked
/// state, and each member of a checkbox group reports only its own value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawInput {
    /// A checked state.
    Checked(bool),
    /// A number, as sent by script-driven input.
    Number(f64),
    /// Text, or the option value of a toggled checkbox.
    Text(String),
}

impl std::fmt::Display for RawInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Checked(b) => write!(f, "{b}"),
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => write!(f, "{s:?}"),
        }
    }
}

impl From<&str> for RawInput {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for RawInput {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<bool> for RawInput {
    fn from(value: bool) -> Self {
        Self::Checked(value)
    }
}

impl From<f64> for RawInput {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

/// Current values of every field, in schema order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormValues {
    entries: Vec<(String, FieldValue)>,
}

impl FormValues {
    /// Creates an empty set of values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the value of a field.
    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.entries
            .iter()
            .find(|(field, _)| field == name)
            .map(|(_, value)| value)
    }

    /// Returns the text of a text field.
    pub fn text(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(FieldValue::as_text)
    }

    /// Replaces the value of a field, appending it if absent.
    pub fn insert(&mut self, name: impl Into<String>, value: FieldValue) {
        let name = name.into();
        match self.entries.iter_mut().find(|(field, _)| *field == name) {
            Some((_, slot)) => *slot = value,
            None => self.entries.push((name, value)),
        }
    }

    /// Iterates over `(name, value)` pairs in schema order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.entries
            .iter()
            .map(|(name, value)| (name.as_str(), value))
    }

    /// Returns the field names in schema order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    /// Returns the number of fields.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns whether no fields are present.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(String, FieldValue)> for FormValues {
    fn from_iter<I: IntoIterator<Item = (String, FieldValue)>>(iter: I) -> Self {
        let mut values = Self::new();
        for (name, value) in iter {
            values.insert(name, value);
        }
        values
    }
}

impl Serialize for FormValues {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.entries.iter().map(|(name, value)| (name, value)))
    }
}
