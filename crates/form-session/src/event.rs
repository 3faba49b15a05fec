//! Serializable form events.

use serde::{Deserialize, Serialize};

use crate::value::RawInput;

/// A single user interaction, as dispatched by a UI or a script.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum FormEvent {
    /// A control reported new input.
    Change { field: String, value: RawInput },
    /// A control lost focus.
    Blur { field: String },
    /// The submit control was activated.
    Submit,
    /// The reset control was activated.
    Reset,
}

impl FormEvent {
    /// Creates a change event.
    pub fn change(field: impl Into<String>, value: impl Into<RawInput>) -> Self {
        Self::Change {
            field: field.into(),
            value: value.into(),
        }
    }

    /// Creates a blur event.
    pub fn blur(field: impl Into<String>) -> Self {
        Self::Blur {
            field: field.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_events() {
        let change: FormEvent =
            serde_json::from_str(r#"{"event":"change","field":"age","value":"42"}"#).unwrap();
        assert_eq!(change, FormEvent::change("age", "42"));

        let checked: FormEvent =
            serde_json::from_str(r#"{"event":"change","field":"employed","value":true}"#)
                .unwrap();
        assert_eq!(checked, FormEvent::change("employed", true));

        let blur: FormEvent = serde_json::from_str(r#"{"event":"blur","field":"notes"}"#).unwrap();
        assert_eq!(blur, FormEvent::blur("notes"));

        let submit: FormEvent = serde_json::from_str(r#"{"event":"submit"}"#).unwrap();
        assert_eq!(submit, FormEvent::Submit);
    }

    #[test]
    fn test_unknown_event_rejected() {
        let result = serde_json::from_str::<FormEvent>(r#"{"event":"hover","field":"age"}"#);
        assert!(result.is_err());
    }
}
