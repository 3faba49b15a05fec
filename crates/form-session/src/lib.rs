//! # form-session
//!
//! Form state, field validation and dirty tracking for schema-driven forms.
//!
//! This crate provides:
//! - Field schemas with declarative validators
//! - A session holding values, touched flags and the pristine snapshot
//! - A controller that turns UI events into session updates and submissions
//! - The personal profile form as a ready-made schema
//!
//! Rendering is left to the caller: the controller exposes values, touched
//! flags, errors and the dirty flag for the UI to draw from.
//!
//! ## Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use form_session::fields::{char_field, integer_field};
//! use form_session::{FormBuilder, FormController};
//!
//! let schema = FormBuilder::new()
//!     .field(char_field("username", "Username", Some(150), true))
//!     .field(integer_field("age", "Age", false))
//!     .build()
//!     .unwrap();
//!
//! let mut form = FormController::new(Arc::new(schema), |values| {
//!     println!("submitted {values:?}");
//! });
//!
//! form.on_change("age", "forty").unwrap();
//! form.on_blur("age").unwrap();
//! assert_eq!(form.visible_error("age"), Some("Enter a valid number."));
//! assert!(form.can_submit());
//!
//! form.on_change("username", "ada").unwrap();
//! form.on_change("age", "36").unwrap();
//! assert!(form.on_submit().is_accepted());
//! ```
//!
//! ## Validation
//!
//! ```rust
//! use form_session::validation::{validate, PositiveValidator, RegexValidator};
//! use form_session::{FieldKind, FieldSchema, FormBuilder};
//!
//! let schema = FormBuilder::new()
//!     .field(
//!         FieldSchema::new("code", "Code", FieldKind::Text)
//!             .required()
//!             .validator(RegexValidator::new(r"^[A-Z]{3}$", "Three capitals.").unwrap()),
//!     )
//!     .field(
//!         FieldSchema::new("qty", "Quantity", FieldKind::Integer)
//!             .validator(PositiveValidator::new()),
//!     )
//!     .build()
//!     .unwrap();
//!
//! let mut values = schema.initial_values();
//! values.insert("code", "abc".into());
//! values.insert("qty", (-2).into());
//!
//! let errors = validate(&schema, &values);
//! assert_eq!(errors.get("code"), Some("Three capitals."));
//! assert_eq!(errors.get("qty"), Some("Ensure this value is greater than 0."));
//! ```
//!
//! ## Checkbox groups
//!
//! Each checkbox of a group reports only its own value, so a change on a
//! multi-select field toggles that value:
//!
//! ```rust
//! use form_session::profile::profile_form;
//! use form_session::FieldValue;
//!
//! let mut form = profile_form(|_| {}).unwrap();
//! form.on_change("sauces", "mustard").unwrap();
//! form.on_change("sauces", "ketchup").unwrap();
//! form.on_change("sauces", "mustard").unwrap();
//! assert_eq!(form.values().get("sauces"), Some(&FieldValue::set(["ketchup"])));
//! ```

mod controller;
mod error;
mod event;
pub mod fields;
pub mod profile;
mod schema;
mod store;
pub mod validation;
mod value;

pub use controller::{FormController, SubmitHandler, SubmitOutcome, SubmitTransform};
pub use error::{FormError, Result, ValidationErrors};
pub use event::FormEvent;
pub use schema::{Choice, Control, FieldKind, FieldSchema, FormBuilder, FormSchema};
pub use store::{Session, Touched};
pub use value::{FieldValue, FormValues, NumberValue, RawInput};
