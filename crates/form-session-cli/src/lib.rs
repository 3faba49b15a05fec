//! Scripted replay of form events against the profile form.
//!
//! A script is a JSON-lines file with one [`FormEvent`](form_session::FormEvent)
//! per line. Blank lines and lines starting with `#` are ignored.
//!
//! ```text
//! # fill in the form
//! {"event": "change", "field": "firstName", "value": "Ada"}
//! {"event": "blur", "field": "firstName"}
//! {"event": "change", "field": "employed", "value": true}
//! {"event": "submit"}
//! ```
//!
//! # CLI Usage
//!
//! ```bash
//! # Replay a script and print submissions and the final display
//! profile-form replay events.jsonl
//!
//! # Read the script from stdin
//! cat events.jsonl | profile-form replay -
//!
//! # Describe the profile form's fields
//! profile-form schema
//! ```

pub mod error;
pub mod replay;
pub mod script;

pub use error::{ReplayError, Result};
