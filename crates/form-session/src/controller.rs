//! Event handling for a form session.

use std::sync::Arc;

use tracing::{debug, info};

use crate::error::{Result, ValidationErrors};
use crate::event::FormEvent;
use crate::schema::FormSchema;
use crate::store::{Session, Touched};
use crate::validation::validate;
use crate::value::{FormValues, RawInput};

/// Receives the submitted values.
pub type SubmitHandler = Box<dyn FnMut(FormValues)>;

/// Rewrites values before they are handed to the submit handler.
pub type SubmitTransform = Box<dyn Fn(&FormValues) -> FormValues>;

/// Result of a submit attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Values were valid and handed to the submit handler.
    Accepted,
    /// At least one field failed validation; nothing was submitted.
    Rejected,
}

impl SubmitOutcome {
    /// Returns whether the submission went through.
    pub const fn is_accepted(self) -> bool {
        matches!(self, Self::Accepted)
    }
}

/// Drives a [`Session`] from UI events.
///
/// Every operation runs to completion and re-validates the whole form.
/// Whether an error is shown is up to the UI: see [`FormController::visible_error`].
pub struct FormController {
    session: Session,
    on_submit: SubmitHandler,
    transform: Option<SubmitTransform>,
    pristine_display: Option<serde_json::Value>,
}

impl std::fmt::Debug for FormController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FormController")
            .field("session", &self.session)
            .field("pristine_display", &self.pristine_display)
            .finish_non_exhaustive()
    }
}

impl FormController {
    /// Creates a controller over a fresh session.
    pub fn new(schema: Arc<FormSchema>, on_submit: impl FnMut(FormValues) + 'static) -> Self {
        Self {
            session: Session::initialize(schema),
            on_submit: Box::new(on_submit),
            transform: None,
            pristine_display: None,
        }
    }

    /// Sets the transform applied to values before submission.
    #[must_use]
    pub fn transform(mut self, transform: impl Fn(&FormValues) -> FormValues + 'static) -> Self {
        self.transform = Some(Box::new(transform));
        self
    }

    /// Sets what [`display`](Self::display) shows while the form is pristine.
    #[must_use]
    pub fn pristine_display(mut self, snapshot: serde_json::Value) -> Self {
        self.pristine_display = Some(snapshot);
        self
    }

    /// Returns the underlying session.
    pub const fn session(&self) -> &Session {
        &self.session
    }

    /// Returns the current values.
    pub const fn values(&self) -> &FormValues {
        self.session.values()
    }

    /// Returns the touched flags.
    pub const fn touched(&self) -> &Touched {
        self.session.touched()
    }

    /// Returns the current errors.
    pub const fn errors(&self) -> &ValidationErrors {
        self.session.errors()
    }

    /// Returns whether the values differ from the initial values.
    pub fn is_dirty(&self) -> bool {
        self.session.is_dirty()
    }

    /// Returns whether the submit control should be enabled.
    pub fn can_submit(&self) -> bool {
        self.session.is_dirty()
    }

    /// Returns whether the reset control should be enabled.
    pub fn can_reset(&self) -> bool {
        self.session.is_dirty()
    }

    /// Returns the error to show for a field: only once it has been touched.
    pub fn visible_error(&self, field: &str) -> Option<&str> {
        if self.session.touched().is_touched(field) {
            self.session.errors().get(field)
        } else {
            None
        }
    }

    /// Handles new input for a field.
    pub fn on_change(&mut self, field: &str, input: impl Into<RawInput>) -> Result<()> {
        self.session.set_value(field, input)?;
        self.revalidate();
        debug!(
            field,
            dirty = self.session.is_dirty(),
            errors = self.session.errors().len(),
            "field changed"
        );
        Ok(())
    }

    /// Handles a field losing focus.
    pub fn on_blur(&mut self, field: &str) -> Result<()> {
        self.session.touch(field)?;
        self.revalidate();
        debug!(field, error = ?self.session.errors().get(field), "field touched");
        Ok(())
    }

    /// Validates the whole form and submits it if there are no errors.
    ///
    /// Every field is marked touched first so all errors become visible.
    /// The submit handler runs at most once per call, with transformed values.
    pub fn on_submit(&mut self) -> SubmitOutcome {
        self.session.touch_all();
        self.revalidate();

        let errors = self.session.errors();
        if !errors.is_empty() {
            info!(
                errors = errors.len(),
                fields = ?errors.iter().map(|(field, _)| field).collect::<Vec<_>>(),
                "submission rejected"
            );
            return SubmitOutcome::Rejected;
        }

        let values = match &self.transform {
            Some(transform) => transform(self.session.values()),
            None => self.session.values().clone(),
        };
        info!(fields = values.len(), "form submitted");
        (self.on_submit)(values);
        SubmitOutcome::Accepted
    }

    /// Restores the initial values.
    pub fn on_reset(&mut self) -> Result<()> {
        self.session.reset()?;
        info!("form reset");
        Ok(())
    }

    /// Dispatches an event to the matching handler.
    ///
    /// Returns the submit outcome for submit events.
    pub fn dispatch(&mut self, event: FormEvent) -> Result<Option<SubmitOutcome>> {
        match event {
            FormEvent::Change { field, value } => self.on_change(&field, value)?,
            FormEvent::Blur { field } => self.on_blur(&field)?,
            FormEvent::Submit => return Ok(Some(self.on_submit())),
            FormEvent::Reset => self.on_reset()?,
        }
        Ok(None)
    }

    /// Renders the display snapshot as pretty JSON.
    ///
    /// A pristine form shows the configured pristine snapshot, falling back
    /// to the initial values; a dirty form shows the current values.
    pub fn display(&self) -> Result<String> {
        let text = if self.session.is_dirty() {
            serde_json::to_string_pretty(self.session.values())?
        } else if let Some(snapshot) = &self.pristine_display {
            serde_json::to_string_pretty(snapshot)?
        } else {
            serde_json::to_string_pretty(self.session.initial_values())?
        };
        Ok(text)
    }

    fn revalidate(&mut self) {
        let errors = validate(self.session.schema(), self.session.values());
        self.session.set_errors(errors);
    }
}
