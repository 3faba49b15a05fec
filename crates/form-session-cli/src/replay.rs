//! Replaying scripts against the profile form.

use std::cell::RefCell;
use std::io::Write;
use std::rc::Rc;

use form_session::profile::profile_form;
use form_session::{FormSchema, FormValues, SubmitOutcome, ValidationErrors};
use tracing::{debug, info, warn};

use crate::error::{ReplayError, Result};
use crate::script::ScriptLine;

/// What happened during a replay.
#[derive(Debug, Clone, Default)]
pub struct ReplayReport {
    /// Values handed to the submit handler, in order.
    pub submissions: Vec<FormValues>,
    /// Number of rejected submit attempts.
    pub rejected: usize,
    /// Errors after the last event.
    pub errors: ValidationErrors,
    /// Whether the form ended dirty.
    pub dirty: bool,
    /// The display snapshot after the last event.
    pub display: String,
}

/// Dispatches every scripted event to a fresh profile form.
///
/// Stops at the first event the form rejects as a usage error.
pub fn replay(lines: &[ScriptLine]) -> Result<ReplayReport> {
    let submissions = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&submissions);
    let mut form = profile_form(move |values| sink.borrow_mut().push(values))?;

    let mut rejected = 0;
    for ScriptLine { line, event } in lines {
        debug!(line, ?event, "Dispatching event");
        let outcome = form
            .dispatch(event.clone())
            .map_err(|source| ReplayError::EventFailed {
                line: *line,
                source,
            })?;
        if outcome == Some(SubmitOutcome::Rejected) {
            warn!(line, errors = %form.errors(), "Submission rejected");
            rejected += 1;
        }
    }

    let report = ReplayReport {
        submissions: std::mem::take(&mut *submissions.borrow_mut()),
        rejected,
        errors: form.errors().clone(),
        dirty: form.is_dirty(),
        display: form.display()?,
    };
    info!(
        events = lines.len(),
        submitted = report.submissions.len(),
        rejected,
        "Replay finished"
    );
    Ok(report)
}

/// Writes a report: each submission, the remaining errors, then the display.
pub fn write_report(report: &ReplayReport, out: &mut impl Write, compact: bool) -> Result<()> {
    for (index, values) in report.submissions.iter().enumerate() {
        let payload = if compact {
            serde_json::to_string(values)?
        } else {
            serde_json::to_string_pretty(values)?
        };
        writeln!(out, "Submission {}:", index + 1)?;
        writeln!(out, "{payload}")?;
    }

    if !report.errors.is_empty() {
        writeln!(out, "Errors:")?;
        for (field, message) in report.errors.iter() {
            writeln!(out, "  {field}: {message}")?;
        }
    }

    let state = if report.dirty { "dirty" } else { "pristine" };
    writeln!(out, "Display ({state}):")?;
    writeln!(out, "{}", report.display)?;
    Ok(())
}

/// Writes one line per field describing the schema.
pub fn describe_schema(schema: &FormSchema, out: &mut impl Write) -> Result<()> {
    for field in schema.fields() {
        let required = if field.required { " *" } else { "" };
        write!(out, "{} ({}){required}: {}", field.name, field.kind, field.label)?;
        if !field.choices.is_empty() {
            let options = field
                .choices
                .iter()
                .map(|c| c.value.as_str())
                .filter(|v| !v.is_empty())
                .collect::<Vec<_>>()
                .join(", ");
            write!(out, " [{options}]")?;
        }
        writeln!(out)?;
    }
    Ok(())
}
