#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use form_session::profile::profile_form;
use form_session::{FormController, FormValues};

/// Values handed to the submit handler, in order.
pub type Submissions = Rc<RefCell<Vec<FormValues>>>;

/// Creates a profile form whose submissions are recorded.
pub fn recorded_profile_form() -> (FormController, Submissions) {
    let submissions: Submissions = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&submissions);
    let form = profile_form(move |values| sink.borrow_mut().push(values))
        .unwrap_or_else(|e| panic!("profile schema failed to build: {e}"));
    (form, submissions)
}

/// Fills in every required profile field with valid input.
pub fn fill_valid(form: &mut FormController) {
    form.on_change("firstName", "Ada").unwrap();
    form.on_change("lastName", "Lovelace").unwrap();
    form.on_change("age", "36").unwrap();
}

/// Asserts the dirty flag matches a direct comparison of the values.
pub fn assert_dirty_consistent(form: &FormController) {
    let session = form.session();
    assert_eq!(
        form.is_dirty(),
        session.values() != session.initial_values(),
        "dirty flag out of sync with values"
    );
}
