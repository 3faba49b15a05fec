//! Invariants that hold across any sequence of operations.

mod common;

use common::{assert_dirty_consistent, recorded_profile_form};
use form_session::profile::profile_schema;
use form_session::FormEvent;

fn script() -> Vec<FormEvent> {
    vec![
        FormEvent::change("firstName", "Grace"),
        FormEvent::blur("firstName"),
        FormEvent::change("age", "85"),
        FormEvent::change("employed", true),
        FormEvent::change("sauces", "mustard"),
        FormEvent::change("sauces", "ketchup"),
        FormEvent::change("stooge", "curly"),
        FormEvent::change("notes", "Invented the compiler"),
        FormEvent::change("employed", false),
        FormEvent::Submit,
        FormEvent::change("sauces", "mustard"),
        FormEvent::blur("notes"),
    ]
}

#[test]
fn initialize_is_pristine_and_untouched() {
    let (form, _) = recorded_profile_form();
    assert!(!form.is_dirty());
    assert!(form.touched().none());
    assert!(form.errors().is_empty());
    assert!(!form.can_submit());
    assert!(!form.can_reset());
}

#[test]
fn dirty_flag_tracks_values_after_every_event() {
    let (mut form, _) = recorded_profile_form();
    assert_dirty_consistent(&form);
    for event in script() {
        form.dispatch(event).unwrap();
        assert_dirty_consistent(&form);
        assert_eq!(form.can_submit(), form.is_dirty());
        assert_eq!(form.can_reset(), form.is_dirty());
    }
}

#[test]
fn reset_restores_initial_values() {
    let (mut form, _) = recorded_profile_form();
    for event in script() {
        form.dispatch(event).unwrap();
    }
    assert!(form.is_dirty());

    form.on_reset().unwrap();
    assert_eq!(form.values(), &profile_schema().unwrap().initial_values());
    assert!(form.touched().none());
    assert!(form.errors().is_empty());
    assert_dirty_consistent(&form);
}

#[test]
fn touched_never_reverts_before_reset() {
    let (mut form, _) = recorded_profile_form();
    form.on_blur("notes").unwrap();
    for event in script() {
        form.dispatch(event).unwrap();
        assert!(form.touched().is_touched("notes"));
    }
}

#[test]
fn toggling_twice_restores_the_set() {
    let (mut form, _) = recorded_profile_form();
    form.on_change("sauces", "mayonnaise").unwrap();
    let before = form.values().get("sauces").cloned();

    for sauce in ["ketchup", "mustard", "guacamole", "mayonnaise"] {
        form.on_change("sauces", sauce).unwrap();
        form.on_change("sauces", sauce).unwrap();
        assert_eq!(form.values().get("sauces").cloned(), before);
    }
}

#[test]
fn returning_to_defaults_is_pristine_again() {
    let (mut form, _) = recorded_profile_form();
    form.on_change("age", "30").unwrap();
    form.on_change("stooge", "moe").unwrap();
    assert!(form.is_dirty());

    form.on_change("age", "0").unwrap();
    form.on_change("stooge", "larry").unwrap();
    assert!(!form.is_dirty());
}
