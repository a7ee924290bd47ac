//! Tests for the form session event handlers.

use addr_core::{FormSession, SubmitOutcome, ViewAdvisory};
use addr_dataset::{LookupIndex, ReferenceDataset};
use addr_model::{City, Field, FormRecord, PostalEntry, State};

fn filled_session() -> FormSession<'static> {
    let mut session = FormSession::new();
    session.on_field_change(Field::FirstName, "Anna");
    session.on_field_change(Field::LastName, "Lee");
    session.on_field_change(Field::Pincode, "560001");
    session
}

#[test]
fn new_session_is_empty() {
    let session = FormSession::new();
    assert_eq!(session.record(), &FormRecord::default());
    assert!(session.errors().is_empty());
    assert!(session.touched().is_empty());
    assert!(session.available_cities().is_empty());
    assert!(!session.city_input_enabled());
    assert_eq!(session.states().len(), 6);
}

#[test]
fn typing_clears_error_without_revalidating() {
    let mut session = FormSession::new();
    session.on_blur(Field::FirstName);
    assert_eq!(
        session.visible_error(Field::FirstName),
        Some("This field is required")
    );
    session.on_field_change(Field::FirstName, "A");
    assert_eq!(session.errors().get(Field::FirstName), None);
    session.on_blur(Field::FirstName);
    assert_eq!(
        session.visible_error(Field::FirstName),
        Some("Must be at least 2 characters")
    );
}

#[test]
fn errors_hidden_until_touched() {
    let mut session = FormSession::new();
    session.on_field_change(Field::Pincode, "999999");
    assert_eq!(session.errors().get(Field::Pincode), Some("Invalid pincode"));
    assert_eq!(session.visible_error(Field::Pincode), None);
}

#[test]
fn blur_overwrites_cascade_error() {
    let mut session = FormSession::new();
    session.on_field_change(Field::Pincode, "999999");
    session.on_blur(Field::Pincode);
    assert_eq!(session.visible_error(Field::Pincode), None);
    assert!(session.touched().contains(Field::Pincode));
}

#[test]
fn pincode_fills_and_clears_location_errors() {
    let mut session = FormSession::new();
    session.on_blur(Field::State);
    session.on_blur(Field::City);
    session.on_blur(Field::Pincode);
    assert_eq!(session.errors().len(), 3);

    session.on_field_change(Field::Pincode, "411001");
    assert_eq!(session.record().state, "MH");
    assert_eq!(session.record().city, "pune");
    assert!(session.errors().is_empty());
    assert!(session.city_input_enabled());
    let cities: Vec<&str> = session
        .available_cities()
        .iter()
        .map(|city| city.id.as_str())
        .collect();
    assert_eq!(cities, vec!["mumbai", "pune", "nagpur"]);
}

#[test]
fn partial_pincode_leaves_prior_cascade_error_cleared() {
    let mut session = FormSession::new();
    session.on_field_change(Field::Pincode, "999999");
    session.on_field_change(Field::Pincode, "99999");
    assert_eq!(session.errors().get(Field::Pincode), None);
}

#[test]
fn state_mismatch_defers_focus_until_commit() {
    let mut session = filled_session();
    assert_eq!(session.record().city, "bangalore");

    session.on_field_change(Field::State, "TN");
    assert_eq!(session.record().state, "TN");
    assert!(session.record().city.is_empty());
    assert_eq!(session.pending_advisories(), &[ViewAdvisory::FocusCity]);

    assert_eq!(session.commit_render(), vec![ViewAdvisory::FocusCity]);
    assert!(session.commit_render().is_empty());
}

#[test]
fn state_match_keeps_city_without_advisory() {
    let mut session = filled_session();
    session.on_field_change(Field::State, "KA");
    assert_eq!(session.record().city, "bangalore");
    assert!(session.commit_render().is_empty());
}

#[test]
fn state_change_drops_unknown_city_and_clears_state_error() {
    let mut session = FormSession::new();
    session.on_field_change(Field::City, "atlantis");
    session.on_blur(Field::State);
    assert_eq!(session.visible_error(Field::State), Some("State is required"));
    session.on_field_change(Field::State, "UP");
    assert!(session.record().city.is_empty());
    assert_eq!(session.errors().get(Field::State), None);
    assert_eq!(session.commit_render().len(), 1);
}

#[test]
fn city_selection_overrides_state_and_pincode() {
    let mut session = filled_session();
    session.on_field_change(Field::City, "kolkata");
    assert_eq!(session.record().state, "WB");
    assert_eq!(session.record().pincode, "700001");

    let snapshot = session.record().clone();
    session.on_field_change(Field::City, "kolkata");
    assert_eq!(session.record(), &snapshot);
}

#[test]
fn city_selection_clears_location_errors() {
    let mut session = FormSession::new();
    session.on_blur(Field::Pincode);
    session.on_blur(Field::State);
    session.on_blur(Field::City);
    assert_eq!(session.errors().len(), 3);

    session.on_field_change(Field::City, "kolkata");
    assert!(session.errors().is_empty());
    assert_eq!(session.visible_error(Field::Pincode), None);
    assert_eq!(session.visible_error(Field::State), None);
}

#[test]
fn state_mismatch_leaves_unrelated_errors() {
    let mut session = filled_session();
    session.on_field_change(Field::Pincode, "560");
    session.on_blur(Field::Pincode);
    assert_eq!(session.errors().get(Field::Pincode), Some("Must be 6 digits"));

    session.on_field_change(Field::State, "DL");
    assert!(session.record().city.is_empty());
    assert_eq!(session.errors().get(Field::City), None);
    assert_eq!(session.errors().get(Field::Pincode), Some("Must be 6 digits"));
    assert_eq!(session.commit_render(), vec![ViewAdvisory::FocusCity]);
}

#[test]
fn empty_form_submission_rejects_every_field() {
    let mut session = FormSession::new();
    let outcome = session.submit();
    let SubmitOutcome::Rejected(errors) = &outcome else {
        panic!("expected rejection, got {outcome:?}");
    };
    assert_eq!(errors.len(), 5);
    assert_eq!(errors.get(Field::FirstName), Some("This field is required"));
    assert_eq!(errors.get(Field::LastName), Some("This field is required"));
    assert_eq!(errors.get(Field::Pincode), Some("Pincode is required"));
    assert_eq!(errors.get(Field::State), Some("State is required"));
    assert_eq!(errors.get(Field::City), Some("City is required"));
    assert!(Field::ALL.iter().all(|field| session.touched().contains(*field)));
    insta::assert_json_snapshot!("rejected_empty_form", outcome);
}

#[test]
fn valid_submission_resolves_display_names() {
    let mut session = filled_session();
    let outcome = session.submit();
    assert!(outcome.is_accepted());
    let SubmitOutcome::Accepted(address) = &outcome else {
        unreachable!();
    };
    assert_eq!(address.state_name.as_deref(), Some("Karnataka"));
    assert_eq!(address.city_name.as_deref(), Some("Bangalore"));
    assert!(session.errors().is_empty());
    insta::assert_json_snapshot!("accepted_submission", outcome);
}

#[test]
fn submission_ignores_stale_cascade_errors() {
    let mut session = filled_session();
    session.on_field_change(Field::Pincode, "999999");
    assert_eq!(session.errors().get(Field::Pincode), Some("Invalid pincode"));
    // The format is valid, so the fresh pass accepts the record as-is.
    let outcome = session.submit();
    assert!(outcome.is_accepted());
}

#[test]
fn reset_returns_to_empty_form() {
    let mut session = filled_session();
    session.on_field_change(Field::State, "DL");
    session.submit();
    session.reset();
    assert_eq!(session.record(), &FormRecord::default());
    assert!(session.errors().is_empty());
    assert!(session.touched().is_empty());
    assert!(session.pending_advisories().is_empty());
}

#[test]
fn session_over_custom_index() {
    let dataset = ReferenceDataset::new(
        vec![State {
            id: "GA".to_string(),
            name: "Goa".to_string(),
        }],
        vec![City {
            id: "panaji".to_string(),
            name: "Panaji".to_string(),
            state_id: "GA".to_string(),
            pincode: "403001".to_string(),
        }],
        vec![PostalEntry {
            pincode: "403001".to_string(),
            state_id: "GA".to_string(),
            city_id: "panaji".to_string(),
        }],
    )
    .expect("dataset");
    let index = LookupIndex::new(&dataset);
    let mut session = FormSession::with_index(&index);
    session.on_field_change(Field::Pincode, "403521");
    assert_eq!(session.record().city, "panaji");
    session.on_field_change(Field::Pincode, "400001");
    assert_eq!(session.errors().get(Field::Pincode), Some("Invalid pincode"));
}
