//! Integration tests for the signup form preset
//!
//! Exercises the full cycle the form goes through: edits, dynamic list
//! changes, and submission, asserting on the transformed output and the
//! per-path error messages.

use formwork::signup::{default_tech_entry, signup_form};
use formwork::{FieldPath, Value};
use pretty_assertions::assert_eq;
use rstest::rstest;

/// Store filled with values that pass every rule.
fn valid_store() -> formwork::FormStore {
    let mut store = signup_form();
    store.set_value("name", "  ana  maria ");
    store.set_value("email", "Ana@ROCKETSEAT.com.br");
    store.set_value("password", "123456");
    for (i, (title, knowledge)) in [("rust", 80), ("react", 55)].iter().enumerate() {
        store.append_entry("techs", default_tech_entry()).unwrap();
        store.set_value(format!("techs.{}.title", i), *title);
        store.set_value(format!("techs.{}.knowledge", i), *knowledge);
    }
    store
}

#[test]
fn valid_submission_yields_transformed_values() {
    let mut store = valid_store();
    let mut submitted = None;
    let accepted = store.submit(|values| submitted = Some(values.clone())).unwrap();

    assert!(accepted);
    assert!(store.errors().is_empty());

    let values = submitted.expect("success handler not invoked");
    assert_eq!(
        values.at(&FieldPath::from("name")),
        Some(&Value::from("Ana Maria"))
    );
    assert_eq!(
        values.at(&FieldPath::from("email")),
        Some(&Value::from("ana@rocketseat.com.br"))
    );
    assert_eq!(
        values.at(&FieldPath::from("techs.0.title")),
        Some(&Value::from("rust"))
    );
    assert_eq!(
        values.at(&FieldPath::from("techs.1.knowledge")),
        Some(&Value::from(55))
    );
}

#[test]
fn submission_output_serializes_to_json() {
    let mut store = valid_store();
    let mut rendered = String::new();
    store.submit(|values| rendered = formwork::render_submission(values)).unwrap();
    assert!(rendered.contains("\"Ana Maria\""));
    assert!(rendered.contains("\"ana@rocketseat.com.br\""));
}

#[rstest]
#[case("x@other.com")]
#[case("X@OTHER.com")]
#[case("ana@rocketseat.com")]
fn emails_outside_the_domain_fail_at_the_email_path(#[case] email: &str) {
    let mut store = valid_store();
    store.set_value("email", email);

    let mut called = false;
    let accepted = store.submit(|_| called = true).unwrap();
    assert!(!accepted);
    assert!(!called);
    assert_eq!(
        store.error_at("email"),
        Some("E-mail must belong to rocketseat.com.br")
    );
}

#[test]
fn malformed_email_fails_on_format_before_domain() {
    let mut store = valid_store();
    store.set_value("email", "not-an-email");
    store.submit(|_| {}).unwrap();
    assert_eq!(store.error_at("email"), Some("Invalid e-mail format"));
}

#[rstest]
#[case("12345", false)]
#[case("123456", true)]
fn password_needs_six_characters(#[case] password: &str, #[case] ok: bool) {
    let mut store = valid_store();
    store.set_value("password", password);

    let accepted = store.submit(|_| {}).unwrap();
    assert_eq!(accepted, ok);
    if !ok {
        assert_eq!(
            store.error_at("password"),
            Some("Password must be at least 6 characters")
        );
    }
}

#[test]
fn fewer_than_two_techs_fails_at_the_collection_path() {
    let mut store = signup_form();
    store.set_value("name", "ana");
    store.set_value("email", "ana@rocketseat.com.br");
    store.set_value("password", "123456");
    store.append_entry("techs", default_tech_entry()).unwrap();
    store.set_value("techs.0.title", "rust");
    store.set_value("techs.0.knowledge", 80);

    let accepted = store.submit(|_| {}).unwrap();
    assert!(!accepted);
    assert_eq!(store.error_at("techs"), Some("Add at least 2 technologies"));
    // The lone entry is itself valid, so no element path errs.
    assert_eq!(store.error_at("techs.0.title"), None);
    assert_eq!(store.error_at("techs.0.knowledge"), None);
}

#[test]
fn fresh_entries_err_at_their_own_paths() {
    let mut store = valid_store();
    store.append_entry("techs", default_tech_entry()).unwrap();

    store.submit(|_| {}).unwrap();
    assert_eq!(store.error_at("techs"), None);
    assert_eq!(store.error_at("techs.2.title"), Some("Title is required"));
    assert_eq!(
        store.error_at("techs.2.knowledge"),
        Some("Knowledge must be between 1 and 100")
    );
}

#[test]
fn append_then_remove_restores_the_collection() {
    let mut store = valid_store();
    let before = store.values().clone();
    let ids_before: Vec<_> = store.entry_ids("techs").to_vec();

    let added = store.append_entry("techs", default_tech_entry()).unwrap();
    store.remove_entry("techs", added);

    assert_eq!(store.values(), &before);
    assert_eq!(store.entry_ids("techs"), ids_before.as_slice());
}

#[test]
fn resubmitting_unchanged_input_yields_identical_errors() {
    let mut store = signup_form();
    store.set_value("email", "x@other.com");

    store.submit(|_| {}).unwrap();
    let first = store.errors().clone();
    store.submit(|_| {}).unwrap();
    assert_eq!(store.errors(), &first);
}

#[test]
fn fixing_one_field_clears_only_its_error() {
    let mut store = valid_store();
    store.set_value("password", "123");
    store.set_value("email", "x@other.com");

    store.submit(|_| {}).unwrap();
    assert!(store.error_at("password").is_some());
    assert!(store.error_at("email").is_some());

    store.set_value("password", "123456");
    store.submit(|_| {}).unwrap();
    assert_eq!(store.error_at("password"), None);
    assert_eq!(
        store.error_at("email"),
        Some("E-mail must belong to rocketseat.com.br")
    );
}
