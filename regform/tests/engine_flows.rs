//! End-to-end flows through the public engine API: an adapter relays field
//! changes, recomputes derived state and drives the submission gate.

use regform::core::validators::{
    validate_age, validate_confirm_password, validate_email, validate_first_name,
    validate_last_name, validate_phone,
};
use regform::test_support::{CountingProcessing, valid_form};
use regform::{
    Field, FieldValue, FormState, GateState, Gender, ReferenceData, StrengthTier, SubmissionGate,
    SubmitRejection, can_submit, cities_for, classify_strength, derive_state, states_for,
    validate_all,
};

fn data() -> &'static ReferenceData {
    ReferenceData::builtin()
}

#[test]
fn short_names_are_invalid() {
    for value in ["", " ", "J", "  J  ", "\tx\n"] {
        assert!(!validate_first_name(value).is_valid(), "{value:?}");
        assert!(!validate_last_name(value).is_valid(), "{value:?}");
    }
}

#[test]
fn email_examples() {
    assert!(validate_email("a@b.com", data()).is_valid());
    let disposable = validate_email("test@tempmail.com", data());
    assert!(disposable.message().contains("Disposable email domains"));
    let malformed = validate_email("not-an-email", data());
    assert_eq!(malformed.message(), "Please enter a valid email address");
}

#[test]
fn phone_examples_for_india() {
    assert!(validate_phone("+911234567890", Some("india"), data()).is_valid());
    let result = validate_phone("1234567890", Some("india"), data());
    assert!(!result.is_valid());
    assert!(result.message().contains("+91"));
}

#[test]
fn age_examples() {
    for bad in ["0", "121", "abc"] {
        assert!(!validate_age(bad).is_valid(), "{bad}");
    }
    for good in ["", "1", "120"] {
        assert!(validate_age(good).is_valid(), "{good:?}");
    }
}

#[test]
fn strength_examples() {
    assert_eq!(classify_strength(""), StrengthTier::Weak);
    assert_eq!(classify_strength("password"), StrengthTier::Weak);
    assert_eq!(classify_strength("Password123"), StrengthTier::Medium);
    assert_eq!(classify_strength("StrongPassword123!@#"), StrengthTier::Strong);
}

#[test]
fn confirm_password_is_case_sensitive() {
    assert!(!validate_confirm_password("Pass1", "pass1").is_valid());
}

#[test]
fn cascade_examples() {
    assert!(!states_for(data(), "usa").is_empty());
    assert!(states_for(data(), "unknownland").is_empty());

    let labels: Vec<String> = cities_for(data(), "usa", "california")
        .into_iter()
        .map(|option| option.label)
        .collect();
    assert_eq!(labels, vec!["Los Angeles", "San Francisco", "San Diego"]);
    assert!(cities_for(data(), "usa", "nonexistent").is_empty());
}

#[test]
fn emptying_any_required_field_reports_exactly_that_field() {
    let summary = validate_all(&valid_form(), data());
    assert!(summary.valid);
    assert!(summary.failing_fields.is_empty());

    let empties: Vec<(Field, FieldValue)> = vec![
        (Field::FirstName, FieldValue::Text(String::new())),
        (Field::LastName, FieldValue::Text(String::new())),
        (Field::Email, FieldValue::Text(String::new())),
        (Field::Phone, FieldValue::Text(String::new())),
        (Field::Gender, FieldValue::Choice(None)),
        (Field::Country, FieldValue::Select(None)),
        (Field::State, FieldValue::Select(None)),
        (Field::City, FieldValue::Select(None)),
        (Field::Password, FieldValue::Text(String::new())),
        (Field::ConfirmPassword, FieldValue::Text(String::new())),
        (Field::Terms, FieldValue::Checked(false)),
    ];
    for (field, empty) in empties {
        let mut form = valid_form();
        form.set(field, empty).expect("set");
        let summary = validate_all(&form, data());
        assert!(!summary.valid, "{field}");
        match field {
            // Country clears state and city; password breaks its confirmation.
            Field::Country | Field::State | Field::Password => {
                assert_eq!(summary.failing_fields.first(), Some(&field), "{field}");
            }
            _ => assert_eq!(summary.failing_fields, vec![field], "{field}"),
        }
        // Fixed order: the list is sorted by position in the validated order.
        let positions: Vec<usize> = summary
            .failing_fields
            .iter()
            .map(|failing| {
                Field::VALIDATED
                    .iter()
                    .position(|candidate| candidate == failing)
                    .expect("validated field")
            })
            .collect();
        assert!(positions.windows(2).all(|pair| pair[0] < pair[1]), "{field}");
    }
}

#[test]
fn emptying_password_also_breaks_confirmation() {
    let mut form = valid_form();
    form.password = String::new();
    assert_eq!(
        validate_all(&form, data()).failing_fields,
        vec![Field::Password, Field::ConfirmPassword]
    );
}

#[test]
fn missing_last_name_blocks_submit() {
    let mut form = valid_form();
    form.first_name = "John".to_string();
    form.last_name = String::new();

    assert!(!can_submit(&form, data()));
    assert_eq!(
        validate_all(&form, data()).failing_fields,
        vec![Field::LastName]
    );
}

#[test]
fn country_change_invalidates_location_until_reselected() {
    let mut form = valid_form();
    form.set(Field::Country, FieldValue::Select(Some("india".to_string())))
        .expect("country");
    form.set(Field::Phone, FieldValue::Text("+911234567890".to_string()))
        .expect("phone");

    let derived = derive_state(&form, data());
    assert_eq!(
        derived.summary.failing_fields,
        vec![Field::State, Field::City]
    );
    assert!(derived.state_enabled);
    assert!(!derived.city_enabled);

    let first_state = derived.states[0].key.to_string();
    form.set(Field::State, FieldValue::Select(Some(first_state)))
        .expect("state");
    let derived = derive_state(&form, data());
    assert!(derived.city_enabled);
    assert_eq!(derived.summary.failing_fields, vec![Field::City]);

    let first_city = derived.cities[0].key.to_string();
    form.set(Field::City, FieldValue::Select(Some(first_city)))
        .expect("city");
    assert!(derive_state(&form, data()).can_submit);
}

#[test]
fn rapid_double_submit_completes_once() {
    let mut gate = SubmissionGate::new();
    let mut form = valid_form();

    let ticket = gate.begin(&form, data()).expect("first submit");
    let second = gate.begin(&form, data());
    assert_eq!(second.expect_err("in flight"), SubmitRejection::InFlight);
    assert_eq!(gate.state(), GateState::Submitting);

    gate.complete(ticket, &mut form).expect("complete");
    assert_eq!(gate.completed(), 1);
    assert_eq!(gate.state(), GateState::Idle);
    assert_eq!(form, FormState::default());
}

#[test]
fn full_registration_flow() {
    let mut form = FormState::default();
    let relay: Vec<(Field, FieldValue)> = vec![
        (Field::FirstName, FieldValue::Text("Jane".to_string())),
        (Field::LastName, FieldValue::Text("Smith".to_string())),
        (Field::Email, FieldValue::Text("jane.smith@example.com".to_string())),
        (Field::Phone, FieldValue::Text("+11234567890".to_string())),
        (Field::Age, FieldValue::Text("28".to_string())),
        (Field::Gender, FieldValue::Choice(Some(Gender::Female))),
        (Field::Address, FieldValue::Text("456 Oak Avenue, Suite 200".to_string())),
        (Field::Country, FieldValue::Select(Some("usa".to_string()))),
        (Field::State, FieldValue::Select(Some("newyork".to_string()))),
        (Field::City, FieldValue::Select(Some("buffalo".to_string()))),
        (Field::Password, FieldValue::Text("StrongPassword123!@#".to_string())),
        (Field::ConfirmPassword, FieldValue::Text("StrongPassword123!@#".to_string())),
    ];
    for (field, value) in relay {
        form.set(field, value).expect("relay");
        assert!(!derive_state(&form, data()).can_submit, "{field}");
    }

    form.set(Field::Terms, FieldValue::Checked(true)).expect("terms");
    let derived = derive_state(&form, data());
    assert!(derived.can_submit);
    assert_eq!(derived.strength, Some(StrengthTier::Strong));

    let processing = CountingProcessing::default();
    let mut gate = SubmissionGate::new();
    let receipt = gate.submit(&mut form, data(), &processing).expect("submit");
    assert_eq!(receipt.submission, 1);
    assert_eq!(processing.calls(), 1);
    assert_eq!(form, FormState::default());
    assert!(!derive_state(&form, data()).can_submit);
}
