//! Per-field validation rules.
//!
//! Every validator is pure: it reads only the values passed in and returns a
//! [`ValidationResult`]. Malformed input is reported as an invalid result, never
//! as an error.

use std::sync::LazyLock;

use regex::Regex;

use crate::core::cascade::{cities_for, states_for};
use crate::core::form::FormState;
use crate::core::reference::ReferenceData;
use crate::core::types::{Field, Gender, ValidationResult};

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

/// Subscriber number after a known dial code.
static NATIONAL_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[0-9]{7,12}$").unwrap());

/// Fallback when no country (or an unknown one) is selected.
static INTERNATIONAL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+?[0-9]{7,15}$").unwrap());

pub const MIN_NAME_CHARS: usize = 2;
pub const MIN_PASSWORD_CHARS: usize = 8;
pub const MIN_AGE: i64 = 1;
pub const MAX_AGE: i64 = 120;

/// Run the validator for `field` against a snapshot.
///
/// Returns `None` for fields without a validator (address).
pub fn validate_field(
    field: Field,
    form: &FormState,
    data: &ReferenceData,
) -> Option<ValidationResult> {
    let result = match field {
        Field::FirstName => validate_first_name(&form.first_name),
        Field::LastName => validate_last_name(&form.last_name),
        Field::Email => validate_email(&form.email, data),
        Field::Phone => validate_phone(&form.phone, form.selected_country(), data),
        Field::Age => validate_age(&form.age),
        Field::Gender => validate_gender(form.gender),
        Field::Address => return None,
        Field::Country => validate_country(form.selected_country(), data),
        Field::State => validate_state(form.selected_country(), form.selected_state(), data),
        Field::City => validate_city(
            form.selected_country(),
            form.selected_state(),
            form.selected_city(),
            data,
        ),
        Field::Password => validate_password(&form.password),
        Field::ConfirmPassword => {
            validate_confirm_password(&form.confirm_password, &form.password)
        }
        Field::Terms => validate_terms(form.terms),
    };
    Some(result)
}

pub fn validate_first_name(value: &str) -> ValidationResult {
    validate_name(Field::FirstName, value)
}

pub fn validate_last_name(value: &str) -> ValidationResult {
    validate_name(Field::LastName, value)
}

fn validate_name(field: Field, value: &str) -> ValidationResult {
    let value = value.trim();
    if value.is_empty() {
        return ValidationResult::fail(format!("{} is required", field.label()));
    }
    if value.chars().count() < MIN_NAME_CHARS {
        return ValidationResult::fail(format!(
            "{} must be at least {MIN_NAME_CHARS} characters",
            field.label()
        ));
    }
    ValidationResult::ok()
}

pub fn validate_email(value: &str, data: &ReferenceData) -> ValidationResult {
    let value = value.trim();
    if value.is_empty() {
        return ValidationResult::fail("Email is required");
    }
    if !EMAIL_RE.is_match(value) {
        return ValidationResult::fail("Please enter a valid email address");
    }
    let domain = value.split_once('@').map(|(_, domain)| domain).unwrap_or_default();
    if data.is_disposable_domain(domain) {
        return ValidationResult::fail("Disposable email domains are not allowed");
    }
    ValidationResult::ok()
}

/// Validate a phone number against the selected country's dial code.
pub fn validate_phone(
    value: &str,
    country: Option<&str>,
    data: &ReferenceData,
) -> ValidationResult {
    let value = value.trim();
    if value.is_empty() {
        return ValidationResult::fail("Phone Number is required");
    }

    match country.and_then(|country| data.dial_code(country)) {
        Some(code) => {
            let Some(rest) = value.strip_prefix(code) else {
                return ValidationResult::fail(format!("Phone number must start with {code}"));
            };
            if !NATIONAL_RE.is_match(&strip_whitespace(rest)) {
                return ValidationResult::fail(format!(
                    "Please enter a valid phone number: {code} followed by 7-12 digits"
                ));
            }
        }
        None => {
            if !INTERNATIONAL_RE.is_match(&strip_whitespace(value)) {
                return ValidationResult::fail("Please enter a valid phone number");
            }
        }
    }
    ValidationResult::ok()
}

/// Optional; when present its leading integer must lie in `[MIN_AGE, MAX_AGE]`.
///
/// Trailing text after the digits is ignored, so `"12.5"` reads as 12.
pub fn validate_age(value: &str) -> ValidationResult {
    let value = value.trim();
    if value.is_empty() {
        return ValidationResult::ok();
    }
    match leading_integer(value) {
        Some(age) if (MIN_AGE..=MAX_AGE).contains(&age) => ValidationResult::ok(),
        _ => ValidationResult::fail(format!("Age must be between {MIN_AGE} and {MAX_AGE}")),
    }
}

/// Optional sign followed by at least one ASCII digit. Overflow saturates.
fn leading_integer(value: &str) -> Option<i64> {
    let (negative, rest) = match value.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, value.strip_prefix('+').unwrap_or(value)),
    };
    let digits = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }
    let magnitude = rest[..digits].parse::<i64>().unwrap_or(i64::MAX);
    Some(if negative { -magnitude } else { magnitude })
}

pub fn validate_gender(value: Option<Gender>) -> ValidationResult {
    match value {
        Some(_) => ValidationResult::ok(),
        None => ValidationResult::fail("Please select a gender"),
    }
}

pub fn validate_country(country: Option<&str>, data: &ReferenceData) -> ValidationResult {
    match country {
        None => ValidationResult::fail("Country is required"),
        Some(key) if data.country(key).is_none() => {
            ValidationResult::fail("Please select a valid country")
        }
        Some(_) => ValidationResult::ok(),
    }
}

/// The valid domain is whatever [`states_for`] offers for the selected country.
pub fn validate_state(
    country: Option<&str>,
    state: Option<&str>,
    data: &ReferenceData,
) -> ValidationResult {
    let Some(state) = state else {
        return ValidationResult::fail("State is required");
    };
    let offered = country
        .map(|country| states_for(data, country))
        .unwrap_or_default();
    if !offered.iter().any(|option| option.key.as_str() == state) {
        return ValidationResult::fail("Please select a valid state");
    }
    ValidationResult::ok()
}

/// The valid domain is whatever [`cities_for`] offers for country and state.
pub fn validate_city(
    country: Option<&str>,
    state: Option<&str>,
    city: Option<&str>,
    data: &ReferenceData,
) -> ValidationResult {
    let Some(city) = city else {
        return ValidationResult::fail("City is required");
    };
    let offered = match (country, state) {
        (Some(country), Some(state)) => cities_for(data, country, state),
        _ => Vec::new(),
    };
    if !offered.iter().any(|option| option.key.as_str() == city) {
        return ValidationResult::fail("Please select a valid city");
    }
    ValidationResult::ok()
}

/// Length only; strength never affects validity.
pub fn validate_password(value: &str) -> ValidationResult {
    if value.is_empty() {
        return ValidationResult::fail("Password is required");
    }
    if value.chars().count() < MIN_PASSWORD_CHARS {
        return ValidationResult::fail(format!(
            "Password must be at least {MIN_PASSWORD_CHARS} characters"
        ));
    }
    ValidationResult::ok()
}

/// Exact, case-sensitive comparison; neither side is trimmed.
pub fn validate_confirm_password(value: &str, password: &str) -> ValidationResult {
    if value.is_empty() {
        return ValidationResult::fail("Please confirm your password");
    }
    if value != password {
        return ValidationResult::fail("Passwords do not match");
    }
    ValidationResult::ok()
}

pub fn validate_terms(checked: bool) -> ValidationResult {
    if checked {
        ValidationResult::ok()
    } else {
        ValidationResult::fail("You must agree to the Terms & Conditions")
    }
}

fn strip_whitespace(value: &str) -> String {
    value.chars().filter(|c| !c.is_whitespace()).collect()
}
