//! Shared deterministic types for the registration engine.
//!
//! These types define stable contracts between the engine and its adapters. They
//! must not depend on external state or I/O.

use serde::{Deserialize, Serialize};

/// Closed set of registration form fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    FirstName,
    LastName,
    Email,
    Phone,
    Age,
    Gender,
    Address,
    Country,
    State,
    City,
    Password,
    ConfirmPassword,
    Terms,
}

/// Shape of the raw value a field carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Choice,
    Checkbox,
    Select,
}

impl Field {
    /// Every field, in form layout order.
    pub const ALL: [Field; 13] = [
        Field::FirstName,
        Field::LastName,
        Field::Email,
        Field::Phone,
        Field::Age,
        Field::Gender,
        Field::Address,
        Field::Country,
        Field::State,
        Field::City,
        Field::Password,
        Field::ConfirmPassword,
        Field::Terms,
    ];

    /// Fields that carry a validator, in the fixed aggregation order.
    ///
    /// `Address` is optional free text and is never validated.
    pub const VALIDATED: [Field; 12] = [
        Field::FirstName,
        Field::LastName,
        Field::Email,
        Field::Phone,
        Field::Age,
        Field::Gender,
        Field::Country,
        Field::State,
        Field::City,
        Field::Password,
        Field::ConfirmPassword,
        Field::Terms,
    ];

    /// Wire name used in snapshots and adapter element ids.
    pub fn as_str(self) -> &'static str {
        match self {
            Field::FirstName => "firstName",
            Field::LastName => "lastName",
            Field::Email => "email",
            Field::Phone => "phone",
            Field::Age => "age",
            Field::Gender => "gender",
            Field::Address => "address",
            Field::Country => "country",
            Field::State => "state",
            Field::City => "city",
            Field::Password => "password",
            Field::ConfirmPassword => "confirmPassword",
            Field::Terms => "terms",
        }
    }

    /// Human-readable label used in error text and summaries.
    pub fn label(self) -> &'static str {
        match self {
            Field::FirstName => "First Name",
            Field::LastName => "Last Name",
            Field::Email => "Email",
            Field::Phone => "Phone Number",
            Field::Age => "Age",
            Field::Gender => "Gender",
            Field::Address => "Address",
            Field::Country => "Country",
            Field::State => "State",
            Field::City => "City",
            Field::Password => "Password",
            Field::ConfirmPassword => "Confirm Password",
            Field::Terms => "Terms & Conditions",
        }
    }

    pub fn kind(self) -> FieldKind {
        match self {
            Field::Gender => FieldKind::Choice,
            Field::Terms => FieldKind::Checkbox,
            Field::Country | Field::State | Field::City => FieldKind::Select,
            _ => FieldKind::Text,
        }
    }

    /// Look a field up by its wire name.
    pub fn from_name(name: &str) -> Option<Field> {
        Field::ALL.into_iter().find(|field| field.as_str() == name)
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fixed radio set for the gender field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    Other,
}

/// Outcome of a single field validator.
///
/// `message` is empty iff `valid` is true; the constructors are the only way to
/// build one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    valid: bool,
    message: String,
}

impl ValidationResult {
    pub fn ok() -> Self {
        Self {
            valid: true,
            message: String::new(),
        }
    }

    pub fn fail(message: impl Into<String>) -> Self {
        let message = message.into();
        debug_assert!(!message.is_empty(), "failure message must not be empty");
        Self {
            valid: false,
            message,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.valid
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Coarse password complexity classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StrengthTier {
    Weak,
    Medium,
    Strong,
}

impl StrengthTier {
    pub fn as_str(self) -> &'static str {
        match self {
            StrengthTier::Weak => "weak",
            StrengthTier::Medium => "medium",
            StrengthTier::Strong => "strong",
        }
    }
}
