//! Form snapshot owned by the adapter.
//!
//! The engine only ever reads a `FormState`. Mutation helpers live here so that
//! adapters share one implementation of the cascade reset contract: a changed
//! country clears state and city, a changed state clears city.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::types::{Field, FieldKind, Gender};

/// Current raw values of every registration field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FormState {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    /// Numeric field carried as raw text.
    pub age: String,
    pub gender: Option<Gender>,
    pub address: String,
    pub country: Option<String>,
    pub state: Option<String>,
    pub city: Option<String>,
    pub password: String,
    pub confirm_password: String,
    pub terms: bool,
}

/// One field's raw value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Choice(Option<Gender>),
    Checked(bool),
    Select(Option<String>),
}

impl FieldValue {
    pub fn kind(&self) -> FieldKind {
        match self {
            FieldValue::Text(_) => FieldKind::Text,
            FieldValue::Choice(_) => FieldKind::Choice,
            FieldValue::Checked(_) => FieldKind::Checkbox,
            FieldValue::Select(_) => FieldKind::Select,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("field '{field}' expects a {expected:?} value, got {actual:?}")]
pub struct FieldKindMismatch {
    pub field: Field,
    pub expected: FieldKind,
    pub actual: FieldKind,
}

impl FormState {
    /// Reset every field to empty, in place.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Selected country key, treating an empty selection as none.
    pub fn selected_country(&self) -> Option<&str> {
        selected(&self.country)
    }

    pub fn selected_state(&self) -> Option<&str> {
        selected(&self.state)
    }

    pub fn selected_city(&self) -> Option<&str> {
        selected(&self.city)
    }

    /// Current value of `field`.
    pub fn value(&self, field: Field) -> FieldValue {
        match field {
            Field::FirstName => FieldValue::Text(self.first_name.clone()),
            Field::LastName => FieldValue::Text(self.last_name.clone()),
            Field::Email => FieldValue::Text(self.email.clone()),
            Field::Phone => FieldValue::Text(self.phone.clone()),
            Field::Age => FieldValue::Text(self.age.clone()),
            Field::Gender => FieldValue::Choice(self.gender),
            Field::Address => FieldValue::Text(self.address.clone()),
            Field::Country => FieldValue::Select(self.country.clone()),
            Field::State => FieldValue::Select(self.state.clone()),
            Field::City => FieldValue::Select(self.city.clone()),
            Field::Password => FieldValue::Text(self.password.clone()),
            Field::ConfirmPassword => FieldValue::Text(self.confirm_password.clone()),
            Field::Terms => FieldValue::Checked(self.terms),
        }
    }

    /// Apply a field change relayed by the adapter.
    ///
    /// Changing the country invalidates state and city; changing the state
    /// invalidates city. Re-selecting the current value leaves dependents alone.
    pub fn set(&mut self, field: Field, value: FieldValue) -> Result<(), FieldKindMismatch> {
        let actual = value.kind();
        match (field, value) {
            (Field::FirstName, FieldValue::Text(text)) => self.first_name = text,
            (Field::LastName, FieldValue::Text(text)) => self.last_name = text,
            (Field::Email, FieldValue::Text(text)) => self.email = text,
            (Field::Phone, FieldValue::Text(text)) => self.phone = text,
            (Field::Age, FieldValue::Text(text)) => self.age = text,
            (Field::Address, FieldValue::Text(text)) => self.address = text,
            (Field::Password, FieldValue::Text(text)) => self.password = text,
            (Field::ConfirmPassword, FieldValue::Text(text)) => self.confirm_password = text,
            (Field::Gender, FieldValue::Choice(choice)) => self.gender = choice,
            (Field::Terms, FieldValue::Checked(checked)) => self.terms = checked,
            (Field::Country, FieldValue::Select(key)) => {
                if self.country != key {
                    self.country = key;
                    self.state = None;
                    self.city = None;
                }
            }
            (Field::State, FieldValue::Select(key)) => {
                if self.state != key {
                    self.state = key;
                    self.city = None;
                }
            }
            (Field::City, FieldValue::Select(key)) => self.city = key,
            _ => {
                return Err(FieldKindMismatch {
                    field,
                    expected: field.kind(),
                    actual,
                });
            }
        }
        Ok(())
    }
}

fn selected(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|key| !key.is_empty())
}
