//! Form-wide validity in the fixed field order.

use serde::Serialize;

use crate::core::form::FormState;
use crate::core::reference::ReferenceData;
use crate::core::types::Field;
use crate::core::validators::validate_field;

/// Outcome of running every validator over one snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationSummary {
    pub valid: bool,
    /// Failing fields in [`Field::VALIDATED`] order.
    pub failing_fields: Vec<Field>,
}

impl ValidationSummary {
    /// Field the adapter should scroll to.
    pub fn first_failing(&self) -> Option<Field> {
        self.failing_fields.first().copied()
    }

    /// Consolidated message shown when a submit is attempted while invalid.
    pub fn fix_message(&self) -> Option<String> {
        if self.valid {
            return None;
        }
        let labels: Vec<&str> = self
            .failing_fields
            .iter()
            .map(|field| field.label())
            .collect();
        Some(format!(
            "Please fix the following fields: {}",
            labels.join(", ")
        ))
    }
}

/// Run all twelve validators in fixed order. Never fails.
pub fn validate_all(form: &FormState, data: &ReferenceData) -> ValidationSummary {
    let failing_fields: Vec<Field> = Field::VALIDATED
        .into_iter()
        .filter(|field| {
            validate_field(*field, form, data).is_some_and(|result| !result.is_valid())
        })
        .collect();
    ValidationSummary {
        valid: failing_fields.is_empty(),
        failing_fields,
    }
}

pub fn can_submit(form: &FormState, data: &ReferenceData) -> bool {
    validate_all(form, data).valid
}
