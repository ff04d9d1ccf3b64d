//! Everything an adapter renders, recomputed from one snapshot.

use serde::Serialize;

use crate::core::aggregate::{ValidationSummary, validate_all};
use crate::core::cascade::{cities_for, phone_placeholder, states_for};
use crate::core::form::FormState;
use crate::core::keys::LocationOption;
use crate::core::reference::ReferenceData;
use crate::core::strength::classify_strength;
use crate::core::types::{Field, StrengthTier, ValidationResult};
use crate::core::validators::validate_field;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldReport {
    pub field: Field,
    pub result: ValidationResult,
}

/// Derived view of a snapshot. Pure function of `(FormState, ReferenceData)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DerivedState {
    /// One entry per validated field, in fixed order.
    pub fields: Vec<FieldReport>,
    pub summary: ValidationSummary,
    /// Present only while the password validator passes; `None` renders as a
    /// neutral meter.
    pub strength: Option<StrengthTier>,
    pub states: Vec<LocationOption>,
    pub cities: Vec<LocationOption>,
    pub state_enabled: bool,
    pub city_enabled: bool,
    pub phone_placeholder: Option<String>,
    pub can_submit: bool,
}

impl DerivedState {
    pub fn result(&self, field: Field) -> Option<&ValidationResult> {
        self.fields
            .iter()
            .find(|report| report.field == field)
            .map(|report| &report.result)
    }
}

/// Recompute derived state after any field change.
pub fn derive_state(form: &FormState, data: &ReferenceData) -> DerivedState {
    let fields: Vec<FieldReport> = Field::VALIDATED
        .into_iter()
        .filter_map(|field| {
            validate_field(field, form, data).map(|result| FieldReport { field, result })
        })
        .collect();
    let summary = validate_all(form, data);

    let password_ok = fields
        .iter()
        .any(|report| report.field == Field::Password && report.result.is_valid());
    let strength = password_ok.then(|| classify_strength(&form.password));

    let states = form
        .selected_country()
        .map(|country| states_for(data, country))
        .unwrap_or_default();
    let cities = match (form.selected_country(), form.selected_state()) {
        (Some(country), Some(state)) => cities_for(data, country, state),
        _ => Vec::new(),
    };

    DerivedState {
        can_submit: summary.valid,
        state_enabled: !states.is_empty(),
        city_enabled: !cities.is_empty(),
        phone_placeholder: form
            .selected_country()
            .and_then(|country| phone_placeholder(data, country)),
        fields,
        summary,
        strength,
        states,
        cities,
    }
}
