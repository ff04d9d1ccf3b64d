//! Country → state → city option resolution.
//!
//! The resolver is stateless. It never clears dependent selections; that contract
//! belongs to the adapter (see [`crate::core::form::FormState::set`]). An empty
//! option list means the dependent control must be disabled.

use crate::core::keys::{LocationKey, LocationOption, title_case};
use crate::core::reference::{ReferenceData, StateEntry};

/// Every known country, in declaration order.
pub fn countries(data: &ReferenceData) -> Vec<LocationOption> {
    data.countries()
        .iter()
        .map(|country| LocationOption {
            key: country.key.clone(),
            label: country.name.clone(),
        })
        .collect()
}

/// States of `country` in declaration order; empty for an unknown country.
pub fn states_for(data: &ReferenceData, country: &str) -> Vec<LocationOption> {
    let Some(country) = data.country(country) else {
        return Vec::new();
    };
    country
        .states
        .iter()
        .map(|state| LocationOption {
            key: state.key.clone(),
            label: state_label(state),
        })
        .collect()
}

/// Cities of `state` within `country` in declaration order.
///
/// Empty when either key is unknown or the state lists no cities.
pub fn cities_for(data: &ReferenceData, country: &str, state: &str) -> Vec<LocationOption> {
    let Some(state) = data.country(country).and_then(|country| country.state(state)) else {
        return Vec::new();
    };
    state
        .cities
        .iter()
        .map(|city| LocationOption {
            key: LocationKey::from_display(city),
            label: city.clone(),
        })
        .collect()
}

/// Display label for a state.
///
/// The hierarchy stores no state names, so the label is the title-cased name of
/// the state's first city (California shows as "Los Angeles"). A state without
/// cities falls back to its title-cased key.
pub fn state_label(state: &StateEntry) -> String {
    match state.cities.first() {
        Some(city) => title_case(city),
        None => title_case(state.key.as_str()),
    }
}

/// Input hint for the phone field once a known country is selected.
pub fn phone_placeholder(data: &ReferenceData, country: &str) -> Option<String> {
    data.dial_code(country)
        .map(|code| format!("e.g., {code}1234567890"))
}
