//! Static reference tables: disposable domains, dial codes, location hierarchy.
//!
//! Tables are parsed once from JSON, checked against consistency invariants and
//! never mutated afterwards. The built-in tables are embedded at compile time.

use std::collections::HashSet;
use std::sync::LazyLock;

use anyhow::{Context, Result, anyhow};
use serde::Deserialize;

use crate::core::keys::{LocationKey, is_canonical, normalize};

const BUILTIN_REFERENCE: &str = include_str!("../../data/reference.json");

static BUILTIN: LazyLock<ReferenceData> = LazyLock::new(|| {
    ReferenceData::from_json(BUILTIN_REFERENCE).expect("embedded reference data is valid")
});

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawReference {
    disposable_domains: Vec<String>,
    dial_codes: Vec<RawDialCode>,
    locations: Vec<RawCountry>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawDialCode {
    country: String,
    code: String,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawCountry {
    country: String,
    name: String,
    states: Vec<RawState>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawState {
    key: String,
    cities: Vec<String>,
}

/// Immutable lookup tables consulted by validators and the cascade resolver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceData {
    disposable_domains: Vec<String>,
    countries: Vec<Country>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Country {
    pub key: LocationKey,
    pub name: String,
    pub dial_code: String,
    pub states: Vec<StateEntry>,
}

/// A state and its ordered city display names.
///
/// No display name is stored for the state itself; see
/// [`crate::core::cascade::state_label`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StateEntry {
    pub key: LocationKey,
    pub cities: Vec<String>,
}

impl Country {
    pub fn state(&self, key: &str) -> Option<&StateEntry> {
        self.states.iter().find(|state| state.key.as_str() == key)
    }
}

impl ReferenceData {
    /// Tables embedded in the binary.
    pub fn builtin() -> &'static ReferenceData {
        &BUILTIN
    }

    /// Parse tables from JSON and check their invariants.
    pub fn from_json(raw: &str) -> Result<Self> {
        let parsed: RawReference = serde_json::from_str(raw).context("parse reference data")?;
        let errors = reference_invariants(&parsed);
        if !errors.is_empty() {
            return Err(anyhow!(
                "reference data invariants failed:\n- {}",
                errors.join("\n- ")
            ));
        }
        Ok(Self::from_raw(parsed))
    }

    fn from_raw(raw: RawReference) -> Self {
        let countries = raw
            .locations
            .into_iter()
            .map(|country| {
                // Presence is guaranteed by `reference_invariants`.
                let dial_code = raw
                    .dial_codes
                    .iter()
                    .find(|entry| entry.country == country.country)
                    .map(|entry| entry.code.clone())
                    .unwrap_or_default();
                Country {
                    key: LocationKey::from_display(&country.country),
                    name: country.name,
                    dial_code,
                    states: country
                        .states
                        .into_iter()
                        .map(|state| StateEntry {
                            key: LocationKey::from_display(&state.key),
                            cities: state.cities,
                        })
                        .collect(),
                }
            })
            .collect();
        Self {
            disposable_domains: raw.disposable_domains,
            countries,
        }
    }

    /// Countries in declaration order.
    pub fn countries(&self) -> &[Country] {
        &self.countries
    }

    pub fn country(&self, key: &str) -> Option<&Country> {
        self.countries
            .iter()
            .find(|country| country.key.as_str() == key)
    }

    pub fn dial_code(&self, country: &str) -> Option<&str> {
        self.country(country)
            .map(|country| country.dial_code.as_str())
    }

    pub fn disposable_domains(&self) -> &[String] {
        &self.disposable_domains
    }

    /// True if `domain` contains any disposable domain as a substring
    /// (case-insensitive).
    pub fn is_disposable_domain(&self, domain: &str) -> bool {
        let domain = domain.to_lowercase();
        self.disposable_domains
            .iter()
            .any(|blocked| domain.contains(blocked.as_str()))
    }
}

/// Check invariants the JSON shape cannot express.
///
/// Returns stable error messages (empty on success).
fn reference_invariants(raw: &RawReference) -> Vec<String> {
    let mut errors = Vec::new();

    for domain in &raw.disposable_domains {
        if domain.is_empty()
            || domain.chars().any(char::is_whitespace)
            || domain.to_lowercase() != *domain
        {
            errors.push(format!(
                "disposable domain '{domain}' must be non-empty lowercase without whitespace"
            ));
        }
    }

    let mut dialed = HashSet::new();
    for entry in &raw.dial_codes {
        if !dialed.insert(entry.country.as_str()) {
            errors.push(format!("duplicate dial code for country '{}'", entry.country));
        }
        if !is_dial_code(&entry.code) {
            errors.push(format!(
                "dial code '{}' for country '{}' must be '+' followed by 1-4 digits",
                entry.code, entry.country
            ));
        }
    }

    let mut located = HashSet::new();
    for country in &raw.locations {
        let path = country.country.as_str();
        if !located.insert(path) {
            errors.push(format!("duplicate country '{path}'"));
        }
        if path.is_empty() || !is_canonical(path) {
            errors.push(format!("country key '{path}' is not canonical"));
        }
        if !dialed.contains(path) {
            errors.push(format!("country '{path}' has no dial code"));
        }

        let mut states = HashSet::new();
        for state in &country.states {
            let state_path = format!("{path}/{}", state.key);
            if !states.insert(state.key.as_str()) {
                errors.push(format!("duplicate state at {state_path}"));
            }
            if state.key.is_empty() || !is_canonical(&state.key) {
                errors.push(format!("state key at {state_path} is not canonical"));
            }

            let mut cities = HashSet::new();
            for city in &state.cities {
                let key = normalize(city);
                if key.is_empty() {
                    errors.push(format!("blank city name at {state_path}"));
                } else if !cities.insert(key.clone()) {
                    errors.push(format!("duplicate city key '{key}' at {state_path}"));
                }
            }
        }
    }

    for entry in &raw.dial_codes {
        if !located.contains(entry.country.as_str()) {
            errors.push(format!(
                "dial code country '{}' missing from location hierarchy",
                entry.country
            ));
        }
    }

    errors
}

fn is_dial_code(code: &str) -> bool {
    match code.strip_prefix('+') {
        Some(digits) => (1..=4).contains(&digits.len()) && digits.bytes().all(|b| b.is_ascii_digit()),
        None => false,
    }
}
