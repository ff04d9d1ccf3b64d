//! Canonical location keys and display-name helpers.

use serde::{Deserialize, Serialize};

/// Lowercase, whitespace-free key identifying a country, state or city.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LocationKey(String);

impl LocationKey {
    /// Derive a key from a display name: lowercase and strip all whitespace.
    ///
    /// Every other character (hyphens, accents, apostrophes) is preserved.
    pub fn from_display(display: &str) -> Self {
        Self(normalize(display))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for LocationKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for LocationKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Selectable option handed to the adapter: canonical key plus display label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocationOption {
    pub key: LocationKey,
    pub label: String,
}

pub fn normalize(display: &str) -> String {
    display
        .chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}

pub fn is_canonical(raw: &str) -> bool {
    normalize(raw) == raw
}

/// Uppercase the first character of each space-separated word, keep the rest.
pub fn title_case(text: &str) -> String {
    text.split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
