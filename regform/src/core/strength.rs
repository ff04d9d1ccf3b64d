//! Password strength heuristic.

use crate::core::types::StrengthTier;

/// Count satisfied complexity conditions (0..=6).
///
/// One point each for: length >= 8, length >= 12, an ASCII lowercase letter,
/// an ASCII uppercase letter, an ASCII digit, and any other character.
pub fn strength_score(password: &str) -> u8 {
    let length = password.chars().count();
    let conditions = [
        length >= 8,
        length >= 12,
        password.chars().any(|c| c.is_ascii_lowercase()),
        password.chars().any(|c| c.is_ascii_uppercase()),
        password.chars().any(|c| c.is_ascii_digit()),
        password.chars().any(|c| !c.is_ascii_alphanumeric()),
    ];
    conditions.iter().filter(|met| **met).count() as u8
}

/// Classify a password. Total over every string; the empty string is weak.
pub fn classify_strength(password: &str) -> StrengthTier {
    match strength_score(password) {
        0..=2 => StrengthTier::Weak,
        3..=4 => StrengthTier::Medium,
        _ => StrengthTier::Strong,
    }
}
