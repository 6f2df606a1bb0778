//! Complexity section - scores character-class diversity.

use secrecy::{ExposeSecret, SecretString};
use super::SectionScore;

/// Scores the number of distinct character classes present: lowercase,
/// uppercase, digits, symbols. One point per class.
pub fn complexity_section(password: &SecretString) -> SectionScore {
    let pwd = password.expose_secret();
    let has_lower = pwd.chars().any(|c| c.is_lowercase());
    let has_upper = pwd.chars().any(|c| c.is_uppercase());
    let has_digit = pwd.chars().any(|c| c.is_ascii_digit());
    let has_symbol = pwd.chars().any(|c| !c.is_alphanumeric());

    let classes = [
        (has_upper, "Add an uppercase letter."),
        (has_lower, "Add a lowercase letter."),
        (has_digit, "Add a digit."),
        (has_symbol, "Add a symbol such as ! or #."),
    ];

    let score = classes.iter().filter(|(present, _)| *present).count() as u8;

    let recommendations = if pwd.is_empty() {
        vec!["Add a mix of letters, digits, and symbols.".to_string()]
    } else {
        classes
            .iter()
            .filter(|(present, _)| !present)
            .map(|(_, fix)| (*fix).to_string())
            .collect()
    };

    SectionScore {
        score,
        recommendations,
    }
}
