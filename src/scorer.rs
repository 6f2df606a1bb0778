//! Password scorer - combines the scoring sections into a feedback record.

use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;

use crate::blacklist::Blacklist;
use crate::sections::{
    complexity_section, length_section, uniqueness_section, SECTION_MAX,
};

/// Maximum achievable [`Feedback::total_score`]. Downstream percentage
/// normalization divides by this value; it must track the section weighting.
pub const MAX_TOTAL_SCORE: u8 = 3 * SECTION_MAX;

/// User-facing strength label, ordered weakest to strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum Strength {
    Weak,
    Fair,
    Good,
    Strong,
}

impl Strength {
    /// Step function over the total score. Higher totals never map to a
    /// weaker label.
    fn from_total(total: u8) -> Self {
        match total {
            0..=3 => Strength::Weak,
            4..=6 => Strength::Fair,
            7..=9 => Strength::Good,
            _ => Strength::Strong,
        }
    }
}

/// Structured result of evaluating one password.
///
/// `recommendations` is ordered most impactful fix first; callers that add
/// their own messages should build a new list rather than mutate this one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feedback {
    pub length_score: u8,
    pub complexity_score: u8,
    pub uniqueness_score: u8,
    pub total_score: u8,
    pub strength: Strength,
    pub recommendations: Vec<String>,
}

/// Stateless scoring engine. Construct once at startup and share freely;
/// evaluation is deterministic and touches no external state.
#[derive(Debug, Clone, Default)]
pub struct Scorer {
    blacklist: Option<Blacklist>,
}

impl Scorer {
    /// A scorer with no blacklist: scoring depends on the password alone.
    pub fn new() -> Self {
        Self { blacklist: None }
    }

    /// A scorer that additionally flags passwords found in `blacklist`.
    pub fn with_blacklist(blacklist: Blacklist) -> Self {
        Self {
            blacklist: Some(blacklist),
        }
    }

    /// Evaluates password strength and returns a detailed feedback record.
    ///
    /// Total over all inputs, including the empty string. Sub-scores are
    /// each `0..=4`; `total_score` is their sum, `0..=MAX_TOTAL_SCORE`.
    ///
    /// A blacklisted password keeps its numeric scores but has its label
    /// forced to [`Strength::Weak`] with an extra recommendation.
    pub fn evaluate(&self, password: &SecretString) -> Feedback {
        let length = length_section(password);
        let complexity = complexity_section(password);
        let uniqueness = uniqueness_section(password);

        let total_score = length.score + complexity.score + uniqueness.score;
        let mut strength = Strength::from_total(total_score);

        let mut recommendations = Vec::new();
        recommendations.extend(length.recommendations);
        recommendations.extend(complexity.recommendations);
        recommendations.extend(uniqueness.recommendations);

        if let Some(blacklist) = &self.blacklist {
            if blacklist.contains(password.expose_secret()) {
                strength = Strength::Weak;
                recommendations.push("Avoid commonly used passwords.".to_string());
            }
        }

        Feedback {
            length_score: length.score,
            complexity_score: complexity.score,
            uniqueness_score: uniqueness.score,
            total_score,
            strength,
            recommendations,
        }
    }
}
