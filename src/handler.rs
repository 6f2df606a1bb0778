//! Request handler - shapes scorer output into the analyze response payload.

use secrecy::SecretString;
use serde::Serialize;
use serde_json::Value;

use crate::scorer::{Scorer, Strength, MAX_TOTAL_SCORE};

/// Guaranteed first recommendation for passwords shorter than four characters.
pub const STARTER_RECOMMENDATION: &str = "Use at least 4 characters to begin with.";

const CLAMP_BELOW_LENGTH: usize = 4;

/// Sub-score block of the response payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Scores {
    pub length: u8,
    pub complexity: u8,
    pub uniqueness: u8,
    pub total: u8,
    pub percent: u8,
}

/// Response payload for one analyzed password.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalyzeResponse {
    pub password_length: usize,
    pub scores: Scores,
    pub strength: Strength,
    pub recommendations: Vec<String>,
}

/// Analyzes passwords from request payloads.
///
/// Holds the [`Scorer`] it was constructed with; both are stateless, so one
/// analyzer can serve concurrent requests without coordination.
#[derive(Debug, Clone)]
pub struct Analyzer {
    scorer: Scorer,
}

impl Analyzer {
    pub fn new(scorer: Scorer) -> Self {
        Self { scorer }
    }

    /// Extracts the optional `password` field from a JSON payload and
    /// analyzes it. A missing, null, or non-string field counts as the
    /// empty string; this never fails.
    pub fn analyze(&self, payload: &Value) -> AnalyzeResponse {
        let password = payload
            .get("password")
            .and_then(Value::as_str)
            .unwrap_or("");
        self.analyze_password(password)
    }

    /// Scores `password` and applies the short-password clamp: anything of
    /// 1 to 3 characters is reported as weak, with [`STARTER_RECOMMENDATION`]
    /// guaranteed present. The empty string is not clamped.
    pub fn analyze_password(&self, password: &str) -> AnalyzeResponse {
        let password_length = password.chars().count();
        let secret = SecretString::new(password.to_string().into());
        let feedback = self.scorer.evaluate(&secret);

        let clamped = password_length > 0 && password_length < CLAMP_BELOW_LENGTH;
        let (strength, recommendations) = if clamped {
            (Strength::Weak, with_starter(feedback.recommendations))
        } else {
            (feedback.strength, feedback.recommendations)
        };

        // Integer truncation, matching floor(total / max * 100)
        let percent = (feedback.total_score as u32 * 100 / MAX_TOTAL_SCORE as u32) as u8;

        AnalyzeResponse {
            password_length,
            scores: Scores {
                length: feedback.length_score,
                complexity: feedback.complexity_score,
                uniqueness: feedback.uniqueness_score,
                total: feedback.total_score,
                percent,
            },
            strength,
            recommendations,
        }
    }
}

/// Returns a new list with [`STARTER_RECOMMENDATION`] first. The check is
/// membership, not position: if the message is already anywhere in the list
/// it stays where it is, so the operation is idempotent.
fn with_starter(recommendations: Vec<String>) -> Vec<String> {
    if recommendations.iter().any(|r| r == STARTER_RECOMMENDATION) {
        return recommendations;
    }
    let mut out = Vec::with_capacity(recommendations.len() + 1);
    out.push(STARTER_RECOMMENDATION.to_string());
    out.extend(recommendations);
    out
}
