//! Uniqueness section - scores distinct-character ratio and penalizes
//! repeated and sequential runs.

use std::collections::HashSet;

use secrecy::{ExposeSecret, SecretString};
use super::SectionScore;

const MIN_REPEAT_RUN: usize = 3;
const MIN_SEQUENCE_RUN: usize = 4;

/// Scores how varied the password's characters are.
///
/// The base score comes from the ratio of distinct characters to total
/// length; a run of repeated characters and a run of sequential characters
/// each subtract one point, saturating at zero.
pub fn uniqueness_section(password: &SecretString) -> SectionScore {
    let chars: Vec<char> = password.expose_secret().chars().collect();

    if chars.is_empty() {
        return SectionScore {
            score: 0,
            recommendations: Vec::new(),
        };
    }

    let distinct: HashSet<char> = chars.iter().copied().collect();
    let ratio = distinct.len() as f64 / chars.len() as f64;
    let base: u8 = if ratio >= 0.9 {
        4
    } else if ratio >= 0.7 {
        3
    } else if ratio >= 0.5 {
        2
    } else if ratio >= 0.3 {
        1
    } else {
        0
    };

    let repeated = has_repeated_run(&chars);
    let sequential = has_sequential_run(&chars);

    let mut score = base;
    let mut recommendations = Vec::new();
    if repeated {
        score = score.saturating_sub(1);
        recommendations.push("Avoid repeating the same character.".to_string());
    }
    if sequential {
        score = score.saturating_sub(1);
        recommendations.push("Avoid sequences like 'abcd' or '1234'.".to_string());
    }
    if ratio < 0.5 && !repeated {
        recommendations.push("Use a wider variety of characters.".to_string());
    }

    SectionScore {
        score,
        recommendations,
    }
}

/// True if the same character appears `MIN_REPEAT_RUN` or more times in a row.
fn has_repeated_run(chars: &[char]) -> bool {
    let mut run = 1;
    for pair in chars.windows(2) {
        if pair[0] == pair[1] {
            run += 1;
            if run >= MIN_REPEAT_RUN {
                return true;
            }
        } else {
            run = 1;
        }
    }
    false
}

/// True if `MIN_SEQUENCE_RUN` consecutive characters step uniformly up or
/// down by one code point, e.g. "abcd" or "4321".
fn has_sequential_run(chars: &[char]) -> bool {
    if chars.len() < MIN_SEQUENCE_RUN {
        return false;
    }
    chars.windows(MIN_SEQUENCE_RUN).any(|window| {
        let ascending = window
            .windows(2)
            .all(|pair| pair[1] as i64 == pair[0] as i64 + 1);
        let descending = window
            .windows(2)
            .all(|pair| pair[1] as i64 == pair[0] as i64 - 1);
        ascending || descending
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(pwd: &str) -> SectionScore {
        let pwd = SecretString::new(pwd.to_string().into());
        uniqueness_section(&pwd)
    }

    #[test]
    fn test_uniqueness_section_empty() {
        let result = run("");
        assert_eq!(result.score, 0);
        assert!(result.recommendations.is_empty());
    }

    #[test]
    fn test_uniqueness_section_all_distinct() {
        let result = run("Tr0ub&dX");
        assert_eq!(result.score, 4);
        assert!(result.recommendations.is_empty());
    }

    #[test]
    fn test_uniqueness_section_single_repeated_character() {
        let result = run("aaaaaaaa");
        assert_eq!(result.score, 0);
        assert!(result
            .recommendations
            .iter()
            .any(|r| r.contains("repeating")));
    }

    #[test]
    fn test_uniqueness_section_sequential_ascending() {
        let result = run("mnopqrst");
        assert!(result
            .recommendations
            .iter()
            .any(|r| r.contains("sequences")));
    }

    #[test]
    fn test_uniqueness_section_sequential_descending() {
        let result = run("9876post");
        assert!(result
            .recommendations
            .iter()
            .any(|r| r.contains("sequences")));
    }

    #[test]
    fn test_uniqueness_section_short_sequence_not_penalized() {
        // "abc" is below the sequence window
        let result = run("abc");
        assert_eq!(result.score, 4);
    }

    #[test]
    fn test_uniqueness_section_low_ratio_without_run() {
        let result = run("abababab");
        assert!(result.score <= 1);
        assert!(result.recommendations.iter().any(|r| r.contains("variety")));
    }
}
