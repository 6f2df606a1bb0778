//! Length section - scores character count on a saturating scale.

use secrecy::{ExposeSecret, SecretString};
use super::SectionScore;

/// One point per band reached; saturates at the last band.
const LENGTH_BANDS: [usize; 4] = [4, 8, 12, 16];

const RECOMMENDED_LENGTH: usize = 12;

/// Scores password length. Longer passwords never score lower on this axis.
///
/// Length is counted in characters, not bytes.
pub fn length_section(password: &SecretString) -> SectionScore {
    let len = password.expose_secret().chars().count();
    let score = LENGTH_BANDS.iter().filter(|&&band| len >= band).count() as u8;

    let mut recommendations = Vec::new();
    if len < RECOMMENDED_LENGTH {
        recommendations.push(format!(
            "Increase length to {} characters or more.",
            RECOMMENDED_LENGTH
        ));
    }

    SectionScore {
        score,
        recommendations,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn score_of(pwd: &str) -> u8 {
        let pwd = SecretString::new(pwd.to_string().into());
        length_section(&pwd).score
    }

    #[test]
    fn test_length_section_empty() {
        let pwd = SecretString::new("".to_string().into());
        let result = length_section(&pwd);
        assert_eq!(result.score, 0);
        assert!(!result.recommendations.is_empty());
    }

    #[test]
    fn test_length_section_bands() {
        assert_eq!(score_of("abc"), 0);
        assert_eq!(score_of("abcd"), 1);
        assert_eq!(score_of("abcdefgh"), 2);
        assert_eq!(score_of("abcdefghijkl"), 3);
        assert_eq!(score_of("abcdefghijklmnop"), 4);
    }

    #[test]
    fn test_length_section_saturates() {
        assert_eq!(score_of(&"x".repeat(200)), 4);
    }

    #[test]
    fn test_length_section_monotonic() {
        let mut pwd = String::new();
        let mut previous = 0;
        for _ in 0..32 {
            pwd.push('a');
            let score = score_of(&pwd);
            assert!(score >= previous, "score dropped at length {}", pwd.len());
            previous = score;
        }
    }

    #[test]
    fn test_length_section_counts_characters_not_bytes() {
        // 4 multi-byte characters reach the first band
        assert_eq!(score_of("日本語字"), 1);
    }

    #[test]
    fn test_length_section_no_recommendation_when_long() {
        let pwd = SecretString::new("abcdefghijkl".to_string().into());
        let result = length_section(&pwd);
        assert!(result.recommendations.is_empty());
    }
}
