use std::sync::LazyLock;

use log::debug;
use regex::Regex;
use serde::Serialize;

use crate::types::ExperienceYears;

/// Patterns recognizing "<N>+ years of experience" and "experience of <N>+
/// years" phrasings, compiled once.
static EXPERIENCE_PATTERNS: LazyLock<[Regex; 2]> = LazyLock::new(|| {
    [
        Regex::new(r"(?i)(\d+)\+?\s*(?:years?|yrs?)\s*(?:of\s*)?(?:experience|exp)")
            .expect("experience patterns are valid"),
        Regex::new(r"(?i)(?:experience|exp)\s*(?:of\s*)?(\d+)\+?\s*(?:years?|yrs?)")
            .expect("experience patterns are valid"),
    ]
});

/// Extract the claimed years of experience from a text.
///
/// Takes the maximum integer captured by any pattern match; 0 if none.
pub fn extract_experience(text: &str) -> ExperienceYears {
    let mut max_years = 0;

    for pattern in EXPERIENCE_PATTERNS.iter() {
        for capture in pattern.captures_iter(text) {
            if let Ok(years) = capture[1].parse::<ExperienceYears>() {
                max_years = max_years.max(years);
            }
        }
    }

    debug!("extracted {} years of experience", max_years);

    max_years
}

/// Experience sub-score with the years that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ExperienceScore {
    pub score: u8,
    pub cv_years: ExperienceYears,
    pub required_years: ExperienceYears,
}

/// Score candidate experience against the requirement.
///
/// No requirement and met-or-exceeded requirements both give full credit; a
/// shortfall scores linearly against the required years.
pub fn calculate_experience_score(
    cv_years: ExperienceYears,
    required_years: ExperienceYears,
) -> ExperienceScore {
    if required_years == 0 {
        return ExperienceScore {
            score: 100,
            cv_years,
            required_years: 0,
        };
    }

    if cv_years >= required_years {
        return ExperienceScore {
            score: 100,
            cv_years,
            required_years,
        };
    }

    let score = (cv_years as f64 / required_years as f64 * 100.0).round() as u8;

    ExperienceScore {
        // Shortfall ratio is already below one; the cap guards rounding only
        score: score.min(100),
        cv_years,
        required_years,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognizes_years_before_experience() {
        assert_eq!(extract_experience("8 years of experience in backend work"), 8);
        assert_eq!(extract_experience("5+ yrs experience"), 5);
    }

    #[test]
    fn recognizes_experience_before_years() {
        assert_eq!(extract_experience("experience of 6 years"), 6);
        assert_eq!(extract_experience("exp 3 yrs"), 3);
    }

    #[test]
    fn takes_the_maximum_across_matches() {
        let text = "2 years of experience with Rust, 7 years of experience overall";
        assert_eq!(extract_experience(text), 7);
    }

    #[test]
    fn no_match_yields_zero() {
        assert_eq!(extract_experience("a seasoned engineer"), 0);
        assert_eq!(extract_experience(""), 0);
    }

    #[test]
    fn no_requirement_scores_full_credit() {
        assert_eq!(calculate_experience_score(0, 0).score, 100);
        assert_eq!(calculate_experience_score(12, 0).score, 100);
    }

    #[test]
    fn meeting_the_requirement_scores_full_credit() {
        assert_eq!(calculate_experience_score(10, 5).score, 100);
        assert_eq!(calculate_experience_score(5, 5).score, 100);
    }

    #[test]
    fn shortfall_scores_linearly() {
        let result = calculate_experience_score(5, 10);
        assert_eq!(result.score, 50);
        assert_eq!(result.cv_years, 5);
        assert_eq!(result.required_years, 10);

        assert_eq!(calculate_experience_score(1, 5).score, 20);
    }
}
