use std::sync::LazyLock;

use log::debug;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::constants::{EDUCATION_LEVELS, MIN_SECTION_LEN};
use crate::models::section_extractor::extract_section;
use crate::types::EducationLevel;

/// Degree keywords with word-boundary patterns, compiled once.
/// Keywords are lowercase and matched against lowercased text.
static DEGREE_PATTERNS: LazyLock<Vec<(&'static str, EducationLevel, Regex)>> =
    LazyLock::new(|| {
        EDUCATION_LEVELS
            .iter()
            .map(|&(keyword, level)| {
                let pattern = Regex::new(&format!(r"\b{}\b", keyword))
                    .expect("degree keyword patterns are valid");
                (keyword, level, pattern)
            })
            .collect()
    });

/// Highest education level detected in a text, with the matched degree keywords.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EducationProfile {
    pub level: EducationLevel,
    pub degrees: Vec<String>,
}

/// Extract the education profile from a text.
///
/// Prefers the education section when one is present and long enough to be
/// informative; otherwise scans the whole document. The level is the maximum
/// over all matched keywords, never a sum.
pub fn extract_education(text: &str) -> EducationProfile {
    let education_section = extract_section(text, &["education", "academic", "qualifications"]);

    let target_text = if education_section.len() > MIN_SECTION_LEN {
        education_section
    } else {
        text.to_string()
    };
    let lower_text = target_text.to_lowercase();

    let mut degrees = Vec::new();
    let mut max_level = 0;

    for (keyword, level, pattern) in DEGREE_PATTERNS.iter() {
        if pattern.is_match(&lower_text) {
            degrees.push(keyword.to_string());
            max_level = max_level.max(*level);
        }
    }

    debug!("education level {} from degrees {:?}", max_level, degrees);

    EducationProfile {
        level: max_level,
        degrees,
    }
}

/// Education sub-score with the levels that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EducationScore {
    pub score: u8,
    pub cv_level: EducationLevel,
    pub required_level: EducationLevel,
}

/// Score candidate education against the requirement.
///
/// No requirement (level 0) and met-or-exceeded requirements both give full
/// credit; a shortfall scores linearly against the required level.
pub fn calculate_education_score(
    cv_education: &EducationProfile,
    required_education: &EducationProfile,
) -> EducationScore {
    if required_education.level == 0 {
        return EducationScore {
            score: 100,
            cv_level: cv_education.level,
            required_level: 0,
        };
    }

    if cv_education.level >= required_education.level {
        return EducationScore {
            score: 100,
            cv_level: cv_education.level,
            required_level: required_education.level,
        };
    }

    let score =
        (cv_education.level as f64 / required_education.level as f64 * 100.0).round() as u8;

    EducationScore {
        score,
        cv_level: cv_education.level,
        required_level: required_education.level,
    }
}
