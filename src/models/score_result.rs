use std::fmt;

use serde::{Deserialize, Serialize};

use crate::models::EducationProfile;
use crate::types::{EducationLevel, ExperienceYears, SkillName, Token};

/// Coarse quality band derived from the total score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Classification {
    Excellent,
    Good,
    Average,
    Poor,
}

impl Classification {
    /// Band thresholds, inclusive lower bounds: 80, 60, 40.
    pub fn from_score(score: u8) -> Self {
        if score >= 80 {
            Classification::Excellent
        } else if score >= 60 {
            Classification::Good
        } else if score >= 40 {
            Classification::Average
        } else {
            Classification::Poor
        }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Classification::Excellent => "excellent",
            Classification::Good => "good",
            Classification::Average => "average",
            Classification::Poor => "poor",
        };
        write!(f, "{}", label)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SemanticBreakdown {
    pub score: u8,
    pub weight: f64,
    pub matched: Vec<Token>,
    pub unmatched: Vec<Token>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkillsBreakdown {
    pub score: u8,
    pub weight: f64,
    pub matched: Vec<SkillName>,
    pub unmatched: Vec<SkillName>,
    pub extracted: Vec<SkillName>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EducationBreakdown {
    pub score: u8,
    pub weight: f64,
    pub cv_level: EducationLevel,
    pub required_level: EducationLevel,
    pub degrees: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExperienceBreakdown {
    pub score: u8,
    pub weight: f64,
    pub cv_years: ExperienceYears,
    pub required_years: ExperienceYears,
}

/// Per-dimension scores with their raw (un-normalized) display weights and
/// dimension-specific detail.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Breakdown {
    pub semantic: SemanticBreakdown,
    pub skills: SkillsBreakdown,
    pub education: EducationBreakdown,
    pub experience: ExperienceBreakdown,
}

/// Everything extracted from the resume itself, independent of the job
/// description it was scored against.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CvData {
    pub skills: Vec<SkillName>,
    pub education: EducationProfile,
    pub experience: ExperienceYears,
}

/// The composite result of scoring one resume against one job description.
/// Constructed fresh per scoring call and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreResult {
    pub total: u8,
    pub classification: Classification,
    pub breakdown: Breakdown,
    pub cv_data: CvData,
}

/// A scored candidate: the extracted name alongside the score itself.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CandidateReport {
    pub name: String,
    pub score: ScoreResult,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classification_band_thresholds_are_inclusive() {
        assert_eq!(Classification::from_score(100), Classification::Excellent);
        assert_eq!(Classification::from_score(80), Classification::Excellent);
        assert_eq!(Classification::from_score(79), Classification::Good);
        assert_eq!(Classification::from_score(60), Classification::Good);
        assert_eq!(Classification::from_score(59), Classification::Average);
        assert_eq!(Classification::from_score(40), Classification::Average);
        assert_eq!(Classification::from_score(39), Classification::Poor);
        assert_eq!(Classification::from_score(0), Classification::Poor);
    }

    #[test]
    fn classification_serializes_as_lowercase_labels() {
        let json = serde_json::to_string(&Classification::Excellent).unwrap();
        assert_eq!(json, "\"excellent\"");
        assert_eq!(Classification::Poor.to_string(), "poor");
    }
}
