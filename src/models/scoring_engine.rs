use log::debug;
use serde::{Deserialize, Serialize};

use crate::models::education::{calculate_education_score, extract_education, EducationProfile};
use crate::models::experience::{calculate_experience_score, extract_experience};
use crate::models::score_result::{
    Breakdown, Classification, CvData, EducationBreakdown, ExperienceBreakdown, ScoreResult,
    SemanticBreakdown, SkillsBreakdown,
};
use crate::models::semantic_matcher::{calculate_semantic_score, find_matching_keywords};
use crate::models::skill_extractor::SkillExtractor;
use crate::models::skill_matcher::calculate_skills_score;
use crate::models::weights::Weights;
use crate::models::SkillDictionary;
use crate::types::{ExperienceYears, SkillName};

/// Explicit job requirements. Any field left `None` is derived from the job
/// description text with the same extractors applied to resumes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JdRequirements {
    pub skills: Option<Vec<SkillName>>,
    pub education: Option<EducationProfile>,
    pub experience: Option<ExperienceYears>,
}

/// Orchestrates the per-dimension scorers into one composite result.
///
/// Holds only borrowed static configuration; scoring itself is pure, so
/// calling `calculate_score` twice with identical inputs yields identical
/// results, and re-scoring with different weights changes only the total,
/// the classification, and the displayed weights.
pub struct ScoringEngine<'a> {
    dictionary: &'a SkillDictionary,
    weights: Weights,
}

impl<'a> ScoringEngine<'a> {
    pub fn new(dictionary: &'a SkillDictionary, weights: Weights) -> Self {
        Self {
            dictionary,
            weights,
        }
    }

    /// Score a resume against a job description.
    ///
    /// Precondition: the configured weights have a positive sum.
    pub fn calculate_score(
        &self,
        cv_text: &str,
        jd_text: &str,
        requirements: &JdRequirements,
    ) -> ScoreResult {
        let normalized = self.weights.normalized();
        let skill_extractor = SkillExtractor::new(self.dictionary);

        // Extract data from the resume
        let cv_skills = skill_extractor.extract(cv_text);
        let cv_education = extract_education(cv_text);
        let cv_experience = extract_experience(cv_text);

        // Per-dimension scores
        let semantic_score = calculate_semantic_score(cv_text, jd_text);
        let keyword_matches = find_matching_keywords(cv_text, jd_text);

        let required_skills = match &requirements.skills {
            Some(skills) => skills.clone(),
            None => skill_extractor.extract(jd_text),
        };
        let skills_result = calculate_skills_score(self.dictionary, &cv_skills, &required_skills);

        let required_education = match &requirements.education {
            Some(education) => education.clone(),
            None => extract_education(jd_text),
        };
        let education_result = calculate_education_score(&cv_education, &required_education);

        let required_experience = requirements
            .experience
            .unwrap_or_else(|| extract_experience(jd_text));
        let experience_result = calculate_experience_score(cv_experience, required_experience);

        // Weighted total over exactly these four dimensions
        let total = (semantic_score as f64 * normalized.semantic
            + skills_result.score as f64 * normalized.skills
            + education_result.score as f64 * normalized.education
            + experience_result.score as f64 * normalized.experience)
            .round() as u8;

        debug!(
            "semantic {} skills {} education {} experience {} -> total {}",
            semantic_score,
            skills_result.score,
            education_result.score,
            experience_result.score,
            total
        );

        ScoreResult {
            total,
            classification: Classification::from_score(total),
            breakdown: Breakdown {
                semantic: SemanticBreakdown {
                    score: semantic_score,
                    weight: self.weights.semantic,
                    matched: keyword_matches.matched,
                    unmatched: keyword_matches.unmatched,
                },
                skills: SkillsBreakdown {
                    score: skills_result.score,
                    weight: self.weights.skills,
                    matched: skills_result.matched,
                    unmatched: skills_result.unmatched,
                    extracted: cv_skills.clone(),
                },
                education: EducationBreakdown {
                    score: education_result.score,
                    weight: self.weights.education,
                    cv_level: education_result.cv_level,
                    required_level: education_result.required_level,
                    degrees: cv_education.degrees.clone(),
                },
                experience: ExperienceBreakdown {
                    score: experience_result.score,
                    weight: self.weights.experience,
                    cv_years: experience_result.cv_years,
                    required_years: experience_result.required_years,
                },
            },
            cv_data: CvData {
                skills: cv_skills,
                education: cv_education,
                experience: cv_experience,
            },
        }
    }
}
