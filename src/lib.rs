mod constants;
pub mod models;
pub mod types;
mod utils;

use rayon::prelude::*;

pub use constants::DEFAULT_SKILL_DICTIONARY;
pub use models::{
    extract_education, extract_experience, extract_name, extract_section, Breakdown,
    CandidateReport, Classification, CvData, EducationProfile, Error, JdRequirements, ScoreResult,
    ScoringEngine, SkillDictionary, SkillExtractor, Tokenizer, Weights,
};
pub use types::SkillName;
pub use utils::read_skill_synonym_list_from_string;

/// Extract the canonical skill set from a text using the built-in
/// skill synonym dictionary.
pub fn extract_skills(text: &str) -> Vec<SkillName> {
    SkillExtractor::new(&DEFAULT_SKILL_DICTIONARY).extract(text)
}

/// Rank the most frequent non-stop-word keywords of a text, returning the
/// default pool of 20.
pub fn extract_keywords(text: &str) -> Vec<types::Token> {
    models::extract_keywords(text, constants::DEFAULT_TOP_KEYWORDS)
}

/// Score a resume against a job description with the built-in dictionary,
/// default weights, and requirements derived from the job description text.
pub fn score_resume(cv_text: &str, jd_text: &str) -> ScoreResult {
    score_resume_with_config(cv_text, jd_text, &JdRequirements::default(), Weights::default())
}

/// Score a resume against a job description with explicit requirements and
/// weights. Weights must have a positive sum.
pub fn score_resume_with_config(
    cv_text: &str,
    jd_text: &str,
    requirements: &JdRequirements,
    weights: Weights,
) -> ScoreResult {
    let engine = ScoringEngine::new(&DEFAULT_SKILL_DICTIONARY, weights);
    engine.calculate_score(cv_text, jd_text, requirements)
}

/// Score a batch of resumes against one job description.
///
/// Each resume is scored independently, so the batch runs data-parallel.
/// Output order matches input order, each entry tagged with the candidate
/// name guessed from the resume text.
pub fn score_batch<S: AsRef<str> + Sync>(
    cv_texts: &[S],
    jd_text: &str,
    requirements: &JdRequirements,
    weights: Weights,
) -> Vec<CandidateReport> {
    cv_texts
        .par_iter()
        .map(|cv_text| {
            let cv_text = cv_text.as_ref();
            CandidateReport {
                name: extract_name(cv_text),
                score: score_resume_with_config(cv_text, jd_text, requirements, weights),
            }
        })
        .collect()
}
