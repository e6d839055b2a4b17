pub mod education;
pub use education::{calculate_education_score, extract_education, EducationProfile, EducationScore};

pub mod error;
pub use error::Error;

pub mod experience;
pub use experience::{calculate_experience_score, extract_experience, ExperienceScore};

pub mod name_extractor;
pub use name_extractor::extract_name;

pub mod score_result;
pub use score_result::{
    Breakdown, CandidateReport, Classification, CvData, EducationBreakdown, ExperienceBreakdown,
    ScoreResult, SemanticBreakdown, SkillsBreakdown,
};

pub mod scoring_engine;
pub use scoring_engine::{JdRequirements, ScoringEngine};

pub mod section_extractor;
pub use section_extractor::extract_section;

pub mod semantic_matcher;
pub use semantic_matcher::{
    calculate_semantic_score, extract_keywords, find_matching_keywords, KeywordMatches,
};

pub mod skill_dictionary;
pub use skill_dictionary::SkillDictionary;

pub mod skill_extractor;
pub use skill_extractor::SkillExtractor;

pub mod skill_matcher;
pub use skill_matcher::{calculate_skills_score, match_skills, SkillMatch, SkillsScore};

pub mod tokenizer;
pub use tokenizer::{remove_stop_words, Tokenizer};

pub mod weights;
pub use weights::Weights;
