use std::sync::LazyLock;

use crate::models::SkillDictionary;
use crate::utils::read_skill_synonym_list_from_string;

/// Common English function words ignored when building similarity vectors.
/// Kept (not filtered) when counting raw keyword frequency.
pub static STOP_WORDS: &[&str] = &[
    "the", "and", "for", "are", "but", "not", "you", "all", "can", "had", "her", "was", "one",
    "our", "out", "has", "have", "been", "some", "them", "then", "this", "that", "with", "they",
    "from", "will", "would", "there", "their", "what", "about", "which", "when", "make", "like",
    "time", "just", "know", "take", "people", "into", "year", "your", "good", "could", "give",
    "than", "other", "very", "after", "most", "also", "made", "should", "being", "well", "back",
    "much", "where", "only", "come", "even", "want", "because", "work", "these", "must", "does",
    "going", "such", "through",
];

/// Section header names recognized as delimiters when scanning a resume
/// line by line. Any of these ends the section currently being collected.
pub static SECTION_HEADERS: &[&str] = &[
    "education",
    "experience",
    "work history",
    "employment",
    "skills",
    "projects",
    "summary",
    "profile",
    "contact",
    "languages",
    "certifications",
    "achievements",
];

/// Degree keyword to education level. Levels are ranked, not cumulative;
/// the highest matched level wins.
///
/// "graduate" is deliberately absent. It is too generic (e.g. "recent
/// graduate") and produced false positives.
pub static EDUCATION_LEVELS: &[(&str, u8)] = &[
    ("phd", 6),
    ("doctorate", 6),
    ("masters", 5),
    ("master", 5),
    ("mba", 5),
    ("msc", 5),
    ("mtech", 5),
    ("bachelors", 4),
    ("bachelor", 4),
    ("btech", 4),
    ("bsc", 4),
    ("degree", 4),
    ("diploma", 3),
    ("associate", 2),
    ("high school", 1),
    ("secondary", 1),
];

/// A section shorter than this is considered uninformative and callers
/// fall back to scanning the whole document.
pub const MIN_SECTION_LEN: usize = 20;

/// Default number of ranked keywords returned by keyword extraction.
pub const DEFAULT_TOP_KEYWORDS: usize = 20;

/// Keyword pool sizes used when cross-matching resume and job description.
pub const CV_KEYWORD_POOL: usize = 50;
pub const JD_KEYWORD_POOL: usize = 30;

/// The built-in skill synonym dictionary, embedded at compile time.
pub static SKILL_SYNONYM_CSV: &str = include_str!("../data/skill_synonyms.csv");

// Lazy-initialized static variables
pub static DEFAULT_SKILL_DICTIONARY: LazyLock<SkillDictionary> = LazyLock::new(|| {
    let entries = read_skill_synonym_list_from_string(SKILL_SYNONYM_CSV)
        .expect("embedded skill synonym dictionary is valid CSV");
    SkillDictionary::new(entries)
});
