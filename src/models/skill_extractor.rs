use std::collections::BTreeSet;
use std::sync::LazyLock;

use log::debug;
use regex::Regex;

use crate::models::SkillDictionary;
use crate::types::SkillName;

/// Category patterns matched against the whole lowercased text. Word
/// boundaries guard single-word skills; terms the boundary cannot anchor
/// (c++, c#) are caught by the synonym substring pass instead.
static SKILL_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        // Programming languages
        r"(?i)\b(javascript|typescript|python|java|c\+\+|c#|ruby|php|swift|kotlin|go|rust|scala|perl|r|matlab)\b",
        // Frameworks
        r"(?i)\b(react|vue|angular|node|express|django|flask|spring|rails|laravel|symfony|nextjs|nuxt)\b",
        // Databases
        r"(?i)\b(sql|mysql|postgresql|mongodb|redis|elasticsearch|cassandra|dynamodb|oracle|firebase)\b",
        // Cloud/DevOps
        r"(?i)\b(aws|azure|gcp|docker|kubernetes|jenkins|terraform|ansible|ci/cd|devops)\b",
        // Tools
        r"(?i)\b(git|jira|confluence|slack|figma|sketch|photoshop|illustrator)\b",
        // Concepts
        r"(?i)\b(agile|scrum|rest|graphql|microservices|api|testing|tdd|bdd)\b",
        // Data/ML
        r"(?i)\b(machine learning|deep learning|nlp|computer vision|tensorflow|pytorch|pandas|numpy)\b",
    ]
    .iter()
    .map(|pattern| Regex::new(pattern).expect("skill category patterns are valid"))
    .collect()
});

pub struct SkillExtractor<'a> {
    dictionary: &'a SkillDictionary,
}

impl<'a> SkillExtractor<'a> {
    pub fn new(dictionary: &'a SkillDictionary) -> Self {
        Self { dictionary }
    }

    /// Extract the canonical skill set from a text.
    ///
    /// Two passes over the lowercased text: category pattern matches are
    /// taken verbatim, and every dictionary entry whose canonical name or
    /// any synonym appears as a substring contributes its canonical name.
    /// The result is deduplicated and sorted.
    pub fn extract(&self, text: &str) -> Vec<SkillName> {
        let lower_text = text.to_lowercase();
        let mut found_skills = BTreeSet::new();

        for pattern in SKILL_PATTERNS.iter() {
            for found in pattern.find_iter(&lower_text) {
                found_skills.insert(found.as_str().to_string());
            }
        }

        for (canonical, synonyms) in self.dictionary.entries() {
            if synonyms.iter().any(|synonym| lower_text.contains(synonym))
                || lower_text.contains(canonical)
            {
                found_skills.insert(canonical.clone());
            }
        }

        debug!("extracted {} skills", found_skills.len());

        found_skills.into_iter().collect()
    }
}
