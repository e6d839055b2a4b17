use serde::Serialize;

use crate::models::SkillDictionary;
use crate::types::SkillName;

/// Matched and unmatched requirements, in requirement order and original casing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillMatch {
    pub matched: Vec<SkillName>,
    pub unmatched: Vec<SkillName>,
}

/// Compare a candidate skill set against required skills.
///
/// A requirement matches when any of the following holds:
/// - a case-insensitive exact match exists in the candidate set,
/// - the candidate set contains one of the requirement's synonyms,
/// - the requirement is itself a synonym of a canonical skill the candidate
///   set contains.
pub fn match_skills(
    dictionary: &SkillDictionary,
    cv_skills: &[SkillName],
    required_skills: &[SkillName],
) -> SkillMatch {
    let mut matched = Vec::new();
    let mut unmatched = Vec::new();

    for required in required_skills {
        let lower_required = required.to_lowercase();

        if cv_skills
            .iter()
            .any(|skill| skill.to_lowercase() == lower_required)
        {
            matched.push(required.clone());
            continue;
        }

        let synonyms = dictionary.synonyms_of(&lower_required).unwrap_or(&[]);
        let canonical = dictionary.canonical_of(&lower_required);

        let found = cv_skills.iter().any(|skill| {
            let lower_skill = skill.to_lowercase();
            synonyms.contains(&lower_skill) || canonical == Some(lower_skill.as_str())
        });

        if found {
            matched.push(required.clone());
        } else {
            unmatched.push(required.clone());
        }
    }

    SkillMatch { matched, unmatched }
}

/// Skills sub-score: coverage of the requirement list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkillsScore {
    pub score: u8,
    pub matched: Vec<SkillName>,
    pub unmatched: Vec<SkillName>,
}

/// No requirements means full credit with empty match lists; otherwise the
/// score is the rounded percentage of requirements matched.
pub fn calculate_skills_score(
    dictionary: &SkillDictionary,
    cv_skills: &[SkillName],
    required_skills: &[SkillName],
) -> SkillsScore {
    if required_skills.is_empty() {
        return SkillsScore {
            score: 100,
            matched: Vec::new(),
            unmatched: Vec::new(),
        };
    }

    let SkillMatch { matched, unmatched } = match_skills(dictionary, cv_skills, required_skills);
    let score = (matched.len() as f64 / required_skills.len() as f64 * 100.0).round() as u8;

    SkillsScore {
        score,
        matched,
        unmatched,
    }
}
