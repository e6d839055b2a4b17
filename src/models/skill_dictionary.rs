use std::collections::HashMap;

use crate::types::{CanonicalSkill, SkillSynonym, SkillSynonymList};

/// Canonical skill names and their synonyms, with a reverse synonym lookup
/// built once at construction so matching never scans the entry list.
pub struct SkillDictionary {
    entries: SkillSynonymList,
    canonical_index: HashMap<CanonicalSkill, usize>,
    synonym_to_canonical: HashMap<SkillSynonym, CanonicalSkill>,
}

impl SkillDictionary {
    pub fn new(entries: SkillSynonymList) -> Self {
        let mut canonical_index = HashMap::new();
        let mut synonym_to_canonical = HashMap::new();

        for (index, (canonical, synonyms)) in entries.iter().enumerate() {
            canonical_index.insert(canonical.clone(), index);
            for synonym in synonyms {
                synonym_to_canonical.insert(synonym.clone(), canonical.clone());
            }
        }

        Self {
            entries,
            canonical_index,
            synonym_to_canonical,
        }
    }

    pub fn entries(&self) -> &SkillSynonymList {
        &self.entries
    }

    /// Synonyms registered for a canonical skill name, if any.
    pub fn synonyms_of(&self, canonical: &str) -> Option<&[SkillSynonym]> {
        self.canonical_index
            .get(canonical)
            .map(|&index| self.entries[index].1.as_slice())
    }

    /// The canonical skill a synonym maps to, if the term is a synonym.
    pub fn canonical_of(&self, synonym: &str) -> Option<&str> {
        self.synonym_to_canonical.get(synonym).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dictionary() -> SkillDictionary {
        SkillDictionary::new(vec![
            (
                "javascript".to_string(),
                vec!["js".to_string(), "ecmascript".to_string()],
            ),
            ("html".to_string(), vec![]),
        ])
    }

    #[test]
    fn reverse_lookup_resolves_synonyms() {
        let dictionary = dictionary();
        assert_eq!(dictionary.canonical_of("js"), Some("javascript"));
        assert_eq!(dictionary.canonical_of("ecmascript"), Some("javascript"));
        assert_eq!(dictionary.canonical_of("javascript"), None);
        assert_eq!(dictionary.canonical_of("css"), None);
    }

    #[test]
    fn synonyms_of_returns_registered_entries() {
        let dictionary = dictionary();
        assert_eq!(
            dictionary.synonyms_of("javascript"),
            Some(&["js".to_string(), "ecmascript".to_string()][..])
        );
        assert_eq!(dictionary.synonyms_of("html"), Some(&[][..]));
        assert_eq!(dictionary.synonyms_of("css"), None);
    }
}
