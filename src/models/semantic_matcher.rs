use std::collections::{HashMap, HashSet};

use log::debug;

use crate::constants::{CV_KEYWORD_POOL, JD_KEYWORD_POOL};
use crate::models::Tokenizer;
use crate::types::Token;
use crate::utils::{cosine_similarity, extract_phrases, term_frequency};

/// Phrase matches needed for one percentage point of bonus, and the cap.
const PHRASE_MATCHES_PER_POINT: f64 = 10.0;
const MAX_PHRASE_BONUS: f64 = 0.2;

/// Similarity score between two texts on the 0-100 scale.
///
/// The base term is the cosine similarity of the two max-normalized,
/// stop-word-filtered term-frequency vectors. On top of that, literal
/// bigram/trigram overlap (computed on unfiltered tokens) adds a bonus of
/// up to 20 percentage points.
pub fn calculate_semantic_score(text1: &str, text2: &str) -> u8 {
    let words1 = Tokenizer::similarity_parser().tokenize(text1);
    let words2 = Tokenizer::similarity_parser().tokenize(text2);

    if words1.is_empty() || words2.is_empty() {
        return 0;
    }

    let tf1 = term_frequency(&words1);
    let tf2 = term_frequency(&words2);
    let similarity = cosine_similarity(&tf1, &tf2);

    let phrases1 = extract_phrases(text1);
    let phrases2: HashSet<Token> = extract_phrases(text2).into_iter().collect();
    let phrase_matches = phrases1
        .iter()
        .filter(|phrase| phrases2.contains(*phrase))
        .count();
    let phrase_bonus = (phrase_matches as f64 / PHRASE_MATCHES_PER_POINT).min(MAX_PHRASE_BONUS);

    debug!(
        "cosine similarity {:.3}, {} phrase matches",
        similarity, phrase_matches
    );

    (((similarity + phrase_bonus) * 100.0).min(100.0)).round() as u8
}

/// Rank the most frequent non-stop-word tokens of a text.
///
/// Sorted by count descending; ties keep first-occurrence order so the
/// ranking is deterministic.
pub fn extract_keywords(text: &str, top_n: usize) -> Vec<Token> {
    let words = Tokenizer::similarity_parser().tokenize(text);

    let mut counts: HashMap<&str, usize> = HashMap::new();
    let mut order: Vec<&str> = Vec::new();
    for word in &words {
        let count = counts.entry(word).or_insert(0);
        if *count == 0 {
            order.push(word);
        }
        *count += 1;
    }

    order.sort_by_key(|word| std::cmp::Reverse(counts[word]));
    order.truncate(top_n);
    order.into_iter().map(|word| word.to_string()).collect()
}

/// Job-description keywords present in (and absent from) the resume's
/// keyword pool. A display-oriented presence check, independent of the
/// cosine score.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordMatches {
    pub matched: Vec<Token>,
    pub unmatched: Vec<Token>,
}

pub fn find_matching_keywords(cv_text: &str, jd_text: &str) -> KeywordMatches {
    let cv_keywords: HashSet<Token> = extract_keywords(cv_text, CV_KEYWORD_POOL)
        .into_iter()
        .collect();
    let jd_keywords = extract_keywords(jd_text, JD_KEYWORD_POOL);

    let (matched, unmatched) = jd_keywords
        .into_iter()
        .partition(|keyword| cv_keywords.contains(keyword));

    KeywordMatches { matched, unmatched }
}
