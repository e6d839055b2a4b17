use std::collections::HashMap;

use crate::types::Token;

/// Calculate cosine similarity between two sparse term-frequency vectors.
///
/// Terms missing from either vector contribute zero to the dot product, so
/// iterating one map and probing the other covers the vocabulary union.
pub fn cosine_similarity(vec_a: &HashMap<Token, f64>, vec_b: &HashMap<Token, f64>) -> f64 {
    let mut dot_product = 0.0;
    let mut norm_a = 0.0;
    let mut norm_b = 0.0;

    for (term, weight) in vec_a {
        norm_a += weight * weight;
        if let Some(weight_b) = vec_b.get(term) {
            dot_product += weight * weight_b;
        }
    }

    for weight in vec_b.values() {
        norm_b += weight * weight;
    }

    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }

    dot_product / (norm_a.sqrt() * norm_b.sqrt())
}
