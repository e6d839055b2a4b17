use std::sync::LazyLock;

use regex::Regex;

static NAME_LABEL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)name\s*:\s*([^\n]+)").expect("name pattern is valid"));

/// Placeholder when the text has no usable first line and no name label.
const FALLBACK_NAME: &str = "Candidate";

fn looks_like_name_word(word: &str) -> bool {
    word.chars()
        .all(|c| c.is_ascii_alphabetic() || c == '-' || c == '\'')
}

fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
        None => String::new(),
    }
}

/// Guess the candidate name from a resume text.
///
/// The first non-empty line is treated as the name when it reads like one
/// (1-4 words of letters, hyphens, and apostrophes); otherwise a
/// "name: <value>" label anywhere in the text is used. No validation that
/// the result is an actual human name.
pub fn extract_name(text: &str) -> String {
    let first_line = match text.lines().map(str::trim).find(|line| !line.is_empty()) {
        Some(line) => line,
        None => return "Unknown".to_string(),
    };

    let words: Vec<&str> = first_line
        .split_whitespace()
        .filter(|word| word.chars().count() > 1)
        .collect();

    if (1..=4).contains(&words.len()) && words.iter().all(|word| looks_like_name_word(word)) {
        return words
            .iter()
            .map(|word| title_case(word))
            .collect::<Vec<_>>()
            .join(" ");
    }

    if let Some(capture) = NAME_LABEL_PATTERN.captures(text) {
        return capture[1].trim().to_string();
    }

    FALLBACK_NAME.to_string()
}
