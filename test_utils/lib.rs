use std::fs;

use resume_scorer::{score_resume_with_config, JdRequirements, ScoreResult, Weights};

/// Utility to load a fixture text file for testing and benchmarking,
/// stripping `EXPECTED_*:` and `COMMENT:` annotation lines.
pub fn load_fixture_text(file_path: &str) -> String {
    let raw_text = fs::read_to_string(file_path).expect("Failed to read fixture file");

    raw_text
        .lines()
        .filter(|line| {
            let trimmed = line.trim_start();
            !trimmed.starts_with("EXPECTED_") && !trimmed.starts_with("COMMENT:")
        })
        .collect::<Vec<&str>>()
        .join("\n")
}

/// All values annotated under a given key, e.g. every `EXPECTED_SKILL:` line.
pub fn get_expected_values(file_path: &str, key: &str) -> Vec<String> {
    let content = fs::read_to_string(file_path).expect("Failed to read fixture file");
    let prefix = format!("{}:", key);

    content
        .lines()
        .filter_map(|line| {
            let line = line.trim();
            line.strip_prefix(&prefix)
                .map(|value| value.trim().to_string())
        })
        .collect()
}

/// The single value annotated under a key, if present.
pub fn get_expected_value(file_path: &str, key: &str) -> Option<String> {
    get_expected_values(file_path, key).into_iter().next()
}

/// Score a fixture resume against a fixture job description, with the
/// annotation lines of both files stripped out.
pub fn run_scoring_for_files(jd_path: &str, cv_path: &str, weights: Weights) -> ScoreResult {
    let jd_text = load_fixture_text(jd_path);
    let cv_text = load_fixture_text(cv_path);
    score_resume_with_config(&cv_text, &jd_text, &JdRequirements::default(), weights)
}
