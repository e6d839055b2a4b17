use crate::constants::SECTION_HEADERS;

/// Scanner state for the line-by-line section pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    OutsideSection,
    InsideSection,
}

/// Returns true when the trimmed, lowercased line reads as a section header:
/// a known header name on its own, with a trailing colon, or pluralized.
fn is_header_line(lower_line: &str) -> bool {
    SECTION_HEADERS.iter().any(|header| {
        lower_line == *header
            || lower_line.starts_with(&format!("{}:", header))
            || lower_line == format!("{}s", header)
    })
}

/// Extract the body of a named section from free text.
///
/// The scan enters a section at a header line containing one of
/// `section_keywords` (substring match) and leaves at the next header line
/// that does not. Both delimiting header lines are excluded from the output.
/// Returns an empty string when no matching section header exists.
///
/// Callers are responsible for falling back to the whole document when the
/// returned section is too short to be informative (`MIN_SECTION_LEN`).
pub fn extract_section(text: &str, section_keywords: &[&str]) -> String {
    let mut state = ScanState::OutsideSection;
    let mut section_lines: Vec<&str> = Vec::new();

    for line in text.lines() {
        let lower_line = line.to_lowercase().trim().to_string();
        let is_header = is_header_line(&lower_line);
        let names_target = section_keywords.iter().any(|kw| lower_line.contains(kw));

        match state {
            ScanState::OutsideSection => {
                if is_header && names_target {
                    state = ScanState::InsideSection;
                    // Header line itself is excluded
                }
            }
            ScanState::InsideSection => {
                if is_header && names_target {
                    // A restatement of the target header stays inside
                    continue;
                }
                if is_header {
                    break;
                }
                section_lines.push(line);
            }
        }
    }

    section_lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    const RESUME: &str = "Jane Smith\n\
        Summary\n\
        Backend engineer.\n\
        Education\n\
        BSc Computer Science\n\
        University of Somewhere\n\
        Experience\n\
        Acme Corp, 2019-2024\n";

    #[test]
    fn collects_lines_between_headers() {
        let section = extract_section(RESUME, &["education"]);
        assert_eq!(section, "BSc Computer Science\nUniversity of Somewhere");
    }

    #[test]
    fn header_lines_are_excluded() {
        let section = extract_section(RESUME, &["education"]);
        assert!(!section.to_lowercase().contains("education"));
        assert!(!section.to_lowercase().contains("experience"));
    }

    #[test]
    fn section_runs_to_end_of_text_without_closing_header() {
        let section = extract_section(RESUME, &["experience"]);
        assert_eq!(section, "Acme Corp, 2019-2024");
    }

    #[test]
    fn no_matching_header_yields_empty_string() {
        let section = extract_section("just a paragraph of text", &["education"]);
        assert_eq!(section, "");
    }

    #[test]
    fn header_with_colon_and_plural_forms_are_recognized() {
        let text = "Skills:\nRust, SQL\nProjects\nscorer\n";
        assert_eq!(extract_section(text, &["skills"]), "Rust, SQL");

        let plural = "Educations\nBSc Computer Science\nSkills\nRust\n";
        assert_eq!(extract_section(plural, &["education"]), "BSc Computer Science");
    }

    #[test]
    fn non_header_mention_of_keyword_does_not_open_section() {
        let text = "I value education deeply\nEducation\nBSc Physics\n";
        assert_eq!(extract_section(text, &["education"]), "BSc Physics");
    }
}
