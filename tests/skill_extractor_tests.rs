use resume_scorer::extract_skills;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_skills_from_plain_listing() {
        let text = "Skills: Python, Django, PostgreSQL, Docker, Kubernetes";
        let skills = extract_skills(text);

        for expected in ["python", "django", "postgresql", "docker", "kubernetes"] {
            assert!(
                skills.contains(&expected.to_string()),
                "Missing expected skill: {}",
                expected
            );
        }
    }

    #[test]
    fn test_extract_skills_with_synonyms() {
        let text = "Wrote js services on node.js, deployed to k8s.";
        let skills = extract_skills(text);

        assert!(skills.contains(&"javascript".to_string()));
        assert!(skills.contains(&"node".to_string()));
        assert!(skills.contains(&"kubernetes".to_string()));
    }

    #[test]
    fn test_extract_skills_output_is_sorted_and_unique() {
        let text = "Rust and rust and RUST, plus SQL and sql.";
        let skills = extract_skills(text);

        let mut expected = skills.clone();
        expected.sort();
        expected.dedup();
        assert_eq!(skills, expected);
    }

    #[test]
    fn test_extract_skills_is_idempotent() {
        let text = "Terraform, Ansible, Jenkins, and AWS on a good day.";
        assert_eq!(extract_skills(text), extract_skills(text));
    }

    #[test]
    fn test_extract_skills_empty_text() {
        assert!(extract_skills("").is_empty());
    }

    #[test]
    fn test_multi_word_and_concept_skills() {
        let text = "Applied machine learning and agile delivery with REST and GraphQL APIs.";
        let skills = extract_skills(text);

        assert!(skills.contains(&"machine learning".to_string()));
        assert!(skills.contains(&"agile".to_string()));
        assert!(skills.contains(&"rest".to_string()));
        assert!(skills.contains(&"graphql".to_string()));
    }
}
