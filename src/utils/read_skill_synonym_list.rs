use std::io::Cursor;

use csv::ReaderBuilder;

use crate::models::Error;
use crate::types::SkillSynonymList;

/// Parse a skill synonym list from CSV text.
///
/// Expected columns: `Skill` (the canonical name) and `Synonyms` (a
/// comma-separated list of alternate names, possibly empty).
pub fn read_skill_synonym_list_from_string(csv: &str) -> Result<SkillSynonymList, Error> {
    let mut synonym_list = SkillSynonymList::new();

    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .from_reader(Cursor::new(csv));

    let headers = reader
        .headers()
        .map_err(|e| Error::ParserError(format!("Failed to read headers: {}", e)))?
        .clone();

    let skill_column = headers
        .iter()
        .position(|h| h == "Skill")
        .ok_or_else(|| Error::ParserError("Missing 'Skill' column".to_string()))?;
    let synonyms_column = headers
        .iter()
        .position(|h| h == "Synonyms")
        .ok_or_else(|| Error::ParserError("Missing 'Synonyms' column".to_string()))?;

    for record in reader.records() {
        let record =
            record.map_err(|e| Error::ParserError(format!("Failed to read record: {}", e)))?;

        let skill = record
            .get(skill_column)
            .ok_or_else(|| Error::ParserError("Missing 'Skill' field".to_string()))?
            .trim()
            .to_lowercase();

        let synonyms: Vec<String> = match record.get(synonyms_column) {
            Some(names) if !names.trim().is_empty() => names
                .split(',')
                .map(|name| name.trim().to_lowercase())
                .collect(),
            _ => Vec::new(),
        };

        synonym_list.push((skill, synonyms));
    }

    Ok(synonym_list)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_canonical_and_synonyms() {
        let csv = "Skill,Synonyms\njavascript,\"js, ecmascript\"\ntypescript,ts\n";
        let list = read_skill_synonym_list_from_string(csv).unwrap();
        assert_eq!(
            list,
            vec![
                (
                    "javascript".to_string(),
                    vec!["js".to_string(), "ecmascript".to_string()]
                ),
                ("typescript".to_string(), vec!["ts".to_string()]),
            ]
        );
    }

    #[test]
    fn empty_synonyms_field_yields_empty_list() {
        let csv = "Skill,Synonyms\nhtml,\n";
        let list = read_skill_synonym_list_from_string(csv).unwrap();
        assert_eq!(list, vec![("html".to_string(), vec![])]);
    }

    #[test]
    fn missing_column_is_a_parser_error() {
        let csv = "Name,Synonyms\nhtml,\n";
        assert!(read_skill_synonym_list_from_string(csv).is_err());
    }
}
