// Types listed here are either shared across multiple files and/or exposed via the library.

/// Represents a token as an owned `String`. Tokens are the basic units used for processing text.
pub type Token = String;

/// Represents a borrowed view of a token as a `str`. This is used when ownership is not required.
pub type TokenRef = str;

/// Represents a canonical skill name (e.g. "javascript") as an owned `String`.
/// All recognized synonyms collapse to this single preferred form.
pub type CanonicalSkill = String;

/// Represents a synonym or alternate spelling of a skill (e.g. "js") as an owned `String`.
pub type SkillSynonym = String;

/// A canonical skill name found in a text. Always lowercase.
pub type SkillName = String;

/// A list of skill synonym entries, where each entry includes:
/// - `CanonicalSkill`: The preferred name for the skill.
/// - `Vec<SkillSynonym>`: Alternate names and spellings that map to it.
pub type SkillSynonymList = Vec<(CanonicalSkill, Vec<SkillSynonym>)>;

/// Education level on the 0-6 scale (0 = none detected, 6 = doctorate).
pub type EducationLevel = u8;

/// Years of professional experience claimed by a text.
pub type ExperienceYears = u32;
