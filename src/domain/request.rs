use std::fmt;

use super::AppError;

/// One team member and their area of expertise.
///
/// Guarantees: both fields are non-empty after trimming.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterEntry {
    name: String,
    expertise: String,
}

impl RosterEntry {
    /// Build an entry from a pair of form fields.
    ///
    /// Returns `None` when either field is empty, so partially filled rows
    /// are dropped rather than rejected with an error.
    pub fn from_fields(name: &str, expertise: &str) -> Option<RosterEntry> {
        let name = name.trim();
        let expertise = expertise.trim();
        if name.is_empty() || expertise.is_empty() {
            return None;
        }
        Some(RosterEntry { name: name.to_string(), expertise: expertise.to_string() })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn expertise(&self) -> &str {
        &self.expertise
    }
}

impl fmt::Display for RosterEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.expertise)
    }
}

/// The closed set of preferred implementation languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Python,
    Java,
    Cpp,
    C,
}

impl Language {
    /// All selectable languages in display order.
    pub const ALL: [Language; 4] = [Language::Python, Language::Java, Language::Cpp, Language::C];

    /// Label used in the selector and in prompts.
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Python => "Python",
            Language::Java => "Java",
            Language::Cpp => "C++",
            Language::C => "C",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A validated, immutable record of one submission.
///
/// Construction is the validation gate: a request only exists when the
/// description is non-empty and the roster has at least one entry, so the
/// requester never has to re-check.
#[derive(Debug, Clone)]
pub struct AssignmentRequest {
    description: String,
    roster: Vec<RosterEntry>,
    preferred_language: Option<Language>,
}

impl AssignmentRequest {
    pub fn new(
        description: String,
        roster: Vec<RosterEntry>,
        preferred_language: Option<Language>,
    ) -> Result<AssignmentRequest, AppError> {
        if description.trim().is_empty() || roster.is_empty() {
            return Err(AppError::IncompleteInput);
        }
        Ok(AssignmentRequest { description, roster, preferred_language })
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn roster(&self) -> &[RosterEntry] {
        &self.roster
    }

    pub fn preferred_language(&self) -> Option<Language> {
        self.preferred_language
    }

    /// Roster rendered for prompts: `name: expertise` pairs joined by `"; "`.
    pub fn roster_summary(&self) -> String {
        self.roster.iter().map(|entry| entry.to_string()).collect::<Vec<_>>().join("; ")
    }
}
