//! Input Collector: builds a submission from manual form fields or an
//! uploaded roster file.
//!
//! The two sources are mutually exclusive; when a file is given, the manual
//! prompts (including the language selector) are skipped entirely.

use std::io::ErrorKind;
use std::path::Path;

use dialoguer::{Error as DialoguerError, Input, Select};

use crate::domain::{AppError, AssignmentRequest, Language, RosterEntry};
use crate::services::parse_roster_csv;

/// Raw collected state, before the submission gate.
#[derive(Debug, Clone, Default)]
pub struct CollectedInput {
    pub description: String,
    pub roster: Vec<RosterEntry>,
    pub preferred_language: Option<Language>,
}

impl CollectedInput {
    /// Validation gate: succeeds only for a non-empty description and a
    /// roster with at least one entry.
    pub fn into_request(self) -> Result<AssignmentRequest, AppError> {
        AssignmentRequest::new(self.description, self.roster, self.preferred_language)
    }
}

/// Collect a submission interactively.
///
/// Returns `Ok(None)` when the user cancels at a prompt (Ctrl-C); partially
/// filled member rows are dropped without comment.
pub fn collect_manual() -> Result<Option<CollectedInput>, AppError> {
    let Some(description) = read_text("Project description")? else {
        return Ok(None);
    };

    let Some(member_count) = read_member_count()? else {
        return Ok(None);
    };

    let mut roster = Vec::new();
    for index in 0..member_count {
        let Some(name) = read_text(&format!("Member {} name", index + 1))? else {
            return Ok(None);
        };
        let expertise_prompt = if name.trim().is_empty() {
            format!("Member {} expertise", index + 1)
        } else {
            format!("{}'s expertise", name.trim())
        };
        let Some(expertise) = read_text(&expertise_prompt)? else {
            return Ok(None);
        };

        if let Some(entry) = RosterEntry::from_fields(&name, &expertise) {
            roster.push(entry);
        }
    }

    let Some(language) = read_language()? else {
        return Ok(None);
    };

    Ok(Some(CollectedInput {
        description,
        roster,
        preferred_language: Some(language),
    }))
}

/// Collect a submission from an uploaded roster file.
pub fn collect_from_file(path: &Path) -> Result<CollectedInput, AppError> {
    let bytes = std::fs::read(path).map_err(|err| match err.kind() {
        ErrorKind::NotFound => AppError::RosterFileNotFound(path.display().to_string()),
        _ => AppError::Io(err),
    })?;

    let uploaded = parse_roster_csv(&bytes)?;
    Ok(CollectedInput {
        description: uploaded.description,
        roster: uploaded.roster,
        preferred_language: None,
    })
}

/// Echo the collected input, mirroring the submitted form.
pub fn echo(input: &CollectedInput) {
    if !input.description.trim().is_empty() {
        println!("Project Description:");
        println!("{}", input.description);
    }

    if !input.roster.is_empty() {
        println!("Team Members and Expertise:");
        for entry in &input.roster {
            println!("{}", entry);
        }
    }
}

// Empty answers are always accepted here; completeness is checked at the
// submission gate, not per field.
fn read_text(prompt: &str) -> Result<Option<String>, AppError> {
    match Input::<String>::new().with_prompt(prompt).allow_empty(true).interact_text() {
        Ok(value) => Ok(Some(value)),
        Err(DialoguerError::IO(err)) if err.kind() == ErrorKind::Interrupted => Ok(None),
        Err(err) => Err(AppError::config_error(format!("Failed to read {prompt}: {err}"))),
    }
}

fn read_member_count() -> Result<Option<usize>, AppError> {
    let result = Input::<usize>::new()
        .with_prompt("Number of team members (1-10)")
        .default(1)
        .validate_with(|count: &usize| {
            if (1..=10).contains(count) { Ok(()) } else { Err("must be between 1 and 10") }
        })
        .interact_text();

    match result {
        Ok(value) => Ok(Some(value)),
        Err(DialoguerError::IO(err)) if err.kind() == ErrorKind::Interrupted => Ok(None),
        Err(err) => Err(AppError::config_error(format!("Failed to read member count: {err}"))),
    }
}

fn read_language() -> Result<Option<Language>, AppError> {
    let items: Vec<&str> = Language::ALL.iter().map(|language| language.as_str()).collect();

    let selection = Select::new()
        .with_prompt("Preferred programming language")
        .items(&items)
        .default(0)
        .interact();

    match selection {
        Ok(index) => Ok(Some(Language::ALL[index])),
        Err(DialoguerError::IO(err)) if err.kind() == ErrorKind::Interrupted => Ok(None),
        Err(err) => Err(AppError::config_error(format!("Language selection failed: {err}"))),
    }
}
