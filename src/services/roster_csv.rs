//! Parsing of uploaded roster CSV files.
//!
//! Expected header columns: `Name` and `Expertise` (required), plus an
//! optional `Project Description` whose first-row cell supplies the
//! description for the whole request.

use csv::ReaderBuilder;

use crate::domain::{AppError, RosterEntry};

const DESCRIPTION_COLUMN: &str = "Project Description";
const NAME_COLUMN: &str = "Name";
const EXPERTISE_COLUMN: &str = "Expertise";

/// Description and roster recovered from one uploaded file.
#[derive(Debug, Clone, Default)]
pub struct UploadedRoster {
    pub description: String,
    pub roster: Vec<RosterEntry>,
}

/// Parse an uploaded CSV into a description and roster.
///
/// Rows missing a name or expertise are dropped, the same rule as partially
/// filled manual fields. Missing required columns or unreadable input return
/// a `ParseError`; nothing in here panics on malformed bytes.
pub fn parse_roster_csv(bytes: &[u8]) -> Result<UploadedRoster, AppError> {
    let mut reader = ReaderBuilder::new().flexible(true).from_reader(bytes);

    let headers = reader
        .headers()
        .map_err(|e| AppError::parse_error("roster file", e.to_string()))?
        .clone();

    let column = |name: &str| headers.iter().position(|header| header.trim() == name);

    let description_idx = column(DESCRIPTION_COLUMN);
    let name_idx = column(NAME_COLUMN)
        .ok_or_else(|| AppError::parse_error("roster file", missing_column(NAME_COLUMN)))?;
    let expertise_idx = column(EXPERTISE_COLUMN)
        .ok_or_else(|| AppError::parse_error("roster file", missing_column(EXPERTISE_COLUMN)))?;

    let mut description = String::new();
    let mut roster = Vec::new();

    for (row, record) in reader.records().enumerate() {
        let record = record.map_err(|e| AppError::parse_error("roster file", e.to_string()))?;

        if row == 0 {
            if let Some(idx) = description_idx {
                description = record.get(idx).unwrap_or_default().trim().to_string();
            }
        }

        let name = record.get(name_idx).unwrap_or_default();
        let expertise = record.get(expertise_idx).unwrap_or_default();
        if let Some(entry) = RosterEntry::from_fields(name, expertise) {
            roster.push(entry);
        }
    }

    Ok(UploadedRoster { description, roster })
}

fn missing_column(name: &str) -> String {
    format!("missing required column '{name}'")
}
