//! Validate and parse commands.

use akademie_id::StudentNumber;
use anyhow::Result;
use clap::Args;
use serde::Serialize;
use tabled::Tabled;
use tracing::{debug, warn};

use crate::error::CliError;
use crate::output::{print_output, print_success, OutputFormat};

use super::{CommandContext, NumberView};

/// Validate student numbers. Exits non-zero if any is invalid.
#[derive(Debug, Args)]
pub struct ValidateCommand {
    /// Student numbers to check.
    #[arg(required = true, num_args = 1..)]
    candidates: Vec<String>,
}

#[derive(Debug, Serialize, Tabled)]
struct ValidationRow {
    #[tabled(rename = "Candidate")]
    candidate: String,

    #[tabled(rename = "Valid")]
    valid: bool,

    #[tabled(rename = "Reason")]
    reason: String,
}

impl ValidationRow {
    fn check(candidate: &str) -> Self {
        match StudentNumber::parse(candidate) {
            Ok(_) => Self {
                candidate: candidate.to_string(),
                valid: true,
                reason: "-".to_string(),
            },
            Err(e) => Self {
                candidate: candidate.to_string(),
                valid: false,
                reason: e.to_string(),
            },
        }
    }
}

impl ValidateCommand {
    pub fn run(self, ctx: CommandContext) -> Result<()> {
        let rows: Vec<ValidationRow> = self
            .candidates
            .iter()
            .map(|c| ValidationRow::check(c))
            .collect();

        for row in rows.iter().filter(|r| !r.valid) {
            warn!(candidate = %row.candidate, reason = %row.reason, "Invalid student number");
        }

        print_output(&rows, ctx.format);

        let invalid = rows.iter().filter(|r| !r.valid).count();
        if invalid > 0 {
            return Err(CliError::ValidationFailed {
                invalid,
                total: rows.len(),
            }
            .into());
        }

        if ctx.format == OutputFormat::Table {
            print_success(&format!("{} student number(s) valid", rows.len()));
        }

        Ok(())
    }
}

/// Show the parts of a student number.
#[derive(Debug, Args)]
pub struct ParseCommand {
    /// Student number to parse.
    candidate: String,
}

impl ParseCommand {
    pub fn run(self, ctx: CommandContext) -> Result<()> {
        let number = StudentNumber::parse(&self.candidate)
            .map_err(|e| CliError::invalid_number(&self.candidate, e))?;

        debug!(student_number = %number, "Parsed student number");

        print_output(&[NumberView::new(&number, ctx.domain())], ctx.format);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_row_valid() {
        let row = ValidationRow::check("20260100019");
        assert!(row.valid);
        assert_eq!(row.reason, "-");
    }

    #[test]
    fn test_validation_row_checksum() {
        let row = ValidationRow::check("20260100018");
        assert!(!row.valid);
        assert_eq!(row.reason, "check digit mismatch: expected 9, got 8");
    }

    #[test]
    fn test_validation_row_length() {
        let row = ValidationRow::check("1234");
        assert!(!row.valid);
        assert!(row.reason.contains("expected 11 digits"));
    }
}
