//! Error handling and display for the CLI.

use akademie_id::{IdError, StudentNumber};
use colored::Colorize;
use thiserror::Error;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("Invalid student number '{candidate}'")]
    InvalidStudentNumber {
        candidate: String,
        #[source]
        source: IdError,
    },

    #[error("{invalid} of {total} student numbers failed validation")]
    ValidationFailed { invalid: usize, total: usize },
}

const FORMAT_HINT: &str = "Hint: Student numbers are exactly 11 digits: YYYYPPSSSSC.";

impl CliError {
    /// Wrap a parse failure with the input that caused it.
    pub fn invalid_number(candidate: impl Into<String>, source: IdError) -> Self {
        Self::InvalidStudentNumber {
            candidate: candidate.into(),
            source,
        }
    }
}

/// Print an error in a user-friendly format.
pub fn print_error(err: &anyhow::Error) {
    eprintln!("{} {}", "Error:".red().bold(), err);
    for cause in err.chain().skip(1) {
        eprintln!("  {} {}", "caused by:".dimmed(), cause);
    }

    if let Some(hint) = hint_for(err) {
        eprintln!("\n{}", hint.yellow());
    }
}

fn hint_for(err: &anyhow::Error) -> Option<&'static str> {
    if let Some(cli_err) = err.downcast_ref::<CliError>() {
        return match cli_err {
            CliError::InvalidStudentNumber { source, .. } if source.is_format_error() => {
                Some(FORMAT_HINT)
            }
            CliError::InvalidStudentNumber { source, .. } => id_hint(source),
            CliError::ValidationFailed { .. } => None,
        };
    }

    if let Some(id_err) = err.chain().find_map(|e| e.downcast_ref::<IdError>()) {
        return id_hint(id_err);
    }

    None
}

fn id_hint(err: &IdError) -> Option<&'static str> {
    match err {
        IdError::ChecksumMismatch { .. } => {
            Some("Hint: The check digit does not match. Re-check each digit for typos.")
        }
        IdError::Empty {
            field: "student number",
        }
        | IdError::InvalidLength {
            expected: StudentNumber::LENGTH,
            ..
        } => Some(FORMAT_HINT),
        IdError::Empty { field: "program" } | IdError::UnknownProgram(_) => {
            Some("Hint: Run `ak programs` to list program names, or pass a numeric code.")
        }
        IdError::SequenceExhausted { .. } => {
            Some("Hint: All 9999 sequence numbers for this year and program are taken.")
        }
        IdError::InvalidDomain { .. } => {
            Some("Hint: Set a valid domain with --domain, AK_EMAIL_DOMAIN, or the config file.")
        }
        _ => None,
    }
}
