//! Encode and issue commands.

use akademie_id::{next_sequence_number, ProgramCode, StudentNumber};
use anyhow::{Context, Result};
use chrono::Datelike;
use clap::Args;
use tracing::info;

use crate::output::print_output;

use super::{CommandContext, NumberView};

/// Encode a student number from year, program, and sequence.
#[derive(Debug, Args)]
pub struct EncodeCommand {
    /// Registration year (defaults to the current year).
    #[arg(long)]
    year: Option<u32>,

    /// Program code or name (e.g. 1, 02, math, tutors).
    #[arg(long, default_value = "1")]
    program: String,

    /// Sequence number (1-9999).
    #[arg(long)]
    sequence: u32,
}

impl EncodeCommand {
    pub fn run(self, ctx: CommandContext) -> Result<()> {
        let year = resolve_year(self.year)?;
        let program = ProgramCode::lookup(&self.program)?;

        let number = StudentNumber::issue(year, program.into(), self.sequence)?;

        info!(
            student_number = %number,
            year,
            program_code = %program,
            sequence_number = self.sequence,
            "Encoded student number"
        );

        print_output(&[NumberView::new(&number, ctx.domain())], ctx.format);
        Ok(())
    }
}

/// Issue the next student number for a year and program.
///
/// The caller supplies the highest sequence number already issued; this
/// command does not track issuance itself.
#[derive(Debug, Args)]
pub struct IssueCommand {
    /// Registration year (defaults to the current year).
    #[arg(long)]
    year: Option<u32>,

    /// Program code or name (e.g. 1, 02, math, tutors).
    #[arg(long, default_value = "1")]
    program: String,

    /// Highest sequence number already issued for this year and program (0 if none).
    #[arg(long, default_value_t = 0)]
    max_issued: u32,
}

impl IssueCommand {
    pub fn run(self, ctx: CommandContext) -> Result<()> {
        let year = resolve_year(self.year)?;
        let program = ProgramCode::lookup(&self.program)?;
        let sequence = next_sequence_number(self.max_issued)?;

        let number = StudentNumber::issue(year, program.into(), sequence.into())?;

        info!(
            student_number = %number,
            max_issued = self.max_issued,
            "Issued student number"
        );

        print_output(&[NumberView::new(&number, ctx.domain())], ctx.format);
        Ok(())
    }
}

fn resolve_year(year: Option<u32>) -> Result<u32> {
    match year {
        Some(year) => Ok(year),
        None => u32::try_from(chrono::Utc::now().year())
            .context("Current year is before year 0; pass --year explicitly"),
    }
}
