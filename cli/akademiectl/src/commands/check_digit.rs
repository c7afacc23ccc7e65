//! Check digit command.

use akademie_id::compute_check_digit;
use anyhow::Result;
use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use crate::output::print_output;

use super::CommandContext;

/// Compute the Luhn check digit for a payload.
#[derive(Debug, Args)]
pub struct CheckDigitCommand {
    /// Digits to compute the check digit over (for a student number, the first ten).
    payload: String,
}

#[derive(Debug, Serialize, Tabled)]
struct CheckDigitRow {
    #[tabled(rename = "Payload")]
    payload: String,

    #[tabled(rename = "Check Digit")]
    check_digit: u8,

    #[tabled(rename = "Full")]
    full: String,
}

impl CheckDigitCommand {
    pub fn run(self, ctx: CommandContext) -> Result<()> {
        let check_digit = compute_check_digit(&self.payload)?;
        let row = CheckDigitRow {
            full: format!("{}{}", self.payload, check_digit),
            payload: self.payload,
            check_digit,
        };

        print_output(&[row], ctx.format);
        Ok(())
    }
}
