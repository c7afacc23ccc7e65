//! Program catalog listing.

use akademie_id::ProgramCode;
use anyhow::Result;
use serde::Serialize;
use tabled::Tabled;

use crate::output::print_output;

use super::CommandContext;

#[derive(Debug, Serialize, Tabled)]
struct ProgramRow {
    #[tabled(rename = "Code")]
    code: String,

    #[tabled(rename = "Name")]
    name: String,

    #[tabled(rename = "Default")]
    default: bool,
}

fn rows() -> Vec<ProgramRow> {
    ProgramCode::known()
        .iter()
        .map(|code| ProgramRow {
            code: code.to_string(),
            name: code.name().unwrap_or("-").to_string(),
            default: *code == ProgramCode::default(),
        })
        .collect()
}

pub fn run(ctx: CommandContext) -> Result<()> {
    print_output(&rows(), ctx.format);
    Ok(())
}
