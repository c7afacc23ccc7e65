//! Login email commands.

use akademie_id::{derive_login_email, student_number_from_email, StudentNumber};
use anyhow::Result;
use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;
use tracing::debug;

use crate::error::CliError;
use crate::output::print_output;

use super::{CommandContext, NumberView};

/// Login email commands.
#[derive(Debug, Args)]
pub struct EmailCommand {
    #[command(subcommand)]
    command: EmailSubcommand,
}

#[derive(Debug, Subcommand)]
enum EmailSubcommand {
    /// Derive the login email for a student number.
    Derive(DeriveArgs),

    /// Recover the student number from a login email.
    Lookup(LookupArgs),
}

#[derive(Debug, Args)]
struct DeriveArgs {
    /// Student number.
    candidate: String,

    /// Reject the candidate unless it is a valid student number.
    #[arg(long)]
    strict: bool,
}

#[derive(Debug, Args)]
struct LookupArgs {
    /// Login email address.
    email: String,
}

#[derive(Debug, Serialize, Tabled)]
struct EmailRow {
    #[tabled(rename = "Student Number")]
    student_number: String,

    #[tabled(rename = "Login Email")]
    login_email: String,
}

impl EmailCommand {
    pub fn run(self, ctx: CommandContext) -> Result<()> {
        match self.command {
            EmailSubcommand::Derive(args) => derive(ctx, args),
            EmailSubcommand::Lookup(args) => lookup(ctx, args),
        }
    }
}

fn derive(ctx: CommandContext, args: DeriveArgs) -> Result<()> {
    if args.strict {
        StudentNumber::parse(&args.candidate)
            .map_err(|e| CliError::invalid_number(&args.candidate, e))?;
    }

    let row = EmailRow {
        login_email: derive_login_email(&args.candidate, ctx.domain().as_str()),
        student_number: args.candidate,
    };

    debug!(login_email = %row.login_email, "Derived login email");

    print_output(&[row], ctx.format);
    Ok(())
}

fn lookup(ctx: CommandContext, args: LookupArgs) -> Result<()> {
    let number = student_number_from_email(&args.email, ctx.domain())?;

    debug!(student_number = %number, "Resolved login email");

    print_output(&[NumberView::new(&number, ctx.domain())], ctx.format);
    Ok(())
}
