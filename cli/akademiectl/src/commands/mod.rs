//! CLI commands.

mod check_digit;
mod config;
mod email;
mod encode;
mod inspect;
mod programs;

use akademie_id::{EmailDomain, StudentNumber};
use anyhow::Result;
use clap::{Parser, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use crate::config::Config;
use crate::logging;
use crate::output::OutputFormat;

/// Excellence Akademie student number tool.
#[derive(Debug, Parser)]
#[command(name = "ak")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output format.
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,

    /// Login email domain (overrides the config file).
    #[arg(long, global = true, env = "AK_EMAIL_DOMAIN")]
    domain: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Encode a student number from its parts.
    Encode(encode::EncodeCommand),

    /// Issue the next student number after the highest one already issued.
    Issue(encode::IssueCommand),

    /// Validate one or more student numbers.
    Validate(inspect::ValidateCommand),

    /// Break a student number into its parts.
    Parse(inspect::ParseCommand),

    /// Derive the login email for a student number, or recover one from an email.
    Email(email::EmailCommand),

    /// Compute the Luhn check digit for a string of digits.
    CheckDigit(check_digit::CheckDigitCommand),

    /// List named program codes.
    Programs,

    /// Show effective configuration.
    Config(config::ConfigCommand),

    /// Show CLI version.
    Version,
}

impl Cli {
    /// Run the CLI command.
    pub fn run(self) -> Result<()> {
        let config = Config::load(self.domain.as_deref())?;
        logging::init(&config);

        tracing::debug!(
            email_domain = %config.email_domain,
            config_path = ?config.path,
            "Configuration loaded"
        );

        let ctx = CommandContext {
            config,
            format: self.format,
        };

        match self.command {
            Commands::Encode(cmd) => cmd.run(ctx),
            Commands::Issue(cmd) => cmd.run(ctx),
            Commands::Validate(cmd) => cmd.run(ctx),
            Commands::Parse(cmd) => cmd.run(ctx),
            Commands::Email(cmd) => cmd.run(ctx),
            Commands::CheckDigit(cmd) => cmd.run(ctx),
            Commands::Programs => programs::run(ctx),
            Commands::Config(cmd) => cmd.run(ctx),
            Commands::Version => {
                println!("ak {}", env!("CARGO_PKG_VERSION"));
                Ok(())
            }
        }
    }
}

/// Shared command context.
pub struct CommandContext {
    pub config: Config,
    pub format: OutputFormat,
}

impl CommandContext {
    /// The login email domain in effect.
    pub fn domain(&self) -> &EmailDomain {
        &self.config.email_domain
    }
}

/// One student number broken into its parts.
#[derive(Debug, Clone, Serialize, Tabled)]
pub(crate) struct NumberView {
    #[tabled(rename = "Student Number")]
    student_number: String,

    #[tabled(rename = "Year")]
    year: u16,

    #[tabled(rename = "Program")]
    program_code: String,

    #[tabled(rename = "Program Name")]
    program_name: String,

    #[tabled(rename = "Sequence")]
    sequence_number: u16,

    #[tabled(rename = "Check")]
    check_digit: u8,

    #[tabled(rename = "Login Email")]
    login_email: String,
}

impl NumberView {
    pub(crate) fn new(number: &StudentNumber, domain: &EmailDomain) -> Self {
        let parts = number.parts();
        Self {
            student_number: number.to_string(),
            year: parts.year,
            program_code: number.program_code().to_string(),
            program_name: number.program_code().name().unwrap_or("-").to_string(),
            sequence_number: parts.sequence_number,
            check_digit: parts.check_digit,
            login_email: number.login_email(domain),
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_global_flags() {
        let cli =
            Cli::try_parse_from(["ak", "parse", "20260100019", "--format", "json"]).unwrap();
        assert_eq!(cli.format, OutputFormat::Json);
        assert!(matches!(cli.command, Commands::Parse(_)));
    }

    #[test]
    fn test_domain_flag_reads_env() {
        let cmd = Cli::command();
        let domain = cmd
            .get_arguments()
            .find(|arg| arg.get_id() == "domain")
            .unwrap();
        assert_eq!(domain.get_env(), Some(std::ffi::OsStr::new("AK_EMAIL_DOMAIN")));
    }

    #[test]
    fn test_validate_requires_candidate() {
        assert!(Cli::try_parse_from(["ak", "validate"]).is_err());
    }

    #[test]
    fn test_number_view() {
        let number = StudentNumber::issue(2026, 2, 104).unwrap();
        let view = NumberView::new(&number, &EmailDomain::default());
        assert_eq!(view.student_number, "20260201049");
        assert_eq!(view.program_code, "02");
        assert_eq!(view.program_name, "math");
        assert_eq!(view.login_email, "20260201049@excellenceakademie.co.za");
    }
}
