//! Config commands.

use anyhow::Result;
use clap::{Args, Subcommand};

use crate::output::{print_single, OutputFormat};

use super::CommandContext;

/// Inspect CLI configuration.
#[derive(Debug, Args)]
pub struct ConfigCommand {
    #[command(subcommand)]
    command: ConfigSubcommand,
}

#[derive(Debug, Subcommand)]
enum ConfigSubcommand {
    /// Show the effective configuration.
    Show,
}

impl ConfigCommand {
    pub fn run(self, ctx: CommandContext) -> Result<()> {
        match self.command {
            ConfigSubcommand::Show => show(ctx),
        }
    }
}

fn show(ctx: CommandContext) -> Result<()> {
    let config = &ctx.config;

    match ctx.format {
        OutputFormat::Json => print_single(config),
        OutputFormat::Table => {
            let path = config
                .path
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "-".to_string());
            println!("config_path: {}", path);
            println!("email_domain: {}", config.email_domain);
            println!("log_level: {}", config.log_level);
            println!("log_format: {}", config.log_format);
        }
    }

    Ok(())
}
