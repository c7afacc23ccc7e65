//! akademiectl (ak) - CLI for Excellence Akademie student numbers
//!
//! Issues, validates, and inspects student numbers, and derives the login
//! email addresses assigned to them.

use clap::Parser;

mod commands;
mod config;
mod error;
mod logging;
mod output;

use commands::Cli;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = cli.run() {
        error::print_error(&e);
        std::process::exit(1);
    }
}
