//! readmecheck - README integrity checks
//!
//! readmecheck provides:
//! - README discovery at a repository root
//! - Anchor and table-of-contents consistency checks
//! - Image, guide link and contact email validation
//! - Unified output format (jsonl/json/md/text)

use clap::Parser;
use std::process::ExitCode;

mod checks;
mod cli;
mod config;
mod core;
mod document;

fn main() -> ExitCode {
    let cli = cli::Cli::parse();
    cli::init_logging(cli.verbose, cli.quiet);

    match cli::run(cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitCode::from(2)
        }
    }
}
