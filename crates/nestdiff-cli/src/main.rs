//! nestdiff CLI
//!
//! Command-line interface over the nestdiff utilities

use clap::{Parser, Subcommand, ValueEnum};
use nestdiff_core::logging_facility::{self, Profile};

mod commands;
mod input;

#[derive(Debug, Parser)]
#[command(name = "nestdiff")]
#[command(about = "nestdiff - Compare and walk nested JSON documents", long_about = None)]
struct Cli {
    /// Emit operation logs to stderr
    #[arg(long, global = true, value_enum)]
    log: Option<LogProfile>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogProfile {
    /// Human-readable logs
    Development,
    /// JSON structured logs
    Production,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Report structural differences between two JSON documents
    Diff(commands::diff::DiffArgs),
    /// List every root-to-leaf path of a JSON object
    Paths(commands::paths::PathsArgs),
    /// Check that every object of one array occurs in another of equal length
    Covers(commands::covers::CoversArgs),
}

fn main() {
    let cli = Cli::parse();

    match cli.log {
        Some(LogProfile::Development) => logging_facility::init(Profile::Development),
        Some(LogProfile::Production) => logging_facility::init(Profile::Production),
        None => {}
    }

    let result = match cli.command {
        Commands::Diff(args) => commands::diff::execute(args),
        Commands::Paths(args) => commands::paths::execute(args),
        Commands::Covers(args) => commands::covers::execute(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
