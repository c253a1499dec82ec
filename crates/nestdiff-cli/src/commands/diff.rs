//! Diff command
//!
//! Usage: nestdiff diff <FIRST> <SECOND> [--asymmetric] [--loose] [--format <FORMAT>]

use crate::input::load_json;
use clap::{Args, ValueEnum};
use nestdiff_core::diff::{diff_records, render_human_summary, DiffOptions};
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct DiffArgs {
    /// First JSON document
    pub first: PathBuf,

    /// Second JSON document
    pub second: PathBuf,

    /// Do not report keys that only the second document has
    #[arg(long)]
    pub asymmetric: bool,

    /// Compare arrays of scalars as sets, ignoring order and duplicates
    #[arg(long)]
    pub loose: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Exit with status 1 when differences are found
    #[arg(long)]
    pub check: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One message per line
    Text,
    /// Markdown summary grouped by category
    Markdown,
    /// JSON array of structured records
    Json,
}

/// Execute diff command
pub fn execute(args: DiffArgs) -> Result<(), Box<dyn std::error::Error>> {
    let first = load_json(&args.first)?;
    let second = load_json(&args.second)?;

    let options = DiffOptions::default()
        .with_symmetric_match(!args.asymmetric)
        .with_strict_match(!args.loose);
    let records = diff_records(&first, &second, &options);

    match args.format {
        OutputFormat::Text => {
            for record in &records {
                println!("{}", record);
            }
        }
        OutputFormat::Markdown => print!("{}", render_human_summary(&records)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&records)?),
    }

    if args.check && !records.is_empty() {
        return Err(format!("{} difference(s) found", records.len()).into());
    }
    Ok(())
}
