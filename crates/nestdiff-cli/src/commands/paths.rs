//! Paths command
//!
//! Usage: nestdiff paths <FILE> [--nested]

use crate::input::load_mapping;
use clap::Args;
use nestdiff_core::paths::{enumerate_nested_paths, enumerate_paths};
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct PathsArgs {
    /// JSON document with an object at its root
    pub file: PathBuf,

    /// Depth-limited enumeration that carries only the parent key and skips
    /// unsupported values
    #[arg(long)]
    pub nested: bool,
}

/// Execute paths command, printing one JSON array per path
pub fn execute(args: PathsArgs) -> Result<(), Box<dyn std::error::Error>> {
    let mapping = load_mapping(&args.file)?;

    let paths = if args.nested {
        enumerate_nested_paths(&mapping)
    } else {
        enumerate_paths(&mapping)?
    };

    for path in &paths {
        println!("{}", serde_json::to_string(path)?);
    }
    Ok(())
}
