//! Covers command
//!
//! Usage: nestdiff covers <FIRST> <SECOND>

use crate::input::load_json;
use clap::Args;
use nestdiff_core::compare::{as_mapping_list, compare_lists_of_equal_length_mappings};
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct CoversArgs {
    /// JSON array of objects that must all be found
    pub first: PathBuf,

    /// JSON array of objects to search, same length as FIRST
    pub second: PathBuf,
}

/// Execute covers command, printing `true` or `false`
pub fn execute(args: CoversArgs) -> Result<(), Box<dyn std::error::Error>> {
    let first = as_mapping_list(&load_json(&args.first)?)?;
    let second = as_mapping_list(&load_json(&args.second)?)?;

    let covered = compare_lists_of_equal_length_mappings(&first, &second)?;
    println!("{}", covered);
    Ok(())
}
