//! Query command implementation.
//!
//! Builds records exactly like `index` but prints them as JSON instead of
//! uploading. Drafts are left out unless `--drafts` is given.

mod output;

use anyhow::Result;

use crate::cli::args::QueryArgs;
use crate::cli::common::{build_records, drop_drafts};
use crate::config::IndexConfig;
use crate::log;
use crate::utils::plural::plural_count;

/// Execute query command
pub fn run_query(args: &QueryArgs, config: &IndexConfig) -> Result<()> {
    let mut records = build_records(config)?;

    if !args.drafts {
        let skipped = drop_drafts(&mut records);
        if skipped > 0 {
            log!("query"; "skipping {} (use --drafts to include)", plural_count(skipped, "draft"));
        }
    }

    log!("query"; "found {}", plural_count(records.len(), "record"));

    output::output_records(&mut records, args)
}
