//! Common utilities shared across CLI commands.

use anyhow::{Context, Result};

use crate::config::IndexConfig;
use crate::log;
use crate::page::{IndexRecord, RecordBuilder, collect_documents};
use crate::utils::path::relative_to;
use crate::utils::plural::plural_count;

/// Discover every document under the content directory and build its record.
///
/// Records keep discovery order (groups, then files, by name).
pub fn build_records(config: &IndexConfig) -> Result<Vec<IndexRecord>> {
    let content_dir = &config.source.dir;
    let documents = collect_documents(&config.source)?;

    log!(
        "index";
        "found {} in {}",
        plural_count(documents.len(), "file"),
        relative_to(content_dir, &config.root).display()
    );

    let builder =
        RecordBuilder::from_config(&config.meta).context("failed to compile header fields")?;
    Ok(documents.iter().map(|doc| builder.build(doc)).collect())
}

/// Remove draft records, returning how many were dropped.
pub fn drop_drafts(records: &mut Vec<IndexRecord>) -> usize {
    let before = records.len();
    records.retain(|record| !record.is_draft());
    before - records.len()
}
