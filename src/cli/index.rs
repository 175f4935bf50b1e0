//! Index command implementation.
//!
//! Builds every record and pushes it to the configured search index.

use anyhow::{Context, Result};

use crate::cli::args::IndexArgs;
use crate::cli::common::{build_records, drop_drafts};
use crate::config::IndexConfig;
use crate::log;
use crate::page::IndexRecord;
use crate::search::{AlgoliaIndex, SearchIndex, UploadReport, Uploader};
use crate::utils::plural::plural_count;

/// Execute index command
pub fn run_index(args: &IndexArgs, config: &IndexConfig) -> Result<()> {
    let mut records = build_records(config)?;
    if args.skip_drafts {
        let skipped = drop_drafts(&mut records);
        if skipped > 0 {
            log!("index"; "skipping {}", plural_count(skipped, "draft"));
        }
    }

    let index = AlgoliaIndex::new(&config.index)?;
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("failed to start async runtime")?;

    let report = runtime.block_on(upload_records(&index, &mut records));
    log_summary(&report);
    Ok(())
}

/// Upload records; per-record failures are counted in the report.
pub async fn upload_records(index: &dyn SearchIndex, records: &mut [IndexRecord]) -> UploadReport {
    log!(
        "index";
        "indexing {} into `{}`",
        plural_count(records.len(), "record"),
        index.name()
    );
    Uploader::new(index).upload(records).await
}

fn log_summary(report: &UploadReport) {
    if report.is_success() {
        log!("upload"; "submitted {}", plural_count(report.submitted, "record"));
    } else {
        log!(
            "warning";
            "submitted {} of {}, {} failed",
            report.submitted,
            plural_count(report.total(), "record"),
            report.failed
        );
    }
}
