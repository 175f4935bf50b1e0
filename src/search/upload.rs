//! Sequential record upload.

use crate::logger::ProgressLine;
use crate::page::IndexRecord;
use crate::{debug, log};

use super::SearchIndex;

/// Outcome of an upload run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UploadReport {
    /// Records the index accepted.
    pub submitted: usize,
    /// Records the index rejected or that never reached it.
    pub failed: usize,
}

impl UploadReport {
    #[inline]
    pub const fn total(&self) -> usize {
        self.submitted + self.failed
    }

    #[inline]
    pub const fn is_success(&self) -> bool {
        self.failed == 0
    }
}

/// Pushes records into a [`SearchIndex`] one at a time.
pub struct Uploader<'a> {
    index: &'a dyn SearchIndex,
}

impl<'a> Uploader<'a> {
    pub fn new(index: &'a dyn SearchIndex) -> Self {
        Self { index }
    }

    /// Upload every record, backfilling its `objectID` first.
    ///
    /// A failure is logged and counted; the remaining records are still sent.
    pub async fn upload(&self, records: &mut [IndexRecord]) -> UploadReport {
        let total = records.len();
        let progress = ProgressLine::new("upload", &[("ok", total), ("failed", total)]);

        for record in records.iter_mut() {
            let object_id = record.ensure_object_id().to_string();
            debug!("upload"; "indexing record {}", object_id);

            match self.index.add_or_update_object(&object_id, record).await {
                Ok(()) => progress.inc("ok"),
                Err(err) => {
                    progress.inc("failed");
                    log!("error"; "{} ({}): {}", object_id, self.index.name(), err);
                }
            }
        }

        let report = UploadReport {
            submitted: progress.count("ok"),
            failed: progress.count("failed"),
        };
        progress.finish();
        report
    }
}
