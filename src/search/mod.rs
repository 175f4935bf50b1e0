//! Search index client.
//!
//! Records are pushed one at a time through the [`SearchIndex`] trait:
//!
//! ```text
//! Vec<IndexRecord> ──► Uploader ──► dyn SearchIndex ──► AlgoliaIndex (HTTP)
//!                         │                        └──► MockIndex (tests)
//!                         └──► UploadReport { submitted, failed }
//! ```
//!
//! A failed record is logged and counted; it never stops the upload. There
//! are no retries.

mod algolia;
#[cfg(test)]
pub mod mock;
mod upload;

use async_trait::async_trait;
use thiserror::Error;

use crate::page::IndexRecord;

pub use algolia::AlgoliaIndex;
pub use upload::{UploadReport, Uploader};

/// Errors from index operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IndexError {
    /// Credentials were rejected (invalid application id or key, missing ACL).
    #[error("authentication failed: {0}")]
    AuthFailed(String),

    /// The index or application does not exist.
    #[error("not found: {0}")]
    NotFound(String),

    /// Rate limit exceeded.
    #[error("rate limited")]
    RateLimited,

    /// API returned an error.
    #[error("API error: {status} - {message}")]
    ApiError {
        /// HTTP status code
        status: u16,
        /// Error message from the API
        message: String,
    },

    /// Network or connection error.
    #[error("network error: {0}")]
    NetworkError(String),

    /// The request could not be built (bad endpoint, unusable header value).
    #[error("invalid request: {0}")]
    InvalidRequest(String),
}

/// A search index that stores records by object id.
///
/// Implementations must be `Send + Sync` so one client can be shared by
/// every upload.
#[async_trait]
pub trait SearchIndex: Send + Sync {
    /// Short name for log output.
    fn name(&self) -> &str;

    /// Create the object, or replace it if `object_id` already exists.
    async fn add_or_update_object(
        &self,
        object_id: &str,
        record: &IndexRecord,
    ) -> Result<(), IndexError>;
}
