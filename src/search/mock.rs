//! In-memory index for tests.
//!
//! Stores records by object id and can be told to reject specific ids.

use async_trait::async_trait;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::Arc;

use crate::page::IndexRecord;

use super::{IndexError, SearchIndex};

/// Mock index; clones share state.
#[derive(Debug, Clone, Default)]
pub struct MockIndex {
    inner: Arc<Mutex<MockIndexInner>>,
}

#[derive(Debug, Default)]
struct MockIndexInner {
    /// Stored records by object id.
    objects: HashMap<String, IndexRecord>,
    /// Object ids to reject, with the error to return.
    fail_on: HashMap<String, IndexError>,
    /// Object ids in the order they were submitted.
    operations: Vec<String>,
}

impl MockIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reject `object_id` with `error`.
    pub fn fail_on(&self, object_id: impl Into<String>, error: IndexError) {
        self.inner.lock().fail_on.insert(object_id.into(), error);
    }

    pub fn get(&self, object_id: &str) -> Option<IndexRecord> {
        self.inner.lock().objects.get(object_id).cloned()
    }

    pub fn object_count(&self) -> usize {
        self.inner.lock().objects.len()
    }

    /// Submitted object ids, failed ones included.
    pub fn operations(&self) -> Vec<String> {
        self.inner.lock().operations.clone()
    }
}

#[async_trait]
impl SearchIndex for MockIndex {
    fn name(&self) -> &str {
        "mock"
    }

    async fn add_or_update_object(
        &self,
        object_id: &str,
        record: &IndexRecord,
    ) -> Result<(), IndexError> {
        let mut inner = self.inner.lock();
        inner.operations.push(object_id.to_string());
        if let Some(err) = inner.fail_on.get(object_id) {
            return Err(err.clone());
        }
        inner.objects.insert(object_id.to_string(), record.clone());
        Ok(())
    }
}
