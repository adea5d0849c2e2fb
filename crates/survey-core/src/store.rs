//! Store gateway — where finished [`SurveyDocument`]s are handed off.
//!
//! The HTTP layer only ever sees `dyn SurveyStore`. The MongoDB gateway lives
//! in `survey-mongo`; [`MemoryStore`] is the in-process implementation used by
//! tests and by `store.backend = "memory"`.

use std::sync::Mutex;

use async_trait::async_trait;

use crate::error::StoreError;
use crate::types::SurveyDocument;

/// Insert-one document store.
///
/// Implementations must be safe to share across concurrent requests.
#[async_trait]
pub trait SurveyStore: Send + Sync {
    /// Persist one document. Returns the store-assigned identifier.
    async fn insert_one(&self, document: &SurveyDocument) -> Result<String, StoreError>;

    /// Liveness check against the backing store.
    async fn ping(&self) -> Result<(), StoreError>;
}

/// Append-only in-memory store. Never deduplicates.
#[derive(Debug, Default)]
pub struct MemoryStore {
    documents: Mutex<Vec<SurveyDocument>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Snapshot of every stored document, in insertion order.
    pub fn documents(&self) -> Vec<SurveyDocument> {
        self.lock().clone()
    }

    /// Most recently stored document.
    pub fn last(&self) -> Option<SurveyDocument> {
        self.lock().last().cloned()
    }

    // A panic while holding the lock cannot leave a half-pushed document.
    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<SurveyDocument>> {
        self.documents
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[async_trait]
impl SurveyStore for MemoryStore {
    async fn insert_one(&self, document: &SurveyDocument) -> Result<String, StoreError> {
        let mut documents = self.lock();
        documents.push(document.clone());
        Ok(format!("mem-{}", documents.len()))
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
