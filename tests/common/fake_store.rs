//! Store doubles that fail on demand.

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use survey_core::{StoreError, SurveyDocument, SurveyStore};

/// Which [`StoreError`] a [`FailingStore`] reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureMode {
    Connection,
    Insert,
    Encode,
}

impl FailureMode {
    fn error(self) -> StoreError {
        match self {
            FailureMode::Connection => StoreError::Connection("connection refused".into()),
            FailureMode::Insert => StoreError::Insert("write concern timeout".into()),
            FailureMode::Encode => StoreError::Encode("unsigned integer out of range".into()),
        }
    }
}

/// A store whose every call fails. Counts insert attempts so tests can check
/// nothing is retried.
#[derive(Debug)]
pub struct FailingStore {
    mode: FailureMode,
    inserts: AtomicUsize,
}

impl FailingStore {
    pub fn new(mode: FailureMode) -> Self {
        Self {
            mode,
            inserts: AtomicUsize::new(0),
        }
    }

    pub fn insert_attempts(&self) -> usize {
        self.inserts.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SurveyStore for FailingStore {
    async fn insert_one(&self, _document: &SurveyDocument) -> Result<String, StoreError> {
        self.inserts.fetch_add(1, Ordering::SeqCst);
        Err(self.mode.error())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Err(self.mode.error())
    }
}
