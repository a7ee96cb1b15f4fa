use std::sync::{Arc, Mutex};

use super::domain::Submission;

/// Storage abstraction so intake and reporting can be exercised against
/// test doubles or a future persistent backend.
pub trait SubmissionStore: Send + Sync {
    /// Append one validated submission to the end of the collection.
    fn append(&self, submission: Submission) -> Result<(), StoreError>;

    /// Snapshot of every submission in insertion order.
    fn all(&self) -> Result<Vec<Submission>, StoreError>;
}

/// Error enumeration for store failures.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("submission store unavailable: {0}")]
    Unavailable(String),
}

/// Process-lifetime store backed by a mutex-guarded, append-only vector.
///
/// Nothing is persisted; a restart drops every submission. Clones share
/// the same underlying records, so the router and a background seeder can
/// hold handles to one collection.
#[derive(Debug, Default, Clone)]
pub struct InMemorySubmissionStore {
    records: Arc<Mutex<Vec<Submission>>>,
}

impl InMemorySubmissionStore {
    pub fn len(&self) -> usize {
        self.records
            .lock()
            .expect("submission store mutex poisoned")
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop every stored submission.
    ///
    /// Kept off the [`SubmissionStore`] trait so no request path can reach
    /// it; test harnesses call it on the concrete type.
    pub fn clear(&self) {
        self.records
            .lock()
            .expect("submission store mutex poisoned")
            .clear();
    }
}

impl SubmissionStore for InMemorySubmissionStore {
    fn append(&self, submission: Submission) -> Result<(), StoreError> {
        self.records
            .lock()
            .expect("submission store mutex poisoned")
            .push(submission);
        Ok(())
    }

    fn all(&self) -> Result<Vec<Submission>, StoreError> {
        Ok(self
            .records
            .lock()
            .expect("submission store mutex poisoned")
            .clone())
    }
}
