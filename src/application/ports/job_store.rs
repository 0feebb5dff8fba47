use std::time::Duration;

use crate::domain::{Job, JobId};
use async_trait::async_trait;

/// Keyed job records. `set` replaces the whole record for a key, so a read
/// always observes one consistent snapshot and never a half-applied update.
#[async_trait]
pub trait JobStore: Send + Sync {
    async fn set(&self, job: Job) -> Result<(), JobStoreError>;

    async fn get(&self, id: JobId) -> Result<Option<Job>, JobStoreError>;

    async fn delete(&self, id: JobId) -> Result<(), JobStoreError>;

    /// Removes records older than `ttl`, returning how many were dropped.
    async fn purge_expired(&self, ttl: Duration) -> Result<usize, JobStoreError>;
}

#[derive(Debug, thiserror::Error)]
pub enum JobStoreError {
    #[error("store unavailable: {0}")]
    Unavailable(String),
    #[error("operation failed: {0}")]
    OperationFailed(String),
}
