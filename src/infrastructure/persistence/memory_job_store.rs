use std::time::Duration;

use async_trait::async_trait;
use chrono::{Duration as ChronoDuration, Utc};
use dashmap::DashMap;

use crate::application::ports::{JobStore, JobStoreError};
use crate::domain::{Job, JobId};

/// Process-local job store backed by a sharded concurrent map. An insert
/// replaces the whole record under its shard lock, so a concurrent reader
/// gets either the previous snapshot or the new one, never a mix.
#[derive(Default)]
pub struct InMemoryJobStore {
    jobs: DashMap<JobId, Job>,
}

impl InMemoryJobStore {
    pub fn new() -> Self {
        Self {
            jobs: DashMap::new(),
        }
    }
}

#[async_trait]
impl JobStore for InMemoryJobStore {
    async fn set(&self, job: Job) -> Result<(), JobStoreError> {
        self.jobs.insert(job.id, job);
        Ok(())
    }

    async fn get(&self, id: JobId) -> Result<Option<Job>, JobStoreError> {
        Ok(self.jobs.get(&id).map(|entry| entry.value().clone()))
    }

    async fn delete(&self, id: JobId) -> Result<(), JobStoreError> {
        self.jobs.remove(&id);
        Ok(())
    }

    async fn purge_expired(&self, ttl: Duration) -> Result<usize, JobStoreError> {
        let ttl = ChronoDuration::from_std(ttl)
            .map_err(|e| JobStoreError::OperationFailed(format!("ttl out of range: {}", e)))?;
        let cutoff = Utc::now() - ttl;
        let before = self.jobs.len();
        self.jobs.retain(|_, job| job.created_at > cutoff);
        Ok(before.saturating_sub(self.jobs.len()))
    }
}
