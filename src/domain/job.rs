use super::{DeploymentResult, JobStatus, SlideDeck, Theme};
use chrono::{DateTime, Utc};
use uuid::Uuid;

pub const PROGRESS_ACCEPTED: u8 = 0;
pub const PROGRESS_GENERATING: u8 = 10;
pub const PROGRESS_RENDERING: u8 = 60;
pub const PROGRESS_FINALIZING: u8 = 90;
pub const PROGRESS_COMPLETE: u8 = 100;

#[derive(Debug, Clone)]
pub struct Job {
    pub id: JobId,
    pub status: JobStatus,
    pub progress: u8,
    pub message: String,
    pub created_at: DateTime<Utc>,
    pub completed_at: Option<DateTime<Utc>>,
    pub failed_at: Option<DateTime<Utc>>,
    pub output: Option<JobOutput>,
    pub error: Option<String>,
}

#[derive(Debug, Clone)]
pub struct JobOutput {
    pub deck: SlideDeck,
    pub html: Option<String>,
    pub theme: Theme,
    pub deployment: Option<DeploymentResult>,
}

impl Job {
    pub fn new() -> Self {
        Self {
            id: JobId::new(),
            status: JobStatus::Processing,
            progress: PROGRESS_ACCEPTED,
            message: "Starting...".to_string(),
            created_at: Utc::now(),
            completed_at: None,
            failed_at: None,
            output: None,
            error: None,
        }
    }

    /// Records a progress checkpoint. Progress never moves backwards, and a
    /// terminal job ignores late checkpoints entirely.
    pub fn advance(&mut self, progress: u8, message: &str) {
        if self.is_terminal() {
            return;
        }
        self.progress = self.progress.max(progress);
        self.message = message.to_string();
    }

    pub fn complete(&mut self, output: JobOutput) {
        if self.is_terminal() {
            return;
        }
        self.status = JobStatus::Completed;
        self.progress = PROGRESS_COMPLETE;
        self.message = "Complete!".to_string();
        self.completed_at = Some(Utc::now());
        self.output = Some(output);
    }

    /// Marks the job failed. The last checkpoint message is kept so callers
    /// can see which stage was running when the pipeline broke.
    pub fn fail(&mut self, error: impl Into<String>) {
        if self.is_terminal() {
            return;
        }
        self.status = JobStatus::Failed;
        self.failed_at = Some(Utc::now());
        self.error = Some(error.into());
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self.status, JobStatus::Completed | JobStatus::Failed)
    }
}

impl Default for Job {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct JobId(Uuid);

impl JobId {
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for JobId {
    fn default() -> Self {
        Self::new()
    }
}
