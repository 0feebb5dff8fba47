use crate::domain::{AccountInfo, DeployTarget, DeploymentResult, SiteFile};
use async_trait::async_trait;

#[async_trait]
pub trait Deployer: Send + Sync {
    /// Checks that `token` is live and actually belongs to `username`.
    async fn validate_credentials(
        &self,
        username: &str,
        token: &str,
    ) -> Result<AccountInfo, DeployerError>;

    /// Publishes `files` to the target, creating whatever is missing.
    /// Safe to call again for the same target; existing content is updated.
    async fn deploy(
        &self,
        target: &DeployTarget,
        files: &[SiteFile],
    ) -> Result<DeploymentResult, DeployerError>;
}

#[derive(Debug, thiserror::Error)]
pub enum DeployerError {
    #[error("credential validation failed: {0}")]
    CredentialValidation(String),
    #[error("token belongs to {actual}, not {claimed}")]
    CredentialMismatch { claimed: String, actual: String },
    #[error("repository setup failed: {0}")]
    EnsureRepository(String),
    #[error("branch setup failed: {0}")]
    EnsureBranch(String),
    #[error("upload of {path} failed: {reason}")]
    UploadFile { path: String, reason: String },
    #[error("pages activation failed: {0}")]
    EnablePages(String),
}
