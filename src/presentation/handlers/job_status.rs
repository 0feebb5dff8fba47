use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::Serialize;
use uuid::Uuid;

use crate::application::ports::{Deployer, SlideGenerator};
use crate::domain::{Job, JobId, JobOutput};
use crate::presentation::state::AppState;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobStatusResponse {
    pub id: String,
    pub status: String,
    pub progress: u8,
    pub message: String,
    pub created_at: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failed_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<JobData>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobData {
    pub slides: SlideInfo,
    pub markdown: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub html: Option<String>,
    pub theme: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deployment: Option<DeploymentInfo>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SlideInfo {
    pub filename: String,
    pub slide_count: usize,
    pub character_count: usize,
    pub provider: String,
    pub model: String,
}

#[derive(Serialize)]
pub struct DeploymentInfo {
    pub url: String,
    pub repository: String,
    pub branch: String,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl JobStatusResponse {
    fn from_job(job: Job) -> Self {
        Self {
            id: job.id.as_uuid().to_string(),
            status: job.status.as_str().to_string(),
            progress: job.progress,
            message: job.message,
            created_at: job.created_at.to_rfc3339(),
            completed_at: job.completed_at.map(|t| t.to_rfc3339()),
            failed_at: job.failed_at.map(|t| t.to_rfc3339()),
            data: job.output.map(JobData::from_output),
            error: job.error,
        }
    }
}

impl JobData {
    fn from_output(output: JobOutput) -> Self {
        let deck = output.deck;
        Self {
            slides: SlideInfo {
                filename: deck.filename,
                slide_count: deck.metadata.slide_count,
                character_count: deck.metadata.character_count,
                provider: deck.metadata.provider,
                model: deck.metadata.model,
            },
            markdown: deck.markdown,
            html: output.html,
            theme: output.theme.to_string(),
            deployment: output.deployment.map(|d| DeploymentInfo {
                url: d.url,
                repository: d.repository,
                branch: d.branch,
            }),
        }
    }
}

#[tracing::instrument(skip(state))]
pub async fn job_status_handler<G, D>(
    State(state): State<AppState<G, D>>,
    Path(job_id): Path<String>,
) -> impl IntoResponse
where
    G: SlideGenerator + 'static,
    D: Deployer + 'static,
{
    let uuid = match Uuid::parse_str(&job_id) {
        Ok(u) => u,
        Err(_) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: format!("Invalid job ID: {}", job_id),
                }),
            )
                .into_response();
        }
    };

    match state.job_store.get(JobId::from_uuid(uuid)).await {
        Ok(Some(job)) => (StatusCode::OK, Json(JobStatusResponse::from_job(job))).into_response(),
        Ok(None) => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse {
                error: format!("Job not found: {}", job_id),
            }),
        )
            .into_response(),
        Err(e) => {
            tracing::error!(error = %e, "Failed to fetch job status");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: format!("Failed to fetch job: {}", e),
                }),
            )
                .into_response()
        }
    }
}
