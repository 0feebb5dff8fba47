use std::str::FromStr;

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::{Deserialize, Serialize};

use crate::application::ports::{Deployer, SlideGenerator};
use crate::application::services::prompts::PromptConfig;
use crate::application::services::{GenerationMode, LiveGeneration, PresentationSpec};
use crate::domain::{DeployTarget, HighlightTheme, Provider, RenderOptions, Theme, Transition};
use crate::infrastructure::observability::sanitize_prompt;
use crate::presentation::state::AppState;

const DEFAULT_AUDIENCE: &str = "general audience";
const DEFAULT_SLIDE_COUNT: usize = 8;
const MAX_SLIDE_COUNT: usize = 50;
const DEFAULT_TONE: &str = "professional";
const DEFAULT_TOPIC_TYPE: &str = "general";

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GenerateRequest {
    pub topic: Option<String>,
    pub audience: Option<String>,
    pub slide_count: Option<usize>,
    pub tone: Option<String>,
    pub topic_type: Option<String>,
    pub include_code: Option<bool>,
    pub custom_system_prompt: Option<String>,
    pub provider: Option<String>,
    pub api_key: Option<String>,
    pub model: Option<String>,
    pub github_username: Option<String>,
    #[serde(rename = "githubPAT")]
    pub github_pat: Option<String>,
    pub repo_name: Option<String>,
    pub theme: Option<String>,
    pub transition: Option<String>,
    pub highlight_theme: Option<String>,
    pub controls: Option<bool>,
    pub progress: Option<bool>,
    pub slide_number: Option<bool>,
    pub hash: Option<bool>,
    pub center: Option<bool>,
    pub test_mode: Option<bool>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitResponse {
    pub success: bool,
    pub job_id: String,
    pub poll_url: String,
    pub message: String,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[tracing::instrument(skip(state, request))]
pub async fn submit_handler<G, D>(
    State(state): State<AppState<G, D>>,
    Json(request): Json<GenerateRequest>,
) -> impl IntoResponse
where
    G: SlideGenerator + 'static,
    D: Deployer + 'static,
{
    let spec = match build_spec(request) {
        Ok(spec) => spec,
        Err(message) => {
            tracing::warn!(reason = %message, "Rejected submission");
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse { error: message }),
            )
                .into_response();
        }
    };

    let topic = spec.prompt.topic.clone();
    match state.presentation_service.submit(spec).await {
        Ok(job_id) => {
            let id = job_id.as_uuid().to_string();
            tracing::info!(
                job_id = %id,
                topic = %sanitize_prompt(&topic),
                "Presentation job accepted"
            );
            (
                StatusCode::ACCEPTED,
                Json(SubmitResponse {
                    success: true,
                    job_id: id.clone(),
                    poll_url: format!("/api/v1/jobs/{}", id),
                    message: "Presentation generation started".to_string(),
                }),
            )
                .into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to create job record");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: format!("Failed to create job: {}", e),
                }),
            )
                .into_response()
        }
    }
}

fn build_spec(request: GenerateRequest) -> Result<PresentationSpec, String> {
    let topic = non_empty(request.topic).ok_or_else(|| "Topic is required".to_string())?;

    let slide_count = request.slide_count.unwrap_or(DEFAULT_SLIDE_COUNT);
    if slide_count == 0 || slide_count > MAX_SLIDE_COUNT {
        return Err(format!(
            "slideCount must be between 1 and {}",
            MAX_SLIDE_COUNT
        ));
    }

    let test_mode = request.test_mode.unwrap_or(false);
    let mode = if test_mode {
        GenerationMode::Sample
    } else {
        let (provider, api_key, model) = match (
            non_empty(request.provider),
            non_empty(request.api_key),
            non_empty(request.model),
        ) {
            (Some(p), Some(k), Some(m)) => (p, k, m),
            _ => {
                return Err(
                    "provider, apiKey, and model are required unless testMode is set".to_string(),
                );
            }
        };
        GenerationMode::Live(LiveGeneration {
            provider: Provider::from_str(&provider)?,
            api_key,
            model,
        })
    };

    let mut render = RenderOptions::default();
    if let Some(theme) = non_empty(request.theme) {
        render.theme = Theme::from_str(&theme)?;
    }
    if let Some(transition) = non_empty(request.transition) {
        render.transition = Transition::from_str(&transition)?;
    }
    if let Some(highlight) = non_empty(request.highlight_theme) {
        render.highlight_theme = HighlightTheme::from_str(&highlight)?;
    }
    if let Some(controls) = request.controls {
        render.controls = controls;
    }
    if let Some(progress) = request.progress {
        render.progress = progress;
    }
    if let Some(slide_number) = request.slide_number {
        render.slide_number = slide_number;
    }
    if let Some(hash) = request.hash {
        render.hash = hash;
    }
    if let Some(center) = request.center {
        render.center = center;
    }

    // Test mode never deploys, even when credentials came along.
    let deploy = if test_mode {
        None
    } else {
        match (
            non_empty(request.github_username),
            non_empty(request.github_pat),
            non_empty(request.repo_name),
        ) {
            (Some(username), Some(token), Some(repository)) => Some(DeployTarget {
                username,
                token,
                repository,
            }),
            (None, None, None) => None,
            _ => {
                return Err(
                    "githubUsername, githubPAT, and repoName must be provided together".to_string(),
                );
            }
        }
    };

    let prompt = PromptConfig {
        topic,
        audience: non_empty(request.audience).unwrap_or_else(|| DEFAULT_AUDIENCE.to_string()),
        slide_count,
        tone: non_empty(request.tone).unwrap_or_else(|| DEFAULT_TONE.to_string()),
        topic_type: non_empty(request.topic_type)
            .unwrap_or_else(|| DEFAULT_TOPIC_TYPE.to_string()),
        include_code: request.include_code.unwrap_or(false),
        custom_system_prompt: non_empty(request.custom_system_prompt),
    };

    Ok(PresentationSpec {
        prompt,
        mode,
        render,
        deploy,
    })
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
