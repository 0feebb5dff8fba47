use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::{Deserialize, Serialize};

use crate::application::ports::{Deployer, SlideGenerator};
use crate::presentation::state::AppState;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ValidateGithubRequest {
    pub username: Option<String>,
    pub token: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidateGithubResponse {
    pub valid: bool,
    pub username: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub public_repos: u64,
}

#[derive(Serialize)]
pub struct ValidationFailedResponse {
    pub valid: bool,
    pub error: String,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Pre-flight credential check so the UI can reject a bad token before a
/// whole generation run is spent on it.
#[tracing::instrument(skip(state, request))]
pub async fn github_validate_handler<G, D>(
    State(state): State<AppState<G, D>>,
    Json(request): Json<ValidateGithubRequest>,
) -> impl IntoResponse
where
    G: SlideGenerator + 'static,
    D: Deployer + 'static,
{
    let username = request
        .username
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty());
    let token = request
        .token
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty());
    let (username, token) = match (username, token) {
        (Some(u), Some(t)) => (u, t),
        _ => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: "username and token are required".to_string(),
                }),
            )
                .into_response();
        }
    };

    match state.deployer.validate_credentials(username, token).await {
        Ok(account) => (
            StatusCode::OK,
            Json(ValidateGithubResponse {
                valid: true,
                username: account.login,
                name: account.name,
                public_repos: account.public_repos,
            }),
        )
            .into_response(),
        Err(e) => {
            tracing::warn!(error = %e, "GitHub credential validation failed");
            (
                StatusCode::UNAUTHORIZED,
                Json(ValidationFailedResponse {
                    valid: false,
                    error: e.to_string(),
                }),
            )
                .into_response()
        }
    }
}
