use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};

use crate::application::ports::{GenerationRequest, SlideGeneratorError};

const ANTHROPIC_VERSION: &str = "2023-06-01";

#[derive(Serialize)]
struct MessagesRequest {
    model: String,
    max_tokens: u32,
    temperature: f32,
    system: String,
    messages: Vec<UserMessage>,
}

#[derive(Serialize)]
struct UserMessage {
    role: &'static str,
    content: String,
}

#[derive(Deserialize)]
struct MessagesResponse {
    content: Vec<ContentBlock>,
}

#[derive(Deserialize)]
struct ContentBlock {
    #[serde(default)]
    text: Option<String>,
}

pub async fn complete(
    client: &Client,
    base_url: &str,
    request: &GenerationRequest,
    max_tokens: u32,
    temperature: f32,
) -> Result<String, SlideGeneratorError> {
    let body = MessagesRequest {
        model: request.model.clone(),
        max_tokens,
        temperature,
        system: request.system_prompt.clone(),
        messages: vec![UserMessage {
            role: "user",
            content: request.user_prompt.clone(),
        }],
    };

    let response = client
        .post(format!("{}/v1/messages", base_url.trim_end_matches('/')))
        .header("x-api-key", &request.api_key)
        .header("anthropic-version", ANTHROPIC_VERSION)
        .json(&body)
        .send()
        .await
        .map_err(|e| SlideGeneratorError::ApiRequestFailed(e.to_string()))?;

    let status = response.status();
    if status == StatusCode::TOO_MANY_REQUESTS {
        return Err(SlideGeneratorError::RateLimited);
    }
    if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
        return Err(SlideGeneratorError::Authentication(format!(
            "Anthropic rejected the API key (HTTP {})",
            status
        )));
    }
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(SlideGeneratorError::ApiRequestFailed(format!(
            "HTTP {}: {}",
            status, body
        )));
    }

    let messages: MessagesResponse = response
        .json()
        .await
        .map_err(|e| SlideGeneratorError::InvalidResponse(e.to_string()))?;

    messages
        .content
        .into_iter()
        .find_map(|block| block.text)
        .ok_or_else(|| {
            SlideGeneratorError::InvalidResponse("no text content block returned".to_string())
        })
}
