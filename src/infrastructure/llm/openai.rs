use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};

use crate::application::ports::{GenerationRequest, SlideGeneratorError};

#[derive(Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    max_tokens: u32,
    temperature: f32,
}

#[derive(Serialize)]
struct ChatMessage {
    role: &'static str,
    content: String,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Deserialize)]
struct ChatChoiceMessage {
    content: Option<String>,
}

pub async fn complete(
    client: &Client,
    base_url: &str,
    request: &GenerationRequest,
    max_tokens: u32,
    temperature: f32,
) -> Result<String, SlideGeneratorError> {
    let body = ChatRequest {
        model: request.model.clone(),
        messages: vec![
            ChatMessage {
                role: "system",
                content: request.system_prompt.clone(),
            },
            ChatMessage {
                role: "user",
                content: request.user_prompt.clone(),
            },
        ],
        max_tokens,
        temperature,
    };

    let response = client
        .post(format!(
            "{}/v1/chat/completions",
            base_url.trim_end_matches('/')
        ))
        .header("Authorization", format!("Bearer {}", request.api_key))
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
            "OpenAI rejected the API key (HTTP {})",
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

    let chat: ChatResponse = response
        .json()
        .await
        .map_err(|e| SlideGeneratorError::InvalidResponse(e.to_string()))?;

    chat.choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .ok_or_else(|| {
            SlideGeneratorError::InvalidResponse("no completion choices returned".to_string())
        })
}
