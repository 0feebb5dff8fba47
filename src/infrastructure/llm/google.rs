use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};

use crate::application::ports::{GenerationRequest, SlideGeneratorError};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    system_instruction: SystemInstruction,
    contents: Vec<UserContent>,
    generation_config: GenerationConfig,
}

#[derive(Serialize)]
struct SystemInstruction {
    parts: Vec<RequestPart>,
}

#[derive(Serialize)]
struct UserContent {
    role: &'static str,
    parts: Vec<RequestPart>,
}

#[derive(Serialize)]
struct RequestPart {
    text: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    max_output_tokens: u32,
    temperature: f32,
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Deserialize)]
struct ResponsePart {
    #[serde(default)]
    text: String,
}

pub async fn complete(
    client: &Client,
    base_url: &str,
    request: &GenerationRequest,
    max_tokens: u32,
    temperature: f32,
) -> Result<String, SlideGeneratorError> {
    let body = GenerateContentRequest {
        system_instruction: SystemInstruction {
            parts: vec![RequestPart {
                text: request.system_prompt.clone(),
            }],
        },
        contents: vec![UserContent {
            role: "user",
            parts: vec![RequestPart {
                text: request.user_prompt.clone(),
            }],
        }],
        generation_config: GenerationConfig {
            max_output_tokens: max_tokens,
            temperature,
        },
    };

    let url = format!(
        "{}/v1beta/models/{}:generateContent",
        base_url.trim_end_matches('/'),
        request.model
    );
    let response = client
        .post(url)
        .query(&[("key", request.api_key.as_str())])
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
            "Google rejected the API key (HTTP {})",
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

    let generated: GenerateContentResponse = response
        .json()
        .await
        .map_err(|e| SlideGeneratorError::InvalidResponse(e.to_string()))?;

    let text = generated
        .candidates
        .into_iter()
        .next()
        .map(|candidate| {
            candidate
                .content
                .parts
                .into_iter()
                .map(|part| part.text)
                .collect::<String>()
        })
        .unwrap_or_default();

    if text.is_empty() {
        return Err(SlideGeneratorError::InvalidResponse(
            "no candidate content returned".to_string(),
        ));
    }
    Ok(text)
}
