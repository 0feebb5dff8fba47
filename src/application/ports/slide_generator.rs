use crate::domain::{Provider, SlideDeck};
use async_trait::async_trait;

#[async_trait]
pub trait SlideGenerator: Send + Sync {
    async fn generate(&self, request: &GenerationRequest)
        -> Result<SlideDeck, SlideGeneratorError>;
}

#[derive(Debug, Clone)]
pub struct GenerationRequest {
    pub provider: Provider,
    pub api_key: String,
    pub model: String,
    pub system_prompt: String,
    pub user_prompt: String,
    pub topic: String,
}

#[derive(Debug, thiserror::Error)]
pub enum SlideGeneratorError {
    #[error("authentication failed: {0}")]
    Authentication(String),
    #[error("rate limited")]
    RateLimited,
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}
