use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use crate::application::ports::{GenerationRequest, SlideGenerator, SlideGeneratorError};
use crate::domain::{Provider, SlideDeck};

use super::{anthropic, google, openai};

#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    pub openai_base_url: String,
    pub anthropic_base_url: String,
    pub google_base_url: String,
    pub timeout: Duration,
    pub max_tokens: u32,
    pub temperature: f32,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            openai_base_url: "https://api.openai.com".to_string(),
            anthropic_base_url: "https://api.anthropic.com".to_string(),
            google_base_url: "https://generativelanguage.googleapis.com".to_string(),
            timeout: Duration::from_secs(120),
            max_tokens: 4096,
            temperature: 0.7,
        }
    }
}

/// Calls whichever provider the request names and turns the raw completion
/// into a `SlideDeck`. One shared client enforces the request timeout.
pub struct LiveSlideGenerator {
    client: Client,
    config: GeneratorConfig,
}

impl LiveSlideGenerator {
    pub fn new(config: GeneratorConfig) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(config.timeout).build()?;
        Ok(Self { client, config })
    }
}

#[async_trait]
impl SlideGenerator for LiveSlideGenerator {
    async fn generate(
        &self,
        request: &GenerationRequest,
    ) -> Result<SlideDeck, SlideGeneratorError> {
        tracing::debug!(
            provider = %request.provider,
            model = %request.model,
            "Requesting slide generation"
        );

        let raw = match request.provider {
            Provider::OpenAi => {
                openai::complete(
                    &self.client,
                    &self.config.openai_base_url,
                    request,
                    self.config.max_tokens,
                    self.config.temperature,
                )
                .await?
            }
            Provider::Anthropic => {
                anthropic::complete(
                    &self.client,
                    &self.config.anthropic_base_url,
                    request,
                    self.config.max_tokens,
                    self.config.temperature,
                )
                .await?
            }
            Provider::Google => {
                google::complete(
                    &self.client,
                    &self.config.google_base_url,
                    request,
                    self.config.max_tokens,
                    self.config.temperature,
                )
                .await?
            }
        };

        let markdown = normalize_markdown(&raw);
        if markdown.is_empty() {
            return Err(SlideGeneratorError::InvalidResponse(
                "provider returned an empty deck".to_string(),
            ));
        }

        let deck = SlideDeck::from_markdown(
            markdown,
            &request.topic,
            request.provider.as_str(),
            &request.model,
        );
        tracing::info!(
            provider = %request.provider,
            slides = deck.metadata.slide_count,
            "Slide generation completed"
        );
        Ok(deck)
    }
}

/// Models sometimes wrap the whole deck in one fenced block even when told
/// not to. Unwrap exactly that case; fences inside slides are left alone.
fn normalize_markdown(raw: &str) -> String {
    let text = raw.trim();
    let unwrapped = ["```markdown", "```md", "```"]
        .iter()
        .find_map(|open| text.strip_prefix(open))
        .filter(|rest| rest.starts_with('\n'))
        .and_then(|rest| rest.strip_suffix("```"));
    match unwrapped {
        Some(inner) => inner.trim().to_string(),
        None => text.to_string(),
    }
}
