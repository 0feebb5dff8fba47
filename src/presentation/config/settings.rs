use super::environment::Environment;

/// Runtime configuration, read from the environment with sensible defaults
/// so a bare `deckhand` starts a working server.
#[derive(Debug, Clone)]
pub struct Settings {
    pub environment: Environment,
    pub server: ServerSettings,
    pub generation: GenerationSettings,
    pub deploy: DeploySettings,
    pub pipeline: PipelineSettings,
    pub retention: RetentionSettings,
}

#[derive(Debug, Clone)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone)]
pub struct GenerationSettings {
    pub openai_base_url: String,
    pub anthropic_base_url: String,
    pub google_base_url: String,
    pub request_timeout_secs: u64,
    pub max_tokens: u32,
    pub temperature: f32,
}

#[derive(Debug, Clone)]
pub struct DeploySettings {
    pub api_base_url: String,
    pub publish_branch: String,
    pub request_timeout_secs: u64,
}

#[derive(Debug, Clone)]
pub struct PipelineSettings {
    /// When off, jobs finish after generation with Markdown only; no HTML
    /// build and no deployment.
    pub static_build: bool,
}

#[derive(Debug, Clone)]
pub struct RetentionSettings {
    pub job_ttl_secs: u64,
    pub sweep_interval_secs: u64,
}

impl Settings {
    pub fn from_env() -> Self {
        Self {
            environment: std::env::var("APP_ENV")
                .ok()
                .and_then(|v| Environment::try_from(v).ok())
                .unwrap_or(Environment::Development),
            server: ServerSettings {
                host: env_string("SERVER_HOST", "0.0.0.0"),
                port: env_parse("SERVER_PORT", 3000),
            },
            generation: GenerationSettings {
                openai_base_url: env_string("OPENAI_BASE_URL", "https://api.openai.com"),
                anthropic_base_url: env_string("ANTHROPIC_BASE_URL", "https://api.anthropic.com"),
                google_base_url: env_string(
                    "GOOGLE_BASE_URL",
                    "https://generativelanguage.googleapis.com",
                ),
                request_timeout_secs: env_parse("GENERATION_TIMEOUT_SECS", 120),
                max_tokens: env_parse("GENERATION_MAX_TOKENS", 4096),
                temperature: env_parse("GENERATION_TEMPERATURE", 0.7),
            },
            deploy: DeploySettings {
                api_base_url: env_string("GITHUB_API_BASE_URL", "https://api.github.com"),
                publish_branch: env_string("PUBLISH_BRANCH", "gh-pages"),
                request_timeout_secs: env_parse("DEPLOY_TIMEOUT_SECS", 30),
            },
            pipeline: PipelineSettings {
                static_build: env_bool("STATIC_BUILD", true),
            },
            retention: RetentionSettings {
                job_ttl_secs: env_parse("JOB_TTL_SECS", 86_400),
                sweep_interval_secs: env_parse("JOB_SWEEP_INTERVAL_SECS", 60),
            },
        }
    }
}

fn env_string(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn env_parse<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

fn env_bool(key: &str, default: bool) -> bool {
    std::env::var(key)
        .map(|v| v.to_lowercase() == "true" || v == "1")
        .unwrap_or(default)
}
