use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;
use std::time::Duration;

use tokio::net::TcpListener;

use deckhand::application::ports::JobStore;
use deckhand::application::services::PresentationService;
use deckhand::infrastructure::github::{GithubConfig, GithubPagesDeployer};
use deckhand::infrastructure::llm::{GeneratorConfig, LiveSlideGenerator};
use deckhand::infrastructure::observability::{TracingConfig, init_tracing};
use deckhand::infrastructure::persistence::InMemoryJobStore;
use deckhand::presentation::{AppState, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = Settings::from_env();
    init_tracing(
        TracingConfig {
            environment: settings.environment.to_string(),
            ..TracingConfig::default()
        },
        settings.server.port,
    );

    let job_store: Arc<dyn JobStore> = Arc::new(InMemoryJobStore::new());

    let generator = Arc::new(LiveSlideGenerator::new(GeneratorConfig {
        openai_base_url: settings.generation.openai_base_url.clone(),
        anthropic_base_url: settings.generation.anthropic_base_url.clone(),
        google_base_url: settings.generation.google_base_url.clone(),
        timeout: Duration::from_secs(settings.generation.request_timeout_secs),
        max_tokens: settings.generation.max_tokens,
        temperature: settings.generation.temperature,
    })?);

    let deployer = Arc::new(GithubPagesDeployer::new(GithubConfig {
        api_base_url: settings.deploy.api_base_url.clone(),
        publish_branch: settings.deploy.publish_branch.clone(),
        timeout: Duration::from_secs(settings.deploy.request_timeout_secs),
    })?);

    let presentation_service = Arc::new(PresentationService::new(
        Arc::clone(&generator),
        Arc::clone(&deployer),
        Arc::clone(&job_store),
        settings.pipeline.static_build,
    ));

    spawn_retention_sweeper(
        Arc::clone(&job_store),
        Duration::from_secs(settings.retention.job_ttl_secs),
        Duration::from_secs(settings.retention.sweep_interval_secs),
    );

    let state = AppState {
        presentation_service,
        job_store,
        deployer,
    };
    let router = create_router(state);

    let host: IpAddr = settings.server.host.parse()?;
    let addr = SocketAddr::new(host, settings.server.port);
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}

fn spawn_retention_sweeper(store: Arc<dyn JobStore>, ttl: Duration, interval: Duration) {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(interval);
        // The interval's first tick fires immediately; skip it.
        ticker.tick().await;
        loop {
            ticker.tick().await;
            match store.purge_expired(ttl).await {
                Ok(0) => {}
                Ok(purged) => tracing::debug!(purged, "Expired job records removed"),
                Err(e) => tracing::warn!(error = %e, "Job retention sweep failed"),
            }
        }
    });
}
