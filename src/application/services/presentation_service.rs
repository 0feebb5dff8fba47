use std::sync::Arc;

use tracing::Instrument;

use crate::application::ports::{
    Deployer, DeployerError, GenerationRequest, JobStore, JobStoreError, SlideGenerator,
    SlideGeneratorError,
};
use crate::domain::{
    DeployTarget, Job, JobId, JobOutput, Provider, RenderOptions, SiteFile, PROGRESS_FINALIZING,
    PROGRESS_GENERATING, PROGRESS_RENDERING,
};

use super::prompts::{self, PromptConfig};
use super::{renderer, sample};

/// Everything a validated submission needs to run the pipeline.
#[derive(Debug, Clone)]
pub struct PresentationSpec {
    pub prompt: PromptConfig,
    pub mode: GenerationMode,
    pub render: RenderOptions,
    pub deploy: Option<DeployTarget>,
}

#[derive(Debug, Clone)]
pub enum GenerationMode {
    Sample,
    Live(LiveGeneration),
}

#[derive(Debug, Clone)]
pub struct LiveGeneration {
    pub provider: Provider,
    pub api_key: String,
    pub model: String,
}

/// Runs the generate -> render -> deploy pipeline. `submit` returns as soon
/// as the job record exists; the rest happens on a detached task that keeps
/// the record's progress checkpoints current and always leaves it terminal.
pub struct PresentationService<G, D>
where
    G: SlideGenerator,
    D: Deployer,
{
    generator: Arc<G>,
    deployer: Arc<D>,
    job_store: Arc<dyn JobStore>,
    static_build: bool,
}

impl<G, D> PresentationService<G, D>
where
    G: SlideGenerator + 'static,
    D: Deployer + 'static,
{
    pub fn new(
        generator: Arc<G>,
        deployer: Arc<D>,
        job_store: Arc<dyn JobStore>,
        static_build: bool,
    ) -> Self {
        Self {
            generator,
            deployer,
            job_store,
            static_build,
        }
    }

    /// Creates the job record and spawns the pipeline for it. The returned
    /// id is pollable immediately, whatever the spawned task does later.
    pub async fn submit(self: &Arc<Self>, spec: PresentationSpec) -> Result<JobId, JobStoreError> {
        let job = Job::new();
        let job_id = job.id;
        self.job_store.set(job.clone()).await?;

        let service = Arc::clone(self);
        let span = tracing::info_span!("presentation_job", job_id = %job_id.as_uuid());
        tokio::spawn(async move { service.run(job, spec).await }.instrument(span));

        Ok(job_id)
    }

    async fn run(&self, mut job: Job, spec: PresentationSpec) {
        match self.execute(&mut job, &spec).await {
            Ok(output) => {
                job.complete(output);
                tracing::info!("Presentation job completed");
            }
            Err(e) => {
                tracing::warn!(error = %e, "Presentation job failed");
                job.fail(e.to_string());
            }
        }
        if let Err(e) = self.job_store.set(job).await {
            tracing::error!(error = %e, "Failed to persist terminal job state");
        }
    }

    async fn execute(
        &self,
        job: &mut Job,
        spec: &PresentationSpec,
    ) -> Result<JobOutput, PipelineError> {
        self.checkpoint(job, PROGRESS_GENERATING, "Generating slides with AI...")
            .await?;

        let deck = match &spec.mode {
            GenerationMode::Sample => {
                sample::generate_deck(&spec.prompt.topic, spec.prompt.slide_count)
            }
            GenerationMode::Live(live) => {
                let request = GenerationRequest {
                    provider: live.provider,
                    api_key: live.api_key.clone(),
                    model: live.model.clone(),
                    system_prompt: prompts::system_prompt(&spec.prompt),
                    user_prompt: prompts::user_prompt(&spec.prompt),
                    topic: spec.prompt.topic.clone(),
                };
                self.generator.generate(&request).await?
            }
        };
        tracing::debug!(
            slides = deck.metadata.slide_count,
            characters = deck.metadata.character_count,
            "Deck generated"
        );

        if !self.static_build {
            self.checkpoint(job, PROGRESS_FINALIZING, "Finalizing...")
                .await?;
            return Ok(JobOutput {
                deck,
                html: None,
                theme: spec.render.theme,
                deployment: None,
            });
        }

        self.checkpoint(job, PROGRESS_RENDERING, "Building HTML...")
            .await?;
        let html = renderer::render_html(&deck.markdown, &spec.render);

        let deployment = match &spec.deploy {
            Some(target) => {
                self.checkpoint(job, PROGRESS_FINALIZING, "Deploying to GitHub Pages...")
                    .await?;
                let files = [
                    SiteFile::new("index.html", html.clone()),
                    SiteFile::new("slides.md", deck.markdown.clone()),
                ];
                Some(self.deployer.deploy(target, &files).await?)
            }
            None => {
                self.checkpoint(job, PROGRESS_FINALIZING, "Finalizing...")
                    .await?;
                None
            }
        };

        Ok(JobOutput {
            deck,
            html: Some(html),
            theme: spec.render.theme,
            deployment,
        })
    }

    async fn checkpoint(
        &self,
        job: &mut Job,
        progress: u8,
        message: &str,
    ) -> Result<(), PipelineError> {
        job.advance(progress, message);
        tracing::debug!(progress = job.progress, message = %job.message, "Checkpoint");
        self.job_store.set(job.clone()).await?;
        Ok(())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("generation: {0}")]
    Generation(#[from] SlideGeneratorError),
    #[error("deployment: {0}")]
    Deployment(#[from] DeployerError),
    #[error("job store: {0}")]
    Store(#[from] JobStoreError),
}
