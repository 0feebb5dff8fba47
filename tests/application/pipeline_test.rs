use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use deckhand::application::ports::{
    Deployer, DeployerError, GenerationRequest, JobStore, JobStoreError, SlideGenerator,
    SlideGeneratorError,
};
use deckhand::application::services::prompts::PromptConfig;
use deckhand::application::services::{
    GenerationMode, LiveGeneration, PresentationService, PresentationSpec,
};
use deckhand::domain::{
    AccountInfo, DeployTarget, DeploymentResult, Job, JobId, Provider, RenderOptions, SiteFile,
    SlideDeck,
};

/// Job store that remembers every snapshot written to it, so tests can
/// assert the exact checkpoint sequence a pipeline run persisted.
#[derive(Default)]
struct RecordingJobStore {
    jobs: Mutex<HashMap<JobId, Job>>,
    history: Mutex<Vec<(u8, String, String)>>,
}

impl RecordingJobStore {
    fn snapshots(&self) -> Vec<(u8, String, String)> {
        self.history.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl JobStore for RecordingJobStore {
    async fn set(&self, job: Job) -> Result<(), JobStoreError> {
        self.history.lock().unwrap().push((
            job.progress,
            job.status.as_str().to_string(),
            job.message.clone(),
        ));
        self.jobs.lock().unwrap().insert(job.id, job);
        Ok(())
    }

    async fn get(&self, id: JobId) -> Result<Option<Job>, JobStoreError> {
        Ok(self.jobs.lock().unwrap().get(&id).cloned())
    }

    async fn delete(&self, id: JobId) -> Result<(), JobStoreError> {
        self.jobs.lock().unwrap().remove(&id);
        Ok(())
    }

    async fn purge_expired(&self, _ttl: Duration) -> Result<usize, JobStoreError> {
        Ok(0)
    }
}

struct StubGenerator;

#[async_trait::async_trait]
impl SlideGenerator for StubGenerator {
    async fn generate(
        &self,
        request: &GenerationRequest,
    ) -> Result<SlideDeck, SlideGeneratorError> {
        Ok(SlideDeck::from_markdown(
            "# Stub\n\nNote:\nOne.\n\n---\n\n## Two\n\nNote:\nTwo.".to_string(),
            &request.topic,
            request.provider.as_str(),
            &request.model,
        ))
    }
}

struct FailingGenerator;

#[async_trait::async_trait]
impl SlideGenerator for FailingGenerator {
    async fn generate(
        &self,
        _request: &GenerationRequest,
    ) -> Result<SlideDeck, SlideGeneratorError> {
        Err(SlideGeneratorError::Authentication("bad key".to_string()))
    }
}

/// Deployer that records the file sets it was asked to publish.
#[derive(Default)]
struct CapturingDeployer {
    uploads: Mutex<Vec<Vec<SiteFile>>>,
}

#[async_trait::async_trait]
impl Deployer for CapturingDeployer {
    async fn validate_credentials(
        &self,
        username: &str,
        _token: &str,
    ) -> Result<AccountInfo, DeployerError> {
        Ok(AccountInfo {
            login: username.to_string(),
            name: None,
            public_repos: 0,
        })
    }

    async fn deploy(
        &self,
        target: &DeployTarget,
        files: &[SiteFile],
    ) -> Result<DeploymentResult, DeployerError> {
        self.uploads.lock().unwrap().push(files.to_vec());
        Ok(DeploymentResult {
            url: format!("https://{}.github.io/{}", target.username, target.repository),
            repository: format!("{}/{}", target.username, target.repository),
            branch: "gh-pages".to_string(),
        })
    }
}

fn sample_spec(topic: &str, slide_count: usize) -> PresentationSpec {
    PresentationSpec {
        prompt: PromptConfig {
            topic: topic.to_string(),
            audience: "general audience".to_string(),
            slide_count,
            tone: "professional".to_string(),
            topic_type: "general".to_string(),
            include_code: false,
            custom_system_prompt: None,
        },
        mode: GenerationMode::Sample,
        render: RenderOptions::default(),
        deploy: None,
    }
}

fn live_spec(topic: &str) -> PresentationSpec {
    let mut spec = sample_spec(topic, 5);
    spec.mode = GenerationMode::Live(LiveGeneration {
        provider: Provider::OpenAi,
        api_key: "sk-test".to_string(),
        model: "gpt-4o".to_string(),
    });
    spec
}

async fn wait_terminal(store: &RecordingJobStore, id: JobId) -> Job {
    for _ in 0..200 {
        if let Ok(Some(job)) = store.get(id).await {
            if job.is_terminal() {
                return job;
            }
        }
        tokio::time::sleep(Duration::from_millis(5)).await;
    }
    panic!("job did not reach a terminal state");
}

fn service<G, D>(
    generator: G,
    deployer: D,
    store: Arc<RecordingJobStore>,
    static_build: bool,
) -> Arc<PresentationService<G, D>>
where
    G: SlideGenerator + 'static,
    D: Deployer + 'static,
{
    Arc::new(PresentationService::new(
        Arc::new(generator),
        Arc::new(deployer),
        store as Arc<dyn JobStore>,
        static_build,
    ))
}

#[tokio::test]
async fn given_sample_run_then_every_checkpoint_is_persisted_in_order() {
    let store = Arc::new(RecordingJobStore::default());
    let service = service(StubGenerator, CapturingDeployer::default(), Arc::clone(&store), true);

    let id = service.submit(sample_spec("Checkpoints", 4)).await.unwrap();
    let job = wait_terminal(&store, id).await;

    assert!(job.output.is_some());
    let expected: Vec<(u8, String, String)> = vec![
        (0, "processing".to_string(), "Starting...".to_string()),
        (10, "processing".to_string(), "Generating slides with AI...".to_string()),
        (60, "processing".to_string(), "Building HTML...".to_string()),
        (90, "processing".to_string(), "Finalizing...".to_string()),
        (100, "completed".to_string(), "Complete!".to_string()),
    ];
    assert_eq!(store.snapshots(), expected);
}

#[tokio::test]
async fn given_any_run_then_persisted_progress_never_decreases() {
    let store = Arc::new(RecordingJobStore::default());
    let service = service(StubGenerator, CapturingDeployer::default(), Arc::clone(&store), true);

    let id = service.submit(sample_spec("Monotonic", 8)).await.unwrap();
    wait_terminal(&store, id).await;

    let snapshots = store.snapshots();
    for pair in snapshots.windows(2) {
        assert!(pair[0].0 <= pair[1].0, "progress went backwards: {:?}", snapshots);
    }
}

#[tokio::test]
async fn given_markdown_only_service_then_render_stage_is_skipped() {
    let store = Arc::new(RecordingJobStore::default());
    let service = service(StubGenerator, CapturingDeployer::default(), Arc::clone(&store), false);

    let id = service.submit(sample_spec("No HTML", 4)).await.unwrap();
    let job = wait_terminal(&store, id).await;

    let output = job.output.unwrap();
    assert!(output.html.is_none());
    assert!(output.deployment.is_none());

    let progresses: Vec<u8> = store.snapshots().iter().map(|s| s.0).collect();
    assert_eq!(progresses, vec![0, 10, 90, 100]);
    assert!(store.snapshots().iter().all(|s| s.2 != "Building HTML..."));
}

#[tokio::test]
async fn given_deploy_target_then_site_files_are_published() {
    let store = Arc::new(RecordingJobStore::default());
    let deployer = Arc::new(CapturingDeployer::default());
    let generator = Arc::new(StubGenerator);
    let service = Arc::new(PresentationService::new(
        generator,
        Arc::clone(&deployer),
        Arc::clone(&store) as Arc<dyn JobStore>,
        true,
    ));

    let mut spec = live_spec("Deployed talk");
    spec.deploy = Some(DeployTarget {
        username: "octocat".to_string(),
        token: "ghp_secret".to_string(),
        repository: "deployed-talk".to_string(),
    });

    let id = service.submit(spec).await.unwrap();
    let job = wait_terminal(&store, id).await;

    let output = job.output.unwrap();
    let deployment = output.deployment.unwrap();
    assert_eq!(deployment.url, "https://octocat.github.io/deployed-talk");
    assert_eq!(deployment.repository, "octocat/deployed-talk");

    let uploads = deployer.uploads.lock().unwrap();
    assert_eq!(uploads.len(), 1);
    let paths: Vec<&str> = uploads[0].iter().map(|f| f.path.as_str()).collect();
    assert_eq!(paths, vec!["index.html", "slides.md"]);
    assert_eq!(uploads[0][1].content, output.deck.markdown);

    let messages: Vec<String> = store.snapshots().iter().map(|s| s.2.clone()).collect();
    assert!(messages.contains(&"Deploying to GitHub Pages...".to_string()));
    assert!(!messages.contains(&"Finalizing...".to_string()));
}

#[tokio::test]
async fn given_failing_generator_then_job_ends_failed_with_stage_message() {
    let store = Arc::new(RecordingJobStore::default());
    let service = service(FailingGenerator, CapturingDeployer::default(), Arc::clone(&store), true);

    let id = service.submit(live_spec("Doomed")).await.unwrap();
    let job = wait_terminal(&store, id).await;

    assert!(job.error.as_deref().unwrap().contains("authentication failed: bad key"));
    assert!(job.output.is_none());

    let last = store.snapshots().last().cloned().unwrap();
    assert_eq!(last.0, 10);
    assert_eq!(last.1, "failed");
    assert_eq!(last.2, "Generating slides with AI...");
}
