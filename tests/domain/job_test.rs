use deckhand::domain::{
    Job, JobId, JobOutput, JobStatus, SlideDeck, Theme, PROGRESS_COMPLETE, PROGRESS_GENERATING,
    PROGRESS_RENDERING,
};

fn sample_output() -> JobOutput {
    let deck = SlideDeck::from_markdown(
        "# Title\n\n---\n\n## Body".to_string(),
        "Test topic",
        "sample",
        "sample",
    );
    JobOutput {
        deck,
        html: Some("<html></html>".to_string()),
        theme: Theme::Black,
        deployment: None,
    }
}

#[test]
fn given_new_job_then_processing_at_zero_progress() {
    let job = Job::new();

    assert_eq!(job.status, JobStatus::Processing);
    assert_eq!(job.progress, 0);
    assert_eq!(job.message, "Starting...");
    assert!(job.completed_at.is_none());
    assert!(job.failed_at.is_none());
    assert!(job.output.is_none());
    assert!(job.error.is_none());
    assert!(!job.is_terminal());
}

#[test]
fn given_two_jobs_then_ids_are_unique() {
    assert_ne!(Job::new().id, Job::new().id);
}

#[test]
fn given_job_id_round_trip_then_uuid_is_preserved() {
    let id = JobId::new();
    assert_eq!(JobId::from_uuid(id.as_uuid()), id);
}

#[test]
fn given_checkpoints_when_advancing_then_progress_and_message_update() {
    let mut job = Job::new();

    job.advance(PROGRESS_GENERATING, "Generating slides with AI...");

    assert_eq!(job.progress, 10);
    assert_eq!(job.message, "Generating slides with AI...");
    assert_eq!(job.status, JobStatus::Processing);
}

#[test]
fn given_lower_checkpoint_when_advancing_then_progress_never_moves_backwards() {
    let mut job = Job::new();
    job.advance(PROGRESS_RENDERING, "Building HTML...");

    job.advance(PROGRESS_GENERATING, "Generating slides with AI...");

    assert_eq!(job.progress, 60);
    assert_eq!(job.message, "Generating slides with AI...");
}

#[test]
fn given_completed_job_then_terminal_fields_are_set() {
    let mut job = Job::new();
    job.advance(PROGRESS_RENDERING, "Building HTML...");

    job.complete(sample_output());

    assert_eq!(job.status, JobStatus::Completed);
    assert_eq!(job.progress, PROGRESS_COMPLETE);
    assert_eq!(job.message, "Complete!");
    assert!(job.completed_at.is_some());
    assert!(job.output.is_some());
    assert!(job.error.is_none());
    assert!(job.is_terminal());
}

#[test]
fn given_failed_job_then_error_is_set_and_stage_message_kept() {
    let mut job = Job::new();
    job.advance(PROGRESS_GENERATING, "Generating slides with AI...");

    job.fail("authentication failed: bad key");

    assert_eq!(job.status, JobStatus::Failed);
    assert_eq!(job.error.as_deref(), Some("authentication failed: bad key"));
    assert!(job.failed_at.is_some());
    assert!(job.output.is_none());
    // Failure keeps the last checkpoint message so the broken stage stays visible.
    assert_eq!(job.message, "Generating slides with AI...");
    assert_eq!(job.progress, 10);
    assert!(job.is_terminal());
}

#[test]
fn given_terminal_job_when_advancing_then_nothing_changes() {
    let mut job = Job::new();
    job.complete(sample_output());

    job.advance(PROGRESS_GENERATING, "too late");

    assert_eq!(job.progress, PROGRESS_COMPLETE);
    assert_eq!(job.message, "Complete!");
}

#[test]
fn given_completed_job_when_failing_then_completion_wins() {
    let mut job = Job::new();
    job.complete(sample_output());
    let completed_at = job.completed_at;

    job.fail("late failure");

    assert_eq!(job.status, JobStatus::Completed);
    assert_eq!(job.completed_at, completed_at);
    assert!(job.error.is_none());
}

#[test]
fn given_failed_job_when_completing_then_failure_wins() {
    let mut job = Job::new();
    job.fail("broken");

    job.complete(sample_output());

    assert_eq!(job.status, JobStatus::Failed);
    assert!(job.output.is_none());
    assert_eq!(job.error.as_deref(), Some("broken"));
}

#[test]
fn given_status_strings_then_parse_and_format_round_trip() {
    for status in [JobStatus::Processing, JobStatus::Completed, JobStatus::Failed] {
        assert_eq!(status.as_str().parse::<JobStatus>(), Ok(status));
    }
    assert_eq!(JobStatus::Processing.to_string(), "processing");
}

#[test]
fn given_unknown_status_string_then_parse_fails() {
    let error = "paused".parse::<JobStatus>().unwrap_err();
    assert!(error.contains("Invalid job status"));
}
