mod deck;
mod deploy;
mod job;
mod job_status;
mod provider;
mod render_options;

pub use deck::{deck_filename, split_slides, DeckMetadata, SlideDeck};
pub use deploy::{AccountInfo, DeployTarget, DeploymentResult, SiteFile};
pub use job::{
    Job, JobId, JobOutput, PROGRESS_ACCEPTED, PROGRESS_COMPLETE, PROGRESS_FINALIZING,
    PROGRESS_GENERATING, PROGRESS_RENDERING,
};
pub use job_status::JobStatus;
pub use provider::Provider;
pub use render_options::{HighlightTheme, RenderOptions, Theme, Transition};
