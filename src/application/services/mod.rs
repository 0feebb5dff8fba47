mod presentation_service;
pub mod prompts;
pub mod renderer;
pub mod sample;

pub use presentation_service::{
    GenerationMode, LiveGeneration, PipelineError, PresentationService, PresentationSpec,
};
