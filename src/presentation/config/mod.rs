mod environment;
mod settings;

pub use environment::Environment;
pub use settings::{
    DeploySettings, GenerationSettings, PipelineSettings, RetentionSettings, ServerSettings,
    Settings,
};
