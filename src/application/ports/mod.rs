mod deployer;
mod job_store;
mod slide_generator;

pub use deployer::{Deployer, DeployerError};
pub use job_store::{JobStore, JobStoreError};
pub use slide_generator::{GenerationRequest, SlideGenerator, SlideGeneratorError};
