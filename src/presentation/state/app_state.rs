use std::sync::Arc;

use crate::application::ports::{Deployer, JobStore, SlideGenerator};
use crate::application::services::PresentationService;

pub struct AppState<G, D>
where
    G: SlideGenerator,
    D: Deployer,
{
    pub presentation_service: Arc<PresentationService<G, D>>,
    pub job_store: Arc<dyn JobStore>,
    pub deployer: Arc<D>,
}

impl<G, D> Clone for AppState<G, D>
where
    G: SlideGenerator,
    D: Deployer,
{
    fn clone(&self) -> Self {
        Self {
            presentation_service: Arc::clone(&self.presentation_service),
            job_store: Arc::clone(&self.job_store),
            deployer: Arc::clone(&self.deployer),
        }
    }
}
