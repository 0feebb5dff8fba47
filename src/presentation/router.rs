use axum::Router;
use axum::middleware;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::application::ports::{Deployer, SlideGenerator};
use crate::infrastructure::observability::request_id_middleware;
use crate::presentation::handlers::{
    github_validate_handler, health_handler, job_status_handler, submit_handler, themes_handler,
};
use crate::presentation::state::AppState;

pub fn create_router<G, D>(state: AppState<G, D>) -> Router
where
    G: SlideGenerator + 'static,
    D: Deployer + 'static,
{
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    Router::new()
        .route("/health", get(health_handler))
        .route("/api/v1/presentations", post(submit_handler::<G, D>))
        .route("/api/v1/jobs/{job_id}", get(job_status_handler::<G, D>))
        .route(
            "/api/v1/github/validate",
            post(github_validate_handler::<G, D>),
        )
        .route("/api/v1/themes", get(themes_handler))
        .layer(middleware::from_fn(request_id_middleware))
        .layer(trace_layer)
        .layer(cors)
        .with_state(state)
}
