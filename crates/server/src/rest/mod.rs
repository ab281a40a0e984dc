pub mod job;
pub mod resume;

use axum::{
    routing::{get, post},
    Router,
};
use crate::state::AppState;

/// Build the REST API router.
pub fn rest_router() -> Router<AppState> {
    Router::new()
        .route("/api/jobs", get(job::list_jobs))
        .route("/api/jobs/{id}", get(job::get_job))
        .route("/api/generate-pdf", post(resume::generate_pdf))
}
