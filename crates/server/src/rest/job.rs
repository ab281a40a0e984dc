use axum::{
    extract::{Path, State},
    Json,
};
use std::sync::Arc;

use shared_types::{AppError, JobPosting};

use crate::directory::JobDirectory;

// ---------------------------------------------------------------------------
// GET /api/jobs
// ---------------------------------------------------------------------------

/// List every job posting in the directory.
#[utoipa::path(
    get,
    path = "/api/jobs",
    responses(
        (status = 200, description = "All job postings, in seed order", body = Vec<JobPosting>)
    ),
    tag = "jobs"
)]
pub async fn list_jobs(State(directory): State<Arc<JobDirectory>>) -> Json<Vec<JobPosting>> {
    Json(directory.jobs().to_vec())
}

// ---------------------------------------------------------------------------
// GET /api/jobs/{id}
// ---------------------------------------------------------------------------

/// Get a single job posting by id (exact match).
#[utoipa::path(
    get,
    path = "/api/jobs/{id}",
    params(
        ("id" = String, Path, description = "Job posting id")
    ),
    responses(
        (status = 200, description = "Job posting found", body = JobPosting),
        (status = 404, description = "No posting with this id", body = AppError)
    ),
    tag = "jobs"
)]
pub async fn get_job(
    State(directory): State<Arc<JobDirectory>>,
    Path(id): Path<String>,
) -> Result<Json<JobPosting>, AppError> {
    directory
        .job_by_id(&id)
        .cloned()
        .map(Json)
        .ok_or_else(|| AppError::not_found(format!("Job {id} not found")))
}
