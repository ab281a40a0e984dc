use axum::Router;
use shared_types::{
    AppError, AppErrorKind, CertificationEntry, EducationEntry, ExperienceEntry, JobPosting,
    PersonalInfo, ProjectEntry, PublicationEntry, ResumeData, SkillGroup, StyleOptions,
};
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable};

use crate::{health, rest, state::AppState};

#[derive(OpenApi)]
#[openapi(
    paths(
        rest::job::list_jobs,
        rest::job::get_job,
        rest::resume::generate_pdf,
        health::health_check,
    ),
    components(schemas(
        JobPosting,
        AppError,
        AppErrorKind,
        ResumeData,
        PersonalInfo,
        ExperienceEntry,
        EducationEntry,
        SkillGroup,
        ProjectEntry,
        PublicationEntry,
        CertificationEntry,
        StyleOptions,
        health::HealthResponse,
    )),
    tags(
        (name = "jobs", description = "Read-only job directory"),
        (name = "resume", description = "Resume export"),
        (name = "health", description = "Health check endpoint")
    ),
    info(
        title = "Hirewire API",
        description = "Mock job directory and resume export backing the Hirewire job board",
        version = "1.0.0"
    )
)]
pub struct ApiDoc;

/// Build an Axum router serving the REST API at `/api/*`, the health check,
/// and (when the `api_docs` flag is on) the API reference at `/docs`.
pub fn api_router(state: AppState) -> Router {
    let router = rest::rest_router()
        .route("/health", axum::routing::get(health::health_check))
        .with_state(state);

    if crate::config::feature_flags().api_docs {
        router.merge(Scalar::with_url("/docs", ApiDoc::openapi()))
    } else {
        router
    }
}
