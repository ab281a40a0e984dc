use dioxus::prelude::*;
use shared_types::{AuthUser, JobPosting, ResumeData, ResumePdf, Session};

#[cfg(feature = "server")]
use crate::error_convert::AppErrorExt;

// ── Job directory ──────────────────────────────────────

/// Every posting in the job directory, in seed order.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn get_jobs() -> Result<Vec<JobPosting>, ServerFnError> {
    let directory = crate::directory::shared();
    Ok(directory.jobs().to_vec())
}

/// Look up one posting. An unknown id is `Ok(None)`, not an error.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn get_job_by_id(id: String) -> Result<Option<JobPosting>, ServerFnError> {
    let directory = crate::directory::shared();
    let job = directory.job_by_id(&id).cloned();
    if job.is_none() {
        tracing::debug!(%id, "job not in directory");
    }
    Ok(job)
}

// ── Session ────────────────────────────────────────────

/// Session a client starts with on page load.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn get_session() -> Result<Session, ServerFnError> {
    Ok(crate::session::initial_session(
        &crate::config::app_config().session,
    ))
}

/// Hand out the demo identity for `role` ("candidate" or "recruiter").
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn sign_in(role: String) -> Result<AuthUser, ServerFnError> {
    use shared_types::UserRole;

    crate::session::demo_user(&UserRole::parse(&role)).map_err(|e| e.into_server_fn_error())
}

// ── Resume export ──────────────────────────────────────

/// Render a resume to PDF. The download name follows `ResumeData::file_name`.
#[cfg_attr(feature = "server", tracing::instrument(skip(resume)))]
#[server]
pub async fn generate_resume_pdf(resume: ResumeData) -> Result<ResumePdf, ServerFnError> {
    use base64::Engine;

    let pdf = crate::typst::render_resume_pdf(&resume)
        .await
        .map_err(|e| e.into_server_fn_error())?;
    Ok(ResumePdf {
        filename: resume.file_name("pdf"),
        pdf_base64: base64::engine::general_purpose::STANDARD.encode(pdf),
    })
}
