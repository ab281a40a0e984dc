use axum::{
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};

use shared_types::{AppError, ResumeData};

use crate::typst::render_resume_pdf;

// ---------------------------------------------------------------------------
// POST /api/generate-pdf
// ---------------------------------------------------------------------------

/// Render a resume to PDF and return it as a download named after the
/// candidate.
#[utoipa::path(
    post,
    path = "/api/generate-pdf",
    request_body = ResumeData,
    responses(
        (status = 200, description = "Rendered resume", content_type = "application/pdf"),
        (status = 500, description = "Rendering failed", body = AppError)
    ),
    tag = "resume"
)]
pub async fn generate_pdf(Json(resume): Json<ResumeData>) -> Result<impl IntoResponse, AppError> {
    let pdf = render_resume_pdf(&resume).await?;
    let filename = resume.file_name("pdf").replace(['"', '\\'], "");

    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "application/pdf".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{filename}\""),
            ),
        ],
        pdf,
    ))
}
