use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use chrono::NaiveDate;
use server::directory::JobDirectory;
use server::state::AppState;
use shared_types::JobPosting;
use tower::ServiceExt;

#[allow(dead_code)]
/// Build a posting with the given id and title; other fields are filler.
pub fn posting(id: &str, title: &str) -> JobPosting {
    JobPosting {
        id: id.to_string(),
        title: title.to_string(),
        company: "Acme".to_string(),
        location: "Remote".to_string(),
        description: format!("{title} at Acme"),
        requirements: vec!["Curiosity".to_string()],
        benefits: vec!["Snacks".to_string()],
        posted_date: NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
    }
}

#[allow(dead_code)]
/// Build a test router over the built-in seed directory.
pub fn test_app() -> Router {
    test_app_with(JobDirectory::seeded())
}

#[allow(dead_code)]
/// Build a test router over a caller-supplied directory.
pub fn test_app_with(directory: JobDirectory) -> Router {
    server::rest::rest_router()
        .route("/health", axum::routing::get(server::health::health_check))
        .with_state(AppState::with_directory(directory))
}

#[allow(dead_code)]
/// Helper to make a GET request and return (status, body).
pub async fn get(app: &Router, uri: &str) -> (StatusCode, String) {
    let response = app
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, String::from_utf8(body.to_vec()).unwrap())
}
