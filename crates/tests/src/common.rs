use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use chrono::NaiveDate;
use serde_json::Value;
use server::directory::JobDirectory;
use server::state::AppState;
use shared_types::{AuthUser, JobPosting, Session, UserRole};
use tower::ServiceExt;

/// Build a test router over `directory`, mounted the way the app mounts it.
pub fn test_app(directory: JobDirectory) -> Router {
    server::rest::rest_router()
        .route("/health", axum::routing::get(server::health::health_check))
        .with_state(AppState::with_directory(directory))
}

/// GET `uri` and decode the JSON body (`Value::Null` when empty).
pub async fn get_json(app: &Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = if body.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&body).unwrap()
    };
    (status, json)
}

/// POST a JSON `body` to `uri` and return the raw response parts.
pub async fn post_json_raw(
    app: &Router,
    uri: &str,
    body: &str,
) -> (StatusCode, axum::http::HeaderMap, Vec<u8>) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();

    let status = response.status();
    let headers = response.headers().clone();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, headers, body.to_vec())
}

/// A posting with filler for everything but id and title.
pub fn posting(id: &str, title: &str) -> JobPosting {
    JobPosting {
        id: id.to_string(),
        title: title.to_string(),
        company: "Acme".to_string(),
        location: "Remote".to_string(),
        description: String::new(),
        requirements: Vec::new(),
        benefits: Vec::new(),
        posted_date: NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
    }
}

/// Signed-in session for the demo user of `role`.
pub fn session_for(role: UserRole) -> Session {
    match server::session::demo_user(&role) {
        Ok(user) => Session::signed_in(user),
        Err(_) => Session::signed_in(AuthUser {
            id: "someone".to_string(),
            name: "Someone".to_string(),
            role,
        }),
    }
}
