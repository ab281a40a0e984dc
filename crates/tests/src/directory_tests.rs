use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use server::directory::JobDirectory;
use shared_types::{AppErrorKind, JobPosting};

use crate::common::{get_json, posting, test_app};

#[test]
fn every_posting_is_found_by_its_id() {
    let directory = JobDirectory::seeded();
    for job in directory.jobs() {
        assert_eq!(directory.job_by_id(&job.id), Some(job));
    }
}

#[test]
fn absent_ids_are_not_found() {
    let directory = JobDirectory::seeded();
    for id in ["", "job-999", "JOB-1", " job-1", "job-1 "] {
        assert!(directory.job_by_id(id).is_none(), "{id:?} should be absent");
    }
}

#[test]
fn listing_is_stable_and_complete() {
    let directory = JobDirectory::seeded();
    let first = directory.jobs().to_vec();
    let second = directory.jobs().to_vec();
    assert_eq!(first.len(), server::seed::postings().len());
    assert_eq!(first, second);
}

#[test]
fn duplicate_ids_are_rejected() {
    let err = JobDirectory::new(vec![posting("job-1", "A"), posting("job-1", "B")]).unwrap_err();
    assert_eq!(err.kind, AppErrorKind::Conflict);
}

#[tokio::test]
async fn rest_lookup_matches_directory() {
    let directory = JobDirectory::seeded();
    let app = test_app(directory.clone());

    for job in directory.jobs() {
        let (status, body) = get_json(&app, &format!("/api/jobs/{}", job.id)).await;
        assert_eq!(status, StatusCode::OK);
        let fetched: JobPosting = serde_json::from_value(body).unwrap();
        assert_eq!(&fetched, job);
    }
}

#[tokio::test]
async fn rest_unknown_id_is_404_with_error_body() {
    let app = test_app(JobDirectory::seeded());
    let (status, body) = get_json(&app, "/api/jobs/nope").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["kind"], "NotFound");
}

#[tokio::test]
async fn health_reports_directory_size() {
    let directory = JobDirectory::new(vec![posting("job-1", "Engineer")]).unwrap();
    let app = test_app(directory);
    let (status, body) = get_json(&app, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["postings"], 1);
    assert_eq!(body["status"], "ok");
}
