use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::json;
use server::directory::JobDirectory;
use shared_types::{AppError, AppErrorKind, ResumeData};

use crate::common::{post_json_raw, test_app};

fn full_resume() -> String {
    json!({
        "personal": {
            "name": "Jane Doe",
            "email": "jane@example.com",
            "phone": "555-0100",
            "location": "Austin, TX",
            "legalStatus": "Prefer not to say"
        },
        "summary": "<p>Backend engineer who likes <strong>boring</strong> systems.</p>",
        "experience": [{
            "jobTitle": "Senior Engineer",
            "company": "Acme",
            "dates": "2020 - 2024",
            "description": "<ul><li>Cut p99 latency by 40%</li><li>Led on-call rotation</li></ul>"
        }],
        "education": [{
            "degree": "BSc Computer Science",
            "institution": "State University",
            "graduationYear": "2019",
            "gpa": "3.8"
        }],
        "skills": [{"category": "Languages", "skills_list": "Rust,  Go,\tSQL"}],
        "projects": [{"title": "hirewire", "date": "2025", "description": "Job board"}],
        "publications": [{
            "title": "On Hiring",
            "date": "2022",
            "authors": "J. Doe",
            "journal": "HR Quarterly",
            "link": "https://example.com/on-hiring"
        }],
        "certifications": [{"name": "CKA", "issuer": "CNCF", "date": "2023"}],
        "styleOptions": {"fontFamily": "Georgia, serif", "fontSize": 12, "accentColor": "#1f6feb"}
    })
    .to_string()
}

fn app() -> axum::Router {
    test_app(JobDirectory::seeded())
}

#[tokio::test]
async fn full_resume_renders_to_pdf() {
    let (status, headers, bytes) = post_json_raw(&app(), "/api/generate-pdf", &full_resume()).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        headers.get("content-type").unwrap().to_str().unwrap(),
        "application/pdf"
    );
    assert_eq!(
        headers.get("content-disposition").unwrap().to_str().unwrap(),
        r#"attachment; filename="Jane_Doe.pdf""#
    );
    assert!(bytes.starts_with(b"%PDF-"), "response should be a PDF");
}

#[tokio::test]
async fn empty_payload_renders_a_blank_resume() {
    let (status, headers, bytes) = post_json_raw(&app(), "/api/generate-pdf", "{}").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        headers.get("content-disposition").unwrap().to_str().unwrap(),
        r#"attachment; filename="resume.pdf""#
    );
    assert!(bytes.starts_with(b"%PDF-"));
}

#[tokio::test]
async fn typst_syntax_in_text_is_printed_literally() {
    let body = json!({
        "personal": {"name": "Robert \"Bobby\" Tables"},
        "summary": "#set page(width: 1pt) $x^2$ \\ [not markup] // nor a comment",
        "experience": [{"jobTitle": "#panic(\"boom\")", "company": "*Bold* _Co_"}],
        "styleOptions": {"accentColor": "); #panic(\"x\") //", "fontSize": 400}
    })
    .to_string();

    let (status, headers, bytes) = post_json_raw(&app(), "/api/generate-pdf", &body).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        headers.get("content-disposition").unwrap().to_str().unwrap(),
        r#"attachment; filename="Robert_Bobby_Tables.pdf""#
    );
    assert!(bytes.starts_with(b"%PDF-"));
}

#[tokio::test]
async fn malformed_json_is_rejected() {
    let (status, _, _) = post_json_raw(&app(), "/api/generate-pdf", "{not json").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn resume_with_only_headline_fields_renders() {
    let mut resume: ResumeData = serde_json::from_str(&full_resume()).unwrap();
    for entry in &mut resume.experience {
        entry.company.clear();
        entry.dates.clear();
        entry.description.clear();
    }
    resume.skills[0].category.clear();

    let pdf = server::typst::render_resume_pdf(&resume).await.unwrap();
    assert!(pdf.starts_with(b"%PDF-"));
}

#[tokio::test]
async fn broken_template_source_is_an_internal_error() {
    let err: AppError = server::typst::compile_typst("#let x = (")
        .await
        .unwrap_err();
    assert_eq!(err.kind, AppErrorKind::InternalError);
    assert!(err.message.starts_with("Typst compilation failed"), "{}", err.message);
}
