use dioxus::prelude::*;
use shared_types::placeholder::{CandidateMetrics, CANDIDATE_METRICS};
use shared_types::{AppError, PersonalInfo, ResumeData, ResumePdf};
use shared_ui::{
    Button, ButtonVariant, Card, CardContent, CardHeader, CardTitle, MetricCard, MetricGrid,
    PageHeader,
};

use crate::auth::use_auth;

/// Caption under every figure that is not backed by real data.
const SAMPLE_CAPTION: &str = "Sample data";

#[component]
pub fn CandidateDashboard() -> Element {
    let auth = use_auth();
    let name = auth
        .current_user()
        .map(|u| u.name)
        .unwrap_or_else(|| "there".to_string());

    rsx! {
        div { class: "container",
            PageHeader {
                title: "Candidate Dashboard",
                subtitle: format!("Welcome back, {name}"),
            }
            CandidateMetricsPanel { metrics: CANDIDATE_METRICS }
            QuickActions { name }
        }
    }
}

#[component]
fn CandidateMetricsPanel(metrics: CandidateMetrics) -> Element {
    rsx! {
        MetricGrid {
            MetricCard {
                label: "Applications",
                value: metrics.applications.to_string(),
                caption: SAMPLE_CAPTION.to_string(),
            }
            MetricCard {
                label: "Interviews",
                value: metrics.interviews.to_string(),
                caption: SAMPLE_CAPTION.to_string(),
            }
            MetricCard {
                label: "Saved Jobs",
                value: metrics.saved_jobs.to_string(),
                caption: SAMPLE_CAPTION.to_string(),
            }
        }
    }
}

/// Resume seeded from the signed-in candidate; the builder fills the rest.
fn starter_resume(name: &str) -> ResumeData {
    ResumeData {
        personal: PersonalInfo {
            name: name.to_string(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Browser script that saves `pdf` through a throwaway download link.
fn download_script(pdf: &ResumePdf) -> String {
    let href = serde_json::to_string(&format!("data:application/pdf;base64,{}", pdf.pdf_base64))
        .unwrap_or_default();
    let filename = serde_json::to_string(&pdf.filename).unwrap_or_default();
    format!(
        r#"
        (function() {{
            var link = document.createElement('a');
            link.href = {href};
            link.download = {filename};
            document.body.appendChild(link);
            link.click();
            link.remove();
        }})();
        "#,
    )
}

#[component]
fn QuickActions(name: String) -> Element {
    let mut exporting = use_signal(|| false);
    let mut error = use_signal(|| None::<String>);

    let download_resume = move |_: MouseEvent| {
        let resume = starter_resume(&name);
        spawn(async move {
            exporting.set(true);
            match server::api::generate_resume_pdf(resume).await {
                Ok(pdf) => {
                    tracing::info!(file = %pdf.filename, "resume exported");
                    document::eval(&download_script(&pdf));
                    error.set(None);
                }
                Err(e) => {
                    tracing::error!(error = %e, "resume export failed");
                    error.set(Some(AppError::friendly_message(&e.to_string())));
                }
            }
            exporting.set(false);
        });
    };

    rsx! {
        Card {
            CardHeader {
                CardTitle { "Quick Actions" }
            }
            CardContent {
                div { class: "quick-actions",
                    Button {
                        variant: ButtonVariant::Primary,
                        onclick: move |_| tracing::info!("job search is not available yet"),
                        "Browse Jobs"
                    }
                    Button {
                        variant: ButtonVariant::Outline,
                        onclick: move |_| tracing::info!("profile editing is not available yet"),
                        "Update Profile"
                    }
                    Button {
                        variant: ButtonVariant::Secondary,
                        disabled: exporting(),
                        onclick: download_resume,
                        if exporting() { "Preparing PDF..." } else { "Download Resume" }
                    }
                }
                if let Some(message) = error() {
                    p { class: "quick-actions-error", role: "alert", "{message}" }
                }
            }
        }
    }
}
