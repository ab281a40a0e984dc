use dioxus::prelude::*;
use shared_types::placeholder::{RequisitionMetrics, REQUISITION_METRICS};
use shared_types::JobPosting;
use shared_ui::{
    Badge, Button, ButtonVariant, Card, CardContent, CardHeader, CardTitle, LoadingPlaceholder,
    MetricCard, MetricGrid,
};

use super::status_tone;
use crate::format_helpers::format_posted_date;
use crate::routes::Route;

pub(crate) const LOADING_MESSAGE: &str = "Loading requisition details...";

/// Finished lookup: the id it was made for and what the directory returned.
type Lookup = (String, Result<Option<JobPosting>, ServerFnError>);

/// A single requisition, looked up by the route's id.
///
/// Until the posting resolves the loading placeholder stays up. An unknown id
/// never resolves, so it keeps the placeholder and only logs a warning.
#[component]
pub fn RequisitionDetail(id: String) -> Element {
    let lookup = use_resource(use_reactive!(|(id,)| async move {
        let result = server::api::get_job_by_id(id.clone()).await;
        (id, result)
    }));

    use_effect(move || match &*lookup.read() {
        Some((id, Ok(None))) => tracing::warn!(%id, "requisition not found in job directory"),
        Some((id, Err(e))) => tracing::error!(%id, error = %e, "failed to load requisition"),
        _ => {}
    });

    let job = {
        let current = lookup.read();
        resolved_posting(Option::as_ref(&*current), &id)
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./requisitions.css") }

        div { class: "container",
            Button {
                variant: ButtonVariant::Ghost,
                class: "back-link",
                onclick: move |_| {
                    navigator().push(Route::RequisitionList {});
                },
                "← Back to Requisitions"
            }

            RequisitionContent { job }
        }
    }
}

/// The posting to show for `id`: only a finished lookup for that same id
/// that found one. A lookup still answering for a previous id counts as
/// pending.
fn resolved_posting(lookup: Option<&Lookup>, id: &str) -> Option<JobPosting> {
    match lookup {
        Some((fetched, Ok(Some(posting)))) if fetched == id => Some(posting.clone()),
        _ => None,
    }
}

#[component]
fn RequisitionContent(job: Option<JobPosting>) -> Element {
    match job {
        Some(job) => rsx! {
            RequisitionBody { job, metrics: REQUISITION_METRICS }
        },
        None => rsx! {
            LoadingPlaceholder { message: LOADING_MESSAGE.to_string() }
        },
    }
}

#[component]
pub(crate) fn RequisitionBody(job: JobPosting, metrics: RequisitionMetrics) -> Element {
    let status = job.derived_status();
    let posted = format_posted_date(job.posted_date);

    rsx! {
        header { class: "requisition-header",
            div { class: "requisition-title-row",
                h1 { class: "page-title", "{job.title}" }
                Badge { tone: status_tone(status), "{status}" }
            }
            p { class: "requisition-meta",
                span { "{job.company}" }
                span { "{job.location}" }
                span { "Posted {posted}" }
            }
        }

        MetricGrid {
            MetricCard {
                label: "Applicants",
                value: metrics.applicants.to_string(),
                caption: "Sample data".to_string(),
            }
            MetricCard {
                label: "Interviews",
                value: metrics.interviews.to_string(),
                caption: "Sample data".to_string(),
            }
            MetricCard {
                label: "Offers Made",
                value: metrics.offers.to_string(),
                caption: "Sample data".to_string(),
            }
        }

        Card {
            CardHeader {
                CardTitle { "Description" }
            }
            CardContent {
                p { class: "requisition-description", "{job.description}" }
            }
        }

        div { class: "requisition-lists",
            BulletCard { title: "Requirements", items: job.requirements.clone() }
            BulletCard { title: "Benefits", items: job.benefits.clone() }
        }
    }
}

#[component]
fn BulletCard(title: String, items: Vec<String>) -> Element {
    rsx! {
        Card {
            CardHeader {
                CardTitle { "{title}" }
            }
            CardContent {
                if items.is_empty() {
                    p { class: "requisition-none", "None listed." }
                } else {
                    ul {
                        for item in items.iter() {
                            li { "{item}" }
                        }
                    }
                }
            }
        }
    }
}
