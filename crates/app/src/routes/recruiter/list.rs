use dioxus::prelude::*;
use shared_types::placeholder::RandomApplicantCounts;
use shared_types::{
    filter_requisitions, project_requisitions, RequisitionSummary, StatusFilter, ALL_FILTERS,
    EMPTY_REQUISITIONS_MESSAGE,
};
use shared_ui::{
    Badge, Button, ButtonVariant, Card, CardContent, CardDescription, CardFooter, CardHeader,
    CardTitle, EmptyState, LoadingPlaceholder, PageHeader,
};

use super::status_tone;
use crate::format_helpers::{format_applicants, format_posted_date};
use crate::routes::Route;

/// Recruiter's list of requisitions with a status filter.
#[component]
pub fn RequisitionList() -> Element {
    let mut filter = use_signal(StatusFilter::default);

    let jobs = use_resource(move || async move { server::api::get_jobs().await });

    // Projected once per fetch so changing the filter does not re-roll the
    // applicant counts.
    let requisitions = use_memo(move || match &*jobs.read() {
        Some(Ok(jobs)) => Some(project_requisitions(jobs, &mut RandomApplicantCounts)),
        Some(Err(e)) => {
            tracing::error!(error = %e, "failed to load requisitions");
            Some(Vec::new())
        }
        None => None,
    });

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./requisitions.css") }

        div { class: "container",
            PageHeader {
                title: "Requisitions",
                subtitle: "Every open role you are hiring for.".to_string(),
            }

            FilterBar {
                selected: filter(),
                on_select: move |f| filter.set(f),
            }

            match requisitions() {
                Some(all) => rsx! {
                    RequisitionGrid { requisitions: filter_requisitions(&all, filter()) }
                },
                None => rsx! {
                    LoadingPlaceholder { message: "Loading requisitions..." }
                },
            }
        }
    }
}

/// One toggle button per status filter.
#[component]
fn FilterBar(selected: StatusFilter, on_select: EventHandler<StatusFilter>) -> Element {
    rsx! {
        div { class: "filter-bar", role: "group", aria_label: "Filter by status",
            for (option, label) in ALL_FILTERS.iter().map(|f| (*f, f.label())) {
                Button {
                    key: "{label}",
                    variant: ButtonVariant::Outline,
                    pressed: option == selected,
                    onclick: move |_| on_select.call(option),
                    "{label}"
                }
            }
        }
    }
}

/// Requisition cards, or the empty-state message when there are none.
#[component]
pub(crate) fn RequisitionGrid(requisitions: Vec<RequisitionSummary>) -> Element {
    if requisitions.is_empty() {
        return rsx! {
            EmptyState { message: EMPTY_REQUISITIONS_MESSAGE.to_string() }
        };
    }

    rsx! {
        div { class: "requisition-grid",
            for requisition in requisitions {
                RequisitionCard { key: "{requisition.id}", requisition: requisition.clone() }
            }
        }
    }
}

#[component]
fn RequisitionCard(requisition: RequisitionSummary) -> Element {
    let posted = format_posted_date(requisition.posted_date);
    let applicants = format_applicants(requisition.applicants);
    let status = requisition.status;
    let nav_id = requisition.id.clone();

    rsx! {
        Card { class: "requisition-card",
            CardHeader {
                div { class: "requisition-card-heading",
                    CardTitle { "{requisition.title}" }
                    Badge { tone: status_tone(status), "{status}" }
                }
                CardDescription { "{requisition.location}" }
            }
            CardContent {
                dl { class: "requisition-facts",
                    dt { "Posted" }
                    dd { "{posted}" }
                    dt { "Applicants" }
                    dd { "{applicants}" }
                }
            }
            CardFooter {
                Button {
                    variant: ButtonVariant::Secondary,
                    onclick: move |_| {
                        navigator().push(Route::RequisitionDetail { id: nav_id.clone() });
                    },
                    "View Details"
                }
            }
        }
    }
}
