use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::placeholder::ApplicantCounts;
use crate::JobPosting;

/// Message shown in place of the requisition grid when nothing matches.
pub const EMPTY_REQUISITIONS_MESSAGE: &str = "No requisitions found.";

/// Lifecycle status of a requisition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub enum RequisitionStatus {
    Open,
    Closed,
    #[serde(rename = "In Review")]
    InReview,
}

impl RequisitionStatus {
    /// Display label, also used as the wire value.
    pub fn as_str(&self) -> &'static str {
        match self {
            RequisitionStatus::Open => "Open",
            RequisitionStatus::Closed => "Closed",
            RequisitionStatus::InReview => "In Review",
        }
    }
}

impl fmt::Display for RequisitionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Status filter offered on the requisition list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Only(RequisitionStatus),
}

/// Filters in the order the list view presents them.
pub const ALL_FILTERS: &[StatusFilter] = &[
    StatusFilter::All,
    StatusFilter::Only(RequisitionStatus::Open),
    StatusFilter::Only(RequisitionStatus::Closed),
    StatusFilter::Only(RequisitionStatus::InReview),
];

impl StatusFilter {
    pub fn label(&self) -> &'static str {
        match self {
            StatusFilter::All => "All",
            StatusFilter::Only(status) => status.as_str(),
        }
    }

    /// `All` passes every status; otherwise an exact status match.
    pub fn matches(&self, status: RequisitionStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(wanted) => *wanted == status,
        }
    }
}

/// A job posting projected for the recruiter's requisition list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequisitionSummary {
    pub id: String,
    pub title: String,
    pub location: String,
    pub posted_date: NaiveDate,
    pub status: RequisitionStatus,
    /// Placeholder figure. Not stable across projections.
    pub applicants: u32,
}

impl RequisitionSummary {
    /// Project a posting, drawing the applicant count from `counts`.
    pub fn from_posting(job: &JobPosting, counts: &mut impl ApplicantCounts) -> Self {
        Self {
            id: job.id.clone(),
            title: job.title.clone(),
            location: job.location.clone(),
            posted_date: job.posted_date,
            status: job.derived_status(),
            applicants: counts.applicants_for(job),
        }
    }
}

/// Project every posting, keeping directory order.
pub fn project_requisitions(
    jobs: &[JobPosting],
    counts: &mut impl ApplicantCounts,
) -> Vec<RequisitionSummary> {
    jobs.iter()
        .map(|job| RequisitionSummary::from_posting(job, counts))
        .collect()
}

/// Apply a status filter, keeping order.
pub fn filter_requisitions(
    requisitions: &[RequisitionSummary],
    filter: StatusFilter,
) -> Vec<RequisitionSummary> {
    requisitions
        .iter()
        .filter(|r| filter.matches(r.status))
        .cloned()
        .collect()
}
