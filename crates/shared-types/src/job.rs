use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::RequisitionStatus;

// ---------------------------------------------------------------------------
// Domain Struct
// ---------------------------------------------------------------------------

/// A job posting held by the job directory.
///
/// Postings are seed data: created once when the directory is built and never
/// mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct JobPosting {
    /// Unique within a directory.
    pub id: String,
    pub title: String,
    pub company: String,
    pub location: String,
    pub description: String,
    /// Requirement bullet points, in display order.
    #[serde(default)]
    pub requirements: Vec<String>,
    /// Benefit bullet points, in display order.
    #[serde(default)]
    pub benefits: Vec<String>,
    /// Serialized as `YYYY-MM-DD`.
    pub posted_date: NaiveDate,
}

impl JobPosting {
    /// Status of the posting as shown to recruiters.
    ///
    /// The directory does not track requisition status, so every posting
    /// reports `Open`.
    pub fn derived_status(&self) -> RequisitionStatus {
        RequisitionStatus::Open
    }
}
