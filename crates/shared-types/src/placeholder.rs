//! Stand-in figures for data the job directory does not track.
//!
//! Nothing in this module is real: applicant counts are random, and the
//! dashboard metrics are constants. Pages that show them label the values
//! as placeholder data.

use rand::Rng;

use crate::JobPosting;

/// Inclusive range for generated applicant counts.
pub const APPLICANT_RANGE: std::ops::RangeInclusive<u32> = 1..=50;

/// Source of applicant counts for requisition summaries.
pub trait ApplicantCounts {
    fn applicants_for(&mut self, job: &JobPosting) -> u32;
}

/// Draws a fresh count in [`APPLICANT_RANGE`] for every posting.
///
/// Counts are not persisted: projecting the same posting twice will usually
/// give different values.
#[derive(Debug, Default)]
pub struct RandomApplicantCounts;

impl ApplicantCounts for RandomApplicantCounts {
    fn applicants_for(&mut self, _job: &JobPosting) -> u32 {
        rand::thread_rng().gen_range(APPLICANT_RANGE)
    }
}

/// Returns the same count for every posting.
#[derive(Debug, Clone, Copy)]
pub struct FixedApplicantCounts(pub u32);

impl ApplicantCounts for FixedApplicantCounts {
    fn applicants_for(&mut self, _job: &JobPosting) -> u32 {
        self.0
    }
}

/// Pipeline figures shown on the requisition detail page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequisitionMetrics {
    pub applicants: u32,
    pub interviews: u32,
    pub offers: u32,
}

/// Constant figures for every requisition detail page.
pub const REQUISITION_METRICS: RequisitionMetrics = RequisitionMetrics {
    applicants: 23,
    interviews: 8,
    offers: 2,
};

/// Activity figures shown on the candidate dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CandidateMetrics {
    pub applications: u32,
    pub interviews: u32,
    pub saved_jobs: u32,
}

pub const CANDIDATE_METRICS: CandidateMetrics = CandidateMetrics {
    applications: 12,
    interviews: 3,
    saved_jobs: 8,
};
