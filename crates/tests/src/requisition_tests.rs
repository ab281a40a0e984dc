use pretty_assertions::assert_eq;
use server::directory::JobDirectory;
use shared_types::placeholder::{FixedApplicantCounts, RandomApplicantCounts, APPLICANT_RANGE};
use shared_types::{
    filter_requisitions, project_requisitions, RequisitionStatus, StatusFilter, ALL_FILTERS,
};

use crate::common::posting;

#[test]
fn all_filter_shows_every_posting() {
    let directory = JobDirectory::seeded();
    let all = project_requisitions(directory.jobs(), &mut FixedApplicantCounts(5));
    let shown = filter_requisitions(&all, StatusFilter::All);

    let ids: Vec<_> = shown.iter().map(|r| r.id.as_str()).collect();
    let expected: Vec<_> = directory.jobs().iter().map(|j| j.id.as_str()).collect();
    assert_eq!(ids, expected);
}

#[test]
fn closed_and_in_review_are_empty_for_seed_data() {
    let directory = JobDirectory::seeded();
    let all = project_requisitions(directory.jobs(), &mut FixedApplicantCounts(5));

    for status in [RequisitionStatus::Closed, RequisitionStatus::InReview] {
        assert!(filter_requisitions(&all, StatusFilter::Only(status)).is_empty());
    }
}

#[test]
fn single_engineer_posting_scenario() {
    let directory = JobDirectory::new(vec![posting("job-1", "Engineer")]).unwrap();
    let all = project_requisitions(directory.jobs(), &mut RandomApplicantCounts);

    let open = filter_requisitions(&all, StatusFilter::Only(RequisitionStatus::Open));
    assert_eq!(open.len(), 1);
    assert_eq!(open[0].title, "Engineer");
    assert!(APPLICANT_RANGE.contains(&open[0].applicants));

    let closed = filter_requisitions(&all, StatusFilter::Only(RequisitionStatus::Closed));
    assert!(closed.is_empty());
}

#[test]
fn filter_bar_labels_in_display_order() {
    let labels: Vec<_> = ALL_FILTERS.iter().map(|f| f.label()).collect();
    assert_eq!(labels, ["All", "Open", "Closed", "In Review"]);
}
