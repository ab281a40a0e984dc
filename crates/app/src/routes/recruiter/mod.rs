mod detail;
mod list;

pub use detail::RequisitionDetail;
pub use list::RequisitionList;

use shared_types::RequisitionStatus;
use shared_ui::BadgeTone;

/// Badge colour for a requisition status.
fn status_tone(status: RequisitionStatus) -> BadgeTone {
    match status {
        RequisitionStatus::Open => BadgeTone::Success,
        RequisitionStatus::InReview => BadgeTone::Warning,
        RequisitionStatus::Closed => BadgeTone::Muted,
    }
}
