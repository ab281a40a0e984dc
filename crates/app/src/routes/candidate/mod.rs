mod dashboard;

pub use dashboard::CandidateDashboard;
