//! Formatting utilities for the UI layer.

use chrono::{Datelike, NaiveDate};

const MONTH_NAMES: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun",
    "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Format a posting date as "Jun 1, 2025".
pub fn format_posted_date(date: NaiveDate) -> String {
    let month = MONTH_NAMES[date.month0() as usize];
    format!("{} {}, {}", month, date.day(), date.year())
}

/// "1 applicant", "23 applicants".
pub fn format_applicants(count: u32) -> String {
    if count == 1 {
        "1 applicant".to_string()
    } else {
        format!("{count} applicants")
    }
}
