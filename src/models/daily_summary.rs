use chrono::NaiveDateTime;
use serde::Serialize;

/// Attendance of one staff member on one day, derived from punch events.
/// Never persisted.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DailySummary {
    pub date_key: String,
    pub staff_id: String,
    pub staff_name: String,
    pub first_in: Option<NaiveDateTime>,
    pub last_out: Option<NaiveDateTime>,
    /// Sum of paired in→out intervals.
    pub active_seconds: i64,
}

impl DailySummary {
    /// Active duration in hours, rounded to two decimals.
    pub fn active_hours(&self) -> f64 {
        seconds_to_hours(self.active_seconds)
    }
}

pub fn seconds_to_hours(seconds: i64) -> f64 {
    (seconds as f64 / 3600.0 * 100.0).round() / 100.0
}
