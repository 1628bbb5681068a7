use super::punch_type::PunchType;
use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;

/// Storage format of `PunchEvent::timestamp`.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
/// Storage format of `PunchEvent::date_key`.
pub const DATE_KEY_FORMAT: &str = "%Y-%m-%d";

/// A single clock-in / clock-out record.
///
/// Created once by the punch write path and never modified afterwards.
/// Rows loaded from the store are normalized into this shape: text columns
/// that are missing come through as empty strings and act as ordinary
/// grouping keys.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PunchEvent {
    pub id: i64,                   // ⇔ punches.id
    pub staff_id: String,          // ⇔ punches.staff_id (FK → staff.id)
    pub staff_name: String,        // ⇔ punches.staff_name (snapshot)
    pub kind: PunchType,           // ⇔ punches.kind ('in' | 'out')
    pub timestamp: NaiveDateTime,  // ⇔ punches.timestamp ("YYYY-MM-DD HH:MM:SS")
    pub reason: String,            // ⇔ punches.reason
    pub photo_ref: Option<String>, // ⇔ punches.photo_ref
    pub date_key: String,          // ⇔ punches.date_key ("YYYY-MM-DD")
    pub created_at: String,        // ⇔ punches.created_at (ISO8601)
}

impl PunchEvent {
    /// Build a not-yet-stored event (`id = 0`), deriving `date_key` from the
    /// timestamp.
    pub fn new(
        staff_id: &str,
        staff_name: &str,
        kind: PunchType,
        timestamp: NaiveDateTime,
        reason: &str,
        photo_ref: Option<String>,
    ) -> Self {
        Self {
            id: 0,
            staff_id: staff_id.to_string(),
            staff_name: staff_name.to_string(),
            kind,
            timestamp,
            reason: reason.to_string(),
            photo_ref,
            date_key: date_key_for(timestamp.date()),
            created_at: chrono::Local::now().to_rfc3339(),
        }
    }

    pub fn timestamp_str(&self) -> String {
        self.timestamp.format(TIMESTAMP_FORMAT).to_string()
    }

    pub fn time_str(&self) -> String {
        self.timestamp.format("%H:%M").to_string()
    }
}

pub fn date_key_for(date: NaiveDate) -> String {
    date.format(DATE_KEY_FORMAT).to_string()
}
