// src/export/model.rs

use crate::models::daily_summary::DailySummary;
use crate::models::punch_event::PunchEvent;
use serde::Serialize;

/// Flat row for punch event exports.
#[derive(Serialize, Clone, Debug)]
pub struct PunchExport {
    pub id: i64,
    pub date: String,
    pub time: String,
    pub staff_id: String,
    pub staff_name: String,
    pub kind: String,
    pub reason: String,
    pub photo_ref: String,
}

impl From<&PunchEvent> for PunchExport {
    fn from(ev: &PunchEvent) -> Self {
        Self {
            id: ev.id,
            date: ev.date_key.clone(),
            time: ev.timestamp.format("%H:%M:%S").to_string(),
            staff_id: ev.staff_id.clone(),
            staff_name: ev.staff_name.clone(),
            kind: ev.kind.to_db_str().to_string(),
            reason: ev.reason.clone(),
            photo_ref: ev.photo_ref.clone().unwrap_or_default(),
        }
    }
}

/// Flat row for daily summary exports. Absent times are empty strings.
#[derive(Serialize, Clone, Debug)]
pub struct SummaryExport {
    pub date: String,
    pub staff_id: String,
    pub staff_name: String,
    pub first_in: String,
    pub last_out: String,
    pub active_hours: f64,
}

impl From<&DailySummary> for SummaryExport {
    fn from(s: &DailySummary) -> Self {
        let hhmm = |t: Option<chrono::NaiveDateTime>| {
            t.map(|t| t.format("%H:%M").to_string()).unwrap_or_default()
        };
        Self {
            date: s.date_key.clone(),
            staff_id: s.staff_id.clone(),
            staff_name: s.staff_name.clone(),
            first_in: hhmm(s.first_in),
            last_out: hhmm(s.last_out),
            active_hours: s.active_hours(),
        }
    }
}
