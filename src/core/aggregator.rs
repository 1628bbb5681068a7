//! Derived attendance views over a snapshot of punch events.
//!
//! Everything here is a pure function of its input slice: nothing is
//! cached, nothing is mutated, and every input (including an empty slice)
//! produces a result.

use crate::models::current_status::CurrentStatus;
use crate::models::daily_summary::DailySummary;
use crate::models::punch_event::PunchEvent;
use crate::models::punch_type::PunchType;
use chrono::{Duration, NaiveDateTime};
use std::collections::{BTreeMap, HashMap};

/// Latest punch state of `staff_id` within `events`.
///
/// The caller scopes `events` to a single day. Among events sharing the
/// maximum timestamp the one appearing last in `events` wins.
pub fn compute_current_status(events: &[PunchEvent], staff_id: &str) -> CurrentStatus {
    events
        .iter()
        .filter(|ev| ev.staff_id == staff_id)
        .max_by_key(|ev| ev.timestamp)
        .map(CurrentStatus::from_event)
        .unwrap_or_else(CurrentStatus::none)
}

/// Current status of every staff member that punched on `date_key`.
pub fn compute_current_statuses(
    events: &[PunchEvent],
    date_key: &str,
) -> BTreeMap<String, CurrentStatus> {
    let today: Vec<PunchEvent> = events
        .iter()
        .filter(|ev| ev.date_key == date_key)
        .cloned()
        .collect();

    let mut out = BTreeMap::new();
    for ev in &today {
        if !out.contains_key(&ev.staff_id) {
            out.insert(
                ev.staff_id.clone(),
                compute_current_status(&today, &ev.staff_id),
            );
        }
    }
    out
}

/// One summary per (`date_key`, `staff_id`), in first-seen order.
pub fn compute_daily_summaries(events: &[PunchEvent]) -> Vec<DailySummary> {
    let mut index: HashMap<(&str, &str), usize> = HashMap::new();
    let mut groups: Vec<Vec<&PunchEvent>> = Vec::new();

    for ev in events {
        let key = (ev.date_key.as_str(), ev.staff_id.as_str());
        let slot = *index.entry(key).or_insert_with(|| {
            groups.push(Vec::new());
            groups.len() - 1
        });
        groups[slot].push(ev);
    }

    groups
        .into_iter()
        .map(|mut group| {
            // stable: equal timestamps keep input order
            group.sort_by_key(|ev| ev.timestamp);
            summarize_group(&group)
        })
        .collect()
}

/// Greedy nearest pairing: every `out` closes the open `in`, a second `in`
/// replaces the open one, an `out` with nothing open is ignored.
fn summarize_group(group: &[&PunchEvent]) -> DailySummary {
    let mut first_in: Option<NaiveDateTime> = None;
    let mut last_out: Option<NaiveDateTime> = None;
    let mut open_in: Option<NaiveDateTime> = None;
    let mut active = Duration::zero();

    for ev in group {
        match ev.kind {
            PunchType::In => {
                if first_in.is_none() {
                    first_in = Some(ev.timestamp);
                }
                open_in = Some(ev.timestamp);
            }
            PunchType::Out => {
                if let Some(start) = open_in.take() {
                    active = active + (ev.timestamp - start);
                    last_out = Some(ev.timestamp);
                }
            }
        }
    }

    let (date_key, staff_id, staff_name) = match group.first() {
        Some(ev) => (
            ev.date_key.clone(),
            ev.staff_id.clone(),
            ev.staff_name.clone(),
        ),
        None => Default::default(),
    };

    DailySummary {
        date_key,
        staff_id,
        staff_name,
        first_in,
        last_out,
        active_seconds: active.num_seconds(),
    }
}

/// Report order: day ascending, then staff name, then staff id.
pub fn sort_for_report(summaries: &mut [DailySummary]) {
    summaries.sort_by(|a, b| {
        a.date_key
            .cmp(&b.date_key)
            .then_with(|| a.staff_name.cmp(&b.staff_name))
            .then_with(|| a.staff_id.cmp(&b.staff_id))
    });
}
