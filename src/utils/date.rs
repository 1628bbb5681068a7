use crate::errors::{AppError, AppResult};
use chrono::{Datelike, NaiveDate};

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

/// Inclusive bounds of a single period: `YYYY-MM-DD`, `YYYY-MM` or `YYYY`.
pub fn period_bounds(p: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    let p = p.trim();

    if let Some(d) = parse_date(p) {
        return Ok((d, d));
    }

    if let Ok(first) = NaiveDate::parse_from_str(&format!("{}-01", p), "%Y-%m-%d") {
        return Ok((first, last_day_of_month(first.year(), first.month())?));
    }

    if p.len() == 4
        && let Ok(year) = p.parse::<i32>()
        && let (Some(first), Some(last)) = (
            NaiveDate::from_ymd_opt(year, 1, 1),
            NaiveDate::from_ymd_opt(year, 12, 31),
        )
    {
        return Ok((first, last));
    }

    Err(AppError::InvalidDate(format!("Invalid period: {}", p)))
}

/// Resolve a period expression into inclusive date bounds.
///
/// - `None` → `default`
/// - `"all"` → no bounds
/// - `A:B` → from the start of `A` to the end of `B`
/// - anything accepted by [`period_bounds`]
pub fn resolve_period(
    period: Option<&str>,
    default: Option<(NaiveDate, NaiveDate)>,
) -> AppResult<Option<(NaiveDate, NaiveDate)>> {
    let Some(p) = period else {
        return Ok(default);
    };

    if p.eq_ignore_ascii_case("all") {
        return Ok(None);
    }

    if let Some((a, b)) = p.split_once(':') {
        let (start, _) = period_bounds(a)?;
        let (_, end) = period_bounds(b)?;
        if start > end {
            return Err(AppError::InvalidDate(format!(
                "Range start is after its end: {}",
                p
            )));
        }
        return Ok(Some((start, end)));
    }

    period_bounds(p).map(Some)
}

pub fn current_month_bounds() -> AppResult<(NaiveDate, NaiveDate)> {
    let t = today();
    let first = t
        .with_day(1)
        .ok_or_else(|| AppError::InvalidDate(t.to_string()))?;
    Ok((first, last_day_of_month(t.year(), t.month())?))
}

fn last_day_of_month(year: i32, month: u32) -> AppResult<NaiveDate> {
    let (ny, nm) = if month == 12 { (year + 1, 1) } else { (year, month + 1) };
    NaiveDate::from_ymd_opt(ny, nm, 1)
        .and_then(|d| d.pred_opt())
        .ok_or_else(|| AppError::InvalidDate(format!("{}-{:02}", year, month)))
}
