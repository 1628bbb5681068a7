//! Formatting utilities used for CLI and export outputs.

/// Seconds as `HHh MMm` (or `HH:MM` when `short`).
pub fn secs2readable(secs: i64, short: bool) -> String {
    let mins = secs.abs() / 60;
    let hours = mins / 60;
    let minutes = mins % 60;
    let sign = if secs < 0 { "-" } else { "" };

    if short {
        format!("{}{:02}:{:02}", sign, hours, minutes)
    } else {
        format!("{}{:02}h {:02}m", sign, hours, minutes)
    }
}

/// Hours with exactly two decimals, e.g. `7.50`.
pub fn format_hours(hours: f64) -> String {
    format!("{:.2}", hours)
}

/// Cents as a decimal amount, e.g. `1250` → `12.50`.
pub fn format_price(cents: i64) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let abs = cents.abs();
    format!("{}{}.{:02}", sign, abs / 100, abs % 100)
}
