use crate::models::current_status::StatusState;

/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

pub fn color_for_state(state: StatusState) -> &'static str {
    match state {
        StatusState::In => GREEN,
        StatusState::Out => RED,
        StatusState::None => GREY,
    }
}

/// Grey out placeholder values (`--:--`, `00h 00m`, empty).
pub fn colorize_optional(value: &str) -> String {
    let v = value.trim();
    if v.is_empty() || v == "--:--" || v == "00h 00m" {
        format!("{GREY}{value}{RESET}")
    } else {
        value.to_string()
    }
}

pub fn colorize(value: &str, color: &str) -> String {
    format!("{color}{value}{RESET}")
}
