/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";

pub const GREY: &str = "\x1b[90m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";

use crate::models::priority::Priority;

pub fn color_for_priority(p: Priority) -> &'static str {
    match p {
        Priority::High => RED,
        Priority::Medium => YELLOW,
        Priority::Low => GREEN,
    }
}

/// Completed tasks are greyed out.
pub fn colorize_status(completed: bool) -> String {
    if completed {
        format!("{GREY}done{RESET}")
    } else {
        format!("{YELLOW}pending{RESET}")
    }
}

/// Grey for empty / placeholder values, unchanged otherwise.
pub fn colorize_optional(value: &str) -> String {
    if value.trim().is_empty() || value.trim() == "-" {
        format!("{GREY}-{RESET}")
    } else {
        value.to_string()
    }
}
