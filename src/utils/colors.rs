/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";
pub const CYAN: &str = "\x1b[36m";
pub const MAGENTA: &str = "\x1b[35m";

/// Severity color:
/// high → red, moderate → yellow, low → green.
pub fn color_for_severity(code: &str) -> &'static str {
    match code.to_lowercase().as_str() {
        "high" => RED,
        "moderate" => YELLOW,
        "low" => GREEN,
        _ => RESET,
    }
}
