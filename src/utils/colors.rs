//! ANSI color constants for CLI output.

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";

pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const RED: &str = "\x1b[31m";
pub const MAGENTA: &str = "\x1b[35m";
pub const CYAN: &str = "\x1b[36m";

/// Severity shade for a pest count, same thresholds the original table used.
pub fn count_color(count: u64) -> &'static str {
    if count >= 10 {
        MAGENTA
    } else if count >= 5 {
        RED
    } else if count >= 2 {
        YELLOW
    } else {
        GREEN
    }
}
