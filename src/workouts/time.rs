//! Clock-style duration helpers.

/// Format seconds as `M:SS`. Negative durations render as `0:00`.
pub fn format_time(seconds: i64) -> String {
    if seconds < 0 {
        return "0:00".to_string();
    }
    format!("{}:{:02}", seconds / 60, seconds % 60)
}

/// Combine minutes and seconds into total seconds.
///
/// Returns `None` when the total does not fit in a `u32`.
pub fn parse_time_input(minutes: u32, seconds: u32) -> Option<u32> {
    minutes.checked_mul(60)?.checked_add(seconds)
}
