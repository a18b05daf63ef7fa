//! Duration formatting for tables and exports.
//!
//! All durations render as `"HH:MM"`: hours and minutes zero-padded, seconds
//! dropped, negative values clamped to `"00:00"`.

use chrono::Duration;

/// Formats a duration into a standardized "HH:MM" string.
pub fn format_duration(duration: &Duration) -> String {
    let hours = duration.num_hours();
    let mins = duration.num_minutes() % 60;

    format!("{:02}:{:02}", hours.max(0), mins.max(0))
}
