use chrono::{DateTime, Local, Utc};

/// Wall-clock time in the user's timezone, e.g. "14:03:27"
pub fn format_clock(at: DateTime<Utc>) -> String {
    at.with_timezone(&Local).format("%H:%M:%S").to_string()
}
