pub mod join;
pub mod leaderboard;
pub mod profile;
pub mod scrims;
pub mod tournaments;
pub mod upcoming;
pub mod winners;

use chrono::{Local, NaiveDateTime};

/// Wall-clock instant used to classify records. Read once per command so
/// every badge on one screen agrees; the classifier itself never touches
/// the system clock.
pub fn now_local() -> NaiveDateTime {
    Local::now().naive_local()
}

/// Placeholder for record fields the backend left blank.
pub const TBA: &str = "TBA";

/// A display string for an optional backend field.
pub fn or_tba(value: &str) -> &str {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        TBA
    } else {
        trimmed
    }
}
