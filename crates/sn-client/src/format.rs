//! Display helpers shared by the views.

use chrono::{DateTime, Utc};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Avatar initials: first letter of up to two words, upper-cased.
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .take(2)
        .flat_map(char::to_uppercase)
        .collect()
}

/// Short age of `timestamp` as seen at `now`. Anything a week or older is
/// shown as a date.
pub fn relative_time(timestamp: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let elapsed = now.signed_duration_since(timestamp);

    if elapsed.num_minutes() < 1 {
        "just now".to_string()
    } else if elapsed.num_hours() < 1 {
        format!("{} min ago", elapsed.num_minutes())
    } else if elapsed.num_days() < 1 {
        format!("{} h ago", elapsed.num_hours())
    } else if elapsed.num_days() < 7 {
        format!("{} d ago", elapsed.num_days())
    } else {
        timestamp.format(DATE_FORMAT).to_string()
    }
}
