use chrono::Utc;
use sn_core::EntityId;

/// Next id for a collection: the current time in milliseconds, bumped past
/// the largest existing id so ids stay strictly increasing even when two
/// records are created within the same millisecond.
pub fn next_id(existing: impl IntoIterator<Item = EntityId>) -> EntityId {
    next_id_at(Utc::now().timestamp_millis(), existing)
}

/// Saturates at `i64::MAX` rather than wrapping.
pub fn next_id_at(now_millis: i64, existing: impl IntoIterator<Item = EntityId>) -> EntityId {
    match existing.into_iter().max() {
        Some(last) if last >= now_millis => last.saturating_add(1),
        _ => now_millis,
    }
}
