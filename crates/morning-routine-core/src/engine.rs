//! Checklist engine: daily reset, completion and wake-time recording.
//!
//! These are pure transforms over a [`ChecklistDocument`]. Loading and
//! persisting is the caller's job (see [`crate::service::ChecklistService`]).
//!
//! ## Item lifecycle (per day)
//!
//! ```text
//! Pending -> Completed      complete_item / set_wake_time
//! Completed -> Pending      reset_if_needed on a new day
//! ```

use chrono::NaiveDate;

use crate::error::Result;
use crate::model::ChecklistDocument;
use crate::wake_time::WakeTime;

/// Apply the daily reset if `doc` was last reset on a different day.
///
/// Completed items get `last_completed` set to `today` before their flag is
/// cleared, and the wake-time tracker loses its recorded time and lateness.
/// Returns `true` when the document changed and should be persisted.
pub fn reset_if_needed(doc: &mut ChecklistDocument, today: NaiveDate) -> bool {
    if doc.last_reset == Some(today) {
        return false;
    }

    for item in &mut doc.items {
        if item.completed_today {
            item.last_completed = Some(today);
        }
        item.completed_today = false;
        if item.is_wake_time_tracker() {
            item.actual_wake_time = None;
            item.minutes_late = None;
        }
    }

    tracing::debug!(
        previous = ?doc.last_reset,
        %today,
        items = doc.items.len(),
        "daily reset applied"
    );
    doc.last_reset = Some(today);
    true
}

/// Mark the first item with `item_id` as completed today.
///
/// Returns `false` and leaves `doc` untouched when no such item exists.
pub fn complete_item(doc: &mut ChecklistDocument, item_id: u32) -> bool {
    match doc.items.iter_mut().find(|item| item.id == item_id) {
        Some(item) => {
            item.completed_today = true;
            true
        }
        None => false,
    }
}

/// Record a wake time on the tracker item.
///
/// The string is validated before anything is touched, so an invalid value
/// leaves `doc` unchanged. Returns `Ok(false)` when the checklist has no
/// wake-time tracker. On success the tracker is also marked completed.
pub fn set_wake_time(doc: &mut ChecklistDocument, wake_time: &str) -> Result<bool> {
    let parsed: WakeTime = wake_time.parse()?;

    let Some(tracker) = doc.wake_tracker_mut() else {
        return Ok(false);
    };
    tracker.actual_wake_time = Some(parsed);
    tracker.minutes_late = Some(parsed.minutes_late());
    tracker.completed_today = true;
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ChecklistError;
    use crate::model::ChecklistItem;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn sample_doc() -> ChecklistDocument {
        ChecklistDocument::seeded(["Wake up at 6:00", "Drink water", "Make the bed"])
    }

    #[test]
    fn test_reset_on_new_day_clears_everything() {
        let mut doc = sample_doc();
        doc.last_reset = Some(date(2026, 10, 18));
        set_wake_time(&mut doc, "07:15").unwrap();
        complete_item(&mut doc, 2);

        let today = date(2026, 10, 19);
        assert!(reset_if_needed(&mut doc, today));

        assert_eq!(doc.last_reset, Some(today));
        assert!(doc.items.iter().all(|item| !item.completed_today));
        let tracker = doc.wake_tracker().unwrap();
        assert_eq!(tracker.actual_wake_time, None);
        assert_eq!(tracker.minutes_late, None);
    }

    #[test]
    fn test_reset_records_last_completed_for_completed_items() {
        let mut doc = sample_doc();
        doc.last_reset = Some(date(2026, 10, 18));
        complete_item(&mut doc, 2);

        let today = date(2026, 10, 19);
        reset_if_needed(&mut doc, today);

        assert_eq!(doc.item(2).unwrap().last_completed, Some(today));
        assert_eq!(doc.item(3).unwrap().last_completed, None);
    }

    #[test]
    fn test_reset_is_idempotent_within_a_day() {
        let mut doc = sample_doc();
        let today = date(2026, 10, 19);
        assert!(reset_if_needed(&mut doc, today));
        let first = serde_json::to_string(&doc).unwrap();

        assert!(!reset_if_needed(&mut doc, today));
        assert_eq!(serde_json::to_string(&doc).unwrap(), first);
    }

    #[test]
    fn test_same_day_reset_keeps_progress() {
        let mut doc = sample_doc();
        let today = date(2026, 10, 19);
        reset_if_needed(&mut doc, today);
        complete_item(&mut doc, 3);

        assert!(!reset_if_needed(&mut doc, today));
        assert!(doc.item(3).unwrap().completed_today);
    }

    #[test]
    fn test_reset_on_empty_document_sets_marker() {
        let mut doc = ChecklistDocument::default();
        let today = date(2026, 10, 19);
        assert!(reset_if_needed(&mut doc, today));
        assert!(doc.items.is_empty());
        assert_eq!(doc.last_reset, Some(today));
    }

    #[test]
    fn test_complete_unknown_id_leaves_doc_unchanged() {
        let mut doc = sample_doc();
        let before = doc.clone();
        assert!(!complete_item(&mut doc, 999));
        assert_eq!(doc, before);
    }

    #[test]
    fn test_complete_item_marks_only_that_item() {
        let mut doc = sample_doc();
        assert!(complete_item(&mut doc, 2));
        assert!(doc.item(2).unwrap().completed_today);
        assert_eq!(doc.completed_count(), 1);
    }

    #[test]
    fn test_set_wake_time_completes_tracker() {
        let mut doc = sample_doc();
        assert!(set_wake_time(&mut doc, "06:30").unwrap());

        let tracker = doc.wake_tracker().unwrap();
        assert!(tracker.completed_today);
        assert_eq!(tracker.minutes_late, Some(30));
        assert_eq!(tracker.actual_wake_time.unwrap().to_string(), "06:30");
    }

    #[test]
    fn test_set_wake_time_early_is_zero_late() {
        let mut doc = sample_doc();
        set_wake_time(&mut doc, "5:45").unwrap();
        assert_eq!(doc.wake_tracker().unwrap().minutes_late, Some(0));
    }

    #[test]
    fn test_set_wake_time_invalid_input_is_typed_and_pure() {
        let mut doc = sample_doc();
        let before = doc.clone();
        let err = set_wake_time(&mut doc, "25:00").unwrap_err();
        assert!(matches!(err, ChecklistError::InvalidFormat { .. }));
        assert_eq!(doc, before);
    }

    #[test]
    fn test_set_wake_time_without_tracker_fails() {
        let mut empty = ChecklistDocument::default();
        assert!(!set_wake_time(&mut empty, "06:30").unwrap());

        let mut no_tracker = ChecklistDocument::new(vec![ChecklistItem::new(4, "Read")]);
        let before = no_tracker.clone();
        assert!(!set_wake_time(&mut no_tracker, "06:30").unwrap());
        assert_eq!(no_tracker, before);
    }

    #[test]
    fn test_tracker_found_by_role_not_position() {
        let mut doc = ChecklistDocument::new(vec![
            ChecklistItem::new(7, "Meditate"),
            ChecklistItem::wake_time_tracker(9, "Wake up"),
        ]);
        set_wake_time(&mut doc, "06:05").unwrap();
        assert!(!doc.item(7).unwrap().completed_today);
        assert_eq!(doc.item(9).unwrap().minutes_late, Some(5));
    }
}
