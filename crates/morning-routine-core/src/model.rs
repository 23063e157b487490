//! Checklist document and item types.
//!
//! The whole checklist is persisted as one [`ChecklistDocument`]. Item order
//! is display order. Wake-time tracking lives on the single item whose role is
//! [`ItemRole::WakeTimeTracker`].

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

use crate::wake_time::WakeTime;

/// What an item does beyond being checked off.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemRole {
    #[default]
    Standard,
    /// Records the wake-up time and derived lateness.
    WakeTimeTracker,
}

impl ItemRole {
    fn is_standard(&self) -> bool {
        matches!(self, ItemRole::Standard)
    }
}

/// One habit on the daily checklist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChecklistItem {
    pub id: u32,
    pub task: String,
    #[serde(default)]
    pub completed_today: bool,
    /// Only set on the wake-time tracker.
    #[serde(default, deserialize_with = "lenient_wake_time")]
    pub actual_wake_time: Option<WakeTime>,
    /// Only set on the wake-time tracker.
    #[serde(default)]
    pub minutes_late: Option<u32>,
    /// Date of the most recent day this item was completed, recorded at reset.
    #[serde(default)]
    pub last_completed: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "ItemRole::is_standard")]
    pub role: ItemRole,
}

/// Older files may hold whatever string was typed in; an unreadable value is
/// dropped instead of failing the whole document.
fn lenient_wake_time<'de, D>(deserializer: D) -> Result<Option<WakeTime>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.and_then(|value| match value.parse() {
        Ok(time) => Some(time),
        Err(e) => {
            tracing::warn!(value = %value, error = %e, "dropping unreadable wake time");
            None
        }
    }))
}

impl ChecklistItem {
    /// Create a pending standard item.
    pub fn new(id: u32, task: impl Into<String>) -> Self {
        Self {
            id,
            task: task.into(),
            completed_today: false,
            actual_wake_time: None,
            minutes_late: None,
            last_completed: None,
            role: ItemRole::Standard,
        }
    }

    /// Create a pending wake-time tracker item.
    pub fn wake_time_tracker(id: u32, task: impl Into<String>) -> Self {
        Self {
            role: ItemRole::WakeTimeTracker,
            ..Self::new(id, task)
        }
    }

    pub fn is_wake_time_tracker(&self) -> bool {
        self.role == ItemRole::WakeTimeTracker
    }
}

/// The single persisted checklist record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChecklistDocument {
    #[serde(default)]
    pub items: Vec<ChecklistItem>,
    /// Date the daily reset last ran.
    #[serde(default)]
    pub last_reset: Option<NaiveDate>,
}

/// Id that carried wake-time tracking before items had roles.
const LEGACY_WAKE_TIME_ID: u32 = 1;

impl ChecklistDocument {
    pub fn new(items: Vec<ChecklistItem>) -> Self {
        let mut doc = Self {
            items,
            last_reset: None,
        };
        doc.normalize_roles();
        doc
    }

    /// Build a document from task titles; the first title becomes the
    /// wake-time tracker and ids run from 1.
    pub fn seeded<I, S>(tasks: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let items = tasks
            .into_iter()
            .zip(1u32..)
            .map(|(task, id)| {
                if id == LEGACY_WAKE_TIME_ID {
                    ChecklistItem::wake_time_tracker(id, task)
                } else {
                    ChecklistItem::new(id, task)
                }
            })
            .collect();
        Self::new(items)
    }

    pub fn item(&self, id: u32) -> Option<&ChecklistItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// The wake-time tracker, if the checklist has one.
    pub fn wake_tracker(&self) -> Option<&ChecklistItem> {
        self.items.iter().find(|item| item.is_wake_time_tracker())
    }

    pub fn wake_tracker_mut(&mut self) -> Option<&mut ChecklistItem> {
        self.items.iter_mut().find(|item| item.is_wake_time_tracker())
    }

    pub fn completed_count(&self) -> usize {
        self.items.iter().filter(|item| item.completed_today).count()
    }

    /// Ensure exactly one tracker when any candidate exists.
    ///
    /// Documents written before roles existed have no tracker; the item with
    /// id 1 is promoted. Extra trackers after the first are demoted.
    /// Returns `true` if any role changed.
    pub fn normalize_roles(&mut self) -> bool {
        let mut changed = false;
        let mut seen_tracker = false;
        for item in &mut self.items {
            if item.is_wake_time_tracker() {
                if seen_tracker {
                    tracing::warn!(id = item.id, "demoting duplicate wake-time tracker");
                    item.role = ItemRole::Standard;
                    changed = true;
                }
                seen_tracker = true;
            }
        }

        if !seen_tracker {
            if let Some(item) = self.items.iter_mut().find(|i| i.id == LEGACY_WAKE_TIME_ID) {
                tracing::debug!(id = item.id, "promoting legacy item to wake-time tracker");
                item.role = ItemRole::WakeTimeTracker;
                changed = true;
            }
        }
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_document_is_empty() {
        let doc = ChecklistDocument::default();
        assert!(doc.items.is_empty());
        assert_eq!(doc.last_reset, None);
        assert_eq!(
            serde_json::to_value(&doc).unwrap(),
            serde_json::json!({ "items": [], "last_reset": null })
        );
    }

    #[test]
    fn test_unreadable_wake_time_is_dropped() {
        let item: ChecklistItem = serde_json::from_str(
            r#"{"id":1,"task":"Wake up","completed_today":true,"actual_wake_time":"7am","minutes_late":null}"#,
        )
        .unwrap();
        assert_eq!(item.actual_wake_time, None);
        assert!(item.completed_today);

        let item: ChecklistItem =
            serde_json::from_str(r#"{"id":1,"task":"Wake up","actual_wake_time":"6:45"}"#).unwrap();
        assert_eq!(item.actual_wake_time.map(|t| t.to_string()), Some("06:45".to_string()));
    }

    #[test]
    fn test_seeded_marks_first_item_as_tracker() {
        let doc = ChecklistDocument::seeded(["Wake up at 6:00", "Make the bed", "Stretch"]);
        assert_eq!(doc.items.len(), 3);
        assert_eq!(doc.items[0].id, 1);
        assert!(doc.items[0].is_wake_time_tracker());
        assert_eq!(doc.items[2].id, 3);
        assert!(!doc.items[2].is_wake_time_tracker());
    }

    #[test]
    fn test_serialized_keys_are_snake_case() {
        let doc = ChecklistDocument::seeded(["Wake up", "Water"]);
        let json = serde_json::to_value(&doc).unwrap();
        let tracker = &json["items"][0];
        for key in ["id", "task", "completed_today", "actual_wake_time", "minutes_late", "last_completed"] {
            assert!(tracker.get(key).is_some(), "missing key {key}");
        }
        assert_eq!(tracker["role"], "wake_time_tracker");
        assert!(json["items"][1].get("role").is_none());
    }

    #[test]
    fn test_legacy_document_promotes_id_one() {
        let raw = r#"{
            "items": [
                {"id": 2, "task": "Water", "completed_today": false},
                {"id": 1, "task": "Wake up", "completed_today": true,
                 "actual_wake_time": "06:10", "minutes_late": 10}
            ],
            "last_reset": "2026-10-18"
        }"#;
        let mut doc: ChecklistDocument = serde_json::from_str(raw).unwrap();
        assert!(doc.wake_tracker().is_none());

        assert!(doc.normalize_roles());
        let tracker = doc.wake_tracker().unwrap();
        assert_eq!(tracker.id, 1);
        assert_eq!(tracker.minutes_late, Some(10));
        assert_eq!(tracker.actual_wake_time.unwrap().to_string(), "06:10");
    }

    #[test]
    fn test_duplicate_trackers_are_demoted() {
        let mut doc = ChecklistDocument {
            items: vec![
                ChecklistItem::wake_time_tracker(3, "First"),
                ChecklistItem::wake_time_tracker(1, "Second"),
            ],
            last_reset: None,
        };
        assert!(doc.normalize_roles());
        assert_eq!(doc.wake_tracker().unwrap().id, 3);
        assert!(!doc.items[1].is_wake_time_tracker());
        assert!(!doc.normalize_roles());
    }

    #[test]
    fn test_no_candidate_leaves_document_untouched() {
        let mut doc = ChecklistDocument::new(vec![ChecklistItem::new(5, "Read")]);
        assert!(!doc.normalize_roles());
        assert!(doc.wake_tracker().is_none());
    }
}
