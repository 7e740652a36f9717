//! Schedule items and the legacy persisted entry shape.

use serde::{Deserialize, Serialize};

/// One stop in the ordered day plan.
///
/// Created when its course becomes a leaf of the selection, removed when it
/// stops being one. `day` and `time` stay empty until the user or the
/// auto-scheduler fills them in.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScheduleItem {
    /// Course this stop refers to
    pub course_id: u64,

    /// Day label, e.g. "1일"; absent until assigned
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub day: Option<String>,

    /// Start time as "HH:MM"; absent until assigned
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,

    /// Planned stay length in minutes
    pub duration_minutes: u32,
}

impl ScheduleItem {
    /// A fresh item with empty day/time, seeded with the catalog duration.
    pub fn new(course_id: u64, duration_minutes: u32) -> Self {
        Self {
            course_id,
            day: None,
            time: None,
            duration_minutes,
        }
    }
}

/// Persisted schedule entry, covering the legacy shape.
///
/// Older saved configurations stored schedule entries as bare course ids;
/// current ones store full [`ScheduleItem`]s. Deserialization accepts both,
/// and the synchronizer upgrades bare ids on load.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum ScheduleEntry {
    /// Legacy shape: just the course id
    Bare(u64),
    /// Current shape: full schedule item
    Full(ScheduleItem),
}

impl ScheduleEntry {
    /// The course id regardless of shape.
    pub fn course_id(&self) -> u64 {
        match self {
            ScheduleEntry::Bare(id) => *id,
            ScheduleEntry::Full(item) => item.course_id,
        }
    }
}

impl From<ScheduleItem> for ScheduleEntry {
    fn from(item: ScheduleItem) -> Self {
        ScheduleEntry::Full(item)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_deserializes_bare_id() {
        let entry: ScheduleEntry = serde_json::from_str("42").unwrap();
        assert_eq!(entry, ScheduleEntry::Bare(42));
        assert_eq!(entry.course_id(), 42);
    }

    #[test]
    fn test_entry_deserializes_full_item() {
        let json = r#"{"course_id": 7, "day": "1일", "time": "09:00", "duration_minutes": 90}"#;
        let entry: ScheduleEntry = serde_json::from_str(json).unwrap();
        match entry {
            ScheduleEntry::Full(item) => {
                assert_eq!(item.course_id, 7);
                assert_eq!(item.day.as_deref(), Some("1일"));
                assert_eq!(item.time.as_deref(), Some("09:00"));
                assert_eq!(item.duration_minutes, 90);
            }
            ScheduleEntry::Bare(_) => panic!("expected full item"),
        }
    }

    #[test]
    fn test_mixed_list_round_trips() {
        let json = r#"[3, {"course_id": 7, "duration_minutes": 60}]"#;
        let entries: Vec<ScheduleEntry> = serde_json::from_str(json).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].course_id(), 3);
        assert_eq!(entries[1].course_id(), 7);
    }
}
