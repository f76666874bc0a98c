//! Timeline Entries
//!
//! The records a timeline stores: zero-duration marks and measures spanning
//! two resolved points in time.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TimelineError;

/// Kind of timeline entry.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum EntryType {
    /// A named instant
    Mark,
    /// A named interval between two resolved points
    Measure,
}

impl EntryType {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntryType::Mark => "mark",
            EntryType::Measure => "measure",
        }
    }
}

impl fmt::Display for EntryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EntryType {
    type Err = TimelineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mark" => Ok(EntryType::Mark),
            "measure" => Ok(EntryType::Measure),
            _ => Err(TimelineError::UnknownEntryType(s.to_string())),
        }
    }
}

/// A single recorded entry.
///
/// Entries are immutable once stored; a timeline only adds and removes them.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    /// Identifier given by the caller; not required to be unique
    pub name: String,

    /// Milliseconds relative to the timeline's reference origin
    pub start_time: f64,

    /// Milliseconds; zero for marks
    pub duration: f64,

    pub entry_type: EntryType,

    /// Wall-clock epoch milliseconds at creation (timestamp mode only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<i64>,
}

impl Entry {
    /// Returns the end of the entry in relative milliseconds.
    pub fn end_time(&self) -> f64 {
        self.start_time + self.duration
    }

    pub fn is_mark(&self) -> bool {
        self.entry_type == EntryType::Mark
    }

    pub fn is_measure(&self) -> bool {
        self.entry_type == EntryType::Measure
    }
}

/// Partial description of an entry to record.
///
/// Unset fields are filled in when the timeline records the draft:
/// `start_time` becomes the current relative time, `duration` becomes zero
/// and `entry_type` becomes [`EntryType::Mark`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EntryDraft {
    pub name: String,
    pub start_time: Option<f64>,
    pub duration: Option<f64>,
    pub entry_type: Option<EntryType>,
}

impl EntryDraft {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_start_time(mut self, start_time: f64) -> Self {
        self.start_time = Some(start_time);
        self
    }

    pub fn with_duration(mut self, duration: f64) -> Self {
        self.duration = Some(duration);
        self
    }

    pub fn with_entry_type(mut self, entry_type: EntryType) -> Self {
        self.entry_type = Some(entry_type);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_type_parse() {
        assert_eq!("mark".parse::<EntryType>().unwrap(), EntryType::Mark);
        assert_eq!(" Measure ".parse::<EntryType>().unwrap(), EntryType::Measure);
        assert!(matches!(
            "span".parse::<EntryType>(),
            Err(TimelineError::UnknownEntryType(s)) if s == "span"
        ));
    }

    #[test]
    fn test_entry_type_display() {
        assert_eq!(EntryType::Mark.to_string(), "mark");
        assert_eq!(EntryType::Measure.to_string(), "measure");
    }

    #[test]
    fn test_entry_serializes_with_performance_field_names() {
        let entry = Entry {
            name: "load".to_string(),
            start_time: 1.5,
            duration: 0.0,
            entry_type: EntryType::Mark,
            timestamp: None,
        };

        let value = serde_json::to_value(&entry).unwrap();
        assert_eq!(value["name"], "load");
        assert_eq!(value["startTime"], 1.5);
        assert_eq!(value["duration"], 0.0);
        assert_eq!(value["entryType"], "mark");
        assert!(value.get("timestamp").is_none());
    }

    #[test]
    fn test_entry_serializes_timestamp_when_present() {
        let entry = Entry {
            name: "render".to_string(),
            start_time: 2.0,
            duration: 3.0,
            entry_type: EntryType::Measure,
            timestamp: Some(1_700_000_000_000),
        };

        let value = serde_json::to_value(&entry).unwrap();
        assert_eq!(value["entryType"], "measure");
        assert_eq!(value["timestamp"], 1_700_000_000_000i64);
    }

    #[test]
    fn test_entry_end_time_and_kind() {
        let entry = Entry {
            name: "m".to_string(),
            start_time: 10.0,
            duration: 4.5,
            entry_type: EntryType::Measure,
            timestamp: None,
        };
        assert_eq!(entry.end_time(), 14.5);
        assert!(entry.is_measure());
        assert!(!entry.is_mark());
    }

    #[test]
    fn test_draft_defaults_are_unset() {
        let draft = EntryDraft::new("x");
        assert_eq!(draft.name, "x");
        assert!(draft.start_time.is_none());
        assert!(draft.duration.is_none());
        assert!(draft.entry_type.is_none());
    }

    #[test]
    fn test_draft_builder() {
        let draft = EntryDraft::new("x")
            .with_start_time(3.0)
            .with_duration(2.0)
            .with_entry_type(EntryType::Measure);
        assert_eq!(draft.start_time, Some(3.0));
        assert_eq!(draft.duration, Some(2.0));
        assert_eq!(draft.entry_type, Some(EntryType::Measure));
    }
}
