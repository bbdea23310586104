//! Scheduled tasks, in stored form and in minute-offset form.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{DayPieError, DayPieResult};
use crate::time::{parse_range_key, to_minutes};

/// Opaque identifier of a day, e.g. "2025-09-21". Never parsed.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DayKey(String);

impl DayKey {
    pub fn new(key: impl Into<String>) -> Self {
        DayKey(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for DayKey {
    fn from(key: &str) -> Self {
        DayKey::new(key)
    }
}

impl fmt::Display for DayKey {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One scheduled activity, decoded to minute offsets from local midnight.
///
/// Producers are expected to keep `end_minute > start_minute` within
/// `[0, 1440]`, but nothing here enforces it. The partition builder
/// clamps and drops.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interval {
    pub label: String,
    pub start_minute: u32,
    pub end_minute: u32,
    /// Opaque display attribute, forwarded unchanged
    pub color: String,
}

impl Interval {
    pub fn new(
        label: impl Into<String>,
        start_minute: u32,
        end_minute: u32,
        color: impl Into<String>,
    ) -> Self {
        Interval {
            label: label.into(),
            start_minute,
            end_minute,
            color: color.into(),
        }
    }

    pub fn duration_minutes(&self) -> u32 {
        self.end_minute.saturating_sub(self.start_minute)
    }
}

/// A task as the schedule store keeps it.
///
/// Stored records carry either `start` and `end`, or `range`. Anything else
/// is rejected when read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "StoredTask")]
pub struct TaskRecord {
    pub title: String,
    #[serde(flatten)]
    pub span: TaskSpan,
    pub color: String,
}

/// How a stored task encodes its time span.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum TaskSpan {
    /// `start = "08:00"`, `end = "19:00"`
    Clock { start: String, end: String },
    /// `range = "480-1140"`, minutes since midnight
    Range { range: String },
}

/// On-disk shape of a task before its span form is checked.
#[derive(Debug, Deserialize)]
struct StoredTask {
    title: String,
    start: Option<String>,
    end: Option<String>,
    range: Option<String>,
    color: String,
}

impl TryFrom<StoredTask> for TaskRecord {
    type Error = DayPieError;

    fn try_from(stored: StoredTask) -> DayPieResult<Self> {
        let span = match (stored.start, stored.end, stored.range) {
            (Some(start), Some(end), None) => TaskSpan::Clock { start, end },
            (None, None, Some(range)) => TaskSpan::Range { range },
            (None, None, None) => {
                return Err(DayPieError::Store(format!(
                    "Task \"{}\" has neither start/end nor range",
                    stored.title
                )));
            }
            (_, _, Some(_)) => {
                return Err(DayPieError::Store(format!(
                    "Task \"{}\" mixes start/end with range",
                    stored.title
                )));
            }
            (_, _, None) => {
                return Err(DayPieError::Store(format!(
                    "Task \"{}\" needs both start and end",
                    stored.title
                )));
            }
        };

        Ok(TaskRecord {
            title: stored.title,
            span,
            color: stored.color,
        })
    }
}

impl TaskRecord {
    pub fn clock(
        title: impl Into<String>,
        start: &str,
        end: &str,
        color: impl Into<String>,
    ) -> Self {
        TaskRecord {
            title: title.into(),
            span: TaskSpan::Clock {
                start: start.to_string(),
                end: end.to_string(),
            },
            color: color.into(),
        }
    }

    pub fn range(title: impl Into<String>, range: &str, color: impl Into<String>) -> Self {
        TaskRecord {
            title: title.into(),
            span: TaskSpan::Range {
                range: range.to_string(),
            },
            color: color.into(),
        }
    }

    /// Decode the stored time text into minute offsets.
    pub fn to_interval(&self) -> DayPieResult<Interval> {
        let (start_minute, end_minute) = match &self.span {
            TaskSpan::Clock { start, end } => (to_minutes(start)?, to_minutes(end)?),
            TaskSpan::Range { range } => parse_range_key(range)?,
        };

        Ok(Interval {
            label: self.title.clone(),
            start_minute,
            end_minute,
            color: self.color.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clock_record_decodes_to_minutes() {
        let record = TaskRecord::clock("Work", "08:00", "19:00", "#FFFF00");
        let interval = record.to_interval().unwrap();
        assert_eq!(interval, Interval::new("Work", 480, 1140, "#FFFF00"));
        assert_eq!(interval.duration_minutes(), 660);
    }

    #[test]
    fn range_record_decodes_to_minutes() {
        let record = TaskRecord::range("Field work", "600-960", "#808080");
        let interval = record.to_interval().unwrap();
        assert_eq!(interval.start_minute, 600);
        assert_eq!(interval.end_minute, 960);
    }

    #[test]
    fn malformed_record_is_an_error() {
        let record = TaskRecord::clock("Broken", "8am", "19:00", "red");
        assert!(matches!(
            record.to_interval(),
            Err(DayPieError::TimeParse { .. })
        ));

        let record = TaskRecord::range("Broken", "600", "red");
        assert!(matches!(
            record.to_interval(),
            Err(DayPieError::RangeKey { .. })
        ));
    }

    #[test]
    fn inverted_interval_has_zero_duration() {
        assert_eq!(Interval::new("Back", 600, 300, "red").duration_minutes(), 0);
    }

    #[test]
    fn record_deserializes_either_span_form() {
        let clock: TaskRecord = toml::from_str(
            "title = \"Meal\"\nstart = \"19:00\"\nend = \"20:30\"\ncolor = \"#FF0000\"",
        )
        .unwrap();
        assert_eq!(clock, TaskRecord::clock("Meal", "19:00", "20:30", "#FF0000"));

        let range: TaskRecord =
            toml::from_str("title = \"Meal\"\nrange = \"1140-1230\"\ncolor = \"#FF0000\"")
                .unwrap();
        assert_eq!(range, TaskRecord::range("Meal", "1140-1230", "#FF0000"));
    }

    fn stored(start: Option<&str>, end: Option<&str>, range: Option<&str>) -> StoredTask {
        StoredTask {
            title: "x".to_string(),
            start: start.map(String::from),
            end: end.map(String::from),
            range: range.map(String::from),
            color: "a".to_string(),
        }
    }

    #[test]
    fn record_with_both_span_forms_is_rejected() {
        let result = TaskRecord::try_from(stored(Some("08:00"), Some("09:00"), Some("600-960")));
        assert!(matches!(result, Err(DayPieError::Store(_))));

        let parsed = toml::from_str::<TaskRecord>(
            "title='x'\nstart='08:00'\nend='09:00'\nrange='600-960'\ncolor='a'",
        );
        assert!(parsed.is_err());
    }

    #[test]
    fn half_clock_span_with_range_is_rejected() {
        let result = TaskRecord::try_from(stored(Some("08:00"), None, Some("600-960")));
        assert!(matches!(result, Err(DayPieError::Store(_))));

        let result = TaskRecord::try_from(stored(None, Some("09:00"), Some("600-960")));
        assert!(matches!(result, Err(DayPieError::Store(_))));

        let parsed =
            toml::from_str::<TaskRecord>("title='x'\nstart='08:00'\nrange='600-960'\ncolor='a'");
        assert!(parsed.is_err());
    }

    #[test]
    fn record_without_a_complete_span_is_rejected() {
        let result = TaskRecord::try_from(stored(Some("08:00"), None, None));
        assert!(matches!(result, Err(DayPieError::Store(_))));

        let result = TaskRecord::try_from(stored(None, None, None));
        assert!(matches!(result, Err(DayPieError::Store(_))));
    }
}
