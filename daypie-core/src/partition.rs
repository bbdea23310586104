//! Day partitioning.
//!
//! Turns an unordered list of intervals into an ordered, gapless,
//! non-overlapping sequence of segments whose durations sum to exactly one
//! day. Untracked time becomes `Fill::Uncovered` segments.

use serde::{Deserialize, Serialize};

use crate::constants::DAY_MINUTES;
use crate::interval::Interval;

/// What a segment of the day is filled with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "color", rename_all = "snake_case")]
pub enum Fill {
    /// Time owned by a task, carrying the task's color tag
    Task(String),
    /// Time with no scheduled task
    Uncovered,
}

impl Fill {
    /// The color to draw with, substituting `uncovered` for untracked time.
    pub fn color<'a>(&'a self, uncovered: &'a str) -> &'a str {
        match self {
            Fill::Task(color) => color,
            Fill::Uncovered => uncovered,
        }
    }

    pub fn is_uncovered(&self) -> bool {
        matches!(self, Fill::Uncovered)
    }
}

/// One piece of the day. Segments carry no absolute time; position follows
/// from order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    pub duration_minutes: u32,
    pub fill: Fill,
}

impl Segment {
    fn task(duration_minutes: u32, color: &str) -> Self {
        Segment {
            duration_minutes,
            fill: Fill::Task(color.to_string()),
        }
    }

    fn uncovered(duration_minutes: u32) -> Self {
        Segment {
            duration_minutes,
            fill: Fill::Uncovered,
        }
    }

    /// Fraction of the day this segment covers, in `(0, 1]`.
    pub fn share(&self) -> f64 {
        f64::from(self.duration_minutes) / f64::from(DAY_MINUTES)
    }
}

/// Clamp every interval into `[0, 1440]`, drop the empty or inverted ones,
/// and sort by start minute.
///
/// The sort is stable: intervals with equal starts keep their input order.
pub fn prepare_intervals(intervals: &[Interval]) -> Vec<Interval> {
    let mut prepared: Vec<Interval> = intervals
        .iter()
        .filter_map(|interval| {
            let start_minute = interval.start_minute.min(DAY_MINUTES);
            let end_minute = interval.end_minute.min(DAY_MINUTES);

            if end_minute <= start_minute {
                log::debug!(
                    "Dropping empty interval '{}' ({}..{})",
                    interval.label,
                    interval.start_minute,
                    interval.end_minute
                );
                return None;
            }

            Some(Interval {
                start_minute,
                end_minute,
                ..interval.clone()
            })
        })
        .collect();

    prepared.sort_by_key(|interval| interval.start_minute);
    prepared
}

/// Build the day's partition.
///
/// An interval starting before the end of the one before it is truncated to
/// start there, and dropped if nothing is left. The durations of the result
/// always sum to `DAY_MINUTES`, and an empty input yields one uncovered
/// segment spanning the whole day.
pub fn build_partition(intervals: &[Interval]) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut cursor = 0;

    for interval in prepare_intervals(intervals) {
        let start = interval.start_minute.max(cursor);
        let end = interval.end_minute;

        if end <= start {
            log::debug!(
                "Dropping interval '{}': fully covered by earlier tasks",
                interval.label
            );
            continue;
        }
        if start > interval.start_minute {
            log::debug!(
                "Truncating interval '{}' to start at minute {}",
                interval.label,
                start
            );
        }

        if start > cursor {
            segments.push(Segment::uncovered(start - cursor));
        }
        segments.push(Segment::task(end - start, &interval.color));
        cursor = end;
    }

    if cursor < DAY_MINUTES {
        segments.push(Segment::uncovered(DAY_MINUTES - cursor));
    }

    segments
}

/// Lay segments end to end from midnight, returning each one's
/// `[start, end)` minute offsets.
pub fn layout(segments: &[Segment]) -> Vec<(u32, u32)> {
    segments
        .iter()
        .scan(0, |offset, segment| {
            let start = *offset;
            *offset += segment.duration_minutes;
            Some((start, *offset))
        })
        .collect()
}
