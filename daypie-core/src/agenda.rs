//! List view of a day's tasks.

use crate::interval::Interval;
use crate::partition::prepare_intervals;
use crate::time::minutes_to_label;

/// One `"<start> ~ <end> <label>"` line per task, in chronological order.
///
/// Uses the same clamping, drop and ordering rules as the partition, but
/// shows each task's own times rather than the overlap-truncated ones.
pub fn agenda_lines(intervals: &[Interval]) -> Vec<String> {
    prepare_intervals(intervals)
        .iter()
        .map(|interval| {
            format!(
                "{} ~ {} {}",
                minutes_to_label(interval.start_minute),
                minutes_to_label(interval.end_minute),
                interval.label
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lines_are_sorted_and_formatted() {
        let lines = agenda_lines(&[
            Interval::new("Meal", 1140, 1230, "#FF0000"),
            Interval::new("Work", 480, 1140, "#FFFF00"),
        ]);
        assert_eq!(lines, vec!["08:00 ~ 19:00 Work", "19:00 ~ 20:30 Meal"]);
    }

    #[test]
    fn empty_and_inverted_tasks_are_omitted() {
        let lines = agenda_lines(&[
            Interval::new("Nothing", 600, 600, "A"),
            Interval::new("Backwards", 700, 650, "B"),
        ]);
        assert!(lines.is_empty());
    }

    #[test]
    fn end_of_day_shows_as_24_00() {
        let lines = agenda_lines(&[Interval::new("Night", 1380, 1500, "A")]);
        assert_eq!(lines, vec!["23:00 ~ 24:00 Night"]);
    }
}
