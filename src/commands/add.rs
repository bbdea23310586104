use anyhow::{Context, Result};
use daypie_core::constants::DAY_MINUTES;
use daypie_core::{DayKey, ScheduleFile, TaskRecord};
use owo_colors::OwoColorize;

pub fn run(
    schedule: &mut ScheduleFile,
    day: DayKey,
    title: String,
    start: String,
    end: String,
    color: String,
) -> Result<()> {
    let record = TaskRecord::clock(title, &start, &end, color);

    // Undecodable time text would break every later read of this day
    let interval = record
        .to_interval()
        .with_context(|| format!("Could not add \"{}\"", record.title))?;

    if interval.end_minute.min(DAY_MINUTES) <= interval.start_minute.min(DAY_MINUTES) {
        log::warn!(
            "\"{}\" ends before it starts and will not appear on the timeline",
            record.title
        );
    }

    let summary = format!("  Added: {} {} ~ {} on {}", record.title, start, end, day);
    schedule.add(day, record);
    schedule.save()?;

    println!("{}", summary.green());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use daypie_core::IntervalStore;

    fn add(schedule: &mut ScheduleFile, start: &str, end: &str) -> Result<()> {
        run(
            schedule,
            DayKey::from("2025-09-21"),
            "Work".to_string(),
            start.to_string(),
            end.to_string(),
            "#FFFF00".to_string(),
        )
    }

    #[test]
    fn malformed_time_is_rejected_before_saving() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("schedule.toml");
        let mut schedule = ScheduleFile::load(&path).unwrap();

        assert!(add(&mut schedule, "8am", "19:00").is_err());
        assert!(add(&mut schedule, "08:00", "7pm").is_err());

        assert!(!path.exists());
        assert!(schedule.day_keys().unwrap().is_empty());
    }

    #[test]
    fn valid_task_is_saved() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("schedule.toml");
        let mut schedule = ScheduleFile::load(&path).unwrap();

        add(&mut schedule, "08:00", "19:00").unwrap();

        let reloaded = ScheduleFile::load(&path).unwrap();
        assert_eq!(
            reloaded.records_for(&"2025-09-21".into()).unwrap(),
            vec![TaskRecord::clock("Work", "08:00", "19:00", "#FFFF00")]
        );
    }
}
