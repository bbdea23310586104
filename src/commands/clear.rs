use anyhow::Result;
use daypie_core::{DayKey, ScheduleFile};
use owo_colors::OwoColorize;

pub fn run(schedule: &mut ScheduleFile, day: DayKey) -> Result<()> {
    let removed = schedule.clear(&day);

    if removed == 0 {
        println!("{}", format!("Nothing scheduled on {}", day).dimmed());
        return Ok(());
    }

    schedule.save()?;
    let noun = if removed == 1 { "task" } else { "tasks" };
    println!("{}", format!("  Removed {} {} from {}", removed, noun, day).red());
    Ok(())
}
