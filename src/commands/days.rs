use anyhow::Result;
use daypie_core::IntervalStore;
use owo_colors::OwoColorize;

pub fn run(store: &impl IntervalStore) -> Result<()> {
    let days = store.day_keys()?;

    if days.is_empty() {
        println!("{}", "No days scheduled".dimmed());
        return Ok(());
    }

    for day in days {
        let count = store.records_for(&day)?.len();
        let label = format!("({} {})", count, if count == 1 { "task" } else { "tasks" });
        println!("{} {}", day, label.dimmed());
    }

    Ok(())
}
