use anyhow::{Context, Result};
use daypie_core::partition::layout;
use daypie_core::{DayKey, IntervalStore, Segment, agenda_lines, build_partition};
use owo_colors::OwoColorize;
use serde::Serialize;

use crate::render::{render_bar, render_segment};

/// Width of the timeline bar; one cell per half hour.
const BAR_WIDTH: u32 = 48;

#[derive(Serialize)]
struct DayView<'a> {
    day: &'a DayKey,
    segments: Vec<Segment>,
    agenda: Vec<String>,
}

pub fn run(
    store: &impl IntervalStore,
    day: DayKey,
    uncovered_color: &str,
    json: bool,
) -> Result<()> {
    let intervals = store
        .intervals_for(&day)
        .with_context(|| format!("Could not read tasks for {}", day))?;

    let segments = build_partition(&intervals);
    let agenda = agenda_lines(&intervals);

    if json {
        let view = DayView {
            day: &day,
            segments,
            agenda,
        };
        println!("{}", serde_json::to_string_pretty(&view)?);
        return Ok(());
    }

    println!("{}", day.to_string().bold());
    println!("{}", render_bar(&segments, uncovered_color, BAR_WIDTH));
    println!();

    for ((start, end), segment) in layout(&segments).into_iter().zip(&segments) {
        println!("  {}", render_segment(start, end, segment, uncovered_color));
    }
    println!();

    if agenda.is_empty() {
        println!("  {}", "No tasks scheduled".dimmed());
    } else {
        for line in &agenda {
            println!("  {}", line);
        }
    }

    Ok(())
}
