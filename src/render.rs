//! Terminal rendering for day partitions.
//!
//! Task colors are opaque strings. Hex colors ("#RGB", "#RRGGBB") and a few
//! basic names are drawn in color; anything else is printed uncolored.

use daypie_core::Segment;
use daypie_core::constants::DAY_MINUTES;
use daypie_core::time::minutes_to_label;
use owo_colors::{AnsiColors, OwoColorize};

const BAR_CELL: &str = "█";

/// Paint `text` in `color` if it is a color we can show.
pub fn paint(text: &str, color: &str) -> String {
    if let Some((r, g, b)) = parse_hex(color) {
        return text.truecolor(r, g, b).to_string();
    }
    match named_color(color) {
        Some(ansi) => text.color(ansi).to_string(),
        None => text.to_string(),
    }
}

fn parse_hex(color: &str) -> Option<(u8, u8, u8)> {
    let hex = color.strip_prefix('#')?;
    if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }

    let channel = |s: &str| u8::from_str_radix(s, 16).ok();
    match hex.len() {
        6 => Some((channel(&hex[0..2])?, channel(&hex[2..4])?, channel(&hex[4..6])?)),
        3 => {
            // #abc is shorthand for #aabbcc
            let short = |i: usize| channel(&hex[i..i + 1]).map(|v| v * 17);
            Some((short(0)?, short(1)?, short(2)?))
        }
        _ => None,
    }
}

fn named_color(color: &str) -> Option<AnsiColors> {
    let ansi = match color.to_ascii_lowercase().as_str() {
        "black" => AnsiColors::Black,
        "red" => AnsiColors::Red,
        "green" => AnsiColors::Green,
        "yellow" => AnsiColors::Yellow,
        "blue" => AnsiColors::Blue,
        "magenta" | "purple" => AnsiColors::Magenta,
        "cyan" => AnsiColors::Cyan,
        "white" => AnsiColors::White,
        "grey" | "gray" => AnsiColors::BrightBlack,
        _ => return None,
    };
    Some(ansi)
}

/// Draw the partition as a single bar `width` cells wide.
///
/// Cell boundaries are rounded from cumulative offsets, so the bar is always
/// exactly `width` cells and short segments may get none.
pub fn render_bar(segments: &[Segment], uncovered_color: &str, width: u32) -> String {
    let mut bar = String::new();
    let mut offset = 0;
    let mut drawn = 0;

    for segment in segments {
        offset += segment.duration_minutes;
        let cell_end = (offset * width + DAY_MINUTES / 2) / DAY_MINUTES;
        let cells = cell_end.saturating_sub(drawn) as usize;
        drawn = drawn.max(cell_end);

        if cells > 0 {
            let color = segment.fill.color(uncovered_color);
            bar.push_str(&paint(&BAR_CELL.repeat(cells), color));
        }
    }

    bar
}

/// One line per segment: "08:00-19:00   11h  ■ #FFFF00"
pub fn render_segment(start: u32, end: u32, segment: &Segment, uncovered_color: &str) -> String {
    let color = segment.fill.color(uncovered_color);
    let tag = if segment.fill.is_uncovered() { "(free)" } else { color };

    format!(
        "{}-{}  {:>6}  {} {}",
        minutes_to_label(start),
        minutes_to_label(end),
        format_duration(segment.duration_minutes),
        paint("■", color),
        tag
    )
}

/// "45m", "2h", "1h30m"
pub fn format_duration(minutes: u32) -> String {
    match (minutes / 60, minutes % 60) {
        (0, m) => format!("{m}m"),
        (h, 0) => format!("{h}h"),
        (h, m) => format!("{h}h{m:02}m"),
    }
}
