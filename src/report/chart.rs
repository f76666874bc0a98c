//! Timeline Chart
//!
//! Renders recorded measures as an ASCII chart and summarises their
//! durations.

use std::collections::HashMap;

use crate::timeline::Entry;

/// Width of the bar area in characters.
const CHART_WIDTH: f64 = 50.0;

/// Width of the name column in characters.
const NAME_WIDTH: usize = 12;

/// Generates an ASCII chart of the measures in `entries`.
///
/// Each measure is a bar positioned and scaled across the span from the
/// earliest measure start to the latest measure end. Marks are listed
/// underneath with their start times, even when there are no bars.
pub fn render_chart(entries: &[Entry]) -> String {
    let mut output = String::from("\nTimeline:\n\n");

    let measures: Vec<&Entry> = entries.iter().filter(|e| e.is_measure()).collect();

    let origin = measures
        .iter()
        .map(|e| e.start_time.min(e.end_time()))
        .fold(f64::INFINITY, f64::min);
    let end = measures
        .iter()
        .map(|e| e.start_time.max(e.end_time()))
        .fold(f64::NEG_INFINITY, f64::max);
    let total = end - origin;

    let has_span = !measures.is_empty() && total > 0.0;

    if has_span {
        let scale = CHART_WIDTH / total;

        for entry in &measures {
            let bar_start = entry.start_time.min(entry.end_time());
            let start_pos = ((bar_start - origin) * scale) as usize;
            let bar_width = (entry.duration.abs() * scale).max(1.0) as usize;

            let mut bar = " ".repeat(start_pos);
            bar.push_str(&"#".repeat(bar_width));

            output.push_str(&format!(
                "{} |{:<width$}| ({:.3} ms)\n",
                truncate(&entry.name, NAME_WIDTH),
                bar,
                entry.duration,
                width = CHART_WIDTH as usize
            ));
        }
    }

    let marks: Vec<&Entry> = entries.iter().filter(|e| e.is_mark()).collect();
    if !marks.is_empty() {
        output.push_str("\nMarks:\n");
        for mark in marks {
            output.push_str(&format!(
                "  {} @ {:.3} ms\n",
                truncate(&mark.name, NAME_WIDTH),
                mark.start_time
            ));
        }
    }

    if has_span {
        output.push_str(&format!("\nTotal: {:.3} ms\n", total));
    }
    output
}

/// Returns the duration of each measure by name.
///
/// When a name was measured more than once, the entry stored last wins.
pub fn measure_durations(entries: &[Entry]) -> HashMap<String, f64> {
    entries
        .iter()
        .filter(|e| e.is_measure())
        .map(|e| (e.name.clone(), e.duration))
        .collect()
}

/// Pads or truncates a name to exactly `max_len` characters.
fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        format!("{:width$}", s, width = max_len)
    } else {
        let head: String = s.chars().take(max_len - 3).collect();
        format!("{}...", head)
    }
}
