//! Human-readable and JSON rendering of a study plan.
//!
//! Start times are not part of the plan itself: they are the running sum of
//! entry durations from the configured start clock.

use std::fmt::Write;

use anyhow::Result;
use chrono::{Duration, NaiveTime};
use serde::Serialize;
use sp_core::{Difficulty, ScheduleEntry, StudyPlan};

/// Presentation settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Clock time of the first entry.
    pub start: NaiveTime,
    /// Include the motivation column.
    pub motivation: bool,
}

/// A schedule entry placed on the clock.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimelineRow<'a> {
    pub start: NaiveTime,
    pub entry: &'a ScheduleEntry,
    /// Difficulty of the studied subject; `None` for breaks.
    pub difficulty: Option<Difficulty>,
}

/// Places every entry on the clock. Returns the rows and the end time.
///
/// Times wrap past midnight.
pub fn timeline(plan: &StudyPlan, start: NaiveTime) -> (Vec<TimelineRow<'_>>, NaiveTime) {
    let mut clock = start;
    let rows = plan
        .schedule
        .iter()
        .map(|entry| {
            let row = TimelineRow {
                start: clock,
                entry,
                difficulty: entry
                    .subject()
                    .and_then(|name| plan.subject(name.as_str()))
                    .map(|s| s.difficulty),
            };
            clock += Duration::minutes(i64::from(entry.minutes()));
            row
        })
        .collect();
    (rows, clock)
}

// ========== Duration Formatting ==========

/// Formats minutes as "Xh Ym" if >= 1 hour, "Xm" otherwise.
pub fn format_duration(minutes: u32) -> String {
    let hours = minutes / 60;
    let minutes = minutes % 60;
    if hours >= 1 {
        format!("{hours}h {minutes}m")
    } else {
        format!("{minutes}m")
    }
}

fn format_clock(time: NaiveTime) -> String {
    time.format("%H:%M").to_string()
}

// ========== Labels ==========

const fn icon(difficulty: Option<Difficulty>) -> &'static str {
    match difficulty {
        Some(Difficulty::Hard) => "🧠",
        Some(Difficulty::Medium) => "💡",
        Some(Difficulty::Easy) => "✅",
        None => "📖",
    }
}

const fn motivation(difficulty: Option<Difficulty>) -> &'static str {
    match difficulty {
        Some(Difficulty::Hard) => "Tackle the challenge! You've got this! 💥",
        Some(Difficulty::Medium) => "Explore and understand! New insights await! 🤔",
        Some(Difficulty::Easy) => "Master the basics! Build a strong foundation! 🌱",
        None => "Focus and create! 💪",
    }
}

const BREAK_ACTIVITY: &str = "Break ☕";
const BREAK_MOTIVATION: &str = "Relax and get ready to launch again! 🌈";

// ========== Grid Table ==========

/// Terminal column width of a string. Emoji take two columns; variation
/// selectors take none.
fn display_width(s: &str) -> usize {
    s.chars()
        .map(|c| match u32::from(c) {
            0xFE00..=0xFE0F => 0,
            0x2300..=0x23FF | 0x2600..=0x27BF | 0x1F300.. => 2,
            _ => 1,
        })
        .sum()
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Align {
    Left,
    Right,
}

fn pad(cell: &str, width: usize, align: Align) -> String {
    let fill = " ".repeat(width.saturating_sub(display_width(cell)));
    match align {
        Align::Left => format!("{cell}{fill}"),
        Align::Right => format!("{fill}{cell}"),
    }
}

/// Renders a framed grid with a `=` rule under the header.
fn grid(headers: &[&str], align: &[Align], rows: &[Vec<String>]) -> String {
    let widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(i, header)| {
            rows.iter()
                .map(|row| display_width(&row[i]))
                .chain(std::iter::once(display_width(header)))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let rule = |c: char| {
        let mut line = String::from("+");
        for width in &widths {
            line.push_str(&c.to_string().repeat(width + 2));
            line.push('+');
        }
        line
    };
    let line = |cells: &[String]| {
        let mut line = String::from("|");
        for ((cell, width), align) in cells.iter().zip(&widths).zip(align) {
            line.push(' ');
            line.push_str(&pad(cell, *width, *align));
            line.push_str(" |");
        }
        line
    };

    let mut output = String::new();
    let header_cells: Vec<String> = headers.iter().map(ToString::to_string).collect();
    writeln!(output, "{}", rule('-')).unwrap();
    writeln!(output, "{}", line(header_cells.as_slice())).unwrap();
    writeln!(output, "{}", rule('=')).unwrap();
    for row in rows {
        writeln!(output, "{}", line(row.as_slice())).unwrap();
        writeln!(output, "{}", rule('-')).unwrap();
    }
    output
}

// ========== Human Output ==========

/// Formats the per-subject split.
pub fn format_allocation(plan: &StudyPlan) -> String {
    let mut output = String::new();
    writeln!(output, "ALLOCATION").unwrap();
    writeln!(output, "──────────").unwrap();

    let name_width = plan
        .allocation
        .shares
        .iter()
        .map(|s| display_width(s.subject.name.as_str()))
        .max()
        .unwrap_or(0);

    for share in &plan.allocation.shares {
        let name = pad(share.subject.name.as_str(), name_width, Align::Left);
        let difficulty = share.subject.difficulty;
        writeln!(output, "{name}  {difficulty:<6}  {:>6.1} min", share.minutes).unwrap();
    }
    output
}

/// Formats the schedule as a grid table.
pub fn format_schedule(plan: &StudyPlan, options: RenderOptions) -> String {
    let (rows, _) = timeline(plan, options.start);

    let mut headers = vec!["Start Time ⏰", "Activity 📚", "Duration (min) ⏱️"];
    let mut align = vec![Align::Left, Align::Left, Align::Right];
    if options.motivation {
        headers.push("Motivation ✨");
        align.push(Align::Left);
    }

    let cells: Vec<Vec<String>> = rows
        .iter()
        .map(|row| {
            let (activity, motivation_text) = match row.entry {
                ScheduleEntry::Study { subject, .. } => (
                    format!("{} {subject}", icon(row.difficulty)),
                    motivation(row.difficulty),
                ),
                ScheduleEntry::Break { .. } => (BREAK_ACTIVITY.to_string(), BREAK_MOTIVATION),
            };
            let mut cells = vec![
                format_clock(row.start),
                activity,
                row.entry.minutes().to_string(),
            ];
            if options.motivation {
                cells.push(motivation_text.to_string());
            }
            cells
        })
        .collect();

    grid(&headers, &align, &cells)
}

/// Formats the complete human-readable plan.
pub fn format_plan(plan: &StudyPlan, options: RenderOptions) -> String {
    let mut output = String::new();

    if plan.schedule.is_empty() {
        writeln!(
            output,
            "😔 We couldn't create a study schedule. Did you enter your subjects correctly?"
        )
        .unwrap();
        return output;
    }

    let (_, end) = timeline(plan, options.start);

    output.push_str(&format_allocation(plan));
    writeln!(output).unwrap();
    writeln!(output, "STUDY SCHEDULE").unwrap();
    writeln!(output, "──────────────").unwrap();
    output.push_str(&format_schedule(plan, options));
    writeln!(output).unwrap();
    writeln!(
        output,
        "🎉 Your study schedule ends at approximately {} ({} including {} breaks). ⭐",
        format_clock(end),
        format_duration(plan.schedule.total_minutes()),
        plan.schedule.break_count()
    )
    .unwrap();

    output
}

// ========== JSON Output ==========

/// JSON plan structure.
#[derive(Debug, Serialize)]
pub struct JsonPlan {
    pub total_minutes: f64,
    pub starts_at: String,
    pub ends_at: String,
    pub allocation: Vec<JsonShare>,
    pub schedule: Vec<JsonEntry>,
}

#[derive(Debug, Serialize)]
pub struct JsonShare {
    pub subject: String,
    pub difficulty: Difficulty,
    pub minutes: f64,
}

#[derive(Debug, Serialize)]
pub struct JsonEntry {
    pub start: String,
    pub kind: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<Difficulty>,
    pub minutes: u32,
}

/// Formats the plan as pretty JSON.
pub fn format_plan_json(plan: &StudyPlan, options: RenderOptions) -> Result<String> {
    let (rows, end) = timeline(plan, options.start);

    let report = JsonPlan {
        total_minutes: plan.allocation.total_minutes,
        starts_at: format_clock(options.start),
        ends_at: format_clock(end),
        allocation: plan
            .allocation
            .shares
            .iter()
            .map(|s| JsonShare {
                subject: s.subject.name.to_string(),
                difficulty: s.subject.difficulty,
                minutes: s.minutes,
            })
            .collect(),
        schedule: rows
            .iter()
            .map(|row| JsonEntry {
                start: format_clock(row.start),
                kind: if row.entry.is_break() { "break" } else { "study" },
                subject: row.entry.subject().map(ToString::to_string),
                difficulty: row.difficulty,
                minutes: row.entry.minutes(),
            })
            .collect(),
    };

    Ok(serde_json::to_string_pretty(&report)?)
}
