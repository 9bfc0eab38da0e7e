//! Plan command: build and print a plan from validated inputs.

use std::io::Write;

use anyhow::{Context, Result};
use sp_core::Subject;

use super::render::{RenderOptions, format_plan, format_plan_json};
use super::util::hours_to_minutes;

pub fn run<W: Write>(
    writer: &mut W,
    hours: f64,
    subjects: &[Subject],
    options: RenderOptions,
    json: bool,
) -> Result<()> {
    let plan = sp_core::plan(hours_to_minutes(hours), subjects)
        .context("failed to build study plan")?;
    tracing::debug!(
        entries = plan.schedule.len(),
        breaks = plan.schedule.break_count(),
        "built study plan"
    );

    if json {
        writeln!(writer, "{}", format_plan_json(&plan, options)?)?;
    } else {
        write!(writer, "{}", format_plan(&plan, options))?;
    }
    Ok(())
}
