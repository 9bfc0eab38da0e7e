//! Schedule generation.
//!
//! Turns per-subject minutes into an ordered list of study blocks and breaks.
//!
//! # Algorithm Summary
//!
//! 1. Copy the allocation into a working "remaining minutes" table
//! 2. Pick the subject with the most time left (earliest listed wins ties)
//! 3. If the study run since the last break has reached the threshold, emit a break
//! 4. Emit a block of `min(max_block, remaining)` whole minutes and decrement
//! 5. Repeat until nothing is left

use serde::Serialize;
use thiserror::Error;

use crate::allocation::Allocation;
use crate::types::SubjectName;

/// Remaining time at or below this is treated as used up.
const EPSILON: f64 = 1e-9;

/// Block and break lengths for schedule generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleConfig {
    /// Longest single study block.
    /// Default: 60 minutes.
    pub max_block_minutes: u32,

    /// Length of an inserted break.
    /// Default: 10 minutes.
    pub break_minutes: u32,

    /// Consecutive study time after which the next block is preceded by a break.
    /// Default: 60 minutes.
    pub break_after_minutes: u32,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            max_block_minutes: 60,
            break_minutes: 10,
            break_after_minutes: 60,
        }
    }
}

/// One item of the day's plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ScheduleEntry {
    /// Contiguous study of one subject.
    Study { subject: SubjectName, minutes: u32 },
    /// A rest between study runs.
    Break { minutes: u32 },
}

impl ScheduleEntry {
    pub const fn minutes(&self) -> u32 {
        match self {
            Self::Study { minutes, .. } | Self::Break { minutes } => *minutes,
        }
    }

    pub const fn is_break(&self) -> bool {
        matches!(self, Self::Break { .. })
    }

    /// The studied subject, or `None` for breaks.
    pub const fn subject(&self) -> Option<&SubjectName> {
        match self {
            Self::Study { subject, .. } => Some(subject),
            Self::Break { .. } => None,
        }
    }
}

/// Chronologically ordered schedule entries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Schedule {
    entries: Vec<ScheduleEntry>,
}

impl Schedule {
    pub fn entries(&self) -> &[ScheduleEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ScheduleEntry> {
        self.entries.iter()
    }

    /// Length of the whole plan, breaks included.
    pub fn total_minutes(&self) -> u32 {
        self.entries.iter().map(ScheduleEntry::minutes).sum()
    }

    /// Study minutes scheduled for the named subject.
    pub fn study_minutes_for(&self, name: &str) -> u32 {
        self.entries
            .iter()
            .filter(|e| e.subject().is_some_and(|s| s.as_str() == name))
            .map(ScheduleEntry::minutes)
            .sum()
    }

    pub fn break_count(&self) -> usize {
        self.entries.iter().filter(|e| e.is_break()).count()
    }
}

impl<'a> IntoIterator for &'a Schedule {
    type Item = &'a ScheduleEntry;
    type IntoIter = std::slice::Iter<'a, ScheduleEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Scheduling failures.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ScheduleError {
    /// A step failed to consume any time, so the loop would never finish.
    #[error("remaining time for '{subject}' did not decrease ({remaining} minutes left)")]
    Degenerate {
        subject: SubjectName,
        remaining: f64,
    },
}

/// Build a schedule with the default 60-minute blocks and 10-minute breaks.
pub fn schedule(allocation: &Allocation) -> Result<Schedule, ScheduleError> {
    schedule_with(allocation, &ScheduleConfig::default())
}

/// Build a schedule from an allocation.
///
/// Blocks are whole minutes; a subject's final fractional minute is dropped.
/// An empty allocation yields an empty schedule.
pub fn schedule_with(
    allocation: &Allocation,
    config: &ScheduleConfig,
) -> Result<Schedule, ScheduleError> {
    let mut remaining: Vec<(&SubjectName, f64)> = allocation
        .shares
        .iter()
        .map(|share| (&share.subject.name, share.minutes))
        .collect();
    let mut entries = Vec::new();
    let mut studied_since_break: u32 = 0;
    let max_block = f64::from(config.max_block_minutes);

    while let Some(index) = select_subject(&remaining) {
        let (subject, left) = remaining[index];
        let left_snapped = snap_to_whole_minute(left);
        let exact = left_snapped.min(max_block);
        let whole = whole_minutes(exact);

        let next = if whole > 0 {
            if studied_since_break >= config.break_after_minutes {
                tracing::trace!(minutes = config.break_minutes, "break");
                entries.push(ScheduleEntry::Break {
                    minutes: config.break_minutes,
                });
                studied_since_break = 0;
            }

            tracing::trace!(subject = %subject, minutes = whole, "study block");
            entries.push(ScheduleEntry::Study {
                subject: subject.clone(),
                minutes: whole,
            });
            studied_since_break += whole;
            left_snapped - exact
        } else if left_snapped < 1.0 {
            // Sub-minute leftover: not worth a block.
            0.0
        } else {
            left_snapped - exact
        };

        if next >= left {
            return Err(ScheduleError::Degenerate {
                subject: subject.clone(),
                remaining: left,
            });
        }
        remaining[index].1 = next;
    }

    tracing::debug!(
        entries = entries.len(),
        minutes = entries.iter().map(ScheduleEntry::minutes).sum::<u32>(),
        "generated schedule"
    );

    Ok(Schedule { entries })
}

/// Index of the subject with the most remaining time.
///
/// Values within [`EPSILON`] of each other count as equal, and the earlier
/// subject wins the tie.
fn select_subject(remaining: &[(&SubjectName, f64)]) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (index, &(_, minutes)) in remaining.iter().enumerate() {
        if minutes.is_nan() || minutes <= EPSILON {
            continue;
        }
        match best {
            Some((_, best_minutes)) if minutes <= best_minutes + EPSILON => {}
            _ => best = Some((index, minutes)),
        }
    }
    best.map(|(index, _)| index)
}

/// Rounds values that are a hair away from a whole minute onto it.
fn snap_to_whole_minute(minutes: f64) -> f64 {
    let rounded = minutes.round();
    if (minutes - rounded).abs() < EPSILON {
        rounded
    } else {
        minutes
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn whole_minutes(minutes: f64) -> u32 {
    // Callers pass values in [0, max_block_minutes].
    minutes.floor().max(0.0) as u32
}
