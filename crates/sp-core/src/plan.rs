//! One-call planning: allocate, then schedule.

use serde::Serialize;
use thiserror::Error;

use crate::allocation::{Allocation, AllocationError, allocate};
use crate::schedule::{Schedule, ScheduleConfig, ScheduleError, schedule_with};
use crate::types::Subject;

/// Either stage of planning failed.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum PlanError {
    #[error("invalid input: {0}")]
    InvalidInput(#[from] AllocationError),

    #[error("could not build schedule: {0}")]
    Schedule(#[from] ScheduleError),
}

/// A day's plan: how time was split, and the resulting timetable.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StudyPlan {
    pub allocation: Allocation,
    pub schedule: Schedule,
}

impl StudyPlan {
    /// Looks up the difficulty a subject was planned with.
    pub fn subject(&self, name: &str) -> Option<&Subject> {
        self.allocation
            .shares
            .iter()
            .map(|s| &s.subject)
            .find(|s| s.name.as_str() == name)
    }
}

/// Plan a day with default block and break lengths.
pub fn plan(total_minutes: f64, subjects: &[Subject]) -> Result<StudyPlan, PlanError> {
    plan_with(total_minutes, subjects, &ScheduleConfig::default())
}

pub fn plan_with(
    total_minutes: f64,
    subjects: &[Subject],
    config: &ScheduleConfig,
) -> Result<StudyPlan, PlanError> {
    let allocation = allocate(total_minutes, subjects)?;
    let schedule = schedule_with(&allocation, config)?;
    Ok(StudyPlan {
        allocation,
        schedule,
    })
}
