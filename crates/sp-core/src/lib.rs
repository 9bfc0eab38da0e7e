//! Core domain logic for the study planner.
//!
//! This crate contains the fundamental types and logic for:
//! - Allocation: splitting a day's study budget by subject difficulty
//! - Scheduling: cutting allocated time into capped blocks with breaks
//! - Planning: running both stages in one call

mod allocation;
pub mod difficulty;
mod plan;
mod schedule;
pub mod types;

pub use allocation::{Allocation, AllocationError, SubjectShare, allocate};
pub use difficulty::{Difficulty, UnknownDifficulty};
pub use plan::{PlanError, StudyPlan, plan, plan_with};
pub use schedule::{
    Schedule, ScheduleConfig, ScheduleEntry, ScheduleError, schedule, schedule_with,
};
pub use types::{Subject, SubjectName, ValidationError};
