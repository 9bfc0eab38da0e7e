//! Time allocation algorithm.
//!
//! Splits the day's study budget between subjects in proportion to their
//! difficulty weight:
//!
//! ```text
//! minutes(subject) = weight(subject) / Σ weight * total_minutes
//! ```
//!
//! The result keeps the caller's subject order so presentation can list
//! subjects the way they were entered.

use std::collections::HashSet;

use serde::Serialize;
use thiserror::Error;

use crate::types::{Subject, SubjectName};

/// Invalid input rejected by [`allocate`].
#[derive(Debug, Error, Clone, PartialEq)]
pub enum AllocationError {
    /// The budget was zero, negative, or not a finite number.
    #[error("total study time must be a positive number of minutes, got {minutes}")]
    NonPositiveBudget { minutes: f64 },

    /// No subjects were given.
    #[error("at least one subject is required")]
    NoSubjects,

    /// The same subject name appeared twice.
    #[error("subject '{name}' was given more than once")]
    DuplicateSubject { name: SubjectName },
}

/// Minutes assigned to a single subject.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubjectShare {
    pub subject: Subject,

    /// Allocated minutes before block splitting. Not rounded.
    pub minutes: f64,
}

/// Result of splitting a budget between subjects.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Allocation {
    /// The budget that was split.
    pub total_minutes: f64,

    /// One share per subject, in input order.
    pub shares: Vec<SubjectShare>,
}

impl Allocation {
    /// Builds an allocation from precomputed shares.
    ///
    /// No proportionality checks are made; use [`allocate`] for that. This is
    /// how callers hand the scheduler minutes that came from somewhere else.
    pub fn from_shares(shares: Vec<SubjectShare>) -> Self {
        let total_minutes = shares.iter().map(|s| s.minutes).sum();
        Self {
            total_minutes,
            shares,
        }
    }

    /// Minutes allocated to the named subject, if present.
    pub fn minutes_for(&self, name: &str) -> Option<f64> {
        self.shares
            .iter()
            .find(|s| s.subject.name.as_str() == name)
            .map(|s| s.minutes)
    }

    /// Sum of all shares.
    pub fn allocated_minutes(&self) -> f64 {
        self.shares.iter().map(|s| s.minutes).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.shares.is_empty()
    }
}

/// Split `total_minutes` between `subjects` proportionally to difficulty weight.
///
/// Subjects with equal difficulty receive equal time. The shares sum to
/// `total_minutes` up to floating-point rounding.
pub fn allocate(total_minutes: f64, subjects: &[Subject]) -> Result<Allocation, AllocationError> {
    if !total_minutes.is_finite() || total_minutes <= 0.0 {
        return Err(AllocationError::NonPositiveBudget {
            minutes: total_minutes,
        });
    }
    if subjects.is_empty() {
        return Err(AllocationError::NoSubjects);
    }

    let mut seen = HashSet::with_capacity(subjects.len());
    for subject in subjects {
        if !seen.insert(&subject.name) {
            return Err(AllocationError::DuplicateSubject {
                name: subject.name.clone(),
            });
        }
    }

    let total_weight: u32 = subjects.iter().map(|s| s.difficulty.weight()).sum();
    let total_weight = f64::from(total_weight);

    let shares: Vec<SubjectShare> = subjects
        .iter()
        .map(|subject| SubjectShare {
            subject: subject.clone(),
            minutes: f64::from(subject.difficulty.weight()) / total_weight * total_minutes,
        })
        .collect();

    tracing::debug!(
        total_minutes,
        total_weight,
        subjects = shares.len(),
        "allocated study time"
    );

    Ok(Allocation {
        total_minutes,
        shares,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::difficulty::Difficulty;

    use proptest::prelude::*;

    fn subject(name: &str, difficulty: Difficulty) -> Subject {
        Subject::parse(name, difficulty).expect("valid subject name")
    }

    #[test]
    fn test_hard_and_easy_split_three_to_one() {
        let subjects = vec![
            subject("Math", Difficulty::Hard),
            subject("History", Difficulty::Easy),
        ];

        let allocation = allocate(120.0, &subjects).unwrap();

        assert!((allocation.minutes_for("Math").unwrap() - 90.0).abs() < 1e-9);
        assert!((allocation.minutes_for("History").unwrap() - 30.0).abs() < 1e-9);
        assert_eq!(allocation.total_minutes, 120.0);
    }

    #[test]
    fn test_shares_keep_input_order() {
        let subjects = vec![
            subject("Physics", Difficulty::Medium),
            subject("Art", Difficulty::Easy),
            subject("Chemistry", Difficulty::Hard),
        ];

        let allocation = allocate(180.0, &subjects).unwrap();
        let names: Vec<_> = allocation
            .shares
            .iter()
            .map(|s| s.subject.name.as_str())
            .collect();
        assert_eq!(names, ["Physics", "Art", "Chemistry"]);

        // weights 2 + 1 + 3 = 6 → 60 / 30 / 90
        assert!((allocation.shares[0].minutes - 60.0).abs() < 1e-9);
        assert!((allocation.shares[1].minutes - 30.0).abs() < 1e-9);
        assert!((allocation.shares[2].minutes - 90.0).abs() < 1e-9);
    }

    #[test]
    fn test_zero_budget_is_rejected() {
        let subjects = vec![subject("Math", Difficulty::Hard)];
        assert_eq!(
            allocate(0.0, &subjects),
            Err(AllocationError::NonPositiveBudget { minutes: 0.0 })
        );
    }

    #[test]
    fn test_negative_and_non_finite_budgets_are_rejected() {
        let subjects = vec![subject("Math", Difficulty::Hard)];
        assert!(allocate(-30.0, &subjects).is_err());
        assert!(allocate(f64::NAN, &subjects).is_err());
        assert!(allocate(f64::INFINITY, &subjects).is_err());
    }

    #[test]
    fn test_empty_subjects_are_rejected() {
        assert_eq!(allocate(60.0, &[]), Err(AllocationError::NoSubjects));
    }

    #[test]
    fn test_duplicate_subject_is_rejected() {
        let subjects = vec![
            subject("Math", Difficulty::Hard),
            subject("Math", Difficulty::Easy),
        ];
        let err = allocate(60.0, &subjects).unwrap_err();
        assert_eq!(err.to_string(), "subject 'Math' was given more than once");
    }

    #[test]
    fn test_from_shares_sums_total() {
        let allocation = Allocation::from_shares(vec![
            SubjectShare {
                subject: subject("A", Difficulty::Easy),
                minutes: 12.5,
            },
            SubjectShare {
                subject: subject("B", Difficulty::Easy),
                minutes: 7.5,
            },
        ]);
        assert!((allocation.total_minutes - 20.0).abs() < 1e-9);
        assert!(!allocation.is_empty());
    }

    fn difficulty_strategy() -> impl Strategy<Value = Difficulty> {
        prop::sample::select(Difficulty::ALL.to_vec())
    }

    fn subjects_strategy() -> impl Strategy<Value = Vec<Subject>> {
        prop::collection::vec(difficulty_strategy(), 1..12).prop_map(|levels| {
            levels
                .into_iter()
                .enumerate()
                .map(|(i, d)| subject(&format!("Subject {i}"), d))
                .collect()
        })
    }

    proptest! {
        #[test]
        fn prop_shares_sum_to_budget(total in 1e-3..10_000.0f64, subjects in subjects_strategy()) {
            let allocation = allocate(total, &subjects).unwrap();
            prop_assert!((allocation.allocated_minutes() - total).abs() < 1e-6);
            prop_assert!(allocation.shares.iter().all(|s| s.minutes >= 0.0));
        }

        #[test]
        fn prop_equal_difficulty_gets_equal_time(total in 1.0..10_000.0f64, subjects in subjects_strategy()) {
            let allocation = allocate(total, &subjects).unwrap();
            for a in &allocation.shares {
                for b in &allocation.shares {
                    if a.subject.difficulty == b.subject.difficulty {
                        prop_assert!((a.minutes - b.minutes).abs() < 1e-9);
                    }
                }
            }
        }

        #[test]
        fn prop_harder_subjects_get_at_least_as_much(total in 1.0..10_000.0f64, subjects in subjects_strategy()) {
            let allocation = allocate(total, &subjects).unwrap();
            for a in &allocation.shares {
                for b in &allocation.shares {
                    if a.subject.difficulty.weight() > b.subject.difficulty.weight() {
                        prop_assert!(a.minutes >= b.minutes);
                    }
                }
            }
        }
    }
}
