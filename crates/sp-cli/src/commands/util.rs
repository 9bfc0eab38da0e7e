//! Shared parsers for CLI arguments and prompt answers.

use anyhow::Context;
use chrono::NaiveTime;

use sp_core::{Difficulty, Subject};

/// Parse a number of study hours.
///
/// Accepts either `.` or `,` as the decimal separator ("4.5" or "4,5").
pub fn parse_hours(s: &str) -> anyhow::Result<f64> {
    let normalized = s.trim().replace(',', ".");
    let hours: f64 = normalized
        .parse()
        .with_context(|| format!("Invalid number of hours: {s}. Use e.g. 4.5 or 4,5"))?;

    if !hours.is_finite() || hours <= 0.0 {
        anyhow::bail!("Study time must be a positive number of hours, got {s}");
    }
    Ok(hours)
}

/// Parse a `NAME=DIFFICULTY` subject argument.
pub fn parse_subject(s: &str) -> anyhow::Result<Subject> {
    let Some((name, difficulty)) = s.rsplit_once('=') else {
        anyhow::bail!("Invalid subject: {s}. Use NAME=DIFFICULTY (e.g. Math=hard)");
    };
    let difficulty: Difficulty = difficulty.parse()?;
    Ok(Subject::parse(name, difficulty)?)
}

/// Parse a wall-clock time in `HH:MM` form.
pub fn parse_clock(s: &str) -> anyhow::Result<NaiveTime> {
    NaiveTime::parse_from_str(s.trim(), "%H:%M")
        .with_context(|| format!("Invalid time: {s}. Use HH:MM (e.g. 09:30)"))
}

/// Convert hours to minutes.
pub fn hours_to_minutes(hours: f64) -> f64 {
    hours * 60.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hours_accepts_comma_decimal() {
        assert!((parse_hours("4,5").unwrap() - 4.5).abs() < f64::EPSILON);
        assert!((parse_hours(" 2.25 ").unwrap() - 2.25).abs() < f64::EPSILON);
    }

    #[test]
    fn test_parse_hours_rejects_non_positive() {
        assert!(parse_hours("0").is_err());
        assert!(parse_hours("-1").is_err());
        assert!(parse_hours("inf").is_err());
        assert!(parse_hours("lots").is_err());
    }

    #[test]
    fn test_parse_subject() {
        let subject = parse_subject("Linear Algebra=Hard").unwrap();
        assert_eq!(subject.name.as_str(), "Linear Algebra");
        assert_eq!(subject.difficulty, Difficulty::Hard);
    }

    #[test]
    fn test_parse_subject_errors() {
        assert!(parse_subject("Math").is_err());
        assert!(parse_subject("Math=impossible").is_err());
        assert!(parse_subject("=easy").is_err());
    }

    #[test]
    fn test_parse_clock() {
        assert_eq!(
            parse_clock("09:30").unwrap(),
            NaiveTime::from_hms_opt(9, 30, 0).unwrap()
        );
        assert!(parse_clock("25:00").is_err());
        assert!(parse_clock("noon").is_err());
    }

    #[test]
    fn test_hours_to_minutes() {
        assert!((hours_to_minutes(4.5) - 270.0).abs() < f64::EPSILON);
    }
}
