//! Core type definitions with validation.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::difficulty::Difficulty;

/// Validation errors for core types.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided value was empty.
    #[error("{field} cannot be empty")]
    Empty { field: &'static str },
}

/// A validated subject name.
///
/// Names are trimmed and must be non-empty. They are the unique key of a
/// subject within a plan, and their lexical order breaks scheduling ties.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SubjectName(String);

impl SubjectName {
    /// Creates a new name after trimming and validation.
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        let name = name.into();
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty {
                field: "subject name",
            });
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Returns the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for SubjectName {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<SubjectName> for String {
    fn from(name: SubjectName) -> Self {
        name.0
    }
}

impl fmt::Display for SubjectName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for SubjectName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A subject to study and how hard it is.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Subject {
    pub name: SubjectName,
    pub difficulty: Difficulty,
}

impl Subject {
    pub const fn new(name: SubjectName, difficulty: Difficulty) -> Self {
        Self { name, difficulty }
    }

    /// Convenience constructor that validates the name.
    pub fn parse(name: &str, difficulty: Difficulty) -> Result<Self, ValidationError> {
        Ok(Self::new(SubjectName::new(name)?, difficulty))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subject_name_is_trimmed() {
        let name = SubjectName::new("  Math ").unwrap();
        assert_eq!(name.as_str(), "Math");
        assert_eq!(name.to_string(), "Math");
    }

    #[test]
    fn subject_name_rejects_blank() {
        assert_eq!(
            SubjectName::new("   "),
            Err(ValidationError::Empty {
                field: "subject name"
            })
        );
        assert_eq!(
            SubjectName::new("").unwrap_err().to_string(),
            "subject name cannot be empty"
        );
    }

    #[test]
    fn subject_deserialize_validates_name() {
        let subject: Subject =
            serde_json::from_str(r#"{"name":"History","difficulty":"easy"}"#).unwrap();
        assert_eq!(subject.name.as_str(), "History");
        assert_eq!(subject.difficulty, Difficulty::Easy);

        let err = serde_json::from_str::<Subject>(r#"{"name":"","difficulty":"easy"}"#);
        assert!(err.is_err());
    }
}
