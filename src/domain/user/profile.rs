//! Intake profile of the learner requesting a study plan.

use serde::{Deserialize, Serialize};

use super::LearningStyle;
use crate::domain::foundation::BirthDate;

/// What the learner told us about themselves.
///
/// The name is free text and may contain characters that numerology ignores.
/// Interests may be empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
    pub date_of_birth: BirthDate,
    pub learning_style: LearningStyle,
    #[serde(default)]
    pub interests: String,
}

impl UserProfile {
    pub fn new(
        name: impl Into<String>,
        date_of_birth: BirthDate,
        learning_style: LearningStyle,
        interests: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            date_of_birth,
            learning_style,
            interests: interests.into(),
        }
    }

    /// Interests with surrounding whitespace removed, `None` when blank.
    pub fn trimmed_interests(&self) -> Option<&str> {
        let trimmed = self.interests.trim();
        (!trimmed.is_empty()).then_some(trimmed)
    }
}
