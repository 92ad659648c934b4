//! Learning style preference supplied at intake.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::{parse_label, ValidationError};

/// Sensory/cognitive learning preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LearningStyle {
    Visual,
    Auditory,
    #[serde(rename = "Reading/Writing")]
    ReadingWriting,
    Kinesthetic,
}

impl LearningStyle {
    pub const ALL: [LearningStyle; 4] = [
        LearningStyle::Visual,
        LearningStyle::Auditory,
        LearningStyle::ReadingWriting,
        LearningStyle::Kinesthetic,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Visual => "Visual",
            Self::Auditory => "Auditory",
            Self::ReadingWriting => "Reading/Writing",
            Self::Kinesthetic => "Kinesthetic",
        }
    }

    /// Short hint shown next to the style in selection lists.
    pub fn hint(&self) -> &'static str {
        match self {
            Self::Visual => "Images, Spatial",
            Self::Auditory => "Listening, Sound",
            Self::ReadingWriting => "Text, Lists",
            Self::Kinesthetic => "Touch, Movement",
        }
    }
}

impl Default for LearningStyle {
    fn default() -> Self {
        Self::Visual
    }
}

impl fmt::Display for LearningStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for LearningStyle {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_label("learning_style", s, &Self::ALL, LearningStyle::label)
    }
}
