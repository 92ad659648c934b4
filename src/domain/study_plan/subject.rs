//! Study subjects offered by the planner.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::{parse_label, ValidationError};

/// Target subject of a lesson plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Subject {
    #[serde(rename = "SPI: Physics")]
    SpiPhysics,
    #[serde(rename = "SPI: Hemodynamics")]
    SpiHemodynamics,
    #[serde(rename = "SPI: Artifacts")]
    SpiArtifacts,
    #[serde(rename = "Vascular Technology")]
    VascularTechnology,
    #[serde(rename = "Abdominal Sonography")]
    AbdominalSonography,
    #[serde(rename = "Ob/Gyn")]
    ObGyn,
}

impl Subject {
    pub const ALL: [Subject; 6] = [
        Subject::SpiPhysics,
        Subject::SpiHemodynamics,
        Subject::SpiArtifacts,
        Subject::VascularTechnology,
        Subject::AbdominalSonography,
        Subject::ObGyn,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::SpiPhysics => "SPI: Physics",
            Self::SpiHemodynamics => "SPI: Hemodynamics",
            Self::SpiArtifacts => "SPI: Artifacts",
            Self::VascularTechnology => "Vascular Technology",
            Self::AbdominalSonography => "Abdominal Sonography",
            Self::ObGyn => "Ob/Gyn",
        }
    }
}

impl Default for Subject {
    fn default() -> Self {
        Self::SpiPhysics
    }
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Subject {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_label("subject", s, &Self::ALL, Subject::label)
    }
}
