//! PlanExporter port for writing generated plans out of the process

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use thiserror::Error;

use crate::domain::foundation::{parse_label, DomainError, ErrorCode, ValidationError};
use crate::domain::study_plan::StudyPlanReport;

/// Output encoding of an exported plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    Text,
    Json,
    Yaml,
}

impl ExportFormat {
    pub const ALL: [ExportFormat; 3] = [ExportFormat::Text, ExportFormat::Json, ExportFormat::Yaml];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Json => "json",
            Self::Yaml => "yaml",
        }
    }

    /// Conventional file extension.
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Text => "txt",
            Self::Json => "json",
            Self::Yaml => "yaml",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ExportFormat {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_label("format", s, &Self::ALL, ExportFormat::label)
    }
}

/// Errors that can occur while exporting a plan
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExportError {
    #[error("Serialization failed: {0}")]
    SerializationFailed(String),

    #[error("IO error: {0}")]
    IoError(String),

    #[error("Invalid path: {0}")]
    InvalidPath(String),
}

impl From<ExportError> for DomainError {
    fn from(err: ExportError) -> Self {
        let code = match err {
            ExportError::SerializationFailed(_) => ErrorCode::SerializationFailed,
            ExportError::IoError(_) | ExportError::InvalidPath(_) => ErrorCode::ExportFailed,
        };
        DomainError::new(code, err.to_string())
    }
}

/// Writes a rendered study plan somewhere durable.
pub trait PlanExporter: Send + Sync {
    /// Export the report, returning where it was written.
    fn export(&self, report: &StudyPlanReport, format: ExportFormat) -> Result<PathBuf, ExportError>;
}
