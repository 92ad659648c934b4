//! Filesystem exporter for rendered study plans

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::info;

use super::render_report;
use crate::domain::study_plan::StudyPlanReport;
use crate::ports::{ExportError, ExportFormat, PlanExporter};

/// Writes plans to a fixed file path.
///
/// Parent directories are created as needed. Content is written to a
/// uniquely named temporary file in the target directory and persisted over
/// the target, so existing siblings are never touched.
pub struct FilePlanExporter {
    path: PathBuf,
}

impl FilePlanExporter {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Directory the target lives in; `.` for a bare file name.
    fn target_dir(&self) -> &Path {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        }
    }

    fn ensure_parent_exists(&self) -> Result<(), ExportError> {
        fs::create_dir_all(self.target_dir())
            .map_err(|e| ExportError::IoError(format!("Failed to create directory: {}", e)))
    }
}

impl PlanExporter for FilePlanExporter {
    fn export(&self, report: &StudyPlanReport, format: ExportFormat) -> Result<PathBuf, ExportError> {
        if self.path.file_name().is_none() {
            return Err(ExportError::InvalidPath(self.path.display().to_string()));
        }

        let content = render_report(report, format)?;
        self.ensure_parent_exists()?;

        // Dropping the temp file on any error below removes it.
        let mut temp = NamedTempFile::new_in(self.target_dir())
            .map_err(|e| ExportError::IoError(format!("Failed to create temporary file: {}", e)))?;
        temp.write_all(content.as_bytes())
            .map_err(|e| ExportError::IoError(format!("Failed to write temporary file: {}", e)))?;
        temp.persist(&self.path)
            .map_err(|e| ExportError::IoError(format!("Failed to move file into place: {}", e.error)))?;

        info!(path = %self.path.display(), format = %format, "Exported study plan");
        Ok(self.path.clone())
    }
}
