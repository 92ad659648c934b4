//! Serializes a report into one of the export formats.

use crate::domain::study_plan::StudyPlanReport;
use crate::ports::{ExportError, ExportFormat};

/// Renders `report` as text, pretty JSON, or YAML.
pub fn render_report(report: &StudyPlanReport, format: ExportFormat) -> Result<String, ExportError> {
    match format {
        ExportFormat::Text => Ok(report.to_string()),
        ExportFormat::Json => serde_json::to_string_pretty(report)
            .map(|mut json| {
                json.push('\n');
                json
            })
            .map_err(|e| ExportError::SerializationFailed(e.to_string())),
        ExportFormat::Yaml => serde_yaml::to_string(report)
            .map_err(|e| ExportError::SerializationFailed(e.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::BirthDate;
    use crate::domain::numerology::ProfileCalculator;
    use crate::domain::study_plan::{LessonPlanSynthesizer, Subject};
    use crate::domain::user::{LearningStyle, UserProfile};

    fn report() -> StudyPlanReport {
        let user = UserProfile::new(
            "Jo-Anne Smith",
            BirthDate::parse("1992-11-29").unwrap(),
            LearningStyle::Auditory,
            "Doppler",
        );
        let profile = ProfileCalculator::default().compute_profile(&user, 2026);
        let plan = LessonPlanSynthesizer::synthesize(&user, &profile, Subject::SpiHemodynamics);
        StudyPlanReport::new(user, profile, plan)
    }

    #[test]
    fn json_round_trips() {
        let report = report();
        let json = render_report(&report, ExportFormat::Json).unwrap();
        let parsed: StudyPlanReport = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, report);
    }

    #[test]
    fn yaml_round_trips() {
        let report = report();
        let yaml = render_report(&report, ExportFormat::Yaml).unwrap();
        assert!(yaml.contains("SPI: Hemodynamics"));
        let parsed: StudyPlanReport = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(parsed, report);
    }

    #[test]
    fn text_matches_display() {
        let report = report();
        assert_eq!(render_report(&report, ExportFormat::Text).unwrap(), report.to_string());
    }
}
