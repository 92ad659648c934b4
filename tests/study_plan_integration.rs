//! Integration tests for study plan generation.
//!
//! These tests drive the public API the way the CLI does:
//! 1. Raw intake input goes through the command handler
//! 2. The profile and plan match the published tables
//! 3. Reports export to disk in every format

use std::fs;
use std::sync::Arc;

use study_plan::adapters::{FilePlanExporter, FixedClock};
use study_plan::application::{GenerateStudyPlanCommand, GenerateStudyPlanHandler};
use study_plan::config::EngineConfig;
use study_plan::domain::foundation::BirthDate;
use study_plan::domain::numerology::{
    chinese_zodiac, life_path, name_number, reduce, zodiac_sign, ChineseZodiac,
    ProfileCalculator, ZodiacSign,
};
use study_plan::domain::study_plan::{tables, LessonPlanSynthesizer, StudyPlanReport, Subject};
use study_plan::domain::user::{LearningStyle, UserProfile};
use study_plan::ports::{ExportFormat, PlanExporter};
use tempfile::TempDir;

// =============================================================================
// Test Infrastructure
// =============================================================================

fn handler() -> GenerateStudyPlanHandler {
    GenerateStudyPlanHandler::new(Arc::new(FixedClock::new(2026)), &EngineConfig::default())
}

fn command(name: &str, dob: &str, style: &str, subject: &str, interests: &str) -> GenerateStudyPlanCommand {
    GenerateStudyPlanCommand {
        name: name.to_string(),
        date_of_birth: dob.to_string(),
        learning_style: style.to_string(),
        subject: Some(subject.to_string()),
        interests: interests.to_string(),
    }
}

// =============================================================================
// Engine properties
// =============================================================================

#[test]
fn reduce_reference_values() {
    assert_eq!(reduce(0), 0);
    assert_eq!(reduce(9), 9);
    assert_eq!(reduce(19), 1);
    assert_eq!(reduce(29), 11);
}

#[test]
fn name_number_reference_values() {
    assert_eq!(name_number("Eve", false), name_number("eve", false));
    assert_eq!(name_number("EVE", false), name_number("eve", false));
    assert_eq!(name_number("Jo-Anne!", false), name_number("JoAnne", false));
}

#[test]
fn date_reference_values() {
    assert_eq!(life_path(&BirthDate::parse("1990-05-15").unwrap()), 3);
    assert_eq!(zodiac_sign(&BirthDate::parse("2000-01-19").unwrap()), ZodiacSign::Capricorn);
    assert_eq!(zodiac_sign(&BirthDate::parse("2000-01-20").unwrap()), ZodiacSign::Aquarius);
    assert_eq!(chinese_zodiac(&BirthDate::parse("2000-01-01").unwrap()), ChineseZodiac::Dragon);
}

#[test]
fn compute_profile_twice_gives_same_result() {
    let user = UserProfile::new(
        "Grace Hopper",
        BirthDate::parse("1906-12-09").unwrap(),
        LearningStyle::ReadingWriting,
        "",
    );
    let calculator = ProfileCalculator::default();
    assert_eq!(
        calculator.compute_profile(&user, 2026),
        calculator.compute_profile(&user, 2026)
    );
}

// =============================================================================
// End-to-end
// =============================================================================

#[test]
fn john_doe_end_to_end() {
    let result = handler()
        .handle(command("John Doe", "1985-07-04", "Visual", "SPI: Physics", ""))
        .unwrap();

    assert_eq!(result.plan.topic_label, "Core Concepts of SPI: Physics");
    let expected: Vec<String> = tables::activities(Subject::SpiPhysics, LearningStyle::Visual)
        .iter()
        .map(|a| a.to_string())
        .collect();
    assert_eq!(result.plan.activities, expected);
}

#[test]
fn handler_matches_direct_engine_calls() {
    let result = handler()
        .handle(command("Jo-Anne Smith", "1992-11-29", "reading-writing", "ob-gyn", "Board Prep"))
        .unwrap();

    let user = UserProfile::new(
        "Jo-Anne Smith",
        BirthDate::parse("1992-11-29").unwrap(),
        LearningStyle::ReadingWriting,
        "Board Prep",
    );
    let profile = ProfileCalculator::default().compute_profile(&user, 2026);
    let plan = LessonPlanSynthesizer::synthesize(&user, &profile, Subject::ObGyn);

    assert_eq!(result.user, user);
    assert_eq!(result.profile, profile);
    assert_eq!(result.plan, plan);
    assert_eq!(result.plan.topic_label, "Board Prep in Ob/Gyn");
}

#[test]
fn every_subject_and_style_produces_a_plan() {
    let handler = handler();
    for subject in Subject::ALL {
        for style in LearningStyle::ALL {
            let result = handler
                .handle(command("Alex Rivera", "2001-03-21", style.label(), subject.label(), ""))
                .unwrap();
            assert_eq!(result.plan.subject, subject);
            assert!(!result.plan.activities.is_empty());
            assert!(result.plan.learning_style_insight.contains(style.label()));
        }
    }
}

#[test]
fn invalid_input_is_rejected_before_calculation() {
    let handler = handler();
    assert!(handler.handle(command("", "1985-07-04", "Visual", "SPI: Physics", "")).is_err());
    assert!(handler.handle(command("John", "1985-02-30", "Visual", "SPI: Physics", "")).is_err());
    assert!(handler.handle(command("John", "1985-07-04", "Smell", "SPI: Physics", "")).is_err());
    assert!(handler.handle(command("John", "1985-07-04", "Visual", "Dentistry", "")).is_err());
}

// =============================================================================
// Export
// =============================================================================

#[test]
fn exports_in_every_format() {
    let dir = TempDir::new().unwrap();
    let report: StudyPlanReport = handler()
        .handle(command("John Doe", "1985-07-04", "Auditory", "SPI: Artifacts", "Reverb"))
        .unwrap()
        .into_report();

    for format in ExportFormat::ALL {
        let path = dir.path().join(format!("plan.{}", format.extension()));
        let written = FilePlanExporter::new(&path).export(&report, format).unwrap();
        let content = fs::read_to_string(&written).unwrap();
        assert!(content.contains("Reverb in SPI: Artifacts"), "{}", format);
    }

    let json = fs::read_to_string(dir.path().join("plan.json")).unwrap();
    let parsed: StudyPlanReport = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, report);
}
