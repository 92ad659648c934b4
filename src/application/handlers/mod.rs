//! Command handlers.

pub mod study_plan;

pub use study_plan::{GenerateStudyPlanCommand, GenerateStudyPlanHandler, GenerateStudyPlanResult};
