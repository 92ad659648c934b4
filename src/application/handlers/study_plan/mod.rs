//! Study plan command handlers.

mod generate_study_plan;

pub use generate_study_plan::{
    GenerateStudyPlanCommand, GenerateStudyPlanHandler, GenerateStudyPlanResult,
};
