//! Study Plan module - Rule-based lesson plan synthesis.
//!
//! Maps a learner's profile, learning style and chosen subject to a
//! structured lesson plan through three table lookups and two templated
//! insight sentences.
//!
//! # Components
//!
//! - `Subject` - The closed set of study subjects
//! - `tables` - Teaching styles, learning formats and the activity matrix
//! - `LessonPlanSynthesizer` - Pure plan construction
//! - `StudyPlanReport` - Profile plus plan, renderable as text
//!
//! # Design Philosophy
//!
//! All functions are pure. Tables are immutable statics; the subject and
//! learning-style tables are exhaustive matches so a missing cell is a
//! compile error rather than a runtime miss.

mod lesson_plan;
mod report;
mod subject;
pub mod tables;

pub use lesson_plan::{LessonPlan, LessonPlanSynthesizer};
pub use report::StudyPlanReport;
pub use subject::Subject;
pub use tables::{LearningFormat, TeachingStyle};
