//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (birth date, label parsing, errors)
//! - `user` - The learner's intake profile and learning style
//! - `numerology` - Deterministic numerology and zodiac profile calculation
//! - `study_plan` - Lesson plan synthesis from static lookup tables

pub mod foundation;
pub mod numerology;
pub mod study_plan;
pub mod user;
