//! Application layer - Commands and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! It owns input validation; the domain functions below it are total.

pub mod handlers;

pub use handlers::{GenerateStudyPlanCommand, GenerateStudyPlanHandler, GenerateStudyPlanResult};
