//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, label parsing and error types that form the
//! vocabulary of the study plan domain.

mod birth_date;
mod errors;
mod label;

pub use birth_date::BirthDate;
pub use errors::{DomainError, ErrorCode, ValidationError};
pub use label::{normalize_label, parse_label};
