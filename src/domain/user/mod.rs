//! User module - The learner's intake profile.
//!
//! Holds the raw facts a learner supplies before a plan is generated:
//! name, birth date, learning style and free-text interests.

mod learning_style;
mod profile;

pub use learning_style::LearningStyle;
pub use profile::UserProfile;
