//! Study plan engine configuration

use serde::{Deserialize, Deserializer};
use std::fmt::Display;
use std::str::FromStr;

use super::error::ValidationError;
use crate::domain::numerology::ZeroNumberPolicy;
use crate::domain::study_plan::Subject;

/// Engine configuration
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct EngineConfig {
    /// How name numbers that sum to 0 are reported
    #[serde(default)]
    pub zero_number_policy: ZeroNumberPolicy,

    /// Subject used when a request does not name one
    #[serde(default, deserialize_with = "deserialize_from_label")]
    pub default_subject: Subject,

    /// Pin the personal-year calculation to this year instead of the clock
    #[serde(default)]
    pub fixed_year: Option<i32>,
}

impl EngineConfig {
    /// Validate engine configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(year) = self.fixed_year {
            if !(1..=9999).contains(&year) {
                return Err(ValidationError::InvalidFixedYear(year));
            }
        }
        Ok(())
    }

    /// Overrides `fixed_year` when `year` is set, then revalidates.
    pub fn with_fixed_year(mut self, year: Option<i32>) -> Result<Self, ValidationError> {
        if year.is_some() {
            self.fixed_year = year;
        }
        self.validate()?;
        Ok(self)
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            zero_number_policy: ZeroNumberPolicy::default(),
            default_subject: Subject::default(),
            fixed_year: None,
        }
    }
}

/// Accepts any label form `FromStr` understands, e.g. `spi-physics`.
fn deserialize_from_label<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: Display,
{
    let raw = String::deserialize(deserializer)?;
    raw.parse().map_err(serde::de::Error::custom)
}
