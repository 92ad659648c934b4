//! Numerology profile calculation.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::name_number::{name_number, ZeroNumberPolicy};
use super::reduction::reduce;
use super::zodiac::{chinese_zodiac, zodiac_sign, ChineseZodiac, ZodiacSign};
use crate::domain::foundation::BirthDate;
use crate::domain::user::UserProfile;

/// Profile derived from a name and birth date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumerologyProfile {
    pub life_path_number: u32,
    /// From every letter of the full name.
    pub destiny_number: u32,
    /// From the vowels of the full name.
    pub soul_urge_number: u32,
    pub zodiac_sign: ZodiacSign,
    pub chinese_zodiac_sign: ChineseZodiac,
    /// Depends on the year the profile was computed in.
    pub personal_year_number: u32,
}

/// Life path: year, month and day are reduced separately, then their sum.
///
/// This differs from reducing the digit sum of the whole date.
pub fn life_path(date: &BirthDate) -> u32 {
    let year = reduce(u64::from(date.year().unsigned_abs()));
    let month = reduce(u64::from(date.month()));
    let day = reduce(u64::from(date.day()));
    reduce(u64::from(year + month + day))
}

/// Personal year: birth day and month recombined with `current_year`.
pub fn personal_year(date: &BirthDate, current_year: i32) -> u32 {
    let day = reduce(u64::from(date.day()));
    let month = reduce(u64::from(date.month()));
    let year = reduce(u64::from(current_year.unsigned_abs()));
    reduce(u64::from(day + month + year))
}

/// Computes numerology profiles.
///
/// Stateless apart from the zero-number policy; safe to share across threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProfileCalculator {
    zero_number_policy: ZeroNumberPolicy,
}

impl ProfileCalculator {
    pub fn new(zero_number_policy: ZeroNumberPolicy) -> Self {
        Self { zero_number_policy }
    }

    /// Computes the full profile for `user`.
    ///
    /// `current_year` feeds the personal year number and must be read from
    /// the clock at call time; the profile should not be cached across years.
    pub fn compute_profile(&self, user: &UserProfile, current_year: i32) -> NumerologyProfile {
        let date = &user.date_of_birth;
        let profile = NumerologyProfile {
            life_path_number: life_path(date),
            destiny_number: self.zero_number_policy.apply(name_number(&user.name, false)),
            soul_urge_number: self.zero_number_policy.apply(name_number(&user.name, true)),
            zodiac_sign: zodiac_sign(date),
            chinese_zodiac_sign: chinese_zodiac(date),
            personal_year_number: personal_year(date, current_year),
        };

        debug!(
            life_path = profile.life_path_number,
            destiny = profile.destiny_number,
            soul_urge = profile.soul_urge_number,
            zodiac = %profile.zodiac_sign,
            chinese_zodiac = %profile.chinese_zodiac_sign,
            personal_year = profile.personal_year_number,
            "Computed numerology profile"
        );

        profile
    }
}
