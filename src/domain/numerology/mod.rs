//! Numerology module - Deterministic profile calculation.
//!
//! Derives life path, destiny, soul urge and personal year numbers plus the
//! tropical and Chinese zodiac signs from a name and a birth date.
//!
//! # Domain Invariants
//!
//! 1. Date-derived numbers are always in {1..9, 11, 22, 33}
//! 2. Reduction never continues past a master number (11, 22, 33)
//! 3. Name numbers may be 0 for names without qualifying letters;
//!    `ZeroNumberPolicy` decides how that is reported
//! 4. Everything except the personal year is a pure function of the input

mod name_number;
mod profile;
mod reduction;
mod zodiac;

pub use name_number::{letter_value, name_number, ZeroNumberPolicy};
pub use profile::{life_path, personal_year, NumerologyProfile, ProfileCalculator};
pub use reduction::{
    digit_sum, is_core_number, is_master_number, reduce, CORE_NUMBERS, MASTER_NUMBERS,
};
pub use zodiac::{chinese_zodiac, zodiac_sign, ChineseZodiac, ZodiacSign};
