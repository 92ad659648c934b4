//! Name numbers (destiny and soul urge) from the Pythagorean letter table.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::reduction::reduce;

const VOWELS: [char; 5] = ['a', 'e', 'i', 'o', 'u'];

/// How a name-number sum of zero is reported.
///
/// A name with no qualifying letters (for example the soul urge of an
/// all-consonant name) sums to 0, which is outside the core number range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ZeroNumberPolicy {
    /// Report 0 as-is.
    #[default]
    Propagate,
    /// Report 1 instead of 0.
    ClampToOne,
}

impl ZeroNumberPolicy {
    pub fn apply(self, number: u32) -> u32 {
        match (self, number) {
            (ZeroNumberPolicy::ClampToOne, 0) => 1,
            _ => number,
        }
    }
}

impl fmt::Display for ZeroNumberPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Propagate => write!(f, "propagate"),
            Self::ClampToOne => write!(f, "clamp_to_one"),
        }
    }
}

/// Pythagorean value of a lower-case ASCII letter (a,j,s = 1 ... i,r = 9).
pub fn letter_value(letter: char) -> Option<u32> {
    if letter.is_ascii_lowercase() {
        Some(u32::from(letter as u8 - b'a') % 9 + 1)
    } else {
        None
    }
}

fn is_vowel(letter: char) -> bool {
    VOWELS.contains(&letter)
}

/// Reduced letter sum of `name`.
///
/// Anything that is not one of the 26 basic Latin letters is dropped,
/// including digits, punctuation and accented letters. With `vowels_only`
/// consonants are skipped entirely.
pub fn name_number(name: &str, vowels_only: bool) -> u32 {
    let sum: u64 = name
        .chars()
        .map(|c| c.to_ascii_lowercase())
        .filter(|c| !vowels_only || is_vowel(*c))
        .filter_map(letter_value)
        .map(u64::from)
        .sum();
    reduce(sum)
}
