//! Tropical and Chinese zodiac lookups.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::BirthDate;

/// Tropical sun sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ZodiacSign {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

/// Sign start dates as (month, day), in calendar order.
///
/// A date belongs to the last entry whose start is on or before it;
/// dates before Jan 20 wrap to Capricorn.
const SIGN_STARTS: [(u32, u32, ZodiacSign); 12] = [
    (1, 20, ZodiacSign::Aquarius),
    (2, 19, ZodiacSign::Pisces),
    (3, 21, ZodiacSign::Aries),
    (4, 20, ZodiacSign::Taurus),
    (5, 21, ZodiacSign::Gemini),
    (6, 21, ZodiacSign::Cancer),
    (7, 23, ZodiacSign::Leo),
    (8, 23, ZodiacSign::Virgo),
    (9, 23, ZodiacSign::Libra),
    (10, 23, ZodiacSign::Scorpio),
    (11, 22, ZodiacSign::Sagittarius),
    (12, 22, ZodiacSign::Capricorn),
];

impl ZodiacSign {
    /// Sign for a (month, day) pair.
    pub fn from_month_day(month: u32, day: u32) -> Self {
        SIGN_STARTS
            .iter()
            .rev()
            .find(|(m, d, _)| (month, day) >= (*m, *d))
            .map(|(_, _, sign)| *sign)
            .unwrap_or(ZodiacSign::Capricorn)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Aries => "Aries",
            Self::Taurus => "Taurus",
            Self::Gemini => "Gemini",
            Self::Cancer => "Cancer",
            Self::Leo => "Leo",
            Self::Virgo => "Virgo",
            Self::Libra => "Libra",
            Self::Scorpio => "Scorpio",
            Self::Sagittarius => "Sagittarius",
            Self::Capricorn => "Capricorn",
            Self::Aquarius => "Aquarius",
            Self::Pisces => "Pisces",
        }
    }
}

impl fmt::Display for ZodiacSign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Chinese zodiac animal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChineseZodiac {
    Rat,
    Ox,
    Tiger,
    Rabbit,
    Dragon,
    Snake,
    Horse,
    Goat,
    Monkey,
    Rooster,
    Dog,
    Pig,
}

impl ChineseZodiac {
    /// The twelve animals in cycle order, starting at Rat.
    pub const CYCLE: [ChineseZodiac; 12] = [
        ChineseZodiac::Rat,
        ChineseZodiac::Ox,
        ChineseZodiac::Tiger,
        ChineseZodiac::Rabbit,
        ChineseZodiac::Dragon,
        ChineseZodiac::Snake,
        ChineseZodiac::Horse,
        ChineseZodiac::Goat,
        ChineseZodiac::Monkey,
        ChineseZodiac::Rooster,
        ChineseZodiac::Dog,
        ChineseZodiac::Pig,
    ];

    /// Animal for a calendar year.
    ///
    /// Uses the calendar year only; January and early February births are
    /// not moved to the previous lunar year.
    pub fn from_year(year: i32) -> Self {
        let index = (i64::from(year) - 4).rem_euclid(12) as usize;
        Self::CYCLE[index]
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Rat => "Rat",
            Self::Ox => "Ox",
            Self::Tiger => "Tiger",
            Self::Rabbit => "Rabbit",
            Self::Dragon => "Dragon",
            Self::Snake => "Snake",
            Self::Horse => "Horse",
            Self::Goat => "Goat",
            Self::Monkey => "Monkey",
            Self::Rooster => "Rooster",
            Self::Dog => "Dog",
            Self::Pig => "Pig",
        }
    }
}

impl fmt::Display for ChineseZodiac {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Tropical sign of a birth date.
pub fn zodiac_sign(date: &BirthDate) -> ZodiacSign {
    ZodiacSign::from_month_day(date.month(), date.day())
}

/// Chinese zodiac animal of a birth date's calendar year.
pub fn chinese_zodiac(date: &BirthDate) -> ChineseZodiac {
    ChineseZodiac::from_year(date.year())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, NaiveDate};
    use proptest::prelude::*;

    fn date(s: &str) -> BirthDate {
        BirthDate::parse(s).unwrap()
    }

    #[test]
    fn capricorn_aquarius_boundary() {
        assert_eq!(zodiac_sign(&date("2000-01-19")), ZodiacSign::Capricorn);
        assert_eq!(zodiac_sign(&date("2000-01-20")), ZodiacSign::Aquarius);
    }

    #[test]
    fn every_sign_boundary_matches_tropical_table() {
        let cases = [
            ("2001-02-18", ZodiacSign::Aquarius),
            ("2001-02-19", ZodiacSign::Pisces),
            ("2001-03-20", ZodiacSign::Pisces),
            ("2001-03-21", ZodiacSign::Aries),
            ("2001-04-19", ZodiacSign::Aries),
            ("2001-04-20", ZodiacSign::Taurus),
            ("2001-05-20", ZodiacSign::Taurus),
            ("2001-05-21", ZodiacSign::Gemini),
            ("2001-06-20", ZodiacSign::Gemini),
            ("2001-06-21", ZodiacSign::Cancer),
            ("2001-07-22", ZodiacSign::Cancer),
            ("2001-07-23", ZodiacSign::Leo),
            ("2001-08-22", ZodiacSign::Leo),
            ("2001-08-23", ZodiacSign::Virgo),
            ("2001-09-22", ZodiacSign::Virgo),
            ("2001-09-23", ZodiacSign::Libra),
            ("2001-10-22", ZodiacSign::Libra),
            ("2001-10-23", ZodiacSign::Scorpio),
            ("2001-11-21", ZodiacSign::Scorpio),
            ("2001-11-22", ZodiacSign::Sagittarius),
            ("2001-12-21", ZodiacSign::Sagittarius),
            ("2001-12-22", ZodiacSign::Capricorn),
            ("2001-12-31", ZodiacSign::Capricorn),
            ("2001-01-01", ZodiacSign::Capricorn),
        ];
        for (input, expected) in cases {
            assert_eq!(zodiac_sign(&date(input)), expected, "{}", input);
        }
    }

    #[test]
    fn chinese_zodiac_follows_calendar_year() {
        assert_eq!(chinese_zodiac(&date("2000-01-01")), ChineseZodiac::Dragon);
        assert_eq!(chinese_zodiac(&date("1985-07-04")), ChineseZodiac::Ox);
        assert_eq!(chinese_zodiac(&date("2020-12-31")), ChineseZodiac::Rat);
        assert_eq!(chinese_zodiac(&date("2015-06-01")), ChineseZodiac::Goat);
    }

    #[test]
    fn chinese_zodiac_ignores_lunar_new_year() {
        // Lunar new year 2000 fell on Feb 5; the calendar year still decides.
        assert_eq!(chinese_zodiac(&date("2000-02-04")), ChineseZodiac::Dragon);
    }

    #[test]
    fn chinese_zodiac_handles_years_before_four() {
        assert_eq!(ChineseZodiac::from_year(4), ChineseZodiac::Rat);
        assert_eq!(ChineseZodiac::from_year(3), ChineseZodiac::Pig);
        assert_eq!(ChineseZodiac::from_year(1), ChineseZodiac::Rooster);
    }

    #[test]
    fn labels_display() {
        assert_eq!(ZodiacSign::Sagittarius.to_string(), "Sagittarius");
        assert_eq!(ChineseZodiac::Rooster.to_string(), "Rooster");
    }

    #[test]
    fn every_day_of_a_leap_year_has_exactly_one_sign() {
        let mut day = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let mut previous = ZodiacSign::from_month_day(12, 31);
        let mut changes = 0;
        while day.year() == 2024 {
            let sign = ZodiacSign::from_month_day(day.month(), day.day());
            if sign != previous {
                changes += 1;
                previous = sign;
            }
            day = day.succ_opt().unwrap();
        }
        // Every sign starts exactly once over the year.
        assert_eq!(changes, 12);
    }

    proptest! {
        #[test]
        fn chinese_zodiac_repeats_every_twelve_years(year in 1i32..9988) {
            prop_assert_eq!(ChineseZodiac::from_year(year), ChineseZodiac::from_year(year + 12));
        }
    }
}
