//! Personas: the people a forecast is written for.

use crate::zodiac::ZodiacSign;
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Persona {
    pub name: String,
    pub birth_date: NaiveDate,
    /// Free-form local time of birth, e.g. "14:30".
    #[serde(default)]
    pub birth_time: Option<String>,
    pub birth_place: String,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub family_status: Option<String>,
    #[serde(default)]
    pub has_children: bool,
    #[serde(default)]
    pub interests: Vec<String>,
}

impl Persona {
    /// Sun sign from the birthday table.
    pub fn zodiac_sign(&self) -> Option<ZodiacSign> {
        sun_sign_for_birthday(self.birth_date.month(), self.birth_date.day())
    }

    /// Difference in calendar years, not birthday-aware.
    pub fn age_on(&self, today: NaiveDate) -> i32 {
        today.year() - self.birth_date.year()
    }
}

/// Split a comma-separated interest list, trimming and dropping blanks.
pub fn parse_interests(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

const DAYS_IN_MONTH: [u32; 12] = [31, 29, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

// (month, first day) each sign starts on, Capricorn last since it wraps the year end.
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

/// Conventional sun sign for a birthday. `None` for impossible month/day
/// pairs; February 29 is accepted.
pub fn sun_sign_for_birthday(month: u32, day: u32) -> Option<ZodiacSign> {
    if !(1..=12).contains(&month) || day == 0 || day > DAYS_IN_MONTH[month as usize - 1] {
        return None;
    }
    let sign = SIGN_STARTS
        .iter()
        .rev()
        .find(|(m, d, _)| (month, day) >= (*m, *d))
        .map(|(_, _, sign)| *sign)
        .unwrap_or(ZodiacSign::Capricorn);
    Some(sign)
}
