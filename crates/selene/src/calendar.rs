//! Civil calendar dates and Julian day numbers.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Julian day of the J2000.0 epoch (2000-01-01 12h TT).
pub const J2000: f64 = 2_451_545.0;

/// A civil (Gregorian) date. Components are not validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CalendarDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl CalendarDate {
    pub fn new(year: i32, month: u32, day: u32) -> Self {
        Self { year, month, day }
    }

    /// Integer Julian day number of this date.
    pub fn julian_day(&self) -> i64 {
        let month = i64::from(self.month);
        let a = (14 - month).div_euclid(12);
        let y = i64::from(self.year) - a;
        let m = month + 12 * a - 3;
        i64::from(self.day)
            + (153 * m + 2).div_euclid(5)
            + 365 * y
            + y.div_euclid(4)
            - y.div_euclid(100)
            + y.div_euclid(400)
            + 1_721_119
    }

    /// Days elapsed since J2000.0; negative before the epoch.
    pub fn days_since_j2000(&self) -> f64 {
        self.julian_day() as f64 - J2000
    }
}

impl From<NaiveDate> for CalendarDate {
    fn from(date: NaiveDate) -> Self {
        Self::new(date.year(), date.month(), date.day())
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn j2000_epoch_day() {
        assert_eq!(CalendarDate::new(2000, 1, 1).julian_day(), 2_451_545);
        assert_eq!(CalendarDate::new(2000, 1, 1).days_since_j2000(), 0.0);
    }

    #[test]
    fn leap_day_is_consecutive() {
        let feb29 = CalendarDate::new(2000, 2, 29).julian_day();
        let mar01 = CalendarDate::new(2000, 3, 1).julian_day();
        assert_eq!(mar01 - feb29, 1);
    }

    #[test]
    fn known_dates() {
        // Sputnik launch and the Gregorian reform.
        assert_eq!(CalendarDate::new(1957, 10, 4).julian_day(), 2_436_116);
        assert_eq!(CalendarDate::new(1582, 10, 15).julian_day(), 2_299_161);
    }

    #[test]
    fn pre_epoch_is_negative() {
        assert!(CalendarDate::new(1999, 12, 31).days_since_j2000() < 0.0);
    }

    #[test]
    fn from_naive_date_and_display() {
        let nd = NaiveDate::from_ymd_opt(1987, 3, 9).unwrap();
        let date = CalendarDate::from(nd);
        assert_eq!(date, CalendarDate::new(1987, 3, 9));
        assert_eq!(date.to_string(), "1987-03-09");
    }
}
