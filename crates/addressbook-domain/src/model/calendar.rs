//! YearMonth - Calendar arithmetic for day-of-month checks
//!
//! Appointments are only built for dates that exist. A day number has to be
//! checked against the length of its month, and February depends on the year.

use chrono::NaiveDate;

/// A month of a specific year
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct YearMonth {
    year: i32,
    month: u32,
}

/// Gregorian leap year: every 4th year, except centuries not divisible by 400
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

impl YearMonth {
    /// Create a YearMonth. Returns `None` unless `month` is in 1..=12.
    pub fn new(year: i32, month: u32) -> Option<Self> {
        (1..=12).contains(&month).then_some(Self { year, month })
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn is_leap_year(&self) -> bool {
        is_leap_year(self.year)
    }

    /// Number of days in this month
    pub fn length_of_month(&self) -> u32 {
        match self.month {
            4 | 6 | 9 | 11 => 30,
            2 if self.is_leap_year() => 29,
            2 => 28,
            _ => 31,
        }
    }

    /// True if `day` exists in this month
    pub fn is_valid_day(&self, day: u32) -> bool {
        (1..=self.length_of_month()).contains(&day)
    }

    /// The date for `day` of this month, if that day exists and the year is
    /// inside chrono's supported range
    pub fn at_day(&self, day: u32) -> Option<NaiveDate> {
        if !self.is_valid_day(day) {
            return None;
        }
        NaiveDate::from_ymd_opt(self.year, self.month, day)
    }
}

impl core::fmt::Display for YearMonth {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}
