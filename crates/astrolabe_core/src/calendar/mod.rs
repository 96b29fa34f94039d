//! Proleptic Gregorian calendar arithmetic.
//!
//! # Responsibility
//! - Convert between day-counts and `(year, month, day)` triples.
//! - Answer leap-year, month-length and weekday questions.
//!
//! # Invariants
//! - Day `0` is `0001-01-01`; years use astronomical numbering (year `0`
//!   exists and is 1 BCE).
//! - Conversions run in `i64`, so they are exact for every `i32` day-count
//!   and every `i32` year. Range checks belong to callers.

use serde::{Deserialize, Serialize};

/// Day-count of `1970-01-01`.
pub const UNIX_EPOCH_DAYS: i32 = 719_162;
/// Seconds in one civil day (no leap seconds).
pub const SECONDS_PER_DAY: i64 = 86_400;

// Offset between the `0000-03-01` anchor used below and `0001-01-01`.
const MARCH_ANCHOR_OFFSET: i64 = 306;
const DAYS_PER_ERA: i64 = 146_097;

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Returns true when `year` has 366 days.
pub fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Returns the length of `month` in `year`, or `0` when `month` is not in
/// `1..=12`.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 0,
    }
}

/// Returns the number of days in `year`.
pub fn days_in_year(year: i32) -> u32 {
    if is_leap_year(year) {
        366
    } else {
        365
    }
}

/// Converts a calendar triple to a day-count.
///
/// The triple is not validated; `month` must be in `1..=12` and `day` in
/// `1..=31` for the result to be meaningful.
pub fn days_from_civil(year: i64, month: u32, day: u32) -> i64 {
    // Shift the year start to March so the leap day is the last day of the
    // shifted year.
    let year = if month <= 2 { year - 1 } else { year };
    let era = year.div_euclid(400);
    let year_of_era = year - era * 400;
    let shifted_month = i64::from((month + 9) % 12);
    let day_of_year = (153 * shifted_month + 2) / 5 + i64::from(day) - 1;
    let day_of_era = year_of_era * 365 + year_of_era / 4 - year_of_era / 100 + day_of_year;
    era * DAYS_PER_ERA + day_of_era - MARCH_ANCHOR_OFFSET
}

/// Converts a day-count to a calendar triple.
pub fn civil_from_days(days: i64) -> (i64, u32, u32) {
    let anchored = days + MARCH_ANCHOR_OFFSET;
    let era = anchored.div_euclid(DAYS_PER_ERA);
    let day_of_era = anchored - era * DAYS_PER_ERA;
    let year_of_era =
        (day_of_era - day_of_era / 1460 + day_of_era / 36_524 - day_of_era / 146_096) / 365;
    let day_of_year = day_of_era - (365 * year_of_era + year_of_era / 4 - year_of_era / 100);
    let shifted_month = (5 * day_of_year + 2) / 153;
    let day = (day_of_year - (153 * shifted_month + 2) / 5 + 1) as u32;
    let month = (if shifted_month < 10 {
        shifted_month + 3
    } else {
        shifted_month - 9
    }) as u32;
    let year = year_of_era + era * 400 + i64::from(month <= 2);
    (year, month, day)
}

/// Full English month name for `month` in `1..=12`.
pub fn month_name(month: u32) -> &'static str {
    let index = (month.clamp(1, 12) - 1) as usize;
    MONTH_NAMES[index]
}

/// Day of the week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    const ALL: [Weekday; 7] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
        Weekday::Sunday,
    ];

    /// Weekday of a day-count. `0001-01-01` is a Monday.
    pub fn from_days(days: i32) -> Self {
        Self::ALL[days.rem_euclid(7) as usize]
    }

    /// ISO number, Monday = 1 through Sunday = 7.
    pub fn number_from_monday(self) -> u32 {
        self as u32 + 1
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Monday => "Monday",
            Self::Tuesday => "Tuesday",
            Self::Wednesday => "Wednesday",
            Self::Thursday => "Thursday",
            Self::Friday => "Friday",
            Self::Saturday => "Saturday",
            Self::Sunday => "Sunday",
        }
    }

    /// Iterates Monday through Sunday.
    pub fn all() -> impl Iterator<Item = Weekday> {
        Self::ALL.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::{
        civil_from_days, days_from_civil, days_in_month, days_in_year, is_leap_year, month_name,
        Weekday, UNIX_EPOCH_DAYS,
    };

    #[test]
    fn anchors_match_known_days() {
        assert_eq!(days_from_civil(1, 1, 1), 0);
        assert_eq!(days_from_civil(1970, 1, 1), i64::from(UNIX_EPOCH_DAYS));
        assert_eq!(days_from_civil(0, 12, 31), -1);
        assert_eq!(civil_from_days(-1), (0, 12, 31));
        assert_eq!(civil_from_days(i64::from(UNIX_EPOCH_DAYS)), (1970, 1, 1));
    }

    #[test]
    fn consecutive_days_walk_the_calendar() {
        let mut expected = (-1200_i64, 1_u32, 1_u32);
        let start = days_from_civil(expected.0, expected.1, expected.2);
        let end = days_from_civil(2800, 12, 31);
        for days in start..=end {
            assert_eq!(civil_from_days(days), expected, "day-count {days}");
            assert_eq!(days_from_civil(expected.0, expected.1, expected.2), days);

            let (year, month, day) = expected;
            expected = if day < days_in_month(year as i32, month) {
                (year, month, day + 1)
            } else if month < 12 {
                (year, month + 1, 1)
            } else {
                (year + 1, 1, 1)
            };
        }
    }

    #[test]
    fn extreme_day_counts_stay_exact() {
        for days in [i64::from(i32::MIN), i64::from(i32::MAX)] {
            let (year, month, day) = civil_from_days(days);
            assert_eq!(days_from_civil(year, month, day), days);
        }
    }

    #[test]
    fn leap_rule_handles_centuries_and_negative_years() {
        assert!(is_leap_year(2024));
        assert!(is_leap_year(2000));
        assert!(is_leap_year(0));
        assert!(is_leap_year(-4));
        assert!(!is_leap_year(2023));
        assert!(!is_leap_year(1900));
        assert!(!is_leap_year(-100));
        assert_eq!(days_in_year(2000), 366);
        assert_eq!(days_in_year(1900), 365);
    }

    #[test]
    fn month_lengths() {
        assert_eq!(days_in_month(2024, 2), 29);
        assert_eq!(days_in_month(2023, 2), 28);
        assert_eq!(days_in_month(2023, 4), 30);
        assert_eq!(days_in_month(2023, 12), 31);
        assert_eq!(days_in_month(2023, 0), 0);
        assert_eq!(days_in_month(2023, 13), 0);
    }

    #[test]
    fn weekday_of_known_dates() {
        assert_eq!(Weekday::from_days(0), Weekday::Monday);
        assert_eq!(Weekday::from_days(UNIX_EPOCH_DAYS), Weekday::Thursday);
        assert_eq!(Weekday::from_days(-1), Weekday::Sunday);
        assert_eq!(Weekday::Sunday.number_from_monday(), 7);
        assert_eq!(Weekday::all().count(), 7);
    }

    #[test]
    fn month_names() {
        assert_eq!(month_name(1), "January");
        assert_eq!(month_name(12), "December");
    }
}
