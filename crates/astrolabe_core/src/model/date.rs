//! Calendar date value.
//!
//! # Responsibility
//! - Own the canonical day-count representation of a date.
//! - Provide construction, field access, field replacement and shifting.
//!
//! # Invariants
//! - Every `Date` value is valid; there is no way to build an invalid one.
//! - The whole `i32` day-count range is representable, so `from_days` is
//!   total and `year()` always fits `i32`.
//! - `set`/`apply` reject a day that does not exist in the target month.
//!   Only `set_clamped`/`apply_clamped` pull it back to the month end.
//!
//! # See also
//! - `crate::calendar` for the underlying arithmetic.

use crate::calendar::{self, Weekday, SECONDS_PER_DAY, UNIX_EPOCH_DAYS};
use crate::clock::{Clock, SystemClock};
use crate::error::{DateError, DateResult};
use crate::format::Pattern;
use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

static ISO_DATE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([+-]?)([0-9]{4,})-([0-9]{2})-([0-9]{2})$").expect("valid iso date regex")
});

/// Calendar field addressed by `get`, `set` and `apply`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DateUnit {
    Year,
    Month,
    Day,
}

/// What to do when a carried-over day does not exist in the target month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DayOverflow {
    Reject,
    Clamp,
}

/// A proleptic Gregorian calendar date.
///
/// Stored as days since `0001-01-01`. Cheap to copy and compare; ordering
/// follows the calendar.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(try_from = "String", into = "String")]
pub struct Date {
    days: i32,
}

impl Date {
    /// Earliest representable date.
    pub const MIN: Date = Date { days: i32::MIN };
    /// Latest representable date.
    pub const MAX: Date = Date { days: i32::MAX };

    /// Current UTC date from the system clock.
    pub fn now() -> Self {
        Self::now_with(&SystemClock)
    }

    /// Current UTC date from `clock`.
    ///
    /// Clock readings past the representable range saturate to
    /// `Date::MIN`/`Date::MAX`.
    pub fn now_with(clock: &impl Clock) -> Self {
        let days = unix_seconds_to_days(clock.unix_seconds());
        let days = days.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32;
        Self { days }
    }

    /// Builds a date from calendar fields.
    ///
    /// # Errors
    /// - `OutOfRange` when `month` is not in `1..=12`, when `day` does not
    ///   exist in that month, or when the date is beyond `Date::MAX`/`MIN`.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> DateResult<Self> {
        if !(1..=12).contains(&month) {
            return Err(DateError::out_of_range(format!(
                "month {month} is outside 1..=12"
            )));
        }
        let max_day = calendar::days_in_month(year, month);
        if day == 0 || day > max_day {
            return Err(DateError::out_of_range(format!(
                "day {day} is outside 1..={max_day} for {year}-{month:02}"
            )));
        }
        let days = calendar::days_from_civil(i64::from(year), month, day);
        Self::from_wide_days(days).map_err(|_| {
            DateError::out_of_range(format!(
                "{year}-{month:02}-{day:02} is outside the representable range"
            ))
        })
    }

    /// Builds the date containing the Unix timestamp `timestamp` (seconds,
    /// UTC). Negative timestamps resolve to days before 1970.
    ///
    /// # Errors
    /// - `OutOfRange` when the day is beyond `Date::MAX`/`MIN`.
    pub fn from_timestamp(timestamp: i64) -> DateResult<Self> {
        Self::from_wide_days(unix_seconds_to_days(timestamp)).map_err(|_| {
            DateError::out_of_range(format!(
                "timestamp {timestamp} is outside the representable range"
            ))
        })
    }

    /// Wraps a raw day-count (days since `0001-01-01`).
    pub fn from_days(days: i32) -> Self {
        Self { days }
    }

    /// Days since `0001-01-01`.
    pub fn as_days(self) -> i32 {
        self.days
    }

    /// Unix timestamp of midnight UTC starting this day.
    pub fn timestamp(self) -> i64 {
        (i64::from(self.days) - i64::from(UNIX_EPOCH_DAYS)) * SECONDS_PER_DAY
    }

    /// Absolute distance in days. Symmetric, zero for equal dates.
    pub fn between(self, other: Date) -> u32 {
        self.days.abs_diff(other.days)
    }

    /// Calendar fields as `(year, month, day)`.
    pub fn ymd(self) -> (i32, u32, u32) {
        let (year, month, day) = calendar::civil_from_days(i64::from(self.days));
        // Every i32 day-count maps into roughly +/-5.9 million years.
        (year as i32, month, day)
    }

    pub fn year(self) -> i32 {
        self.ymd().0
    }

    pub fn month(self) -> u32 {
        self.ymd().1
    }

    pub fn day(self) -> u32 {
        self.ymd().2
    }

    /// Reads one calendar field.
    pub fn get(self, unit: DateUnit) -> i32 {
        let (year, month, day) = self.ymd();
        match unit {
            DateUnit::Year => year,
            DateUnit::Month => month as i32,
            DateUnit::Day => day as i32,
        }
    }

    /// Returns a copy with one field replaced and the others held constant.
    ///
    /// # Errors
    /// - `OutOfRange` when `value` is not valid for `unit`, or when the kept
    ///   day does not exist in the new year/month (e.g. setting February on
    ///   a 31st).
    pub fn set(self, value: i32, unit: DateUnit) -> DateResult<Self> {
        self.replace(value, unit, DayOverflow::Reject)
            .inspect_err(|err| log_rejected("date_set", unit, value, err))
    }

    /// Like [`Date::set`], but a kept day past the end of the new month is
    /// clamped to its last day. An explicit `DateUnit::Day` value is never
    /// clamped.
    pub fn set_clamped(self, value: i32, unit: DateUnit) -> DateResult<Self> {
        self.replace(value, unit, DayOverflow::Clamp)
            .inspect_err(|err| log_rejected("date_set_clamped", unit, value, err))
    }

    /// Shifts the date by `amount` units.
    ///
    /// Month shifts carry into the year. Year and month shifts keep the day
    /// of month.
    ///
    /// # Errors
    /// - `OutOfRange` when the result is beyond `Date::MAX`/`MIN`, or when
    ///   the kept day does not exist in the target month (e.g. Jan 31 plus
    ///   one month, Feb 29 plus one year).
    pub fn apply(self, amount: i32, unit: DateUnit) -> DateResult<Self> {
        self.shift(amount, unit, DayOverflow::Reject)
            .inspect_err(|err| log_rejected("date_apply", unit, amount, err))
    }

    /// Like [`Date::apply`], but a kept day past the end of the target month
    /// is clamped to its last day.
    pub fn apply_clamped(self, amount: i32, unit: DateUnit) -> DateResult<Self> {
        self.shift(amount, unit, DayOverflow::Clamp)
            .inspect_err(|err| log_rejected("date_apply_clamped", unit, amount, err))
    }

    pub fn weekday(self) -> Weekday {
        Weekday::from_days(self.days)
    }

    /// Ordinal day within the year, starting at 1.
    pub fn day_of_year(self) -> u32 {
        let year_start = calendar::days_from_civil(i64::from(self.year()), 1, 1);
        (i64::from(self.days) - year_start + 1) as u32
    }

    pub fn is_leap_year(self) -> bool {
        calendar::is_leap_year(self.year())
    }

    /// Length of this date's month.
    pub fn days_in_month(self) -> u32 {
        let (year, month, _) = self.ymd();
        calendar::days_in_month(year, month)
    }

    /// Renders the date with a pattern; see [`crate::format`] for tokens.
    ///
    /// # Errors
    /// - `InvalidFormat` when the pattern is malformed.
    pub fn format(self, pattern: &str) -> DateResult<String> {
        Ok(Pattern::compile(pattern)?.render(self))
    }

    /// Reads a date from `text` laid out as `pattern`.
    ///
    /// # Errors
    /// - `InvalidFormat` when the pattern is malformed or `text` does not
    ///   match it.
    /// - `OutOfRange` when the fields match but do not form a valid date.
    pub fn parse(text: &str, pattern: &str) -> DateResult<Self> {
        Pattern::compile(pattern)?.parse(text)
    }

    fn from_wide_days(days: i64) -> Result<Self, std::num::TryFromIntError> {
        i32::try_from(days).map(|days| Self { days })
    }

    fn replace(self, value: i32, unit: DateUnit, overflow: DayOverflow) -> DateResult<Self> {
        let (year, month, day) = self.ymd();
        match unit {
            DateUnit::Year => resolve(i64::from(value), month, day, overflow),
            DateUnit::Month => {
                let month = u32::try_from(value)
                    .ok()
                    .filter(|month| (1..=12).contains(month))
                    .ok_or_else(|| {
                        DateError::out_of_range(format!("month {value} is outside 1..=12"))
                    })?;
                resolve(i64::from(year), month, day, overflow)
            }
            DateUnit::Day => {
                let day = u32::try_from(value).map_err(|_| {
                    DateError::out_of_range(format!("day {value} must be positive"))
                })?;
                Self::from_ymd(year, month, day)
            }
        }
    }

    fn shift(self, amount: i32, unit: DateUnit, overflow: DayOverflow) -> DateResult<Self> {
        let (year, month, day) = self.ymd();
        match unit {
            DateUnit::Day => {
                Self::from_wide_days(i64::from(self.days) + i64::from(amount)).map_err(|_| {
                    DateError::out_of_range(format!(
                        "shifting {self} by {amount} days leaves the representable range"
                    ))
                })
            }
            DateUnit::Month => {
                let index = i64::from(year) * 12 + i64::from(month - 1) + i64::from(amount);
                let target_month = (index.rem_euclid(12) + 1) as u32;
                resolve(index.div_euclid(12), target_month, day, overflow)
            }
            DateUnit::Year => resolve(i64::from(year) + i64::from(amount), month, day, overflow),
        }
    }
}

fn resolve(year: i64, month: u32, day: u32, overflow: DayOverflow) -> DateResult<Date> {
    let year = i32::try_from(year).map_err(|_| {
        DateError::out_of_range(format!("year {year} is outside the representable range"))
    })?;
    let day = match overflow {
        DayOverflow::Reject => day,
        DayOverflow::Clamp => day.min(calendar::days_in_month(year, month)),
    };
    Date::from_ymd(year, month, day)
}

fn unix_seconds_to_days(seconds: i64) -> i64 {
    seconds.div_euclid(SECONDS_PER_DAY) + i64::from(UNIX_EPOCH_DAYS)
}

fn log_rejected(event: &str, unit: DateUnit, value: i32, err: &DateError) {
    debug!(
        "event={} module=date status=error unit={:?} value={} kind={:?}",
        event,
        unit,
        value,
        err.kind()
    );
}

impl Display for Date {
    /// ISO-8601 calendar date. Years outside `0..=9999` carry a sign.
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let (year, month, day) = self.ymd();
        if (0..=9999).contains(&year) {
            write!(f, "{year:04}-{month:02}-{day:02}")
        } else if year < 0 {
            write!(f, "-{:04}-{month:02}-{day:02}", year.unsigned_abs())
        } else {
            write!(f, "+{year}-{month:02}-{day:02}")
        }
    }
}

impl FromStr for Date {
    type Err = DateError;

    /// Parses `YYYY-MM-DD`, with an optional sign on the year. Only ASCII
    /// digits are accepted and surrounding whitespace is rejected.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let captures = ISO_DATE_RE.captures(value).ok_or_else(|| {
            DateError::invalid_format(format!("`{value}` is not a YYYY-MM-DD date"))
        })?;
        let negative = &captures[1] == "-";
        let magnitude = captures[2].parse::<i64>().map_err(|_| {
            DateError::out_of_range(format!("year `{}` is too large", &captures[2]))
        })?;
        let year = if negative { -magnitude } else { magnitude };
        let year = i32::try_from(year).map_err(|_| {
            DateError::out_of_range(format!("year {year} is outside the representable range"))
        })?;
        // Two ASCII digits always fit.
        let month = captures[3].parse::<u32>().unwrap_or(0);
        let day = captures[4].parse::<u32>().unwrap_or(0);
        Date::from_ymd(year, month, day)
    }
}

impl TryFrom<String> for Date {
    type Error = DateError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Date> for String {
    fn from(value: Date) -> Self {
        value.to_string()
    }
}

impl Display for DateUnit {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Self::Year => "year",
            Self::Month => "month",
            Self::Day => "day",
        };
        f.write_str(label)
    }
}

impl FromStr for DateUnit {
    type Err = DateError;

    /// Accepts `year|month|day`, plural forms and single-letter `y|m|d`.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "y" | "year" | "years" => Ok(Self::Year),
            "m" | "month" | "months" => Ok(Self::Month),
            "d" | "day" | "days" => Ok(Self::Day),
            other => Err(DateError::invalid_format(format!(
                "unsupported date unit `{other}`; expected year|month|day"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Date, DateUnit};
    use crate::calendar::UNIX_EPOCH_DAYS;
    use crate::clock::FixedClock;
    use crate::error::DateErrorKind;

    fn ymd(year: i32, month: u32, day: u32) -> Date {
        Date::from_ymd(year, month, day).expect("valid test date")
    }

    #[test]
    fn default_is_first_day_of_common_era() {
        assert_eq!(Date::default().as_days(), 0);
        assert_eq!(Date::default().ymd(), (1, 1, 1));
    }

    #[test]
    fn now_with_floors_to_the_clock_day() {
        let date = Date::now_with(&FixedClock::new(1_709_164_799));
        assert_eq!(date, ymd(2024, 2, 28));
        let before_epoch = Date::now_with(&FixedClock::new(-1));
        assert_eq!(before_epoch, ymd(1969, 12, 31));
    }

    #[test]
    fn now_with_saturates_extreme_clocks() {
        assert_eq!(Date::now_with(&FixedClock::new(i64::MAX)), Date::MAX);
        assert_eq!(Date::now_with(&FixedClock::new(i64::MIN)), Date::MIN);
    }

    #[test]
    fn from_ymd_rejects_past_range_years() {
        let (max_year, _, _) = Date::MAX.ymd();
        let err = Date::from_ymd(max_year + 1, 1, 1).unwrap_err();
        assert_eq!(err.kind(), DateErrorKind::OutOfRange);
        let (min_year, _, _) = Date::MIN.ymd();
        let err = Date::from_ymd(min_year - 1, 12, 31).unwrap_err();
        assert_eq!(err.kind(), DateErrorKind::OutOfRange);
    }

    #[test]
    fn min_and_max_round_trip_through_fields() {
        for date in [Date::MIN, Date::MAX] {
            let (year, month, day) = date.ymd();
            assert_eq!(Date::from_ymd(year, month, day).unwrap(), date);
        }
    }

    #[test]
    fn unix_epoch_is_day_719162() {
        assert_eq!(ymd(1970, 1, 1).as_days(), UNIX_EPOCH_DAYS);
        assert_eq!(ymd(1970, 1, 1).timestamp(), 0);
    }

    #[test]
    fn from_timestamp_rejects_out_of_range_seconds() {
        let err = Date::from_timestamp(i64::MAX).unwrap_err();
        assert_eq!(err.kind(), DateErrorKind::OutOfRange);
        assert_eq!(
            Date::from_timestamp(Date::MAX.timestamp()).unwrap(),
            Date::MAX
        );
        assert_eq!(
            Date::from_timestamp(Date::MIN.timestamp()).unwrap(),
            Date::MIN
        );
    }

    #[test]
    fn between_spans_whole_range() {
        assert_eq!(Date::MIN.between(Date::MAX), u32::MAX);
        assert_eq!(Date::MAX.between(Date::MIN), u32::MAX);
    }

    #[test]
    fn set_day_rejects_non_positive_values_even_when_clamping() {
        let date = ymd(2024, 5, 10);
        for value in [0, -1, 32] {
            assert_eq!(
                date.set_clamped(value, DateUnit::Day).unwrap_err().kind(),
                DateErrorKind::OutOfRange
            );
        }
    }

    #[test]
    fn apply_day_at_range_edges() {
        assert_eq!(
            Date::MAX.apply(1, DateUnit::Day).unwrap_err().kind(),
            DateErrorKind::OutOfRange
        );
        assert_eq!(
            Date::MIN.apply(-1, DateUnit::Day).unwrap_err().kind(),
            DateErrorKind::OutOfRange
        );
        assert_eq!(Date::MAX.apply(-1, DateUnit::Day).unwrap().as_days(), i32::MAX - 1);
    }

    #[test]
    fn apply_year_past_range_fails() {
        let err = Date::MAX.apply(i32::MAX, DateUnit::Year).unwrap_err();
        assert_eq!(err.kind(), DateErrorKind::OutOfRange);
        let err = ymd(2024, 1, 1).apply(i32::MAX, DateUnit::Month).unwrap_err();
        assert_eq!(err.kind(), DateErrorKind::OutOfRange);
    }

    #[test]
    fn display_signs_years_outside_four_digits() {
        assert_eq!(ymd(2024, 2, 29).to_string(), "2024-02-29");
        assert_eq!(ymd(7, 3, 1).to_string(), "0007-03-01");
        assert_eq!(ymd(-44, 3, 15).to_string(), "-0044-03-15");
        assert_eq!(ymd(12_345, 6, 7).to_string(), "+12345-06-07");
    }

    #[test]
    fn from_str_accepts_display_output() {
        for date in [ymd(2024, 2, 29), ymd(-44, 3, 15), ymd(12_345, 6, 7), Date::MIN, Date::MAX] {
            assert_eq!(date.to_string().parse::<Date>().unwrap(), date);
        }
    }

    #[test]
    fn from_str_classifies_errors() {
        assert_eq!(
            "2024/02/29".parse::<Date>().unwrap_err().kind(),
            DateErrorKind::InvalidFormat
        );
        assert_eq!(
            "2023-02-29".parse::<Date>().unwrap_err().kind(),
            DateErrorKind::OutOfRange
        );
        assert_eq!(
            "99999999999-01-01".parse::<Date>().unwrap_err().kind(),
            DateErrorKind::OutOfRange
        );
    }

    #[test]
    fn from_str_rejects_non_ascii_digits_and_padding() {
        for text in [
            "\u{662}\u{660}\u{662}\u{664}-\u{660}\u{661}-\u{660}\u{661}",
            "2024-\u{660}\u{661}-01",
            "2024-01-\u{660}\u{661}",
            " 2024-01-01",
            "2024-01-01\n",
        ] {
            let err = text.parse::<Date>().unwrap_err();
            assert_eq!(err.kind(), DateErrorKind::InvalidFormat, "{text:?}");
        }
    }

    #[test]
    fn unit_from_str_accepts_aliases() {
        assert_eq!("Months".parse::<DateUnit>().unwrap(), DateUnit::Month);
        assert_eq!("y".parse::<DateUnit>().unwrap(), DateUnit::Year);
        assert_eq!(
            "week".parse::<DateUnit>().unwrap_err().kind(),
            DateErrorKind::InvalidFormat
        );
        assert_eq!(DateUnit::Day.to_string(), "day");
    }
}
