//! FFI date API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose every engine operation as a sync FRB function.
//! - Translate `DateResult` into envelopes with an explicit error code.
//!
//! # Invariants
//! - Exported functions must not panic across FFI boundary.
//! - An envelope payload is `Some` exactly when `error == DateErrorCode::None`.
//! - `DateHandle` is the only boxed representation of a date.

use astrolabe_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, Date, DateError,
    DateErrorKind, DateResult, DateUnit,
};
use log::warn;

/// Opaque date passed to and from Dart.
#[flutter_rust_bridge::frb(opaque)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateHandle {
    inner: Date,
}

impl DateHandle {
    fn new(inner: Date) -> Self {
        Self { inner }
    }

    /// ISO-8601 rendering for diagnostics.
    #[flutter_rust_bridge::frb(sync)]
    pub fn to_iso_string(&self) -> String {
        self.inner.to_string()
    }
}

/// Error discriminant carried by every fallible envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateErrorCode {
    None,
    OutOfRange,
    InvalidFormat,
}

impl From<DateErrorKind> for DateErrorCode {
    fn from(value: DateErrorKind) -> Self {
        match value {
            DateErrorKind::None => Self::None,
            DateErrorKind::OutOfRange => Self::OutOfRange,
            DateErrorKind::InvalidFormat => Self::InvalidFormat,
        }
    }
}

/// Calendar field selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateUnitCode {
    Year,
    Month,
    Day,
}

impl From<DateUnitCode> for DateUnit {
    fn from(value: DateUnitCode) -> Self {
        match value {
            DateUnitCode::Year => DateUnit::Year,
            DateUnitCode::Month => DateUnit::Month,
            DateUnitCode::Day => DateUnit::Day,
        }
    }
}

/// Result envelope for date-producing calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateResponse {
    pub error: DateErrorCode,
    /// Present only on success.
    pub date: Option<DateHandle>,
    /// Empty on success, error detail otherwise.
    pub message: String,
}

/// Result envelope for text-producing calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextResponse {
    pub error: DateErrorCode,
    /// Present only on success.
    pub text: Option<String>,
    /// Empty on success, error detail otherwise.
    pub message: String,
}

impl From<DateResult<Date>> for DateResponse {
    fn from(value: DateResult<Date>) -> Self {
        match value {
            Ok(date) => Self {
                error: DateErrorCode::None,
                date: Some(DateHandle::new(date)),
                message: String::new(),
            },
            Err(err) => Self {
                error: err.kind().into(),
                date: None,
                message: err.to_string(),
            },
        }
    }
}

impl From<DateResult<String>> for TextResponse {
    fn from(value: DateResult<String>) -> Self {
        match value {
            Ok(text) => Self {
                error: DateErrorCode::None,
                text: Some(text),
                message: String::new(),
            },
            Err(err) => Self {
                error: err.kind().into(),
                text: None,
                message: err.to_string(),
            },
        }
    }
}

/// Expose core crate version through FFI.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes engine logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Sync call; may perform small file-system setup work.
/// - Safe to call repeatedly with the same `level + log_dir`.
/// - Never panics; returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err.to_string(),
    }
}

/// Today's UTC date from the system clock.
#[flutter_rust_bridge::frb(sync)]
pub fn date_now() -> DateHandle {
    DateHandle::new(Date::now())
}

/// Builds a date from calendar fields.
///
/// # FFI contract
/// - `OutOfRange` for an impossible month/day or an unrepresentable date.
#[flutter_rust_bridge::frb(sync)]
pub fn date_from_ymd(year: i32, month: u32, day: u32) -> DateResponse {
    Date::from_ymd(year, month, day).into()
}

/// Builds the UTC date containing a Unix timestamp in seconds.
///
/// # FFI contract
/// - `OutOfRange` when the day is not representable.
#[flutter_rust_bridge::frb(sync)]
pub fn date_from_timestamp(timestamp: i64) -> DateResponse {
    Date::from_timestamp(timestamp).into()
}

/// Wraps a day-count (days since `0001-01-01`). Total.
#[flutter_rust_bridge::frb(sync)]
pub fn date_from_days(days: i32) -> DateHandle {
    DateHandle::new(Date::from_days(days))
}

#[flutter_rust_bridge::frb(sync)]
pub fn date_as_days(date: &DateHandle) -> i32 {
    date.inner.as_days()
}

/// Unix timestamp of the date's UTC midnight.
#[flutter_rust_bridge::frb(sync)]
pub fn date_timestamp(date: &DateHandle) -> i64 {
    date.inner.timestamp()
}

/// Absolute distance in days.
#[flutter_rust_bridge::frb(sync)]
pub fn date_between(date: &DateHandle, compare: &DateHandle) -> u32 {
    date.inner.between(compare.inner)
}

#[flutter_rust_bridge::frb(sync)]
pub fn date_get(date: &DateHandle, unit: DateUnitCode) -> i32 {
    date.inner.get(unit.into())
}

/// Replaces one field.
///
/// # FFI contract
/// - `OutOfRange` for invalid values and for a kept day missing from the
///   new month; clamping requires `date_set_clamped`.
#[flutter_rust_bridge::frb(sync)]
pub fn date_set(date: &DateHandle, value: i32, unit: DateUnitCode) -> DateResponse {
    date.inner.set(value, unit.into()).into()
}

#[flutter_rust_bridge::frb(sync)]
pub fn date_set_clamped(date: &DateHandle, value: i32, unit: DateUnitCode) -> DateResponse {
    date.inner.set_clamped(value, unit.into()).into()
}

/// Shifts by a signed amount of units.
///
/// # FFI contract
/// - `OutOfRange` when the result is unrepresentable or the kept day is
///   missing from the target month; clamping requires `date_apply_clamped`.
#[flutter_rust_bridge::frb(sync)]
pub fn date_apply(date: &DateHandle, amount: i32, unit: DateUnitCode) -> DateResponse {
    date.inner.apply(amount, unit.into()).into()
}

#[flutter_rust_bridge::frb(sync)]
pub fn date_apply_clamped(date: &DateHandle, amount: i32, unit: DateUnitCode) -> DateResponse {
    date.inner.apply_clamped(amount, unit.into()).into()
}

/// Renders a date with a pattern.
///
/// # FFI contract
/// - `InvalidFormat` for malformed patterns only.
#[flutter_rust_bridge::frb(sync)]
pub fn date_format(date: &DateHandle, pattern: String) -> TextResponse {
    let result = date.inner.format(pattern.as_str());
    if let Err(err) = &result {
        log_rejected("date_format", err);
    }
    result.into()
}

/// Reads a date from text laid out as `pattern`.
#[flutter_rust_bridge::frb(sync)]
pub fn date_parse(text: String, pattern: String) -> DateResponse {
    let result = Date::parse(text.as_str(), pattern.as_str());
    if let Err(err) = &result {
        log_rejected("date_parse", err);
    }
    result.into()
}

fn log_rejected(event: &str, err: &DateError) {
    warn!(
        "event={} module=ffi status=error kind={:?}",
        event,
        err.kind()
    );
}
