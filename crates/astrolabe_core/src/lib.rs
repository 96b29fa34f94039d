//! Core date engine for Astrolabe.
//! This crate is the single source of truth for calendar invariants.

pub mod calendar;
pub mod clock;
pub mod error;
pub mod format;
pub mod logging;
pub mod model;

pub use calendar::{days_in_month, is_leap_year, Weekday};
pub use clock::{Clock, FixedClock, SystemClock};
pub use error::{DateError, DateErrorKind, DateResult};
pub use format::Pattern;
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::date::{Date, DateUnit};

/// Pattern used when callers do not supply one.
pub const DEFAULT_PATTERN: &str = "yyyy-MM-dd";

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
