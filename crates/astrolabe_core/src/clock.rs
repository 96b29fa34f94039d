//! Wall-clock seam for `Date::now`.
//!
//! # Invariants
//! - Clocks report whole seconds since the Unix epoch, UTC.
//! - Reading a clock never fails; a system clock set before 1970 yields a
//!   negative value instead of an error.

use std::time::{SystemTime, UNIX_EPOCH};

/// Source of the current Unix time.
pub trait Clock {
    fn unix_seconds(&self) -> i64;
}

/// Clock backed by `std::time::SystemTime`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn unix_seconds(&self) -> i64 {
        match SystemTime::now().duration_since(UNIX_EPOCH) {
            Ok(elapsed) => i64::try_from(elapsed.as_secs()).unwrap_or(i64::MAX),
            Err(err) => {
                let before = err.duration();
                let seconds = i64::try_from(before.as_secs()).unwrap_or(i64::MAX);
                // Partial seconds before the epoch still belong to the
                // previous second.
                if before.subsec_nanos() > 0 {
                    seconds.saturating_neg().saturating_sub(1)
                } else {
                    seconds.saturating_neg()
                }
            }
        }
    }
}

/// Clock frozen at a fixed instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock {
    pub unix_seconds: i64,
}

impl FixedClock {
    pub fn new(unix_seconds: i64) -> Self {
        Self { unix_seconds }
    }
}

impl Clock for FixedClock {
    fn unix_seconds(&self) -> i64 {
        self.unix_seconds
    }
}
