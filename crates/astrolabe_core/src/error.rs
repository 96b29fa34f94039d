//! Engine error taxonomy.
//!
//! # Responsibility
//! - Define the only two failure kinds the engine reports.
//! - Provide the boundary discriminant used by binding layers.
//!
//! # Invariants
//! - An operation either returns a fully valid value or one `DateError`.
//! - No other error kinds exist; new failure paths map onto these two.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub type DateResult<T> = Result<T, DateError>;

/// Failure of a date operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateError {
    /// A field, day-count or timestamp lies outside the valid domain.
    OutOfRange(String),
    /// A format pattern or formatted input text is malformed.
    InvalidFormat(String),
}

/// Boundary discriminant for a date result.
///
/// `None` is the success sentinel used by callers that carry results as a
/// code plus payload instead of a `Result`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DateErrorKind {
    None,
    OutOfRange,
    InvalidFormat,
}

impl DateError {
    pub(crate) fn out_of_range(message: impl Into<String>) -> Self {
        Self::OutOfRange(message.into())
    }

    pub(crate) fn invalid_format(message: impl Into<String>) -> Self {
        Self::InvalidFormat(message.into())
    }

    /// Returns the boundary discriminant for this error.
    pub fn kind(&self) -> DateErrorKind {
        match self {
            Self::OutOfRange(_) => DateErrorKind::OutOfRange,
            Self::InvalidFormat(_) => DateErrorKind::InvalidFormat,
        }
    }

    /// Returns the human-readable detail without the kind prefix.
    pub fn message(&self) -> &str {
        match self {
            Self::OutOfRange(message) | Self::InvalidFormat(message) => message,
        }
    }
}

impl DateErrorKind {
    /// Maps a result onto its discriminant.
    pub fn of<T>(result: &DateResult<T>) -> Self {
        match result {
            Ok(_) => Self::None,
            Err(err) => err.kind(),
        }
    }
}

impl Display for DateError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::OutOfRange(message) => write!(f, "out of range: {message}"),
            Self::InvalidFormat(message) => write!(f, "invalid format: {message}"),
        }
    }
}

impl Error for DateError {}
