//! Error types for ampm-time operations.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TimeError {
    /// The time value does not survive a round trip through the literal grammar.
    #[error("invalid time")]
    InvalidTime,

    /// The format pattern does not match the format grammar.
    ///
    /// Displays as the bare sentinel so it can be shown in place of a time.
    #[error("invalid format")]
    InvalidFormat(String),

    #[error("Invalid period: {0}")]
    InvalidPeriod(String),

    #[error("Shift out of range: {hours}h {minutes}m leaves the day")]
    ShiftOutOfRange { hours: i32, minutes: i32 },

    #[error("Timestamp arithmetic overflowed")]
    Overflow,

    #[error("Next occurrence still in the wrong period after correction")]
    ProjectionInvariant,
}

pub type Result<T> = std::result::Result<T, TimeError>;
