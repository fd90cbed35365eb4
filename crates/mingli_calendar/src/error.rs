//! Error types for calendar conversion.

use thiserror::Error;

/// Errors from solar/lunar conversion and pillar derivation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum CalendarError {
    /// Year outside the 1900–2100 lunar table.
    #[error("year {0} is outside the supported range 1900-2100")]
    YearOutOfRange(i32),
    /// Solar date falls in 1900 before the first tabulated lunar new year.
    #[error("date precedes the 1900-01-31 lunar epoch")]
    BeforeEpoch,
    /// Month/day combination does not exist in the Gregorian calendar.
    #[error("invalid solar date {year:04}-{month:02}-{day:02}")]
    InvalidSolarDate { year: i32, month: u8, day: u8 },
    /// Hour above 23 or minute above 59.
    #[error("invalid time {hour:02}:{minute:02}")]
    InvalidTime { hour: u8, minute: u8 },
    /// Text that is not `YYYY-MM-DD` optionally followed by `HH:MM[:SS]`.
    #[error("cannot parse date-time {0:?}")]
    Unparseable(String),
    /// Lunar month/day/leap flag that the year's record does not contain.
    #[error("invalid lunar date {year}-{month:02}-{day:02} (leap: {is_leap})")]
    InvalidLunarDate {
        year: i32,
        month: u8,
        day: u8,
        is_leap: bool,
    },
}
