//! Solar (Gregorian) birth date and time, naive local time.

use chrono::{Datelike, NaiveDate, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::error::CalendarError;
use crate::lunar_data::{LUNAR_END_YEAR, LUNAR_START_YEAR};

/// Gregorian date/time with minute precision, no time zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SolarDateTime {
    pub year: i32,
    pub month: u8,
    pub day: u8,
    pub hour: u8,
    pub minute: u8,
}

impl SolarDateTime {
    /// Build and validate a date/time.
    pub fn new(year: i32, month: u8, day: u8, hour: u8, minute: u8) -> Result<Self, CalendarError> {
        let dt = Self {
            year,
            month,
            day,
            hour,
            minute,
        };
        dt.validate()?;
        Ok(dt)
    }

    /// Midnight of a calendar date.
    pub fn from_date(date: NaiveDate) -> Result<Self, CalendarError> {
        Self::new(date.year(), date.month() as u8, date.day() as u8, 0, 0)
    }

    /// Check the range and calendar validity of every field.
    pub fn validate(&self) -> Result<(), CalendarError> {
        if !(LUNAR_START_YEAR..=LUNAR_END_YEAR).contains(&self.year) {
            return Err(CalendarError::YearOutOfRange(self.year));
        }
        if self.hour > 23 || self.minute > 59 {
            return Err(CalendarError::InvalidTime {
                hour: self.hour,
                minute: self.minute,
            });
        }
        self.naive_date().map(|_| ())
    }

    /// The calendar date, rejecting impossible days such as 02-30.
    pub fn naive_date(&self) -> Result<NaiveDate, CalendarError> {
        NaiveDate::from_ymd_opt(self.year, self.month as u32, self.day as u32).ok_or(
            CalendarError::InvalidSolarDate {
                year: self.year,
                month: self.month,
                day: self.day,
            },
        )
    }
}

impl std::fmt::Display for SolarDateTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02} {:02}:{:02}",
            self.year, self.month, self.day, self.hour, self.minute
        )
    }
}

impl std::str::FromStr for SolarDateTime {
    type Err = CalendarError;

    /// Parse `YYYY-MM-DD`, `YYYY-MM-DD HH:MM` or `YYYY-MM-DD HH:MM:SS` (a `T`
    /// separator is accepted too). Seconds are validated and then dropped.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let unparseable = || CalendarError::Unparseable(s.to_string());
        let trimmed = s.trim();
        let (date_part, time_part) = match trimmed.split_once([' ', 'T']) {
            Some((d, t)) => (d, Some(t)),
            None => (trimmed, None),
        };
        let date = NaiveDate::parse_from_str(date_part, "%Y-%m-%d").map_err(|_| unparseable())?;
        let (hour, minute) = match time_part {
            Some(t) => {
                let time = NaiveTime::parse_from_str(t, "%H:%M")
                    .or_else(|_| NaiveTime::parse_from_str(t, "%H:%M:%S"))
                    .map_err(|_| unparseable())?;
                (time.hour() as u8, time.minute() as u8)
            }
            None => (0, 0),
        };
        Self::new(date.year(), date.month() as u8, date.day() as u8, hour, minute)
    }
}
