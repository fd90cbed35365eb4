//! Solar ↔ lunar date conversion over the 1900–2100 table.
//!
//! Both directions count days from the epoch 1900-01-31 (lunar 1900-01-01):
//! solar → lunar walks whole lunar years, then months (leap month in place),
//! until the offset falls inside one; lunar → solar sums them back up.

use chrono::{Datelike, Days, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::error::CalendarError;
use crate::lunar_data::{LUNAR_END_YEAR, LUNAR_START_YEAR, lunar_year};
use crate::solar::SolarDateTime;

/// Days from 0001-01-01 (day 1) to the epoch 1900-01-31.
pub const EPOCH_DAYS_FROM_CE: i32 = 693_626;

const MONTH_NAMES: [&str; 12] = [
    "正", "二", "三", "四", "五", "六", "七", "八", "九", "十", "冬", "腊",
];

const DAY_TENS: [&str; 4] = ["初", "十", "廿", "三"];
const DAY_UNITS: [&str; 10] = ["十", "一", "二", "三", "四", "五", "六", "七", "八", "九"];

/// A date in the Chinese lunisolar calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LunarDate {
    pub year: i32,
    /// 1..=12; a leap month carries the number of the month it follows.
    pub month: u8,
    /// 1..=30.
    pub day: u8,
    pub is_leap: bool,
}

impl LunarDate {
    /// Month label, e.g. "正月", "闰四月".
    pub fn month_name(&self) -> String {
        let base = MONTH_NAMES[(self.month.clamp(1, 12) - 1) as usize];
        if self.is_leap {
            format!("闰{base}月")
        } else {
            format!("{base}月")
        }
    }

    /// Day label, e.g. "初一", "十五", "廿一", "三十".
    pub fn day_name(&self) -> String {
        match self.day {
            10 => "初十".to_string(),
            20 => "二十".to_string(),
            30 => "三十".to_string(),
            d => format!(
                "{}{}",
                DAY_TENS[(d / 10).min(3) as usize],
                DAY_UNITS[(d % 10) as usize]
            ),
        }
    }
}

impl std::fmt::Display for LunarDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}年{}{}", self.year, self.month_name(), self.day_name())
    }
}

fn epoch() -> NaiveDate {
    NaiveDate::from_num_days_from_ce_opt(EPOCH_DAYS_FROM_CE).unwrap_or(NaiveDate::MIN)
}

/// Signed day count from 1900-01-31.
pub fn days_since_epoch(date: NaiveDate) -> i64 {
    (date.num_days_from_ce() - EPOCH_DAYS_FROM_CE) as i64
}

/// Convert a Gregorian date to its lunar date.
pub fn lunar_date(date: NaiveDate) -> Result<LunarDate, CalendarError> {
    let year = date.year();
    if !(LUNAR_START_YEAR..=LUNAR_END_YEAR).contains(&year) {
        return Err(CalendarError::YearOutOfRange(year));
    }
    let mut offset = days_since_epoch(date);
    if offset < 0 {
        return Err(CalendarError::BeforeEpoch);
    }

    let mut lunar_y = LUNAR_START_YEAR;
    let record = loop {
        let record = lunar_year(lunar_y).ok_or(CalendarError::YearOutOfRange(lunar_y))?;
        let len = record.total_days() as i64;
        if offset < len {
            break record;
        }
        offset -= len;
        lunar_y += 1;
    };

    for m in record.months() {
        let len = m.days as i64;
        if offset < len {
            let lunar = LunarDate {
                year: lunar_y,
                month: m.month,
                // offset is 0-based within the month; day numbers start at 1
                day: (offset + 1) as u8,
                is_leap: m.is_leap,
            };
            trace!(%date, %lunar, "solar to lunar");
            return Ok(lunar);
        }
        offset -= len;
    }
    // The year loop guarantees the offset lies inside this year's months.
    Err(CalendarError::YearOutOfRange(lunar_y))
}

/// Convert a lunar date back to the Gregorian calendar (midnight).
///
/// `is_leap` selects the leap duplicate of `month`; it is an error when the
/// year has no leap month of that number.
pub fn lunar_to_solar(
    year: i32,
    month: u8,
    day: u8,
    is_leap: bool,
) -> Result<SolarDateTime, CalendarError> {
    let invalid = CalendarError::InvalidLunarDate {
        year,
        month,
        day,
        is_leap,
    };
    let record = lunar_year(year).ok_or(CalendarError::YearOutOfRange(year))?;
    if !(1..=12).contains(&month) || day == 0 {
        return Err(invalid);
    }
    if is_leap && record.leap_month() != Some(month) {
        return Err(invalid);
    }

    let mut offset: u64 = (LUNAR_START_YEAR..year)
        .filter_map(lunar_year)
        .map(|y| y.total_days() as u64)
        .sum();

    let mut found = None;
    for m in record.months() {
        if m.month == month && m.is_leap == is_leap {
            found = Some(m);
            break;
        }
        offset += m.days as u64;
    }
    let target = found.ok_or(invalid.clone())?;
    if day > target.days {
        return Err(invalid);
    }
    offset += (day - 1) as u64;

    let date = epoch().checked_add_days(Days::new(offset)).ok_or(invalid)?;
    SolarDateTime::from_date(date)
}
