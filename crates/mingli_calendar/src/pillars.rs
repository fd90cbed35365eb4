//! Stem-branch pillars for year, month, day and hour.
//!
//! - Year: cycle position (lunar year − 4).
//! - Month: branch (month + 1) mod 12, so the first month is Yin (寅);
//!   stem by the five-tigers rule: 甲/己 years open on 丙寅, 乙/庚 on 戊寅,
//!   丙/辛 on 庚寅, 丁/壬 on 壬寅, 戊/癸 on 甲寅.
//! - Day: days since 1900-01-31 mod 60, the epoch day taking cycle index 0.
//! - Hour: branch ⌊(hour+1)/2⌋ mod 12; stem by the five-rats rule
//!   (2·day stem + hour branch) mod 10.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::branch::Branch;
use crate::convert::{LunarDate, days_since_epoch, lunar_date};
use crate::error::CalendarError;
use crate::lunar_data::{LUNAR_END_YEAR, LUNAR_START_YEAR};
use crate::sexagenary::StemBranch;
use crate::solar::SolarDateTime;
use crate::stem::Stem;

/// Cycle index assigned to the epoch day 1900-01-31.
pub const DAY_CYCLE_EPOCH_INDEX: i64 = 0;

/// Year pillar of a lunar year.
pub const fn year_pillar(lunar_year: i32) -> StemBranch {
    StemBranch::from_cycle_index(lunar_year as i64 - 4)
}

/// Month pillar from the year stem and lunar month number (1..=12).
///
/// A leap month shares the pillar of the regular month it duplicates.
/// Stem indices are zero-based (甲 = 0), so the five-tigers rule reads
/// `(2 * year_stem + month + 1) mod 10`: 甲 and 己 years open on 丙寅.
pub const fn month_pillar(year_stem: Stem, lunar_month: u8) -> StemBranch {
    let m = lunar_month as i64;
    StemBranch {
        stem: Stem::cyclic(2 * year_stem.index() as i64 + m + 1),
        branch: Branch::cyclic(m + 1),
    }
}

/// Day pillar from a signed day offset relative to 1900-01-31.
pub const fn day_pillar_from_offset(offset: i64) -> StemBranch {
    StemBranch::from_cycle_index(offset + DAY_CYCLE_EPOCH_INDEX)
}

/// Day pillar of a Gregorian date within 1900–2100.
pub fn day_pillar(date: NaiveDate) -> Result<StemBranch, CalendarError> {
    use chrono::Datelike;
    let year = date.year();
    if !(LUNAR_START_YEAR..=LUNAR_END_YEAR).contains(&year) {
        return Err(CalendarError::YearOutOfRange(year));
    }
    Ok(day_pillar_from_offset(days_since_epoch(date)))
}

/// Hour pillar from the day stem and clock hour (0..=23).
pub const fn hour_pillar(day_stem: Stem, hour: u8) -> StemBranch {
    let branch = Branch::from_hour(hour);
    StemBranch {
        stem: Stem::cyclic(2 * day_stem.index() as i64 + branch.index() as i64),
        branch,
    }
}

/// A solar birth time expressed in the lunar calendar with its four pillars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SexagenaryDate {
    pub solar: SolarDateTime,
    pub lunar: LunarDate,
    pub year: StemBranch,
    pub month: StemBranch,
    pub day: StemBranch,
    pub hour: StemBranch,
}

impl SexagenaryDate {
    /// Pillars in year, month, day, hour order.
    pub fn pillars(&self) -> [StemBranch; 4] {
        [self.year, self.month, self.day, self.hour]
    }

    /// Zodiac animal of the lunar year.
    pub fn zodiac(&self) -> &'static str {
        self.year.branch.zodiac()
    }

    /// Day stem, the "day master" of a BaZi chart.
    pub fn day_master(&self) -> Stem {
        self.day.stem
    }
}

/// Convert a solar birth time into its lunar date and four pillars.
///
/// Fails with [`CalendarError::YearOutOfRange`] outside 1900–2100.
pub fn solar_to_lunar(dt: &SolarDateTime) -> Result<SexagenaryDate, CalendarError> {
    dt.validate()?;
    let date = dt.naive_date()?;
    let lunar = lunar_date(date)?;
    let year = year_pillar(lunar.year);
    let month = month_pillar(year.stem, lunar.month);
    let day = day_pillar_from_offset(days_since_epoch(date));
    let hour = hour_pillar(day.stem, dt.hour);
    debug!(solar = %dt, %lunar, year = %year, month = %month, day = %day, hour = %hour, "sexagenary date");
    Ok(SexagenaryDate {
        solar: *dt,
        lunar,
        year,
        month,
        day,
        hour,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn year_pillars() {
        assert_eq!(year_pillar(1984).name(), "甲子");
        assert_eq!(year_pillar(1990).name(), "庚午");
        assert_eq!(year_pillar(2024).name(), "甲辰");
    }

    #[test]
    fn five_tigers_first_month() {
        assert_eq!(month_pillar(Stem::Jia, 1).name(), "丙寅");
        assert_eq!(month_pillar(Stem::Ji, 1).name(), "丙寅");
        assert_eq!(month_pillar(Stem::Yi, 1).name(), "戊寅");
        assert_eq!(month_pillar(Stem::Bing, 1).name(), "庚寅");
        assert_eq!(month_pillar(Stem::Ding, 1).name(), "壬寅");
        assert_eq!(month_pillar(Stem::Gui, 1).name(), "甲寅");
    }

    #[test]
    fn month_twelve_is_chou() {
        assert_eq!(month_pillar(Stem::Jia, 12).name(), "丁丑");
        assert_eq!(month_pillar(Stem::Jia, 11).branch, Branch::Zi);
    }

    #[test]
    fn five_rats_hour() {
        assert_eq!(hour_pillar(Stem::Jia, 0).name(), "甲子");
        assert_eq!(hour_pillar(Stem::Ji, 23).name(), "甲子");
        assert_eq!(hour_pillar(Stem::Yi, 0).name(), "丙子");
        assert_eq!(hour_pillar(Stem::Geng, 14).name(), "癸未");
    }

    #[test]
    fn epoch_day_is_cycle_zero() {
        let d = NaiveDate::from_ymd_opt(1900, 1, 31).unwrap();
        assert_eq!(day_pillar(d).unwrap().cycle_index(), 0);
    }

    #[test]
    fn day_pillar_rejects_out_of_range() {
        let d = NaiveDate::from_ymd_opt(2101, 1, 1).unwrap();
        assert_eq!(day_pillar(d), Err(CalendarError::YearOutOfRange(2101)));
    }

    #[test]
    fn birth_1990_05_15() {
        let dt = SolarDateTime::new(1990, 5, 15, 14, 0).unwrap();
        let s = solar_to_lunar(&dt).unwrap();
        assert_eq!((s.lunar.year, s.lunar.month, s.lunar.day), (1990, 4, 21));
        assert_eq!(s.year.name(), "庚午");
        assert_eq!(s.month.name(), "辛巳");
        // (1990-05-15 − 1900-01-31) = 32976 days, 32976 mod 60 = 36
        assert_eq!(s.day.name(), "庚子");
        assert_eq!(s.hour.name(), "癸未");
        assert_eq!(s.zodiac(), "马");
    }

    #[test]
    fn range_error_propagates() {
        let dt = SolarDateTime {
            year: 1850,
            month: 1,
            day: 1,
            hour: 0,
            minute: 0,
        };
        assert_eq!(solar_to_lunar(&dt), Err(CalendarError::YearOutOfRange(1850)));
    }
}
