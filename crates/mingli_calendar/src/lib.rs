//! Lunisolar calendar and sexagenary (stem-branch) derivation.
//!
//! This crate provides:
//! - Heavenly stems, earthly branches, and the five elements as closed enums
//! - The 60-combination stem-branch cycle
//! - Solar ↔ lunar conversion over a precomputed 1900–2100 table
//! - Year/month/day/hour pillar derivation for a solar birth time
//!
//! The lunar table is an approximation tabulated from published almanacs;
//! no astronomical ephemeris is computed.

pub mod branch;
pub mod convert;
pub mod element;
pub mod error;
pub mod lunar_data;
pub mod person;
pub mod pillars;
pub mod sexagenary;
pub mod solar;
pub mod stem;

pub use branch::{ALL_BRANCHES, Branch};
pub use convert::{EPOCH_DAYS_FROM_CE, LunarDate, days_since_epoch, lunar_date, lunar_to_solar};
pub use element::{ALL_ELEMENTS, Element};
pub use error::CalendarError;
pub use lunar_data::{LUNAR_END_YEAR, LUNAR_START_YEAR, LunarMonth, LunarYear, lunar_year};
pub use person::{BirthInfo, Gender};
pub use pillars::{
    DAY_CYCLE_EPOCH_INDEX, SexagenaryDate, day_pillar, day_pillar_from_offset, hour_pillar,
    month_pillar, solar_to_lunar, year_pillar,
};
pub use sexagenary::{SEXAGENARY_PERIOD, StemBranch};
pub use solar::SolarDateTime;
pub use stem::{ALL_STEMS, Polarity, Stem};
