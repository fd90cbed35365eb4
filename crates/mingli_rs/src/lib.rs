//! Convenience facade for the mingli destiny-chart engine.
//!
//! One [`DestinyEngine::report`] call turns a birth time into the
//! sexagenary date, the BaZi and Ziwei charts and the fortune score.
//!
//! ```rust
//! use mingli_rs::*;
//!
//! let engine = DestinyEngine::default();
//! let info = BirthInfo::new("张三", Gender::Male, "北京");
//! let birth: SolarDateTime = "1990-05-15 14:00".parse().unwrap();
//! let report = engine.report(&info, birth).unwrap();
//! assert_eq!(report.bazi.day.name(), "庚子");
//! ```

pub mod convenience;
pub mod engine;
pub mod error;

pub use convenience::{lunar, solar};
pub use engine::{DestinyEngine, DestinyReport};
pub use error::MingliError;

// Re-export the value types so callers only need this crate.
pub use mingli_bazi::{
    FavorableElements, FourPillarsChart, Spirit, StrengthAnalysis, StrengthLevel, TenGod,
};
pub use mingli_calendar::{
    BirthInfo, Branch, CalendarError, Element, Gender, LunarDate, SexagenaryDate, SolarDateTime,
    Stem, StemBranch,
};
pub use mingli_config::{ConfigError, EngineConfig, HourlyLuckMode};
pub use mingli_fortune::{DailyFortune, DomainScore, FortuneScore};
pub use mingli_ziwei::{MainStar, Palace, PalaceName, PurpleStarChart};
