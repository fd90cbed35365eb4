//! Four Pillars (BaZi, 八字) chart engine.
//!
//! This crate provides:
//! - Chart assembly from a [`SexagenaryDate`](mingli_calendar::SexagenaryDate)
//!   with the eight-character element tally
//! - Ten Gods (十神) relations and their favorable/unfavorable buckets
//! - Spirits (神煞)
//! - Day-master strength and favorable elements

pub mod chart;
pub mod spirits;
pub mod strength;
pub mod ten_gods;

pub use chart::{CHART_CHARACTERS, ElementTally, FourPillarsChart, Pillar, compute_four_pillars};
pub use spirits::{Spirit, compute_spirits, nobleman_branches, scholar_branch};
pub use strength::{
    FavorableElements, STRONG_THRESHOLD, StrengthAnalysis, StrengthLevel, WEAK_THRESHOLD,
    analyze_strength, calculate_favorable_elements, favorable_for,
};
pub use ten_gods::{TenGod, TenGodClass, TenGodsAnalysis, compute_ten_gods, ten_god};
