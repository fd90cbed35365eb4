//! Rule-based fortune scoring over BaZi and Ziwei charts.
//!
//! This crate provides:
//! - Career, wealth, love and health scores with their adjustments
//! - Element-keyed lucky attributes and organ correspondences
//! - Daily fortune with hourly slots, seeded by date or per call

pub mod daily;
pub mod lucky;
pub mod score;

pub use daily::{
    DailyFortune, HourlyFortune, LuckyAttributes, activity_counts, calculate_daily_fortune,
    day_luck, hourly_seed,
};
pub use score::{
    Adjustment, DomainScore, FortuneScore, calculate_fortune, clamp_score, level,
    missing_element_of, overall_score, score_career, score_health, score_love, score_wealth,
};
