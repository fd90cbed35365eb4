//! Scoring properties over real charts.

use chrono::NaiveDate;
use mingli_bazi::{
    FavorableElements, FourPillarsChart, calculate_favorable_elements, compute_four_pillars,
};
use mingli_calendar::{Element, Gender, SolarDateTime, solar_to_lunar};
use mingli_config::{DailyConfig, EngineConfig, HourlyLuckMode};
use mingli_fortune::{calculate_daily_fortune, calculate_fortune, missing_element_of};
use mingli_ziwei::{PurpleStarChart, compute_purple_star};

fn charts(
    y: i32,
    m: u8,
    d: u8,
    h: u8,
    gender: Gender,
) -> (FourPillarsChart, PurpleStarChart, FavorableElements) {
    let date = solar_to_lunar(&SolarDateTime::new(y, m, d, h, 0).unwrap()).unwrap();
    let bazi = compute_four_pillars(&date);
    let ziwei = compute_purple_star(&date, gender);
    let fav = calculate_favorable_elements(&bazi);
    (bazi, ziwei, fav)
}

// ---------------------------------------------------------------------------
// Domain scores
// ---------------------------------------------------------------------------

#[test]
fn overall_is_rounded_mean_everywhere() {
    let config = EngineConfig::default();
    for year in (1920..=2080).step_by(3) {
        for (m, h, g) in [(2u8, 3u8, Gender::Male), (7, 16, Gender::Female)] {
            let (bazi, ziwei, fav) = charts(year, m, 9, h, g);
            let f = calculate_fortune(&bazi, &ziwei, &fav, g, &config.scoring);
            let sum: u32 = f.domains().iter().map(|d| u32::from(d.score)).sum();
            assert_eq!(f.overall, (f64::from(sum) / 4.0).round() as u8);
            for d in f.domains() {
                assert!(d.score <= 100);
                assert!(!d.analysis.is_empty());
                assert!(!d.advice.is_empty());
            }
        }
    }
}

#[test]
fn missing_water_costs_exactly_ten() {
    // 己巳 丁丑 庚寅 辛巳 has no water
    let (bazi, ziwei, fav) = charts(1990, 1, 5, 10, Gender::Male);
    assert_eq!(bazi.elements.missing(), vec![Element::Water]);
    let config = EngineConfig::default();
    let f = calculate_fortune(&bazi, &ziwei, &fav, Gender::Male, &config.scoring);

    let water: Vec<_> = f
        .health
        .adjustments
        .iter()
        .filter(|a| missing_element_of(a) == Some(Element::Water))
        .collect();
    assert_eq!(water.len(), 1);
    assert_eq!(water[0].delta, -10);
    assert_eq!(f.health.cautions.len(), 1);
    assert!(f.health.cautions[0].contains("肾脏"));

    let palace_delta: i32 = f
        .health
        .adjustments
        .iter()
        .filter(|a| missing_element_of(a).is_none())
        .map(|a| a.delta)
        .sum();
    assert_eq!(i32::from(f.health.score), (70 - 10 + palace_delta).clamp(0, 100));
}

#[test]
fn baselines_follow_config() {
    let (bazi, ziwei, fav) = charts(1990, 5, 15, 14, Gender::Male);
    let mut config = EngineConfig::default();
    let base = calculate_fortune(&bazi, &ziwei, &fav, Gender::Male, &config.scoring);
    config.scoring.career_baseline += 7;
    let raised = calculate_fortune(&bazi, &ziwei, &fav, Gender::Male, &config.scoring);
    let expected = (i32::from(base.career.score) + 7).min(100);
    if base.career.score > 0 {
        assert_eq!(i32::from(raised.career.score), expected);
    }
    assert_eq!(raised.wealth, base.wealth);
}

#[test]
fn gender_keys_love_relations() {
    // 1990-05-15 14:00: 庚 day master with 劫财 in the month
    let (bazi, ziwei, fav) = charts(1990, 5, 15, 14, Gender::Male);
    let config = EngineConfig::default();
    let male = calculate_fortune(&bazi, &ziwei, &fav, Gender::Male, &config.scoring);
    assert!(male.love.adjustments.iter().any(|a| a.reason == "劫财透出" && a.delta == -10));
    let female = calculate_fortune(&bazi, &ziwei, &fav, Gender::Female, &config.scoring);
    assert!(female.love.adjustments.iter().any(|a| a.reason == "伤官透出" && a.delta == -10));
    assert!(male.love.adjustments.iter().any(|a| a.reason == "命带桃花"));
}

// ---------------------------------------------------------------------------
// Daily fortune
// ---------------------------------------------------------------------------

#[test]
fn seeded_daily_is_reproducible() {
    let (bazi, _, fav) = charts(1990, 5, 15, 14, Gender::Male);
    let date = NaiveDate::from_ymd_opt(2024, 2, 10).unwrap();
    let config = DailyConfig::default();
    let a = calculate_daily_fortune(&bazi, &fav, date, &config).unwrap();
    let b = calculate_daily_fortune(&bazi, &fav, date, &config).unwrap();
    assert_eq!(a, b);
    assert_eq!(a.day_pillar.name(), "甲子");
    assert_eq!(a.hourly.len(), 12);
}

#[test]
fn seeded_hourly_luck_is_pinned() {
    // 子 巳 午 亥 carry the +10 for favorable 水 and 火
    let (bazi, _, fav) = charts(1990, 5, 15, 14, Gender::Male);
    let date = NaiveDate::from_ymd_opt(2024, 2, 10).unwrap();
    let d = calculate_daily_fortune(&bazi, &fav, date, &DailyConfig::default()).unwrap();
    let luck: Vec<u8> = d.hourly.iter().map(|h| h.luck).collect();
    assert_eq!(luck, [75, 53, 83, 42, 40, 96, 94, 76, 52, 57, 56, 78]);
    assert_eq!(d.hourly[5].time_range, "09:00-11:00");
}

#[test]
fn daily_score_rules_for_jiazi() {
    // natal 庚子 favors 火 水; 甲 wood is unfavorable, 子 meets 子
    let (bazi, _, fav) = charts(1990, 5, 15, 14, Gender::Male);
    let date = NaiveDate::from_ymd_opt(2024, 2, 10).unwrap();
    let d = calculate_daily_fortune(&bazi, &fav, date, &DailyConfig::default()).unwrap();
    assert_eq!(d.luck_score, 45);
    assert_eq!(d.suitable.len(), 3);
    assert_eq!(d.avoid.len(), 3);
    // 木 is not favorable, so the lucky set follows the primary favorable 火
    assert_eq!(d.lucky.element, Element::Fire);
    assert_eq!(d.lucky.direction, "南方");
}

#[test]
fn random_mode_stays_in_range() {
    let (bazi, _, fav) = charts(1990, 5, 15, 14, Gender::Male);
    let date = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
    let config = DailyConfig {
        hourly_luck: HourlyLuckMode::Random,
        ..DailyConfig::default()
    };
    for _ in 0..20 {
        let d = calculate_daily_fortune(&bazi, &fav, date, &config).unwrap();
        assert!(d.hourly.iter().all(|h| (30..=100).contains(&h.luck)));
    }
}

#[test]
fn daily_out_of_range_fails() {
    let (bazi, _, fav) = charts(1990, 5, 15, 14, Gender::Male);
    let date = NaiveDate::from_ymd_opt(2101, 1, 1).unwrap();
    assert!(calculate_daily_fortune(&bazi, &fav, date, &DailyConfig::default()).is_err());
}
