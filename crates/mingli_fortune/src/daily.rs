//! Daily fortune: the day's pillar read against a natal chart.

use chrono::{Datelike, NaiveDate};
use mingli_bazi::{FavorableElements, FourPillarsChart};
use mingli_calendar::{ALL_BRANCHES, Branch, CalendarError, Element, StemBranch, day_pillar};
use mingli_config::{DailyConfig, HourlyLuckMode};
use rand::Rng;
use rand_pcg::Pcg64;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::lucky;
use crate::score::{clamp_score, level};

pub const FAVORABLE_DAY_BONUS: i32 = 20;
pub const UNFAVORABLE_DAY_PENALTY: i32 = 15;
pub const CLASH_PENALTY: i32 = 10;
pub const COMBINE_BONUS: i32 = 5;

/// Range of the random component of an hourly slot.
pub const HOURLY_LUCK_RANGE: std::ops::RangeInclusive<i32> = 30..=90;
/// Added to a slot whose branch element is favorable.
pub const FAVORABLE_HOUR_BONUS: i32 = 10;
/// PCG stream selector for seeded hourly luck. Changing it changes every
/// seeded result.
pub const HOURLY_STREAM: u128 = 0x6d69_6e67_6c69;

const SUITABLE: [&str; 6] = ["签约", "出行", "会友", "求财", "学习", "祈福"];
const AVOID: [&str; 6] = ["诉讼", "投机", "动土", "借贷", "争执", "远行"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LuckyAttributes {
    pub element: Element,
    pub color: String,
    pub direction: String,
    pub number: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HourlyFortune {
    pub branch: Branch,
    /// e.g. "23:00-01:00".
    pub time_range: String,
    pub luck: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyFortune {
    pub date: NaiveDate,
    pub day_pillar: StemBranch,
    pub day_element: Element,
    pub luck_score: u8,
    pub level: String,
    pub lucky: LuckyAttributes,
    pub suitable: Vec<String>,
    pub avoid: Vec<String>,
    pub hourly: Vec<HourlyFortune>,
}

/// Luck of the day before clamping, with the day branch read against the
/// natal day branch.
pub fn day_luck(
    natal_day_branch: Branch,
    day: StemBranch,
    favorable: &FavorableElements,
    base: i32,
) -> i32 {
    let element = day.stem_element();
    let mut luck = base;
    if favorable.is_favorable(element) {
        luck += FAVORABLE_DAY_BONUS;
    } else if favorable.is_unfavorable(element) {
        luck -= UNFAVORABLE_DAY_PENALTY;
    }
    if day.branch.clashes(natal_day_branch) {
        luck -= CLASH_PENALTY;
    }
    if day.branch.combines(natal_day_branch) {
        luck += COMBINE_BONUS;
    }
    luck
}

/// Number of suitable and avoid entries for a score.
pub const fn activity_counts(score: u8) -> (usize, usize) {
    match score {
        80.. => (5, 1),
        60..=79 => (4, 2),
        40..=59 => (3, 3),
        _ => (2, 4),
    }
}

/// RNG seed for a date and its day pillar.
pub fn hourly_seed(date: NaiveDate, day: StemBranch) -> u64 {
    let days = u64::from(date.num_days_from_ce().unsigned_abs());
    (days << 8) | u64::from(day.cycle_index())
}

/// Fixed-algorithm generator for seeded hourly luck, stable across rand releases.
pub fn hourly_rng(seed: u64) -> Pcg64 {
    Pcg64::new(u128::from(seed), HOURLY_STREAM)
}

fn hourly_slots<R: Rng>(rng: &mut R, favorable: &FavorableElements) -> Vec<HourlyFortune> {
    ALL_BRANCHES
        .iter()
        .map(|&branch| {
            let mut luck = rng.random_range(HOURLY_LUCK_RANGE);
            if favorable.is_favorable(branch.element()) {
                luck += FAVORABLE_HOUR_BONUS;
            }
            let (start, end) = branch.hour_range();
            HourlyFortune {
                branch,
                time_range: format!("{start:02}:00-{end:02}:00"),
                luck: clamp_score(luck),
            }
        })
        .collect()
}

/// Daily fortune for `date` against a natal chart.
pub fn calculate_daily_fortune(
    natal: &FourPillarsChart,
    favorable: &FavorableElements,
    date: NaiveDate,
    config: &DailyConfig,
) -> Result<DailyFortune, CalendarError> {
    let day = day_pillar(date)?;
    let day_element = day.stem_element();
    let luck_score = clamp_score(day_luck(
        natal.day.stem_branch.branch,
        day,
        favorable,
        config.base_luck,
    ));

    let key = if favorable.is_favorable(day_element) {
        day_element
    } else {
        favorable.primary().unwrap_or(day_element)
    };
    let lucky = LuckyAttributes {
        element: key,
        color: lucky::colors(key)[0].to_string(),
        direction: lucky::direction(key).to_string(),
        number: lucky::numbers(key)[0],
    };

    let (n_suitable, n_avoid) = activity_counts(luck_score);
    let suitable = SUITABLE.iter().take(n_suitable).map(|s| s.to_string()).collect();
    let avoid = AVOID.iter().take(n_avoid).map(|s| s.to_string()).collect();

    let hourly = match config.hourly_luck {
        HourlyLuckMode::Seeded => {
            let mut rng = hourly_rng(hourly_seed(date, day));
            hourly_slots(&mut rng, favorable)
        }
        HourlyLuckMode::Random => hourly_slots(&mut rand::rng(), favorable),
    };

    debug!(%date, day = %day, luck_score, "daily fortune");

    Ok(DailyFortune {
        date,
        day_pillar: day,
        day_element,
        luck_score,
        level: level(luck_score).to_string(),
        lucky,
        suitable,
        avoid,
        hourly,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn favor(favorable: Vec<Element>) -> FavorableElements {
        let unfavorable = mingli_calendar::ALL_ELEMENTS
            .iter()
            .copied()
            .filter(|e| !favorable.contains(e))
            .collect();
        FavorableElements {
            favorable,
            unfavorable,
        }
    }

    #[test]
    fn day_luck_rules() {
        let fav = favor(vec![Element::Wood, Element::Water]);
        // 甲子 against natal 午: favorable wood, 子午 clash
        let jiazi = StemBranch::from_cycle_index(0);
        assert_eq!(day_luck(Branch::Wu, jiazi, &fav, 60), 60 + 20 - 10);
        // 甲子 against natal 丑: 子丑 combine
        assert_eq!(day_luck(Branch::Chou, jiazi, &fav, 60), 60 + 20 + 5);
        // 庚午 against natal 寅: unfavorable metal only
        let gengwu = StemBranch::from_cycle_index(6);
        assert_eq!(day_luck(Branch::Yin, gengwu, &fav, 60), 60 - 15);
    }

    #[test]
    fn activity_lists_shrink_with_score() {
        assert_eq!(activity_counts(90), (5, 1));
        assert_eq!(activity_counts(60), (4, 2));
        assert_eq!(activity_counts(45), (3, 3));
        assert_eq!(activity_counts(10), (2, 4));
    }

    #[test]
    fn seeded_slots_repeat() {
        let fav = favor(vec![Element::Fire]);
        let date = NaiveDate::from_ymd_opt(2024, 2, 10).unwrap();
        let day = StemBranch::from_cycle_index(0);
        let seed = hourly_seed(date, day);
        let a = hourly_slots(&mut hourly_rng(seed), &fav);
        let b = hourly_slots(&mut hourly_rng(seed), &fav);
        assert_eq!(a, b);
        assert_eq!(a.len(), 12);
        assert_eq!(a[0].time_range, "23:00-01:00");
        assert_eq!(a[6].time_range, "11:00-13:00");
        assert!(a.iter().all(|h| (30..=100).contains(&h.luck)));
    }

    #[test]
    fn seeds_differ_across_days() {
        let d1 = NaiveDate::from_ymd_opt(2024, 2, 10).unwrap();
        let d2 = NaiveDate::from_ymd_opt(2024, 2, 11).unwrap();
        assert_ne!(
            hourly_seed(d1, StemBranch::from_cycle_index(0)),
            hourly_seed(d2, StemBranch::from_cycle_index(1))
        );
    }

    #[test]
    fn seeded_draws_are_pinned() {
        // raw draws before any favorable bonus
        let seed = hourly_seed(
            NaiveDate::from_ymd_opt(2024, 2, 10).unwrap(),
            StemBranch::from_cycle_index(0),
        );
        assert_eq!(seed, 189_165_056);
        let slots = hourly_slots(&mut hourly_rng(seed), &favor(vec![]));
        let luck: Vec<u8> = slots.iter().map(|h| h.luck).collect();
        assert_eq!(luck, [65, 53, 83, 42, 40, 86, 84, 76, 52, 57, 56, 68]);
    }
}
