//! Day-master strength and favorable elements.
//!
//! `power = 2·own + producer − restrainer` over the eight-character tally,
//! scored as a percentage of the character count and clamped to [0, 100].

use mingli_calendar::{ALL_ELEMENTS, Element};
use serde::{Deserialize, Serialize};

use crate::chart::{CHART_CHARACTERS, FourPillarsChart};

/// Score above which the day master is strong.
pub const STRONG_THRESHOLD: f64 = 60.0;
/// Score below which the day master is weak.
pub const WEAK_THRESHOLD: f64 = 40.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StrengthLevel {
    #[serde(rename = "身强")]
    Strong,
    #[serde(rename = "中和")]
    Balanced,
    #[serde(rename = "身弱")]
    Weak,
}

impl StrengthLevel {
    /// Label for a score, by the fixed thresholds.
    pub fn from_score(score: f64) -> Self {
        if score > STRONG_THRESHOLD {
            Self::Strong
        } else if score < WEAK_THRESHOLD {
            Self::Weak
        } else {
            Self::Balanced
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Strong => "身强",
            Self::Balanced => "中和",
            Self::Weak => "身弱",
        }
    }
}

impl std::fmt::Display for StrengthLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrengthAnalysis {
    pub level: StrengthLevel,
    pub score: f64,
    pub day_master_power: i32,
    pub analysis: String,
}

pub fn analyze_strength(chart: &FourPillarsChart) -> StrengthAnalysis {
    let dm = chart.day_master_element;
    let tally = &chart.elements;
    let own = i32::from(tally.count(dm));
    let producer = i32::from(tally.count(dm.produced_by()));
    let restrainer = i32::from(tally.count(dm.restrained_by()));
    let power = 2 * own + producer - restrainer;

    let total = match tally.total() {
        0 => f64::from(CHART_CHARACTERS),
        n => f64::from(n),
    };
    let score = (f64::from(power) / total * 100.0).clamp(0.0, 100.0);
    let level = StrengthLevel::from_score(score);

    let verdict = match level {
        StrengthLevel::Strong => "日主偏旺，宜泄宜克",
        StrengthLevel::Balanced => "日主中和，五行较为平衡",
        StrengthLevel::Weak => "日主偏弱，宜生宜扶",
    };
    let analysis = format!(
        "日主{}{}，同类{}个，生扶{}个，克制{}个，得分{:.0}，{}。",
        chart.day_master.name(),
        dm.name(),
        own,
        producer,
        restrainer,
        score,
        verdict
    );

    StrengthAnalysis {
        level,
        score,
        day_master_power: power,
        analysis,
    }
}

/// Favorable and unfavorable elements; together they cover all five.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FavorableElements {
    /// Primary favorable element first.
    pub favorable: Vec<Element>,
    pub unfavorable: Vec<Element>,
}

impl FavorableElements {
    pub fn primary(&self) -> Option<Element> {
        self.favorable.first().copied()
    }

    pub fn is_favorable(&self, e: Element) -> bool {
        self.favorable.contains(&e)
    }

    pub fn is_unfavorable(&self, e: Element) -> bool {
        self.unfavorable.contains(&e)
    }
}

/// Strong charts favor the restraining and draining elements; weak charts
/// favor the producing element and the day master's own.
///
/// A balanced chart leans on whichever side of 50 its score falls.
pub fn calculate_favorable_elements(chart: &FourPillarsChart) -> FavorableElements {
    let strength = analyze_strength(chart);
    favorable_for(chart.day_master_element, &strength)
}

pub fn favorable_for(dm: Element, strength: &StrengthAnalysis) -> FavorableElements {
    let leans_strong = match strength.level {
        StrengthLevel::Strong => true,
        StrengthLevel::Weak => false,
        StrengthLevel::Balanced => strength.score >= 50.0,
    };
    let favorable = if leans_strong {
        vec![dm.restrained_by(), dm.produces()]
    } else {
        vec![dm.produced_by(), dm]
    };
    let unfavorable = ALL_ELEMENTS
        .iter()
        .copied()
        .filter(|e| !favorable.contains(e))
        .collect();
    FavorableElements {
        favorable,
        unfavorable,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::compute_four_pillars;
    use mingli_calendar::{SolarDateTime, solar_to_lunar};

    fn chart(y: i32, m: u8, d: u8, h: u8) -> FourPillarsChart {
        let dt = SolarDateTime::new(y, m, d, h, 0).unwrap();
        compute_four_pillars(&solar_to_lunar(&dt).unwrap())
    }

    #[test]
    fn thresholds() {
        assert_eq!(StrengthLevel::from_score(60.0), StrengthLevel::Balanced);
        assert_eq!(StrengthLevel::from_score(60.1), StrengthLevel::Strong);
        assert_eq!(StrengthLevel::from_score(40.0), StrengthLevel::Balanced);
        assert_eq!(StrengthLevel::from_score(39.9), StrengthLevel::Weak);
    }

    #[test]
    fn birth_1990_is_strong_metal() {
        // 金3 土1 火2: 2·3 + 1 − 2 = 5, 5/8 = 62.5
        let c = chart(1990, 5, 15, 14);
        let s = analyze_strength(&c);
        assert_eq!(s.day_master_power, 5);
        assert!((s.score - 62.5).abs() < 1e-9);
        assert_eq!(s.level, StrengthLevel::Strong);
        assert!(s.analysis.contains("庚金"));

        let fav = calculate_favorable_elements(&c);
        assert_eq!(fav.favorable, vec![Element::Fire, Element::Water]);
        assert_eq!(
            fav.unfavorable,
            vec![Element::Wood, Element::Earth, Element::Metal]
        );
        assert_eq!(fav.primary(), Some(Element::Fire));
    }

    #[test]
    fn weak_favors_producer_and_self() {
        let s = StrengthAnalysis {
            level: StrengthLevel::Weak,
            score: 12.5,
            day_master_power: 1,
            analysis: String::new(),
        };
        let fav = favorable_for(Element::Wood, &s);
        assert_eq!(fav.favorable, vec![Element::Water, Element::Wood]);
        assert!(fav.is_unfavorable(Element::Metal));
    }

    #[test]
    fn balanced_leans_by_half() {
        let mut s = StrengthAnalysis {
            level: StrengthLevel::Balanced,
            score: 50.0,
            day_master_power: 4,
            analysis: String::new(),
        };
        assert_eq!(favorable_for(Element::Fire, &s).favorable[0], Element::Water);
        s.score = 45.0;
        assert_eq!(favorable_for(Element::Fire, &s).favorable[0], Element::Wood);
    }
}
