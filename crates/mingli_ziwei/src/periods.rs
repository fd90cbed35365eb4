//! Major periods (大限): ten-year phases walking the palace ring.

use mingli_calendar::Branch;
use serde::{Deserialize, Serialize};

use crate::palace::{Palace, PalaceName};
use crate::placement::PALACE_COUNT;

/// Age at which the first period starts.
pub const FIRST_PERIOD_AGE: u8 = 4;
/// Length of each period in years.
pub const PERIOD_YEARS: u8 = 10;

/// Coarse outlook of a period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PeriodFortune {
    #[serde(rename = "吉")]
    Auspicious,
    #[serde(rename = "平")]
    Neutral,
    #[serde(rename = "凶")]
    Inauspicious,
}

impl PeriodFortune {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Auspicious => "吉",
            Self::Neutral => "平",
            Self::Inauspicious => "凶",
        }
    }

    /// Tally bright stars and auspicious transforms against dim stars,
    /// 化忌 and the malefic 擎羊/陀罗.
    pub fn of_palace(palace: &Palace) -> Self {
        let mut score = 0i32;
        if palace.brightness.is_bright() {
            score += 1;
        }
        if palace.brightness.is_dim() {
            score -= 1;
        }
        for t in &palace.transforms {
            score += if t.transform.is_auspicious() { 1 } else { -1 };
        }
        score -= palace.aux_stars.iter().filter(|s| s.is_malefic()).count() as i32;
        match score.signum() {
            1 => Self::Auspicious,
            -1 => Self::Inauspicious,
            _ => Self::Neutral,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MajorPeriod {
    pub start_age: u8,
    pub end_age: u8,
    pub branch: Branch,
    pub palace: PalaceName,
    /// Empty until cross-referenced with the built palaces.
    pub stars: Vec<String>,
    pub fortune: PeriodFortune,
}

/// Twelve periods from age 4, forward round the ring for men and backward
/// for women.
pub fn calculate_major_periods(life_palace: u8, is_male: bool) -> Vec<MajorPeriod> {
    (0..PALACE_COUNT)
        .map(|i| {
            let step = if is_male { i as i32 } else { -(i as i32) };
            let pos = (life_palace as i32 + step).rem_euclid(PALACE_COUNT as i32) as u8;
            let start_age = FIRST_PERIOD_AGE + PERIOD_YEARS * i;
            MajorPeriod {
                start_age,
                end_age: start_age + PERIOD_YEARS - 1,
                branch: Branch::cyclic(i64::from(pos)),
                palace: PalaceName::at(life_palace, pos),
                stars: Vec::new(),
                fortune: PeriodFortune::Neutral,
            }
        })
        .collect()
}

/// Fill each period's stars and outlook from the palace it sits in.
pub fn cross_reference(periods: &mut [MajorPeriod], palaces: &[Palace]) {
    for period in periods.iter_mut() {
        if let Some(palace) = palaces.iter().find(|p| p.name == period.palace) {
            period.stars = palace.star_names().into_iter().map(String::from).collect();
            period.fortune = PeriodFortune::of_palace(palace);
        }
    }
}
