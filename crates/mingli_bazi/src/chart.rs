//! Four Pillars chart assembly and element tally.

use mingli_calendar::{ALL_ELEMENTS, Element, SexagenaryDate, Stem, StemBranch};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::spirits::{Spirit, compute_spirits};
use crate::ten_gods::{TenGod, TenGodsAnalysis, compute_ten_gods, ten_god};

/// Number of characters in a chart (four stems and four branches).
pub const CHART_CHARACTERS: u8 = 8;

/// One pillar with its elements and relation to the day master.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pillar {
    pub stem_branch: StemBranch,
    pub stem_element: Element,
    pub branch_element: Element,
    /// 藏干; informational only, not tallied.
    pub hidden_stems: Vec<Stem>,
    /// `None` on the day pillar.
    pub ten_god: Option<TenGod>,
}

impl Pillar {
    fn new(stem_branch: StemBranch, ten_god: Option<TenGod>) -> Self {
        Self {
            stem_branch,
            stem_element: stem_branch.stem_element(),
            branch_element: stem_branch.branch_element(),
            hidden_stems: stem_branch.branch.hidden_stems().to_vec(),
            ten_god,
        }
    }

    /// Two-character name, e.g. "庚午".
    pub fn name(&self) -> String {
        self.stem_branch.name()
    }
}

/// Element counts over the eight characters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElementTally {
    #[serde(rename = "木")]
    pub wood: u8,
    #[serde(rename = "火")]
    pub fire: u8,
    #[serde(rename = "土")]
    pub earth: u8,
    #[serde(rename = "金")]
    pub metal: u8,
    #[serde(rename = "水")]
    pub water: u8,
}

impl ElementTally {
    /// Count the stem and branch element of every pillar.
    pub fn from_pillars(pillars: &[StemBranch]) -> Self {
        let mut tally = Self::default();
        for sb in pillars {
            tally.add(sb.stem_element());
            tally.add(sb.branch_element());
        }
        tally
    }

    fn slot(&mut self, e: Element) -> &mut u8 {
        match e {
            Element::Wood => &mut self.wood,
            Element::Fire => &mut self.fire,
            Element::Earth => &mut self.earth,
            Element::Metal => &mut self.metal,
            Element::Water => &mut self.water,
        }
    }

    /// Increment the count for `e`.
    pub fn add(&mut self, e: Element) {
        *self.slot(e) += 1;
    }

    /// Count for one element.
    pub const fn count(&self, e: Element) -> u8 {
        match e {
            Element::Wood => self.wood,
            Element::Fire => self.fire,
            Element::Earth => self.earth,
            Element::Metal => self.metal,
            Element::Water => self.water,
        }
    }

    /// Sum over all five elements; 8 for a full chart.
    pub const fn total(&self) -> u8 {
        self.wood + self.fire + self.earth + self.metal + self.water
    }

    /// Elements with a zero count, in production-cycle order.
    pub fn missing(&self) -> Vec<Element> {
        ALL_ELEMENTS
            .iter()
            .copied()
            .filter(|&e| self.count(e) == 0)
            .collect()
    }

    /// The element with the highest count; ties go to the earlier element.
    pub fn dominant(&self) -> Element {
        let mut best = Element::Wood;
        for &e in ALL_ELEMENTS.iter() {
            if self.count(e) > self.count(best) {
                best = e;
            }
        }
        best
    }
}

/// A complete BaZi chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FourPillarsChart {
    pub year: Pillar,
    pub month: Pillar,
    pub day: Pillar,
    pub hour: Pillar,
    pub day_master: Stem,
    pub day_master_element: Element,
    pub elements: ElementTally,
    pub ten_gods: TenGodsAnalysis,
    pub spirits: Vec<Spirit>,
}

impl FourPillarsChart {
    pub fn pillars(&self) -> [&Pillar; 4] {
        [&self.year, &self.month, &self.day, &self.hour]
    }

    pub fn stem_branches(&self) -> [StemBranch; 4] {
        [
            self.year.stem_branch,
            self.month.stem_branch,
            self.day.stem_branch,
            self.hour.stem_branch,
        ]
    }

    /// True when any pillar carries `god` as its relation.
    pub fn has_ten_god(&self, god: TenGod) -> bool {
        self.ten_gods.contains(god)
    }

    pub fn has_spirit(&self, spirit: Spirit) -> bool {
        self.spirits.contains(&spirit)
    }
}

/// Build the chart from an already-derived sexagenary date.
pub fn compute_four_pillars(date: &SexagenaryDate) -> FourPillarsChart {
    let day_master = date.day.stem;
    let others = [date.year.stem, date.month.stem, date.hour.stem];
    let ten_gods = compute_ten_gods(day_master, others);
    let elements = ElementTally::from_pillars(&date.pillars());
    let spirits = compute_spirits(date);

    debug!(
        day_master = day_master.name(),
        total = elements.total(),
        spirits = spirits.len(),
        "four pillars assembled"
    );

    FourPillarsChart {
        year: Pillar::new(date.year, Some(ten_god(day_master, date.year.stem))),
        month: Pillar::new(date.month, Some(ten_god(day_master, date.month.stem))),
        day: Pillar::new(date.day, None),
        hour: Pillar::new(date.hour, Some(ten_god(day_master, date.hour.stem))),
        day_master,
        day_master_element: day_master.element(),
        elements,
        ten_gods,
        spirits,
    }
}
