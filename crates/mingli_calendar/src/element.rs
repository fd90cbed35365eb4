//! Five Elements (五行) and their production/restraint cycles.
//!
//! Production: water → wood → fire → earth → metal → water.
//! Restraint: each element restrains the one two steps ahead in the
//! production cycle (wood → earth → water → fire → metal → wood).

use serde::{Deserialize, Serialize};

/// The five elements, in production-cycle order starting from wood.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Element {
    #[serde(rename = "木")]
    Wood,
    #[serde(rename = "火")]
    Fire,
    #[serde(rename = "土")]
    Earth,
    #[serde(rename = "金")]
    Metal,
    #[serde(rename = "水")]
    Water,
}

/// All 5 elements in order (index 0 = Wood).
pub const ALL_ELEMENTS: [Element; 5] = [
    Element::Wood,
    Element::Fire,
    Element::Earth,
    Element::Metal,
    Element::Water,
];

impl Element {
    /// Chinese glyph.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Wood => "木",
            Self::Fire => "火",
            Self::Earth => "土",
            Self::Metal => "金",
            Self::Water => "水",
        }
    }

    /// English name.
    pub const fn english_name(self) -> &'static str {
        match self {
            Self::Wood => "wood",
            Self::Fire => "fire",
            Self::Earth => "earth",
            Self::Metal => "metal",
            Self::Water => "water",
        }
    }

    /// 0-based index (Wood=0 .. Water=4).
    pub const fn index(self) -> u8 {
        match self {
            Self::Wood => 0,
            Self::Fire => 1,
            Self::Earth => 2,
            Self::Metal => 3,
            Self::Water => 4,
        }
    }

    /// Create from a 0-based index.
    pub fn from_index(i: u8) -> Option<Self> {
        ALL_ELEMENTS.get(i as usize).copied()
    }

    const fn step(self, n: u8) -> Self {
        ALL_ELEMENTS[((self.index() + n) % 5) as usize]
    }

    /// The element this one produces (生).
    pub const fn produces(self) -> Self {
        self.step(1)
    }

    /// The element that produces this one.
    pub const fn produced_by(self) -> Self {
        self.step(4)
    }

    /// The element this one restrains (克).
    pub const fn restrains(self) -> Self {
        self.step(2)
    }

    /// The element that restrains this one.
    pub const fn restrained_by(self) -> Self {
        self.step(3)
    }

    /// All 5 elements in order.
    pub const fn all() -> &'static [Element; 5] {
        &ALL_ELEMENTS
    }
}

impl std::fmt::Display for Element {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
