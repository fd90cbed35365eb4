//! Ten Gods (十神): the relation of each stem to the day master.
//!
//! The relation depends on which way the elements interact and whether the
//! two stems share polarity:
//!
//! | other vs day master | same polarity | opposite |
//! |---|---|---|
//! | same element        | 比肩 | 劫财 |
//! | day master produces | 食神 | 伤官 |
//! | day master restrains| 偏财 | 正财 |
//! | restrains day master| 七杀 | 正官 |
//! | produces day master | 偏印 | 正印 |

use mingli_calendar::{Element, Stem};
use serde::{Deserialize, Serialize};

/// The ten relations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TenGod {
    #[serde(rename = "比肩")]
    BiJian,
    #[serde(rename = "劫财")]
    JieCai,
    #[serde(rename = "食神")]
    ShiShen,
    #[serde(rename = "伤官")]
    ShangGuan,
    #[serde(rename = "偏财")]
    PianCai,
    #[serde(rename = "正财")]
    ZhengCai,
    #[serde(rename = "七杀")]
    QiSha,
    #[serde(rename = "正官")]
    ZhengGuan,
    #[serde(rename = "偏印")]
    PianYin,
    #[serde(rename = "正印")]
    ZhengYin,
}

/// Which bucket a relation falls into for chart reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TenGodClass {
    Favorable,
    Unfavorable,
    /// 比肩, 偏财 and 偏印 sit in neither bucket.
    Neutral,
}

impl TenGod {
    pub const fn name(self) -> &'static str {
        match self {
            Self::BiJian => "比肩",
            Self::JieCai => "劫财",
            Self::ShiShen => "食神",
            Self::ShangGuan => "伤官",
            Self::PianCai => "偏财",
            Self::ZhengCai => "正财",
            Self::QiSha => "七杀",
            Self::ZhengGuan => "正官",
            Self::PianYin => "偏印",
            Self::ZhengYin => "正印",
        }
    }

    pub const fn class(self) -> TenGodClass {
        match self {
            Self::ZhengGuan | Self::ZhengCai | Self::ZhengYin | Self::ShiShen => {
                TenGodClass::Favorable
            }
            Self::QiSha | Self::JieCai | Self::ShangGuan => TenGodClass::Unfavorable,
            Self::BiJian | Self::PianCai | Self::PianYin => TenGodClass::Neutral,
        }
    }
}

impl std::fmt::Display for TenGod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

use TenGod::*;

/// `TEN_GOD_MATRIX[day][other]`, indexed by stem (甲=0 .. 癸=9).
#[rustfmt::skip]
const TEN_GOD_MATRIX: [[TenGod; 10]; 10] = [
    // 甲
    [BiJian, JieCai, ShiShen, ShangGuan, PianCai, ZhengCai, QiSha, ZhengGuan, PianYin, ZhengYin],
    // 乙
    [JieCai, BiJian, ShangGuan, ShiShen, ZhengCai, PianCai, ZhengGuan, QiSha, ZhengYin, PianYin],
    // 丙
    [PianYin, ZhengYin, BiJian, JieCai, ShiShen, ShangGuan, PianCai, ZhengCai, QiSha, ZhengGuan],
    // 丁
    [ZhengYin, PianYin, JieCai, BiJian, ShangGuan, ShiShen, ZhengCai, PianCai, ZhengGuan, QiSha],
    // 戊
    [QiSha, ZhengGuan, PianYin, ZhengYin, BiJian, JieCai, ShiShen, ShangGuan, PianCai, ZhengCai],
    // 己
    [ZhengGuan, QiSha, ZhengYin, PianYin, JieCai, BiJian, ShangGuan, ShiShen, ZhengCai, PianCai],
    // 庚
    [PianCai, ZhengCai, QiSha, ZhengGuan, PianYin, ZhengYin, BiJian, JieCai, ShiShen, ShangGuan],
    // 辛
    [ZhengCai, PianCai, ZhengGuan, QiSha, ZhengYin, PianYin, JieCai, BiJian, ShangGuan, ShiShen],
    // 壬
    [ShiShen, ShangGuan, PianCai, ZhengCai, QiSha, ZhengGuan, PianYin, ZhengYin, BiJian, JieCai],
    // 癸
    [ShangGuan, ShiShen, ZhengCai, PianCai, ZhengGuan, QiSha, ZhengYin, PianYin, JieCai, BiJian],
];

/// Relation of `other` to the day master `day`.
pub const fn ten_god(day: Stem, other: Stem) -> TenGod {
    TEN_GOD_MATRIX[day.index() as usize][other.index() as usize]
}

/// Ten-gods reading of the three non-day stems.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TenGodsAnalysis {
    pub day_master: Stem,
    pub day_master_element: Element,
    /// Relations of the year, month and hour stems, in that order.
    pub relations: [TenGod; 3],
    pub favorable: Vec<TenGod>,
    pub unfavorable: Vec<TenGod>,
    pub neutral: Vec<TenGod>,
}

impl TenGodsAnalysis {
    /// Whether any of the three stems bears `god`.
    pub fn contains(&self, god: TenGod) -> bool {
        self.relations.contains(&god)
    }
}

/// Classify the year, month and hour stems against the day stem.
///
/// Each bucket lists a relation once, in pillar order.
pub fn compute_ten_gods(day_stem: Stem, other_stems: [Stem; 3]) -> TenGodsAnalysis {
    let relations = other_stems.map(|s| ten_god(day_stem, s));
    let mut favorable = Vec::new();
    let mut unfavorable = Vec::new();
    let mut neutral = Vec::new();
    for god in relations {
        let bucket = match god.class() {
            TenGodClass::Favorable => &mut favorable,
            TenGodClass::Unfavorable => &mut unfavorable,
            TenGodClass::Neutral => &mut neutral,
        };
        if !bucket.contains(&god) {
            bucket.push(god);
        }
    }
    TenGodsAnalysis {
        day_master: day_stem,
        day_master_element: day_stem.element(),
        relations,
        favorable,
        unfavorable,
        neutral,
    }
}
