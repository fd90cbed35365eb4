//! Earthly Branches (地支), cycling with period 12.
//!
//! Each branch also names a zodiac animal and a two-hour segment of the
//! day, the first (Zi) straddling midnight: 23:00–01:00.

use serde::{Deserialize, Serialize};

use crate::element::Element;
use crate::stem::{Polarity, Stem};

/// The 12 earthly branches starting from Zi (子).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Branch {
    #[serde(rename = "子")]
    Zi,
    #[serde(rename = "丑")]
    Chou,
    #[serde(rename = "寅")]
    Yin,
    #[serde(rename = "卯")]
    Mao,
    #[serde(rename = "辰")]
    Chen,
    #[serde(rename = "巳")]
    Si,
    #[serde(rename = "午")]
    Wu,
    #[serde(rename = "未")]
    Wei,
    #[serde(rename = "申")]
    Shen,
    #[serde(rename = "酉")]
    You,
    #[serde(rename = "戌")]
    Xu,
    #[serde(rename = "亥")]
    Hai,
}

/// All 12 branches in order (index 0 = Zi).
pub const ALL_BRANCHES: [Branch; 12] = [
    Branch::Zi,
    Branch::Chou,
    Branch::Yin,
    Branch::Mao,
    Branch::Chen,
    Branch::Si,
    Branch::Wu,
    Branch::Wei,
    Branch::Shen,
    Branch::You,
    Branch::Xu,
    Branch::Hai,
];

const BRANCH_NAMES: [&str; 12] = [
    "子", "丑", "寅", "卯", "辰", "巳", "午", "未", "申", "酉", "戌", "亥",
];

const BRANCH_PINYIN: [&str; 12] = [
    "zi", "chou", "yin", "mao", "chen", "si", "wu", "wei", "shen", "you", "xu", "hai",
];

const ZODIAC_NAMES: [&str; 12] = [
    "鼠", "牛", "虎", "兔", "龙", "蛇", "马", "羊", "猴", "鸡", "狗", "猪",
];

/// Hidden stems (藏干) per branch, main qi first.
const HIDDEN_STEMS: [&[Stem]; 12] = [
    &[Stem::Gui],
    &[Stem::Ji, Stem::Gui, Stem::Xin],
    &[Stem::Jia, Stem::Bing, Stem::Wu],
    &[Stem::Yi],
    &[Stem::Wu, Stem::Yi, Stem::Gui],
    &[Stem::Bing, Stem::Geng, Stem::Wu],
    &[Stem::Ding, Stem::Ji],
    &[Stem::Ji, Stem::Ding, Stem::Yi],
    &[Stem::Geng, Stem::Ren, Stem::Wu],
    &[Stem::Xin],
    &[Stem::Wu, Stem::Xin, Stem::Ding],
    &[Stem::Ren, Stem::Jia],
];

impl Branch {
    /// 0-based index (Zi=0 .. Hai=11).
    pub const fn index(self) -> u8 {
        match self {
            Self::Zi => 0,
            Self::Chou => 1,
            Self::Yin => 2,
            Self::Mao => 3,
            Self::Chen => 4,
            Self::Si => 5,
            Self::Wu => 6,
            Self::Wei => 7,
            Self::Shen => 8,
            Self::You => 9,
            Self::Xu => 10,
            Self::Hai => 11,
        }
    }

    /// Create from a 0-based index. Returns `None` outside 0..=11.
    pub fn from_index(i: u8) -> Option<Self> {
        ALL_BRANCHES.get(i as usize).copied()
    }

    /// Branch at position `n` of the cycle, wrapping mod 12.
    pub const fn cyclic(n: i64) -> Self {
        ALL_BRANCHES[n.rem_euclid(12) as usize]
    }

    /// Branch governing a clock hour (0..=23): ⌊(hour+1)/2⌋ mod 12.
    pub const fn from_hour(hour: u8) -> Self {
        ALL_BRANCHES[(((hour as usize) + 1) / 2) % 12]
    }

    /// Chinese glyph.
    pub fn name(self) -> &'static str {
        BRANCH_NAMES[self.index() as usize]
    }

    /// Pinyin romanisation.
    pub fn pinyin(self) -> &'static str {
        BRANCH_PINYIN[self.index() as usize]
    }

    /// Zodiac animal (生肖).
    pub fn zodiac(self) -> &'static str {
        ZODIAC_NAMES[self.index() as usize]
    }

    /// Element of the branch; the four tomb branches are earth.
    pub const fn element(self) -> Element {
        match self {
            Self::Zi | Self::Hai => Element::Water,
            Self::Yin | Self::Mao => Element::Wood,
            Self::Si | Self::Wu => Element::Fire,
            Self::Shen | Self::You => Element::Metal,
            Self::Chou | Self::Chen | Self::Wei | Self::Xu => Element::Earth,
        }
    }

    /// Yang for even indices (子 寅 ...), yin for odd.
    pub const fn polarity(self) -> Polarity {
        if self.index() % 2 == 0 {
            Polarity::Yang
        } else {
            Polarity::Yin
        }
    }

    /// Hidden stems, main qi first.
    pub fn hidden_stems(self) -> &'static [Stem] {
        HIDDEN_STEMS[self.index() as usize]
    }

    /// Clock-hour span `(start, end)`; Zi wraps midnight as (23, 1).
    pub const fn hour_range(self) -> (u8, u8) {
        let i = self.index();
        ((2 * i + 23) % 24, (2 * i + 1) % 24)
    }

    /// Opposite branch (六冲).
    pub const fn clash(self) -> Self {
        ALL_BRANCHES[((self.index() + 6) % 12) as usize]
    }

    /// True when `other` is the opposite branch.
    pub fn clashes(self, other: Self) -> bool {
        self.clash() == other
    }

    /// Six-harmony partner (六合): 子丑, 寅亥, 卯戌, 辰酉, 巳申, 午未.
    pub const fn harmony(self) -> Self {
        ALL_BRANCHES[((13 - self.index()) % 12) as usize]
    }

    /// True when `other` is the six-harmony partner.
    pub fn combines(self, other: Self) -> bool {
        self.harmony() == other
    }

    /// All 12 branches in order.
    pub const fn all() -> &'static [Branch; 12] {
        &ALL_BRANCHES
    }
}

impl std::fmt::Display for Branch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
