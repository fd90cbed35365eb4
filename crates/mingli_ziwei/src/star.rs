//! Stars, transformations and brightness grades.

use serde::{Deserialize, Serialize};

/// The fourteen main stars (十四主星).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MainStar {
    #[serde(rename = "紫微")]
    ZiWei,
    #[serde(rename = "天机")]
    TianJi,
    #[serde(rename = "太阳")]
    TaiYang,
    #[serde(rename = "武曲")]
    WuQu,
    #[serde(rename = "天同")]
    TianTong,
    #[serde(rename = "廉贞")]
    LianZhen,
    #[serde(rename = "天府")]
    TianFu,
    #[serde(rename = "太阴")]
    TaiYin,
    #[serde(rename = "贪狼")]
    TanLang,
    #[serde(rename = "巨门")]
    JuMen,
    #[serde(rename = "天相")]
    TianXiang,
    #[serde(rename = "天梁")]
    TianLiang,
    #[serde(rename = "七杀")]
    QiSha,
    #[serde(rename = "破军")]
    PoJun,
}

pub const ALL_MAIN_STARS: [MainStar; 14] = [
    MainStar::ZiWei,
    MainStar::TianJi,
    MainStar::TaiYang,
    MainStar::WuQu,
    MainStar::TianTong,
    MainStar::LianZhen,
    MainStar::TianFu,
    MainStar::TaiYin,
    MainStar::TanLang,
    MainStar::JuMen,
    MainStar::TianXiang,
    MainStar::TianLiang,
    MainStar::QiSha,
    MainStar::PoJun,
];

impl MainStar {
    pub const fn name(self) -> &'static str {
        match self {
            Self::ZiWei => "紫微",
            Self::TianJi => "天机",
            Self::TaiYang => "太阳",
            Self::WuQu => "武曲",
            Self::TianTong => "天同",
            Self::LianZhen => "廉贞",
            Self::TianFu => "天府",
            Self::TaiYin => "太阴",
            Self::TanLang => "贪狼",
            Self::JuMen => "巨门",
            Self::TianXiang => "天相",
            Self::TianLiang => "天梁",
            Self::QiSha => "七杀",
            Self::PoJun => "破军",
        }
    }
}

/// Auxiliary stars placed by month, hour and year stem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AuxStar {
    #[serde(rename = "左辅")]
    ZuoFu,
    #[serde(rename = "右弼")]
    YouBi,
    #[serde(rename = "文昌")]
    WenChang,
    #[serde(rename = "文曲")]
    WenQu,
    #[serde(rename = "禄存")]
    LuCun,
    #[serde(rename = "擎羊")]
    QingYang,
    #[serde(rename = "陀罗")]
    TuoLuo,
}

pub const ALL_AUX_STARS: [AuxStar; 7] = [
    AuxStar::ZuoFu,
    AuxStar::YouBi,
    AuxStar::WenChang,
    AuxStar::WenQu,
    AuxStar::LuCun,
    AuxStar::QingYang,
    AuxStar::TuoLuo,
];

impl AuxStar {
    pub const fn name(self) -> &'static str {
        match self {
            Self::ZuoFu => "左辅",
            Self::YouBi => "右弼",
            Self::WenChang => "文昌",
            Self::WenQu => "文曲",
            Self::LuCun => "禄存",
            Self::QingYang => "擎羊",
            Self::TuoLuo => "陀罗",
        }
    }

    /// 擎羊 and 陀罗.
    pub const fn is_malefic(self) -> bool {
        matches!(self, Self::QingYang | Self::TuoLuo)
    }
}

/// Either kind of star; serializes as the bare glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Star {
    Main(MainStar),
    Aux(AuxStar),
}

impl Star {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Main(s) => s.name(),
            Self::Aux(s) => s.name(),
        }
    }
}

impl From<MainStar> for Star {
    fn from(s: MainStar) -> Self {
        Self::Main(s)
    }
}

impl From<AuxStar> for Star {
    fn from(s: AuxStar) -> Self {
        Self::Aux(s)
    }
}

/// The four transformations (四化).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Transform {
    #[serde(rename = "化禄")]
    Lu,
    #[serde(rename = "化权")]
    Quan,
    #[serde(rename = "化科")]
    Ke,
    #[serde(rename = "化忌")]
    Ji,
}

pub const ALL_TRANSFORMS: [Transform; 4] =
    [Transform::Lu, Transform::Quan, Transform::Ke, Transform::Ji];

impl Transform {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Lu => "化禄",
            Self::Quan => "化权",
            Self::Ke => "化科",
            Self::Ji => "化忌",
        }
    }

    /// Everything except 化忌.
    pub const fn is_auspicious(self) -> bool {
        !matches!(self, Self::Ji)
    }
}

/// Brightness grade of a main star in a palace, brightest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Brightness {
    #[serde(rename = "庙")]
    Miao,
    #[serde(rename = "旺")]
    Wang,
    #[serde(rename = "得")]
    De,
    #[serde(rename = "利")]
    Li,
    #[serde(rename = "平")]
    Ping,
    #[serde(rename = "不")]
    Bu,
    #[serde(rename = "陷")]
    Xian,
}

impl Brightness {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Miao => "庙",
            Self::Wang => "旺",
            Self::De => "得",
            Self::Li => "利",
            Self::Ping => "平",
            Self::Bu => "不",
            Self::Xian => "陷",
        }
    }

    /// 庙 or 旺.
    pub const fn is_bright(self) -> bool {
        matches!(self, Self::Miao | Self::Wang)
    }

    /// 不 or 陷.
    pub const fn is_dim(self) -> bool {
        matches!(self, Self::Bu | Self::Xian)
    }
}

macro_rules! glyph_display {
    ($($t:ty),*) => {
        $(impl std::fmt::Display for $t {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.name())
            }
        })*
    };
}

glyph_display!(MainStar, AuxStar, Star, Transform, Brightness);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn star_serializes_as_glyph() {
        let json = serde_json::to_string(&Star::Main(MainStar::ZiWei)).unwrap();
        assert_eq!(json, "\"紫微\"");
        let json = serde_json::to_string(&Star::Aux(AuxStar::WenChang)).unwrap();
        assert_eq!(json, "\"文昌\"");
        let back: Star = serde_json::from_str("\"左辅\"").unwrap();
        assert_eq!(back, Star::Aux(AuxStar::ZuoFu));
    }

    #[test]
    fn brightness_order() {
        assert!(Brightness::Miao < Brightness::Ping);
        assert!(Brightness::Ping < Brightness::Xian);
        assert!(Brightness::Wang.is_bright());
        assert!(Brightness::Bu.is_dim());
        assert!(!Brightness::Ping.is_dim());
    }

    #[test]
    fn names_are_distinct() {
        let mut names: Vec<&str> = ALL_MAIN_STARS.iter().map(|s| s.name()).collect();
        names.extend(ALL_AUX_STARS.iter().map(|s| s.name()));
        let n = names.len();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), n);
    }
}
