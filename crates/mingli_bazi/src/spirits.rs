//! Spirits (神煞) found in a BaZi chart.
//!
//! Two are keyed on the day stem (天乙贵人, 文昌贵人), two on the branches
//! alone (桃花 on 子卯午酉, 华盖 on 辰戌丑未).

use mingli_calendar::{Branch, SexagenaryDate, Stem};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Spirit {
    #[serde(rename = "天乙贵人")]
    TianYiGuiRen,
    #[serde(rename = "文昌贵人")]
    WenChangGuiRen,
    #[serde(rename = "桃花")]
    TaoHua,
    #[serde(rename = "华盖")]
    HuaGai,
}

impl Spirit {
    pub const fn name(self) -> &'static str {
        match self {
            Self::TianYiGuiRen => "天乙贵人",
            Self::WenChangGuiRen => "文昌贵人",
            Self::TaoHua => "桃花",
            Self::HuaGai => "华盖",
        }
    }
}

impl std::fmt::Display for Spirit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Nobleman branches per day stem: 甲戊庚 丑未, 乙己 子申, 丙丁 亥酉, 辛 寅午, 壬癸 卯巳.
pub const fn nobleman_branches(day_stem: Stem) -> [Branch; 2] {
    match day_stem {
        Stem::Jia | Stem::Wu | Stem::Geng => [Branch::Chou, Branch::Wei],
        Stem::Yi | Stem::Ji => [Branch::Zi, Branch::Shen],
        Stem::Bing | Stem::Ding => [Branch::Hai, Branch::You],
        Stem::Xin => [Branch::Yin, Branch::Wu],
        Stem::Ren | Stem::Gui => [Branch::Mao, Branch::Si],
    }
}

/// Scholar branch per day stem.
pub const fn scholar_branch(day_stem: Stem) -> Branch {
    match day_stem {
        Stem::Jia => Branch::Si,
        Stem::Yi => Branch::Wu,
        Stem::Bing | Stem::Wu => Branch::Shen,
        Stem::Ding | Stem::Ji => Branch::You,
        Stem::Geng => Branch::Hai,
        Stem::Xin => Branch::Zi,
        Stem::Ren => Branch::Yin,
        Stem::Gui => Branch::Mao,
    }
}

const fn is_peach_blossom(b: Branch) -> bool {
    matches!(b, Branch::Zi | Branch::Mao | Branch::Wu | Branch::You)
}

const fn is_canopy(b: Branch) -> bool {
    matches!(b, Branch::Chen | Branch::Xu | Branch::Chou | Branch::Wei)
}

/// Spirits present in the chart, each listed once in order of discovery.
pub fn compute_spirits(date: &SexagenaryDate) -> Vec<Spirit> {
    let day_stem = date.day.stem;
    let nobles = nobleman_branches(day_stem);
    let scholar = scholar_branch(day_stem);

    let mut found = Vec::new();
    for pillar in date.pillars() {
        let b = pillar.branch;
        if nobles.contains(&b) {
            found.push(Spirit::TianYiGuiRen);
        }
        if b == scholar {
            found.push(Spirit::WenChangGuiRen);
        }
        if is_peach_blossom(b) {
            found.push(Spirit::TaoHua);
        }
        if is_canopy(b) {
            found.push(Spirit::HuaGai);
        }
    }

    let mut spirits = Vec::with_capacity(found.len());
    for s in found {
        if !spirits.contains(&s) {
            spirits.push(s);
        }
    }
    spirits
}

#[cfg(test)]
mod tests {
    use super::*;
    use mingli_calendar::{SolarDateTime, solar_to_lunar};

    #[test]
    fn birth_1990_05_15() {
        // 庚午 辛巳 庚子 癸未: 午/子 peach blossom, 未 canopy and 庚 nobleman
        let s = solar_to_lunar(&SolarDateTime::new(1990, 5, 15, 14, 0).unwrap()).unwrap();
        let spirits = compute_spirits(&s);
        assert_eq!(spirits, vec![Spirit::TaoHua, Spirit::TianYiGuiRen, Spirit::HuaGai]);
    }

    #[test]
    fn no_duplicates() {
        for day in 1..=28 {
            let s = solar_to_lunar(&SolarDateTime::new(2001, 3, day, 9, 0).unwrap()).unwrap();
            let spirits = compute_spirits(&s);
            for (i, a) in spirits.iter().enumerate() {
                assert!(!spirits[i + 1..].contains(a), "duplicate {a} on day {day}");
            }
        }
    }

    #[test]
    fn lookup_tables() {
        assert_eq!(nobleman_branches(Stem::Geng), [Branch::Chou, Branch::Wei]);
        assert_eq!(scholar_branch(Stem::Jia), Branch::Si);
        assert_eq!(scholar_branch(Stem::Gui), Branch::Mao);
    }
}
