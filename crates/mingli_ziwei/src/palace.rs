//! The twelve palaces and their assembled records.

use mingli_calendar::Branch;
use serde::{Deserialize, Serialize};

use crate::brightness::palace_brightness;
use crate::placement::{PALACE_COUNT, StarRing};
use crate::star::{AuxStar, Brightness, MainStar, Star, Transform};
use crate::transforms::FourTransforms;

/// Palace names, counted counter-clockwise from the life palace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PalaceName {
    #[serde(rename = "命宫")]
    Life,
    #[serde(rename = "兄弟")]
    Siblings,
    #[serde(rename = "夫妻")]
    Spouse,
    #[serde(rename = "子女")]
    Children,
    #[serde(rename = "财帛")]
    Wealth,
    #[serde(rename = "疾厄")]
    Health,
    #[serde(rename = "迁移")]
    Travel,
    #[serde(rename = "交友")]
    Friends,
    #[serde(rename = "官禄")]
    Career,
    #[serde(rename = "田宅")]
    Property,
    #[serde(rename = "福德")]
    Fortune,
    #[serde(rename = "父母")]
    Parents,
}

pub const ALL_PALACE_NAMES: [PalaceName; 12] = [
    PalaceName::Life,
    PalaceName::Siblings,
    PalaceName::Spouse,
    PalaceName::Children,
    PalaceName::Wealth,
    PalaceName::Health,
    PalaceName::Travel,
    PalaceName::Friends,
    PalaceName::Career,
    PalaceName::Property,
    PalaceName::Fortune,
    PalaceName::Parents,
];

impl PalaceName {
    pub const fn index(self) -> u8 {
        self as u8
    }

    pub fn from_index(i: u8) -> Option<Self> {
        ALL_PALACE_NAMES.get(i as usize).copied()
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Life => "命宫",
            Self::Siblings => "兄弟",
            Self::Spouse => "夫妻",
            Self::Children => "子女",
            Self::Wealth => "财帛",
            Self::Health => "疾厄",
            Self::Travel => "迁移",
            Self::Friends => "交友",
            Self::Career => "官禄",
            Self::Property => "田宅",
            Self::Fortune => "福德",
            Self::Parents => "父母",
        }
    }

    /// Name of the palace at ring `position` for a given life palace.
    pub const fn at(life_palace: u8, position: u8) -> Self {
        let i = (life_palace as i32 - position as i32).rem_euclid(PALACE_COUNT as i32);
        ALL_PALACE_NAMES[i as usize]
    }

    /// Ring position of this palace for a given life palace.
    pub const fn position(self, life_palace: u8) -> u8 {
        (life_palace as i32 - self.index() as i32).rem_euclid(PALACE_COUNT as i32) as u8
    }
}

impl std::fmt::Display for PalaceName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A star that carries one of the four transformations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransformedStar {
    pub star: Star,
    pub transform: Transform,
}

/// One palace of the natal chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palace {
    pub name: PalaceName,
    /// Ring position (branch) of the palace.
    pub branch: Branch,
    pub main_stars: Vec<MainStar>,
    pub aux_stars: Vec<AuxStar>,
    pub transforms: Vec<TransformedStar>,
    pub brightness: Brightness,
    pub is_body_palace: bool,
    pub summary: String,
}

impl Palace {
    pub fn has_main_star(&self, star: MainStar) -> bool {
        self.main_stars.contains(&star)
    }

    pub fn has_transform(&self, t: Transform) -> bool {
        self.transforms.iter().any(|ts| ts.transform == t)
    }

    /// Every star glyph in the palace, main stars first.
    pub fn star_names(&self) -> Vec<&'static str> {
        self.main_stars
            .iter()
            .map(|s| s.name())
            .chain(self.aux_stars.iter().map(|s| s.name()))
            .collect()
    }
}

fn join(names: impl Iterator<Item = &'static str>) -> String {
    names.collect::<Vec<_>>().join("、")
}

fn summarize(
    name: PalaceName,
    branch: Branch,
    main: &[MainStar],
    aux: &[AuxStar],
    transforms: &[TransformedStar],
    brightness: Brightness,
    borrowed: &[MainStar],
) -> String {
    let mut s = format!("{}在{}", name.name(), branch.name());
    if main.is_empty() {
        if borrowed.is_empty() {
            s.push_str("，无主星");
        } else {
            s.push_str("，无主星，借对宫");
            s.push_str(&join(borrowed.iter().map(|m| m.name())));
        }
    } else {
        s.push_str("，主星");
        s.push_str(&join(main.iter().map(|m| m.name())));
        s.push('（');
        s.push_str(brightness.name());
        s.push('）');
    }
    if !aux.is_empty() {
        s.push_str("，辅星");
        s.push_str(&join(aux.iter().map(|a| a.name())));
    }
    for ts in transforms {
        s.push('，');
        s.push_str(ts.star.name());
        s.push_str(ts.transform.name());
    }
    s.push('。');
    s
}

/// Combine the placed stars into twelve palace records, ordered by branch
/// (子 first).
pub fn build_palaces(
    life_palace: u8,
    body_palace: u8,
    main: &StarRing<MainStar>,
    aux: &StarRing<AuxStar>,
    transforms: &FourTransforms,
) -> Vec<Palace> {
    (0..PALACE_COUNT)
        .map(|pos| {
            let i = pos as usize;
            let name = PalaceName::at(life_palace, pos);
            let branch = Branch::cyclic(i64::from(pos));
            let main_stars = main[i].clone();
            let aux_stars = aux[i].clone();

            let carried = main_stars
                .iter()
                .map(|&s| Star::Main(s))
                .chain(aux_stars.iter().map(|&s| Star::Aux(s)));
            let mut palace_transforms = Vec::new();
            for star in carried {
                for transform in transforms.of(star) {
                    palace_transforms.push(TransformedStar { star, transform });
                }
            }

            let brightness = palace_brightness(&main_stars, pos);
            let opposite = &main[(i + 6) % PALACE_COUNT as usize];
            let summary = summarize(
                name,
                branch,
                &main_stars,
                &aux_stars,
                &palace_transforms,
                brightness,
                opposite,
            );

            Palace {
                name,
                branch,
                main_stars,
                aux_stars,
                transforms: palace_transforms,
                brightness,
                is_body_palace: pos == body_palace,
                summary,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::placement::{arrange_auxiliary_stars, arrange_main_stars};
    use crate::transforms::calculate_four_transforms;
    use mingli_calendar::Stem;

    #[test]
    fn names_run_counter_clockwise() {
        assert_eq!(PalaceName::at(6, 6), PalaceName::Life);
        assert_eq!(PalaceName::at(6, 5), PalaceName::Siblings);
        assert_eq!(PalaceName::at(6, 7), PalaceName::Parents);
        assert_eq!(PalaceName::at(0, 1), PalaceName::Parents);
        for life in 0..12 {
            for name in ALL_PALACE_NAMES {
                assert_eq!(PalaceName::at(life, name.position(life)), name);
            }
        }
    }

    #[test]
    fn palaces_carry_every_star_once() {
        let main = arrange_main_stars(21, 6);
        let aux = arrange_auxiliary_stars(1990, 4, 14);
        let t = calculate_four_transforms(Stem::Geng);
        let palaces = build_palaces(6, 8, &main, &aux, &t);
        assert_eq!(palaces.len(), 12);
        let mains: usize = palaces.iter().map(|p| p.main_stars.len()).sum();
        let auxes: usize = palaces.iter().map(|p| p.aux_stars.len()).sum();
        assert_eq!(mains, 14);
        assert_eq!(auxes, 7);
        let transforms: usize = palaces.iter().map(|p| p.transforms.len()).sum();
        assert_eq!(transforms, 4);
        assert_eq!(palaces.iter().filter(|p| p.is_body_palace).count(), 1);
        assert_eq!(palaces[6].name, PalaceName::Life);
        assert!(palaces[6].summary.starts_with("命宫在午"));
    }

    #[test]
    fn empty_palace_borrows_opposite() {
        let mut main: StarRing<MainStar> = std::array::from_fn(|_| Vec::new());
        main[8] = vec![MainStar::TianJi, MainStar::TaiYin];
        let aux: StarRing<AuxStar> = std::array::from_fn(|_| Vec::new());
        let t = calculate_four_transforms(Stem::Jia);
        let palaces = build_palaces(2, 2, &main, &aux, &t);

        let p = &palaces[2];
        assert!(p.main_stars.is_empty());
        assert_eq!(p.brightness, Brightness::Ping);
        assert_eq!(p.summary, "命宫在寅，无主星，借对宫天机、太阴。");
        assert_eq!(palaces[3].summary, "父母在卯，无主星。");
        assert!(palaces[8].summary.contains("天机、太阴（得）"));
    }
}
