//! Natal chart assembly.

use mingli_calendar::{Branch, Gender, SexagenaryDate};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::palace::{Palace, PalaceName, build_palaces};
use crate::periods::{MajorPeriod, calculate_major_periods, cross_reference};
use crate::placement::{
    arrange_auxiliary_stars, arrange_main_stars, calculate_body_palace, calculate_life_palace,
    tianfu_position, ziwei_position,
};
use crate::star::MainStar;
use crate::transforms::{FourTransforms, calculate_four_transforms};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurpleStarChart {
    /// Ring position of 命宫 (0–11, 子 = 0).
    pub life_palace: u8,
    /// Ring position of 身宫.
    pub body_palace: u8,
    pub ziwei_position: u8,
    pub tianfu_position: u8,
    pub transforms: FourTransforms,
    /// Ordered by branch, 子 first.
    pub palaces: Vec<Palace>,
    pub major_periods: Vec<MajorPeriod>,
}

impl PurpleStarChart {
    pub fn life_palace_branch(&self) -> Branch {
        Branch::cyclic(i64::from(self.life_palace))
    }

    pub fn palace(&self, name: PalaceName) -> Option<&Palace> {
        self.palaces.iter().find(|p| p.name == name)
    }

    pub fn palace_at(&self, branch: Branch) -> Option<&Palace> {
        self.palaces.get(branch.index() as usize)
    }

    /// Whether the named palace holds `star`.
    pub fn palace_has(&self, name: PalaceName, star: MainStar) -> bool {
        self.palace(name).is_some_and(|p| p.has_main_star(star))
    }
}

/// Build the Ziwei chart from the lunar birth data.
///
/// A leap month is placed as the regular month it duplicates.
pub fn compute_purple_star(date: &SexagenaryDate, gender: Gender) -> PurpleStarChart {
    let month = date.lunar.month;
    let day = date.lunar.day;
    let hour = date.solar.hour;

    let life_palace = calculate_life_palace(month, day, hour);
    let body_palace = calculate_body_palace(month, day, hour);
    let ziwei = ziwei_position(day, life_palace);

    let main = arrange_main_stars(day, life_palace);
    let aux = arrange_auxiliary_stars(date.lunar.year, month, hour);
    let transforms = calculate_four_transforms(date.year.stem);
    let palaces = build_palaces(life_palace, body_palace, &main, &aux, &transforms);

    let mut major_periods = calculate_major_periods(life_palace, gender.is_male());
    cross_reference(&mut major_periods, &palaces);

    debug!(life_palace, body_palace, ziwei, "purple star chart assembled");

    PurpleStarChart {
        life_palace,
        body_palace,
        ziwei_position: ziwei,
        tianfu_position: tianfu_position(ziwei),
        transforms,
        palaces,
        major_periods,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mingli_calendar::{SolarDateTime, solar_to_lunar};

    #[test]
    fn birth_1990_05_15() {
        // lunar 1990-4-21 未时
        let s = solar_to_lunar(&SolarDateTime::new(1990, 5, 15, 14, 0).unwrap()).unwrap();
        let c = compute_purple_star(&s, Gender::Male);
        assert_eq!(c.life_palace, 6);
        assert_eq!(c.life_palace_branch(), Branch::Wu);
        assert_eq!(c.body_palace, 8);
        // day 21 is past the offset table, so Ziwei sits in the life palace
        assert_eq!(c.ziwei_position, 6);
        assert_eq!(c.tianfu_position, 10);
        assert!(c.palace_has(PalaceName::Life, MainStar::ZiWei));
        assert_eq!(c.palaces[6].name, PalaceName::Life);
        assert!(c.palaces[8].is_body_palace);
        assert_eq!(c.major_periods[0].palace, PalaceName::Life);
        assert!(c.major_periods[0].stars.contains(&"紫微".to_string()));
    }
}
