//! Chart-level properties of the Purple Star engine.

use mingli_calendar::{Gender, SolarDateTime, solar_to_lunar};
use mingli_ziwei::{
    ALL_PALACE_NAMES, Brightness, MainStar, PalaceName, PeriodFortune, PurpleStarChart,
    compute_purple_star,
};

fn chart(y: i32, m: u8, d: u8, h: u8, gender: Gender) -> PurpleStarChart {
    let dt = SolarDateTime::new(y, m, d, h, 0).unwrap();
    compute_purple_star(&solar_to_lunar(&dt).unwrap(), gender)
}

// ---------------------------------------------------------------------------
// Structure
// ---------------------------------------------------------------------------

#[test]
fn every_chart_is_complete() {
    for year in (1901..=2099).step_by(7) {
        for (m, h) in [(1u8, 0u8), (4, 7), (8, 13), (11, 22)] {
            let c = chart(year, m, 15, h, Gender::Female);
            assert_eq!(c.palaces.len(), 12);
            assert_eq!(c.major_periods.len(), 12);

            let mains: usize = c.palaces.iter().map(|p| p.main_stars.len()).sum();
            assert_eq!(mains, 14, "{year}-{m}");
            let auxes: usize = c.palaces.iter().map(|p| p.aux_stars.len()).sum();
            assert_eq!(auxes, 7, "{year}-{m}");

            for name in ALL_PALACE_NAMES {
                assert!(c.palace(name).is_some());
            }
            assert_eq!(c.palaces[c.life_palace as usize].name, PalaceName::Life);
            for (i, p) in c.palaces.iter().enumerate() {
                assert_eq!(p.branch.index() as usize, i);
                assert!(p.main_stars.is_empty() || p.summary.contains(p.main_stars[0].name()));
            }
        }
    }
}

#[test]
fn periods_carry_palace_stars() {
    let c = chart(1990, 5, 15, 14, Gender::Male);
    for period in &c.major_periods {
        let palace = c.palace(period.palace).unwrap();
        let expected: Vec<String> = palace.star_names().into_iter().map(String::from).collect();
        assert_eq!(period.stars, expected);
        assert_eq!(period.fortune, PeriodFortune::of_palace(palace));
    }
}

#[test]
fn same_input_same_chart() {
    let a = chart(1985, 9, 3, 6, Gender::Male);
    let b = chart(1985, 9, 3, 6, Gender::Male);
    assert_eq!(a, b);
}

#[test]
fn auxiliary_stars_ignore_lunar_day() {
    // lunar 1990-04-21 and 04-22, same hour
    let by_branch = |c: &PurpleStarChart| {
        let mut v: Vec<_> = c
            .palaces
            .iter()
            .map(|p| (p.branch.index(), p.aux_stars.clone()))
            .collect();
        v.sort_by_key(|(b, _)| *b);
        v
    };
    let a = chart(1990, 5, 15, 14, Gender::Male);
    let b = chart(1990, 5, 16, 14, Gender::Male);
    assert_eq!(by_branch(&a), by_branch(&b));
}

// ---------------------------------------------------------------------------
// Fixed chart
// ---------------------------------------------------------------------------

#[test]
fn birth_1990_05_15_male() {
    let c = chart(1990, 5, 15, 14, Gender::Male);
    let life = c.palace(PalaceName::Life).unwrap();
    assert_eq!(life.main_stars, vec![MainStar::ZiWei]);
    // 紫微 in 午 is 庙
    assert_eq!(life.brightness, Brightness::Miao);

    // 庚 year: 太阳化禄 武曲化权 太阴化科 天同化忌
    let transformed: usize = c.palaces.iter().map(|p| p.transforms.len()).sum();
    assert_eq!(transformed, 4);
}

#[test]
fn chart_serializes_with_glyphs() {
    let c = chart(1990, 5, 15, 14, Gender::Male);
    let json = serde_json::to_value(&c).unwrap();
    assert_eq!(json["life_palace"], 6);
    assert_eq!(json["palaces"][6]["name"], "命宫");
    assert_eq!(json["palaces"][6]["branch"], "午");
    assert_eq!(json["palaces"][6]["main_stars"][0], "紫微");
    assert_eq!(json["transforms"]["化禄"], "太阳");
    assert_eq!(json["major_periods"][0]["start_age"], 4);
}
