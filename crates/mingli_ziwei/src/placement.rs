//! Palace and star placement on the twelve-branch ring.
//!
//! Positions are branch indices (子 = 0 .. 亥 = 11); 寅 = 2 is the ring's
//! starting point for the first lunar month.

use mingli_calendar::{Branch, Stem, year_pillar};
use tracing::debug;

use crate::star::{AuxStar, MainStar};

/// Number of palaces on the ring.
pub const PALACE_COUNT: u8 = 12;

/// Ziwei offset from the life palace for lunar days 1..=17.
pub const ZIWEI_DAY_OFFSET: [u8; 17] = [11, 0, 0, 1, 1, 2, 2, 3, 3, 4, 4, 5, 5, 6, 6, 7, 7];

/// Offsets of the other main stars from the Ziwei position.
const MAIN_STAR_OFFSETS: [(MainStar, i32); 12] = [
    (MainStar::TianJi, -1),
    (MainStar::TaiYang, -3),
    (MainStar::WuQu, -4),
    (MainStar::TianTong, -5),
    (MainStar::LianZhen, -8),
    (MainStar::TaiYin, 1),
    (MainStar::TanLang, 2),
    (MainStar::JuMen, 3),
    (MainStar::TianXiang, 4),
    (MainStar::TianLiang, 5),
    (MainStar::QiSha, 6),
    (MainStar::PoJun, 10),
];

/// Stars grouped by ring position.
pub type StarRing<T> = [Vec<T>; PALACE_COUNT as usize];

const fn ring(n: i32) -> u8 {
    n.rem_euclid(PALACE_COUNT as i32) as u8
}

/// Hour branch index of a clock hour.
pub const fn hour_branch(hour: u8) -> u8 {
    Branch::from_hour(hour).index()
}

/// Position reached by counting lunar month then day from 寅.
pub const fn day_position(lunar_month: u8, lunar_day: u8) -> u8 {
    let yin = ring(lunar_month as i32 + 1);
    ring(yin as i32 + lunar_day as i32 - 1)
}

/// 命宫: count back from the day position by the hour branch.
pub const fn calculate_life_palace(lunar_month: u8, lunar_day: u8, hour: u8) -> u8 {
    ring(day_position(lunar_month, lunar_day) as i32 - hour_branch(hour) as i32 + 12)
}

/// 身宫: count forward from the day position by the hour branch.
pub const fn calculate_body_palace(lunar_month: u8, lunar_day: u8, hour: u8) -> u8 {
    ring(day_position(lunar_month, lunar_day) as i32 + hour_branch(hour) as i32)
}

/// Ziwei position for a lunar day.
///
/// Days past the table use offset 0, i.e. Ziwei sits in the life palace.
pub fn ziwei_position(lunar_day: u8, life_palace: u8) -> u8 {
    let offset = match lunar_day
        .checked_sub(1)
        .and_then(|i| ZIWEI_DAY_OFFSET.get(i as usize))
    {
        Some(&o) => o,
        None => {
            debug!(lunar_day, "no ziwei day offset, using 0");
            0
        }
    };
    ring(life_palace as i32 + offset as i32)
}

/// Tianfu mirrors Ziwei across the 寅–申 axis.
pub const fn tianfu_position(ziwei: u8) -> u8 {
    ring(16 - ziwei as i32)
}

fn empty_ring<T>() -> StarRing<T> {
    std::array::from_fn(|_| Vec::new())
}

/// Place the fourteen main stars.
pub fn arrange_main_stars(lunar_day: u8, life_palace: u8) -> StarRing<MainStar> {
    let mut stars = empty_ring();
    let ziwei = ziwei_position(lunar_day, life_palace);
    stars[ziwei as usize].push(MainStar::ZiWei);
    stars[tianfu_position(ziwei) as usize].push(MainStar::TianFu);
    for (star, offset) in MAIN_STAR_OFFSETS {
        stars[ring(ziwei as i32 + offset) as usize].push(star);
    }
    stars
}

/// 禄存 position by year stem.
pub const fn lucun_position(year_stem: Stem) -> u8 {
    let b = match year_stem {
        Stem::Jia => Branch::Yin,
        Stem::Yi => Branch::Mao,
        Stem::Bing | Stem::Wu => Branch::Si,
        Stem::Ding | Stem::Ji => Branch::Wu,
        Stem::Geng => Branch::Shen,
        Stem::Xin => Branch::You,
        Stem::Ren => Branch::Hai,
        Stem::Gui => Branch::Zi,
    };
    b.index()
}

/// Place the auxiliary stars.
///
/// 左辅/右弼 mirror each other by lunar month from 辰/戌, 文昌/文曲 by hour
/// from 戌/辰, and 禄存 with its flanking 擎羊/陀罗 follow the year stem.
/// None of them depends on the lunar day, so the day is not a parameter.
pub fn arrange_auxiliary_stars(lunar_year: i32, lunar_month: u8, hour: u8) -> StarRing<AuxStar> {
    let mut stars = empty_ring();
    let m = lunar_month as i32 - 1;
    let hb = hour_branch(hour) as i32;
    let lucun = lucun_position(year_pillar(lunar_year).stem) as i32;

    let placed = [
        (AuxStar::ZuoFu, 4 + m),
        (AuxStar::YouBi, 10 - m),
        (AuxStar::WenChang, 10 - hb),
        (AuxStar::WenQu, 4 + hb),
        (AuxStar::LuCun, lucun),
        (AuxStar::QingYang, lucun + 1),
        (AuxStar::TuoLuo, lucun - 1),
    ];
    for (star, pos) in placed {
        stars[ring(pos) as usize].push(star);
    }
    stars
}

/// Position of a star in a ring, if placed.
pub fn find_star<T: PartialEq>(stars: &StarRing<T>, star: &T) -> Option<u8> {
    stars.iter().position(|p| p.contains(star)).map(|i| i as u8)
}
