//! Main-star brightness (庙旺利陷) by palace branch.
//!
//! Only six stars are tabulated; every other star reads 平.

use crate::star::{Brightness, MainStar};

use Brightness::{Bu, De, Li, Miao, Ping, Wang, Xian};

/// Rows indexed by branch, 子 first.
const BRIGHTNESS_TABLE: [(MainStar, [Brightness; 12]); 6] = [
    (MainStar::ZiWei, [Ping, Miao, Miao, Wang, De, Wang, Miao, Miao, Wang, Ping, De, Wang]),
    (MainStar::TianJi, [Miao, Xian, De, Wang, Li, Ping, Miao, Xian, De, Wang, Li, Ping]),
    (MainStar::TaiYang, [Xian, Bu, Wang, Miao, Wang, Wang, Miao, De, De, Ping, Bu, Xian]),
    (MainStar::WuQu, [Wang, Miao, De, Li, Miao, Ping, Wang, Miao, De, Li, Miao, Ping]),
    (MainStar::TianTong, [Wang, Bu, Li, Ping, Ping, Miao, Xian, Bu, Wang, Ping, Ping, Miao]),
    (MainStar::LianZhen, [Ping, Li, Miao, Ping, Li, Xian, Ping, Li, Miao, Ping, Li, Xian]),
];

/// Brightness of `star` at ring `position`.
pub fn star_brightness(star: MainStar, position: u8) -> Brightness {
    BRIGHTNESS_TABLE
        .iter()
        .find(|(s, _)| *s == star)
        .and_then(|(_, row)| row.get(position as usize).copied())
        .unwrap_or(Ping)
}

/// Whether `star` has a tabulated brightness row.
pub fn is_tabulated(star: MainStar) -> bool {
    BRIGHTNESS_TABLE.iter().any(|(s, _)| *s == star)
}

/// Grade of a palace: its first main star's brightness, 平 when empty.
pub fn palace_brightness(stars: &[MainStar], position: u8) -> Brightness {
    stars
        .first()
        .map_or(Ping, |&s| star_brightness(s, position))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::star::ALL_MAIN_STARS;

    #[test]
    fn tabulated_values() {
        assert_eq!(star_brightness(MainStar::ZiWei, 0), Ping);
        assert_eq!(star_brightness(MainStar::ZiWei, 6), Miao);
        assert_eq!(star_brightness(MainStar::TaiYang, 0), Xian);
        assert_eq!(star_brightness(MainStar::TaiYang, 3), Miao);
        assert_eq!(star_brightness(MainStar::LianZhen, 11), Xian);
    }

    #[test]
    fn untabulated_default_to_ping() {
        let untabulated: Vec<MainStar> = ALL_MAIN_STARS
            .iter()
            .copied()
            .filter(|&s| !is_tabulated(s))
            .collect();
        assert_eq!(untabulated.len(), 8);
        for s in untabulated {
            for p in 0..12 {
                assert_eq!(star_brightness(s, p), Ping);
            }
        }
    }

    #[test]
    fn empty_palace_is_ping() {
        assert_eq!(palace_brightness(&[], 3), Ping);
        assert_eq!(palace_brightness(&[MainStar::WuQu, MainStar::TianFu], 1), Miao);
    }
}
