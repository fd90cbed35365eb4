//! Element-keyed lucky attributes and health correspondences.

use mingli_calendar::Element;

pub const fn colors(e: Element) -> &'static [&'static str] {
    match e {
        Element::Wood => &["绿色", "青色"],
        Element::Fire => &["红色", "紫色"],
        Element::Earth => &["黄色", "棕色"],
        Element::Metal => &["白色", "金色"],
        Element::Water => &["黑色", "蓝色"],
    }
}

pub const fn direction(e: Element) -> &'static str {
    match e {
        Element::Wood => "东方",
        Element::Fire => "南方",
        Element::Earth => "中央",
        Element::Metal => "西方",
        Element::Water => "北方",
    }
}

/// 河图 numbers.
pub const fn numbers(e: Element) -> [u8; 2] {
    match e {
        Element::Wood => [3, 8],
        Element::Fire => [2, 7],
        Element::Earth => [5, 0],
        Element::Metal => [4, 9],
        Element::Water => [1, 6],
    }
}

pub const fn industries(e: Element) -> &'static [&'static str] {
    match e {
        Element::Wood => &["教育", "出版", "林业", "园艺"],
        Element::Fire => &["能源", "餐饮", "传媒", "电子"],
        Element::Earth => &["房地产", "建筑", "农业", "仓储"],
        Element::Metal => &["金融", "机械", "法律", "珠宝"],
        Element::Water => &["贸易", "物流", "旅游", "水产"],
    }
}

pub const fn regimen(e: Element) -> &'static str {
    match e {
        Element::Wood => "多亲近自然，早睡养肝",
        Element::Fire => "保持心境平和，护养心脉",
        Element::Earth => "饮食规律，健脾养胃",
        Element::Metal => "适度运动，养护呼吸道",
        Element::Water => "注意保暖，劳逸结合以养肾",
    }
}

/// Organ system associated with an element.
pub const fn organ(e: Element) -> &'static str {
    match e {
        Element::Wood => "肝胆",
        Element::Fire => "心脏",
        Element::Earth => "脾胃",
        Element::Metal => "肺部",
        Element::Water => "肾脏",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mingli_calendar::ALL_ELEMENTS;

    #[test]
    fn numbers_cover_all_digits() {
        let mut all: Vec<u8> = ALL_ELEMENTS.iter().flat_map(|&e| numbers(e)).collect();
        all.sort_unstable();
        assert_eq!(all, (0..10).collect::<Vec<u8>>());
    }

    #[test]
    fn water_is_kidneys() {
        assert_eq!(organ(Element::Water), "肾脏");
        assert_eq!(direction(Element::Fire), "南方");
    }
}
