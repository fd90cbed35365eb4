//! Four transformations (四化) keyed by the year stem.

use mingli_calendar::Stem;
use serde::{Deserialize, Serialize};

use crate::star::{AuxStar, MainStar, Star, Transform};

/// The star receiving each transformation for one year stem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FourTransforms {
    #[serde(rename = "化禄")]
    pub lu: Star,
    #[serde(rename = "化权")]
    pub quan: Star,
    #[serde(rename = "化科")]
    pub ke: Star,
    #[serde(rename = "化忌")]
    pub ji: Star,
}

impl FourTransforms {
    pub const fn get(&self, t: Transform) -> Star {
        match t {
            Transform::Lu => self.lu,
            Transform::Quan => self.quan,
            Transform::Ke => self.ke,
            Transform::Ji => self.ji,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (Transform, Star)> + '_ {
        crate::star::ALL_TRANSFORMS
            .iter()
            .map(move |&t| (t, self.get(t)))
    }

    /// Transformations carried by `star`.
    pub fn of(&self, star: Star) -> Vec<Transform> {
        self.iter()
            .filter(|&(_, s)| s == star)
            .map(|(t, _)| t)
            .collect()
    }
}

const fn m(s: MainStar) -> Star {
    Star::Main(s)
}

const fn a(s: AuxStar) -> Star {
    Star::Aux(s)
}

const fn row(lu: Star, quan: Star, ke: Star, ji: Star) -> FourTransforms {
    FourTransforms { lu, quan, ke, ji }
}

use AuxStar::{WenChang, WenQu, YouBi, ZuoFu};
use MainStar::*;

const TRANSFORM_TABLE: [FourTransforms; 10] = [
    row(m(LianZhen), m(PoJun), m(WuQu), m(TaiYang)),
    row(m(TianJi), m(TianLiang), m(ZiWei), m(TaiYin)),
    row(m(TianTong), m(TianJi), a(WenChang), m(LianZhen)),
    row(m(TaiYin), m(TianTong), m(TianJi), m(JuMen)),
    row(m(TanLang), m(TaiYin), a(YouBi), m(TianJi)),
    row(m(WuQu), m(TanLang), m(TianLiang), a(WenQu)),
    row(m(TaiYang), m(WuQu), m(TaiYin), m(TianTong)),
    row(m(JuMen), m(TaiYang), a(WenQu), a(WenChang)),
    row(m(TianLiang), m(ZiWei), a(ZuoFu), m(WuQu)),
    row(m(PoJun), m(JuMen), m(TaiYin), m(TanLang)),
];

pub const fn calculate_four_transforms(year_stem: Stem) -> FourTransforms {
    TRANSFORM_TABLE[year_stem.index() as usize]
}
