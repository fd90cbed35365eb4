//! Domain scores for career, wealth, love and health.
//!
//! Each domain starts from its configured baseline and accumulates signed
//! adjustments from ten-god relations, Ziwei palace stars and, for health,
//! elements missing from the eight characters. Scores are clamped to
//! [0, 100].

use mingli_bazi::{FavorableElements, FourPillarsChart, Spirit, TenGod};
use mingli_calendar::{Element, Gender};
use mingli_config::ScoringConfig;
use mingli_ziwei::{MainStar, Palace, PalaceName, PurpleStarChart, Transform};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::lucky;

/// One contribution to a domain score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Adjustment {
    pub reason: String,
    pub delta: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainScore {
    pub score: u8,
    pub analysis: String,
    pub advice: String,
    pub lucky: Vec<String>,
    pub adjustments: Vec<Adjustment>,
    /// Health only: organ warnings for missing elements.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub cautions: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FortuneScore {
    pub overall: u8,
    pub career: DomainScore,
    pub wealth: DomainScore,
    pub love: DomainScore,
    pub health: DomainScore,
}

impl FortuneScore {
    pub fn domains(&self) -> [&DomainScore; 4] {
        [&self.career, &self.wealth, &self.love, &self.health]
    }
}

/// `round(mean)` of the four domain scores.
pub fn overall_score(scores: [u8; 4]) -> u8 {
    let sum: u32 = scores.iter().map(|&s| u32::from(s)).sum();
    (f64::from(sum) / 4.0).round() as u8
}

pub fn clamp_score(raw: i32) -> u8 {
    raw.clamp(0, 100) as u8
}

/// Running score for one domain.
struct Tally {
    score: i32,
    adjustments: Vec<Adjustment>,
}

impl Tally {
    fn new(baseline: i32) -> Self {
        Self {
            score: baseline,
            adjustments: Vec::new(),
        }
    }

    fn apply(&mut self, reason: impl Into<String>, delta: i32) {
        self.score += delta;
        self.adjustments.push(Adjustment {
            reason: reason.into(),
            delta,
        });
    }

    fn apply_if(&mut self, cond: bool, reason: &str, delta: i32) {
        if cond {
            self.apply(reason, delta);
        }
    }

    fn ten_gods(&mut self, chart: &FourPillarsChart, rules: &[(TenGod, i32)]) {
        for &(god, delta) in rules {
            if chart.has_ten_god(god) {
                self.apply(format!("{}透出", god.name()), delta);
            }
        }
    }

    fn palace_stars(&mut self, palace: Option<&Palace>, rules: &[(MainStar, i32)]) {
        let Some(palace) = palace else { return };
        for &(star, delta) in rules {
            if palace.has_main_star(star) {
                self.apply(format!("{}宫{}", palace.name.name(), star.name()), delta);
            }
        }
    }

    fn palace_transforms(&mut self, palace: Option<&Palace>, rules: &[(Transform, i32)]) {
        let Some(palace) = palace else { return };
        for &(t, delta) in rules {
            if palace.has_transform(t) {
                self.apply(format!("{}宫{}", palace.name.name(), t.name()), delta);
            }
        }
    }

    fn finish(
        self,
        domain: &str,
        advice: &str,
        lucky: Vec<String>,
        cautions: Vec<String>,
    ) -> DomainScore {
        let score = clamp_score(self.score);
        let mut analysis = format!("{domain}运势{}（{score}分）", level(score));
        if !self.adjustments.is_empty() {
            let reasons: Vec<&str> = self.adjustments.iter().map(|a| a.reason.as_str()).collect();
            analysis.push_str("，主要因素：");
            analysis.push_str(&reasons.join("、"));
        }
        analysis.push('。');
        DomainScore {
            score,
            analysis,
            advice: advice.to_string(),
            lucky,
            adjustments: self.adjustments,
            cautions,
        }
    }
}

/// Qualitative band of a score.
pub fn level(score: u8) -> &'static str {
    match score {
        80.. => "极佳",
        65..=79 => "良好",
        50..=64 => "平稳",
        35..=49 => "欠佳",
        _ => "低迷",
    }
}

fn pick_advice(score: u8, good: &'static str, poor: &'static str) -> &'static str {
    if score >= 60 { good } else { poor }
}

/// Career score from officer-type ten gods and the 官禄 palace stars.
pub fn score_career(
    bazi: &FourPillarsChart,
    ziwei: &PurpleStarChart,
    favorable: &FavorableElements,
    config: &ScoringConfig,
) -> DomainScore {
    let mut t = Tally::new(config.career_baseline);
    t.ten_gods(
        bazi,
        &[
            (TenGod::ZhengGuan, 15),
            (TenGod::QiSha, 5),
            (TenGod::ShangGuan, -10),
        ],
    );
    let palace = ziwei.palace(PalaceName::Career);
    t.palace_stars(
        palace,
        &[
            (MainStar::ZiWei, 20),
            (MainStar::TianFu, 10),
            (MainStar::WuQu, 10),
            (MainStar::TaiYang, 10),
        ],
    );
    t.palace_transforms(palace, &[(Transform::Quan, 5), (Transform::Ji, -10)]);

    let mut lucky = Vec::new();
    for &e in &favorable.favorable {
        lucky.extend(lucky::industries(e).iter().map(|s| s.to_string()));
        lucky.push(lucky::direction(e).to_string());
    }
    let advice = pick_advice(
        clamp_score(t.score),
        "事业运势向好，可积极争取晋升与新项目。",
        "事业宜稳扎稳打，积累实力，避免冒进。",
    );
    t.finish("事业", advice, lucky, Vec::new())
}

/// Wealth score from wealth-type ten gods and the 财帛 palace stars.
pub fn score_wealth(
    bazi: &FourPillarsChart,
    ziwei: &PurpleStarChart,
    favorable: &FavorableElements,
    config: &ScoringConfig,
) -> DomainScore {
    let mut t = Tally::new(config.wealth_baseline);
    t.ten_gods(
        bazi,
        &[
            (TenGod::ZhengCai, 15),
            (TenGod::PianCai, 10),
            (TenGod::JieCai, -15),
        ],
    );
    let palace = ziwei.palace(PalaceName::Wealth);
    t.palace_stars(
        palace,
        &[
            (MainStar::WuQu, 20),
            (MainStar::TianFu, 15),
            (MainStar::TaiYin, 10),
        ],
    );
    t.palace_transforms(palace, &[(Transform::Lu, 10), (Transform::Ji, -10)]);

    let lucky = favorable
        .favorable
        .iter()
        .flat_map(|&e| lucky::numbers(e))
        .map(|n| n.to_string())
        .collect();
    let advice = pick_advice(
        clamp_score(t.score),
        "财运较旺，可适度投资，但需量力而行。",
        "理财宜保守，控制开支，远离投机。",
    );
    t.finish("财富", advice, lucky, Vec::new())
}

/// Love score keyed on the spouse star for `gender` and the 夫妻 palace.
pub fn score_love(
    bazi: &FourPillarsChart,
    ziwei: &PurpleStarChart,
    favorable: &FavorableElements,
    gender: Gender,
    config: &ScoringConfig,
) -> DomainScore {
    let mut t = Tally::new(config.love_baseline);
    let (spouse_star, rival) = match gender {
        Gender::Male => (TenGod::ZhengCai, TenGod::JieCai),
        Gender::Female => (TenGod::ZhengGuan, TenGod::ShangGuan),
    };
    t.ten_gods(bazi, &[(spouse_star, 15), (rival, -10)]);
    t.apply_if(bazi.has_spirit(Spirit::TaoHua), "命带桃花", 10);
    let palace = ziwei.palace(PalaceName::Spouse);
    t.palace_stars(
        palace,
        &[
            (MainStar::TaiYin, 10),
            (MainStar::TianTong, 10),
            (MainStar::TianXiang, 5),
            (MainStar::QiSha, -10),
            (MainStar::PoJun, -10),
        ],
    );
    t.palace_transforms(palace, &[(Transform::Ji, -10)]);

    let lucky = favorable
        .favorable
        .iter()
        .flat_map(|&e| lucky::colors(e))
        .map(|c| c.to_string())
        .collect();
    let advice = pick_advice(
        clamp_score(t.score),
        "感情和顺，宜多沟通，珍惜缘分。",
        "感情需要耐心经营，遇事冷静，避免争执。",
    );
    t.finish("感情", advice, lucky, Vec::new())
}

/// Health score: a penalty per missing element plus the 疾厄 palace stars.
pub fn score_health(
    bazi: &FourPillarsChart,
    ziwei: &PurpleStarChart,
    favorable: &FavorableElements,
    config: &ScoringConfig,
) -> DomainScore {
    let mut t = Tally::new(config.health_baseline);
    let mut cautions = Vec::new();
    for e in bazi.elements.missing() {
        t.apply(format!("缺{}", e.name()), -config.missing_element_penalty);
        cautions.push(format!("五行缺{}，注意{}健康", e.name(), lucky::organ(e)));
    }
    let palace = ziwei.palace(PalaceName::Health);
    t.palace_stars(
        palace,
        &[
            (MainStar::TianLiang, 10),
            (MainStar::TianTong, 5),
            (MainStar::QiSha, -5),
        ],
    );
    t.palace_transforms(palace, &[(Transform::Ji, -10)]);

    let lucky = favorable
        .favorable
        .iter()
        .map(|&e| lucky::regimen(e).to_string())
        .collect();
    let advice = pick_advice(
        clamp_score(t.score),
        "身体状况良好，保持规律作息即可。",
        "注意身体信号，定期体检，避免过度劳累。",
    );
    t.finish("健康", advice, lucky, cautions)
}

/// Score all four domains.
pub fn calculate_fortune(
    bazi: &FourPillarsChart,
    ziwei: &PurpleStarChart,
    favorable: &FavorableElements,
    gender: Gender,
    config: &ScoringConfig,
) -> FortuneScore {
    let career = score_career(bazi, ziwei, favorable, config);
    let wealth = score_wealth(bazi, ziwei, favorable, config);
    let love = score_love(bazi, ziwei, favorable, gender, config);
    let health = score_health(bazi, ziwei, favorable, config);
    let overall = overall_score([career.score, wealth.score, love.score, health.score]);
    debug!(
        overall,
        career = career.score,
        wealth = wealth.score,
        love = love.score,
        health = health.score,
        "fortune scored"
    );
    FortuneScore {
        overall,
        career,
        wealth,
        love,
        health,
    }
}

/// Element whose absence a health adjustment records, if any.
pub fn missing_element_of(adjustment: &Adjustment) -> Option<Element> {
    let glyph = adjustment.reason.strip_prefix('缺')?;
    mingli_calendar::ALL_ELEMENTS
        .iter()
        .copied()
        .find(|e| e.name() == glyph)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overall_rounds_mean() {
        assert_eq!(overall_score([50, 50, 50, 70]), 55);
        assert_eq!(overall_score([50, 51, 50, 50]), 50);
        assert_eq!(overall_score([50, 51, 51, 50]), 51);
        assert_eq!(overall_score([0, 0, 0, 1]), 0);
        assert_eq!(overall_score([100, 100, 100, 100]), 100);
    }

    #[test]
    fn clamps() {
        assert_eq!(clamp_score(-20), 0);
        assert_eq!(clamp_score(130), 100);
        assert_eq!(clamp_score(64), 64);
    }

    #[test]
    fn levels() {
        assert_eq!(level(100), "极佳");
        assert_eq!(level(65), "良好");
        assert_eq!(level(50), "平稳");
        assert_eq!(level(0), "低迷");
    }

    #[test]
    fn tally_records_reasons() {
        let mut t = Tally::new(50);
        t.apply("正官透出", 15);
        t.apply_if(false, "never", 99);
        t.apply("伤官透出", -10);
        let d = t.finish("事业", "x", Vec::new(), Vec::new());
        assert_eq!(d.score, 55);
        assert_eq!(d.adjustments.len(), 2);
        assert!(d.analysis.contains("正官透出、伤官透出"));
    }

    #[test]
    fn missing_element_reason_parses() {
        let a = Adjustment {
            reason: "缺水".into(),
            delta: -10,
        };
        assert_eq!(missing_element_of(&a), Some(Element::Water));
        let b = Adjustment {
            reason: "疾厄宫天梁".into(),
            delta: 10,
        };
        assert_eq!(missing_element_of(&b), None);
    }
}
