//! One-call chart and fortune computation.

use std::path::Path;

use mingli_bazi::{
    FavorableElements, FourPillarsChart, StrengthAnalysis, analyze_strength, compute_four_pillars,
    favorable_for,
};
use mingli_calendar::{BirthInfo, SexagenaryDate, SolarDateTime, solar_to_lunar};
use mingli_config::EngineConfig;
use mingli_fortune::{DailyFortune, FortuneScore, calculate_daily_fortune, calculate_fortune};
use mingli_ziwei::{PurpleStarChart, compute_purple_star};
use serde::Serialize;
use tracing::{debug, info};

use crate::error::MingliError;

/// Everything computed for one birth.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DestinyReport {
    pub birth: BirthInfo,
    pub sexagenary: SexagenaryDate,
    pub zodiac: &'static str,
    pub bazi: FourPillarsChart,
    pub strength: StrengthAnalysis,
    pub favorable: FavorableElements,
    pub ziwei: PurpleStarChart,
    pub fortune: FortuneScore,
}

/// Stateless engine carrying a configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DestinyEngine {
    config: EngineConfig,
}

impl DestinyEngine {
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    /// Engine configured from a TOML file.
    pub fn from_config_file(path: &Path) -> Result<Self, MingliError> {
        Ok(Self::new(EngineConfig::load(path)?))
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// BaZi chart plus its strength and favorable elements.
    pub fn bazi(
        &self,
        birth: SolarDateTime,
    ) -> Result<(FourPillarsChart, StrengthAnalysis, FavorableElements), MingliError> {
        let date = solar_to_lunar(&birth)?;
        Ok(analyze(&date))
    }

    /// Full report: sexagenary date, both charts and the fortune score.
    pub fn report(
        &self,
        person: &BirthInfo,
        birth: SolarDateTime,
    ) -> Result<DestinyReport, MingliError> {
        let sexagenary = solar_to_lunar(&birth)?;
        let (bazi, strength, favorable) = analyze(&sexagenary);
        let ziwei = compute_purple_star(&sexagenary, person.gender);
        let fortune = calculate_fortune(
            &bazi,
            &ziwei,
            &favorable,
            person.gender,
            &self.config.scoring,
        );
        info!(
            name = %person.name,
            birth = %birth,
            overall = fortune.overall,
            "destiny report"
        );
        Ok(DestinyReport {
            birth: person.clone(),
            sexagenary,
            zodiac: sexagenary.zodiac(),
            bazi,
            strength,
            favorable,
            ziwei,
            fortune,
        })
    }

    /// Daily fortune for `day` against the chart of `birth`.
    pub fn daily(
        &self,
        person: &BirthInfo,
        birth: SolarDateTime,
        day: SolarDateTime,
    ) -> Result<DailyFortune, MingliError> {
        let natal = solar_to_lunar(&birth)?;
        let (bazi, _, favorable) = analyze(&natal);
        let date = day.naive_date()?;
        debug!(name = %person.name, %date, "daily fortune requested");
        Ok(calculate_daily_fortune(
            &bazi,
            &favorable,
            date,
            &self.config.daily,
        )?)
    }
}

fn analyze(date: &SexagenaryDate) -> (FourPillarsChart, StrengthAnalysis, FavorableElements) {
    let bazi = compute_four_pillars(date);
    let strength = analyze_strength(&bazi);
    let favorable = favorable_for(bazi.day_master_element, &strength);
    (bazi, strength, favorable)
}

#[cfg(test)]
mod tests {
    use super::*;
    use mingli_calendar::Gender;

    #[test]
    fn out_of_range_is_calendar_error() {
        let engine = DestinyEngine::default();
        let info = BirthInfo::new("x", Gender::Male, "");
        let birth = SolarDateTime {
            year: 1899,
            month: 6,
            day: 1,
            hour: 0,
            minute: 0,
        };
        assert!(matches!(
            engine.report(&info, birth),
            Err(MingliError::Calendar(_))
        ));
    }

    #[test]
    fn favorable_matches_bazi_crate() {
        let engine = DestinyEngine::default();
        let birth = SolarDateTime::new(1990, 5, 15, 14, 0).unwrap();
        let (bazi, _, fav) = engine.bazi(birth).unwrap();
        assert_eq!(fav, mingli_bazi::calculate_favorable_elements(&bazi));
    }
}
