//! Engine configuration loaded from TOML.
//!
//! Every field has a default, so an empty file (or no file at all) yields
//! the stock scoring rules:
//!
//! ```toml
//! [scoring]
//! career_baseline = 50
//! wealth_baseline = 50
//! love_baseline = 50
//! health_baseline = 70
//! missing_element_penalty = 10
//!
//! [daily]
//! hourly_luck = "seeded"   # or "random"
//! base_luck = 60
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

/// Environment variable naming a config file, consulted by
/// [`EngineConfig::load_or_default`] when no path is given.
pub const CONFIG_ENV_VAR: &str = "MINGLI_CONFIG";

/// Errors from loading or validating a configuration file.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("cannot read config {path}: {message}")]
    Io { path: PathBuf, message: String },
    #[error("config parse error: {0}")]
    Parse(String),
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Baselines and penalties for the four fortune domains.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    pub career_baseline: i32,
    pub wealth_baseline: i32,
    pub love_baseline: i32,
    pub health_baseline: i32,
    /// Health deduction for each element absent from the BaZi chart.
    pub missing_element_penalty: i32,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            career_baseline: 50,
            wealth_baseline: 50,
            love_baseline: 50,
            health_baseline: 70,
            missing_element_penalty: 10,
        }
    }
}

/// How the twelve two-hour luck values of a daily fortune are drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HourlyLuckMode {
    /// Seeded from the date and its day pillar; identical inputs reproduce.
    #[default]
    Seeded,
    /// Fresh randomness on every call.
    Random,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DailyConfig {
    pub hourly_luck: HourlyLuckMode,
    /// Starting luck score before day-pillar adjustments.
    pub base_luck: i32,
}

impl Default for DailyConfig {
    fn default() -> Self {
        Self {
            hourly_luck: HourlyLuckMode::Seeded,
            base_luck: 60,
        }
    }
}

/// Top-level engine configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub scoring: ScoringConfig,
    pub daily: DailyConfig,
}

impl EngineConfig {
    /// Parse and validate TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        let config = Self::from_toml_str(&content)?;
        debug!(path = %path.display(), "loaded engine config");
        Ok(config)
    }

    /// Load from `path`, else from `$MINGLI_CONFIG`, else defaults.
    ///
    /// A file that exists but fails to load is reported and replaced by
    /// defaults.
    pub fn load_or_default(path: Option<&Path>) -> Self {
        let env_path = std::env::var_os(CONFIG_ENV_VAR).map(PathBuf::from);
        let Some(path) = path.map(Path::to_path_buf).or(env_path) else {
            return Self::default();
        };
        match Self::load(&path) {
            Ok(config) => config,
            Err(e) => {
                warn!(error = %e, "falling back to default engine config");
                Self::default()
            }
        }
    }

    /// Check that baselines are scores and the penalty is non-negative.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let s = &self.scoring;
        for (name, value) in [
            ("scoring.career_baseline", s.career_baseline),
            ("scoring.wealth_baseline", s.wealth_baseline),
            ("scoring.love_baseline", s.love_baseline),
            ("scoring.health_baseline", s.health_baseline),
            ("daily.base_luck", self.daily.base_luck),
        ] {
            if !(0..=100).contains(&value) {
                return Err(ConfigError::Invalid(format!(
                    "{name} = {value} is outside 0-100"
                )));
            }
        }
        if !(0..=100).contains(&s.missing_element_penalty) {
            return Err(ConfigError::Invalid(format!(
                "scoring.missing_element_penalty = {} is outside 0-100",
                s.missing_element_penalty
            )));
        }
        Ok(())
    }
}
