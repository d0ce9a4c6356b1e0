//! Engine configuration
//!
//! Tunables for the impact calculator, conversion finder, insight rules and
//! history retention.
//!
//! ## Configuration Resolution
//!
//! Config is loaded with a two-layer resolution:
//! 1. Explicit path, or the override in the data dir
//!    (~/.local/share/rivela/config/rivela.toml)
//! 2. Fall back to embedded defaults (compiled into binary)

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Embedded default config (compiled into binary)
const DEFAULT_CONFIG: &str = include_str!("../../../config/rivela.toml");

/// Modifiers applied by the emotional impact calculator
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImpactSettings {
    /// Hour of day (0-23) from which the late-night modifier applies
    pub late_night_hour: u32,
    pub late_night_multiplier: f64,
    /// Applied Friday, Saturday and Sunday
    pub weekend_multiplier: f64,
}

impl Default for ImpactSettings {
    fn default() -> Self {
        Self {
            late_night_hour: 22,
            late_night_multiplier: 1.15,
            weekend_multiplier: 1.08,
        }
    }
}

/// Filtering and ranking limits for visual conversions
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConversionSettings {
    /// Minimum share of the amount a conversion must use (percent)
    pub min_percent_used: f64,
    pub max_results: usize,
}

impl Default for ConversionSettings {
    fn default() -> Self {
        Self {
            min_percent_used: 70.0,
            max_results: 3,
        }
    }
}

/// Thresholds for the built-in insight rules
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InsightSettings {
    pub evening_hour: u32,
    pub high_stress: u8,
}

impl Default for InsightSettings {
    fn default() -> Self {
        Self {
            evening_hour: 20,
            high_stress: 7,
        }
    }
}

/// Full engine configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RivelaConfig {
    pub impact: ImpactSettings,
    pub conversions: ConversionSettings,
    pub insights: InsightSettings,
    /// Maximum analyses kept in history (`None` = unbounded, at least 1)
    pub history_limit: Option<usize>,
}

impl RivelaConfig {
    /// Load config from an explicit path, the data-dir override, or the
    /// embedded defaults (in that order)
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let content = match path {
            Some(path) => fs::read_to_string(path).map_err(|e| {
                Error::Config(format!("Failed to read {}: {}", path.display(), e))
            })?,
            None => match default_config_path().filter(|p| p.exists()) {
                Some(default_path) => fs::read_to_string(&default_path).map_err(|e| {
                    Error::Config(format!("Failed to read {}: {}", default_path.display(), e))
                })?,
                None => DEFAULT_CONFIG.to_string(),
            },
        };

        parse_config(&content)
    }

    /// The configuration compiled into the binary
    pub fn embedded() -> Result<Self> {
        parse_config(DEFAULT_CONFIG)
    }

    /// Render the effective configuration as TOML
    pub fn to_toml(&self) -> Result<String> {
        #[derive(Serialize)]
        struct Rendered<'a> {
            impact: &'a ImpactSettings,
            conversions: &'a ConversionSettings,
            insights: &'a InsightSettings,
            history: RenderedHistory,
        }

        #[derive(Serialize)]
        struct RenderedHistory {
            #[serde(skip_serializing_if = "Option::is_none")]
            limit: Option<usize>,
        }

        toml::to_string_pretty(&Rendered {
            impact: &self.impact,
            conversions: &self.conversions,
            insights: &self.insights,
            history: RenderedHistory {
                limit: self.history_limit,
            },
        })
        .map_err(|e| Error::Config(format!("Failed to render config: {}", e)))
    }
}

/// Default config override path
pub fn default_config_path() -> Option<PathBuf> {
    dirs::data_local_dir().map(|d| d.join("rivela").join("config").join("rivela.toml"))
}

/// Raw config structure for TOML parsing
#[derive(Debug, Deserialize)]
struct RawConfig {
    impact: Option<RawImpact>,
    conversions: Option<RawConversions>,
    insights: Option<RawInsights>,
    history: Option<RawHistory>,
}

#[derive(Debug, Deserialize)]
struct RawImpact {
    late_night_hour: Option<u32>,
    late_night_multiplier: Option<f64>,
    weekend_multiplier: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct RawConversions {
    min_percent_used: Option<f64>,
    max_results: Option<usize>,
}

#[derive(Debug, Deserialize)]
struct RawInsights {
    evening_hour: Option<u32>,
    high_stress: Option<u8>,
}

#[derive(Debug, Deserialize)]
struct RawHistory {
    limit: Option<usize>,
}

/// Parse config from TOML content
fn parse_config(content: &str) -> Result<RivelaConfig> {
    let raw: RawConfig = toml::from_str(content)
        .map_err(|e| Error::Config(format!("Invalid config TOML: {}", e)))?;

    let mut config = RivelaConfig::default();

    if let Some(impact) = raw.impact {
        if let Some(hour) = impact.late_night_hour {
            if hour > 23 {
                return Err(Error::Config(format!(
                    "late_night_hour must be 0-23, got {}",
                    hour
                )));
            }
            config.impact.late_night_hour = hour;
        }
        if let Some(m) = impact.late_night_multiplier {
            config.impact.late_night_multiplier = m;
        }
        if let Some(m) = impact.weekend_multiplier {
            config.impact.weekend_multiplier = m;
        }
    }

    if let Some(conversions) = raw.conversions {
        if let Some(pct) = conversions.min_percent_used {
            config.conversions.min_percent_used = pct;
        }
        if let Some(max) = conversions.max_results {
            config.conversions.max_results = max;
        }
    }

    if let Some(insights) = raw.insights {
        if let Some(hour) = insights.evening_hour {
            config.insights.evening_hour = hour;
        }
        if let Some(stress) = insights.high_stress {
            config.insights.high_stress = stress;
        }
    }

    if let Some(history) = raw.history {
        if history.limit == Some(0) {
            return Err(Error::Config(
                "history limit must be at least 1".to_string(),
            ));
        }
        config.history_limit = history.limit;
    }

    Ok(config)
}
