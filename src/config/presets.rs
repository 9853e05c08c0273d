//! Threshold presets for different appetites for acquisition spend.
//!
//! - **Strict**: healthy only at 4x or better
//! - **Balanced**: the conventional 3x target
//! - **Lenient**: early-stage businesses, healthy from 2x

use serde::{Deserialize, Serialize};

use super::core::SummitConfig;
use super::thresholds::RatioThresholds;

/// Preset levels for the healthy-ratio threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PresetLevel {
    Strict,
    Balanced,
    Lenient,
}

impl PresetLevel {
    pub fn healthy_ratio(self) -> f64 {
        match self {
            PresetLevel::Strict => 4.0,
            PresetLevel::Balanced => 3.0,
            PresetLevel::Lenient => 2.0,
        }
    }

    /// Apply the preset on top of existing thresholds.
    ///
    /// Only the healthy ratio changes; gauge saturation and churn floor are kept.
    pub fn apply(self, thresholds: RatioThresholds) -> RatioThresholds {
        RatioThresholds {
            healthy_ratio: self.healthy_ratio(),
            ..thresholds
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            PresetLevel::Strict => "strict",
            PresetLevel::Balanced => "balanced",
            PresetLevel::Lenient => "lenient",
        }
    }
}

impl std::fmt::Display for PresetLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Merge a preset into a loaded configuration.
pub fn merge_preset_with_config(preset: PresetLevel, mut config: SummitConfig) -> SummitConfig {
    config.thresholds = Some(preset.apply(config.thresholds()));
    config
}
