use serde::{Deserialize, Serialize};

use super::display::{DisplayConfig, GaugeConfig};
use super::thresholds::RatioThresholds;

/// Root configuration structure for summit
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct SummitConfig {
    /// Ratio thresholds configuration
    #[serde(default)]
    pub thresholds: Option<RatioThresholds>,

    /// Gauge geometry and colors
    #[serde(default)]
    pub gauge: Option<GaugeConfig>,

    /// Placeholder and currency display
    #[serde(default)]
    pub display: Option<DisplayConfig>,

    /// Output configuration
    #[serde(default)]
    pub output: Option<OutputConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct OutputConfig {
    pub default_format: Option<String>,
    /// Enable colored output (default: auto-detect based on TTY)
    #[serde(default)]
    pub use_color: Option<bool>,
}

impl SummitConfig {
    pub fn thresholds(&self) -> RatioThresholds {
        self.thresholds.unwrap_or_default()
    }

    pub fn gauge(&self) -> GaugeConfig {
        self.gauge.clone().unwrap_or_default()
    }

    pub fn display(&self) -> DisplayConfig {
        self.display.clone().unwrap_or_default()
    }

    pub fn default_format(&self) -> Option<&str> {
        self.output
            .as_ref()
            .and_then(|o| o.default_format.as_deref())
    }
}
