use serde::{Deserialize, Serialize};

/// Geometry and palette of the circular ratio gauge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GaugeConfig {
    #[serde(default = "default_gauge_size")]
    pub size: u32,

    #[serde(default = "default_gauge_stroke")]
    pub stroke: u32,

    /// Arc color when the ratio meets the healthy threshold
    #[serde(default = "default_healthy_color")]
    pub healthy_color: String,

    /// Arc color below the healthy threshold
    #[serde(default = "default_warning_color")]
    pub warning_color: String,

    /// Unfilled track beneath the arc
    #[serde(default = "default_track_color")]
    pub track_color: String,
}

impl Default for GaugeConfig {
    fn default() -> Self {
        Self {
            size: default_gauge_size(),
            stroke: default_gauge_stroke(),
            healthy_color: default_healthy_color(),
            warning_color: default_warning_color(),
            track_color: default_track_color(),
        }
    }
}

impl GaugeConfig {
    pub fn validate(&self) -> Result<(), String> {
        if self.size == 0 {
            return Err("gauge.size must be greater than zero".to_string());
        }
        if self.stroke >= self.size {
            return Err(format!(
                "gauge.stroke ({}) must be smaller than gauge.size ({})",
                self.stroke, self.size
            ));
        }
        for (name, color) in [
            ("healthy_color", &self.healthy_color),
            ("warning_color", &self.warning_color),
            ("track_color", &self.track_color),
        ] {
            if !is_hex_color(color) {
                return Err(format!(
                    "gauge.{} must be a #rrggbb color, got '{}'",
                    name, color
                ));
            }
        }
        Ok(())
    }

    pub fn arc_color(&self, healthy: bool) -> &str {
        if healthy {
            &self.healthy_color
        } else {
            &self.warning_color
        }
    }
}

/// Text shown in place of numbers and currency adornments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Shown instead of a number while inputs are incomplete
    #[serde(default = "default_placeholder")]
    pub placeholder: String,

    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            placeholder: default_placeholder(),
            currency_symbol: default_currency_symbol(),
        }
    }
}

fn is_hex_color(s: &str) -> bool {
    s.len() == 7 && s.starts_with('#') && s[1..].chars().all(|c| c.is_ascii_hexdigit())
}

fn default_gauge_size() -> u32 {
    180
}
fn default_gauge_stroke() -> u32 {
    12
}
fn default_healthy_color() -> String {
    "#16a34a".to_string()
}
fn default_warning_color() -> String {
    "#e11d48".to_string()
}
fn default_track_color() -> String {
    "#e2e8f0".to_string()
}
fn default_placeholder() -> String {
    "—".to_string()
}
fn default_currency_symbol() -> String {
    "$".to_string()
}
