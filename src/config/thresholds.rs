use serde::{Deserialize, Serialize};

/// Constants used by the LTV/CAC derivation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RatioThresholds {
    /// Ratio at or above which unit economics count as healthy
    #[serde(default = "default_healthy_ratio")]
    pub healthy_ratio: f64,

    /// Ratio at which the gauge is completely filled
    #[serde(default = "default_gauge_saturation_ratio")]
    pub gauge_saturation_ratio: f64,

    /// Lower bound applied to monthly churn before inverting it
    #[serde(default = "default_churn_floor")]
    pub churn_floor: f64,
}

impl Default for RatioThresholds {
    fn default() -> Self {
        Self {
            healthy_ratio: default_healthy_ratio(),
            gauge_saturation_ratio: default_gauge_saturation_ratio(),
            churn_floor: default_churn_floor(),
        }
    }
}

impl RatioThresholds {
    /// Checks that every constant keeps the derivation well defined.
    pub fn validate(&self) -> Result<(), String> {
        if !(self.healthy_ratio.is_finite() && self.healthy_ratio > 0.0) {
            return Err(format!(
                "healthy_ratio must be a positive number, got {}",
                self.healthy_ratio
            ));
        }
        if !(self.gauge_saturation_ratio.is_finite() && self.gauge_saturation_ratio > 0.0) {
            return Err(format!(
                "gauge_saturation_ratio must be a positive number, got {}",
                self.gauge_saturation_ratio
            ));
        }
        if !(self.churn_floor > 0.0 && self.churn_floor <= 1.0) {
            return Err(format!(
                "churn_floor must be in (0, 1], got {}",
                self.churn_floor
            ));
        }
        Ok(())
    }
}

pub fn default_healthy_ratio() -> f64 {
    3.0
}

pub fn default_gauge_saturation_ratio() -> f64 {
    5.0
}

pub fn default_churn_floor() -> f64 {
    0.0001
}
