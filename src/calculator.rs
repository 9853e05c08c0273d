//! LTV/CAC derivation.
//!
//! Pure functions from an [`InputSet`] to a [`RatioReport`]. Nothing here
//! fails: incomplete inputs or a non-positive customer count produce a report
//! with `valid == false` and every number zeroed.
//!
//! ```text
//! cac             = (marketing + sales) / new_customers
//! lifespan_months = 1 / max(churn_floor, churn)
//! ltv             = arpa * gross_margin * lifespan_months
//! ratio           = ltv / cac            (0 when cac is 0)
//! gauge_fraction  = clamp(ratio / saturation, 0, 1)
//! is_healthy      = ratio >= healthy_ratio
//! ```

use crate::config::RatioThresholds;
use crate::core::{CompleteInputs, InputSet, RatioReport};
use crate::errors::{Result, SummitError};

/// Derive the report using the standard thresholds (3x healthy, 5x saturation).
pub fn compute(inputs: &InputSet) -> RatioReport {
    compute_with(inputs, &RatioThresholds::default())
}

/// `thresholds` must pass [`RatioThresholds::validate`]; use
/// [`RatioCalculator::try_new`] for values from outside the crate's config loader.
pub fn compute_with(inputs: &InputSet, thresholds: &RatioThresholds) -> RatioReport {
    match inputs.complete() {
        Some(complete) => derive(&complete, thresholds),
        None => RatioReport::invalid(thresholds.healthy_ratio),
    }
}

fn derive(inputs: &CompleteInputs, thresholds: &RatioThresholds) -> RatioReport {
    let cac = customer_acquisition_cost(inputs);
    let lifespan_months = lifespan_months(inputs.churn_monthly_pct, thresholds.churn_floor);
    let ltv = inputs.arpa * inputs.gross_margin_pct * lifespan_months;
    let ratio = match ltv / cac {
        r if cac > 0.0 && !r.is_nan() => r,
        _ => 0.0,
    };

    RatioReport {
        valid: true,
        cac,
        lifespan_months,
        ltv,
        ratio,
        gauge_fraction: gauge_fraction(ratio, thresholds.gauge_saturation_ratio),
        is_healthy: is_healthy(ratio, thresholds.healthy_ratio),
    }
}

fn customer_acquisition_cost(inputs: &CompleteInputs) -> f64 {
    (inputs.marketing_spend + inputs.sales_spend) / inputs.new_customers
}

/// Expected customer lifetime in months. Zero churn is floored, never infinite.
pub fn lifespan_months(churn_monthly_pct: f64, churn_floor: f64) -> f64 {
    1.0 / churn_monthly_pct.max(churn_floor)
}

/// Normalize a ratio into the `[0, 1]` fill of the gauge. NaN maps to 0.
pub fn gauge_fraction(ratio: f64, saturation_ratio: f64) -> f64 {
    let fraction = ratio / saturation_ratio;
    if fraction.is_nan() {
        0.0
    } else {
        fraction.clamp(0.0, 1.0)
    }
}

pub fn is_healthy(ratio: f64, healthy_ratio: f64) -> bool {
    ratio >= healthy_ratio
}

/// Object-style wrapper holding the thresholds used for every computation.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RatioCalculator {
    thresholds: RatioThresholds,
}

impl RatioCalculator {
    /// Expects thresholds that already passed validation, as every loaded
    /// `SummitConfig` does.
    pub fn new(thresholds: RatioThresholds) -> Self {
        Self { thresholds }
    }

    /// Validating constructor for thresholds built by hand.
    pub fn try_new(thresholds: RatioThresholds) -> Result<Self> {
        thresholds
            .validate()
            .map_err(|message| SummitError::config(message, None))?;
        Ok(Self::new(thresholds))
    }

    pub fn thresholds(&self) -> &RatioThresholds {
        &self.thresholds
    }

    pub fn compute(&self, inputs: &InputSet) -> RatioReport {
        compute_with(inputs, &self.thresholds)
    }
}
