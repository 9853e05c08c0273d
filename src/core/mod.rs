//! Data model for the LTV/CAC calculator.
//!
//! `InputSet` holds the six monthly inputs, each of which may be missing.
//! `RatioReport` is the derived snapshot produced by
//! [`crate::calculator::compute`].

pub mod field;

pub use field::{Adornment, Field};

use serde::{Deserialize, Serialize};

/// Six optional monthly inputs.
///
/// Missing values are `None`. Percent fields hold fractions in `[0, 1]`;
/// whole-percent entry is converted at the input boundary
/// (see [`crate::input::normalize_percent`]).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct InputSet {
    pub marketing_spend: Option<f64>,
    pub sales_spend: Option<f64>,
    pub new_customers: Option<f64>,
    pub arpa: Option<f64>,
    pub gross_margin_pct: Option<f64>,
    pub churn_monthly_pct: Option<f64>,
}

/// All six inputs present, extracted from an `InputSet` once it is valid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CompleteInputs {
    pub marketing_spend: f64,
    pub sales_spend: f64,
    pub new_customers: f64,
    pub arpa: f64,
    pub gross_margin_pct: f64,
    pub churn_monthly_pct: f64,
}

impl InputSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: Field) -> Option<f64> {
        match field {
            Field::MarketingSpend => self.marketing_spend,
            Field::SalesSpend => self.sales_spend,
            Field::NewCustomers => self.new_customers,
            Field::Arpa => self.arpa,
            Field::GrossMarginPct => self.gross_margin_pct,
            Field::ChurnMonthlyPct => self.churn_monthly_pct,
        }
    }

    pub fn set(&mut self, field: Field, value: Option<f64>) {
        let slot = match field {
            Field::MarketingSpend => &mut self.marketing_spend,
            Field::SalesSpend => &mut self.sales_spend,
            Field::NewCustomers => &mut self.new_customers,
            Field::Arpa => &mut self.arpa,
            Field::GrossMarginPct => &mut self.gross_margin_pct,
            Field::ChurnMonthlyPct => &mut self.churn_monthly_pct,
        };
        *slot = value;
    }

    /// Builder-style variant of [`InputSet::set`].
    pub fn with(mut self, field: Field, value: f64) -> Self {
        self.set(field, Some(value));
        self
    }

    pub fn missing_fields(&self) -> Vec<Field> {
        Field::ALL
            .into_iter()
            .filter(|f| self.get(*f).is_none())
            .collect()
    }

    /// Returns the inputs when all six are present and `new_customers > 0`.
    pub fn complete(&self) -> Option<CompleteInputs> {
        let inputs = CompleteInputs {
            marketing_spend: self.marketing_spend?,
            sales_spend: self.sales_spend?,
            new_customers: self.new_customers?,
            arpa: self.arpa?,
            gross_margin_pct: self.gross_margin_pct?,
            churn_monthly_pct: self.churn_monthly_pct?,
        };
        (inputs.new_customers > 0.0).then_some(inputs)
    }

    pub fn is_valid(&self) -> bool {
        self.complete().is_some()
    }
}

/// Derived LTV/CAC metrics for one `InputSet` snapshot.
///
/// When `valid` is false every numeric field is zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct RatioReport {
    pub valid: bool,
    pub cac: f64,
    pub lifespan_months: f64,
    pub ltv: f64,
    pub ratio: f64,
    pub gauge_fraction: f64,
    pub is_healthy: bool,
}

impl RatioReport {
    /// The result for incomplete inputs.
    pub fn invalid(healthy_ratio: f64) -> Self {
        Self {
            is_healthy: 0.0 >= healthy_ratio,
            ..Self::default()
        }
    }
}
