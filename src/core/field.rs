use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the six monthly inputs of the LTV/CAC calculator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    MarketingSpend,
    SalesSpend,
    NewCustomers,
    Arpa,
    GrossMarginPct,
    ChurnMonthlyPct,
}

/// Visual adornment shown next to an input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Adornment {
    Prefix(&'static str),
    Suffix(&'static str),
    None,
}

impl Field {
    pub const ALL: [Field; 6] = [
        Field::MarketingSpend,
        Field::SalesSpend,
        Field::NewCustomers,
        Field::Arpa,
        Field::GrossMarginPct,
        Field::ChurnMonthlyPct,
    ];

    /// Stable machine name, also accepted by `FromStr`.
    pub fn as_str(self) -> &'static str {
        match self {
            Field::MarketingSpend => "marketing_spend",
            Field::SalesSpend => "sales_spend",
            Field::NewCustomers => "new_customers",
            Field::Arpa => "arpa",
            Field::GrossMarginPct => "gross_margin_pct",
            Field::ChurnMonthlyPct => "churn_monthly_pct",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Field::MarketingSpend => "Marketing Spend (mo)",
            Field::SalesSpend => "Sales Spend (mo)",
            Field::NewCustomers => "New Customers (mo)",
            Field::Arpa => "Avg Monthly Revenue (ARPA)",
            Field::GrossMarginPct => "Gross Margin %",
            Field::ChurnMonthlyPct => "Monthly Churn %",
        }
    }

    pub fn adornment(self) -> Adornment {
        match self {
            Field::MarketingSpend | Field::SalesSpend | Field::Arpa => Adornment::Prefix("$"),
            Field::GrossMarginPct | Field::ChurnMonthlyPct => Adornment::Suffix("%"),
            Field::NewCustomers => Adornment::None,
        }
    }

    /// Percent fields are stored as fractions and accept whole-percent entry.
    pub fn is_percent(self) -> bool {
        matches!(self, Field::GrossMarginPct | Field::ChurnMonthlyPct)
    }

    /// Parse raw entry text for this field, normalizing percents.
    pub fn accept(self, raw: &str) -> Option<f64> {
        crate::input::accept(self, raw)
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "marketing_spend" | "marketing" => Some(Field::MarketingSpend),
            "sales_spend" | "sales" => Some(Field::SalesSpend),
            "new_customers" | "customers" => Some(Field::NewCustomers),
            "arpa" => Some(Field::Arpa),
            "gross_margin_pct" | "gross_margin" | "margin" => Some(Field::GrossMarginPct),
            "churn_monthly_pct" | "churn" => Some(Field::ChurnMonthlyPct),
            _ => None,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Field {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Field::parse(s).ok_or_else(|| {
            format!(
                "Unknown field: '{}'. Valid fields: {}",
                s,
                Field::ALL
                    .iter()
                    .map(|f| f.as_str())
                    .collect::<Vec<_>>()
                    .join(", ")
            )
        })
    }
}
