//! Input boundary: raw entry text to stored values and back.
//!
//! Empty or non-numeric text becomes "missing" (`None`) here, before it ever
//! reaches the calculator. Percent fields accept whole percents ("25") as
//! well as fractions ("0.25") and are always stored as fractions in `[0, 1]`.

use crate::core::Field;

/// Parse one raw entry. Blank, non-numeric, and non-finite text is missing.
pub fn parse_field_value(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed
        .replace(',', "")
        .trim_start_matches('$')
        .trim_end_matches('%')
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
}

/// Convert a caller-supplied percent to a fraction in `[0, 1]`.
///
/// Values above 1 are whole percents and are divided by 100 first.
pub fn normalize_percent(value: f64) -> f64 {
    let pct = if value > 1.0 { value / 100.0 } else { value };
    pct.clamp(0.0, 1.0)
}

/// Value to store for `field` given a parsed number.
pub fn normalize_for_field(field: Field, value: f64) -> f64 {
    if field.is_percent() {
        normalize_percent(value)
    } else {
        value
    }
}

/// Parse and normalize raw entry text for `field`.
pub fn accept(field: Field, raw: &str) -> Option<f64> {
    parse_field_value(raw).map(|v| normalize_for_field(field, v))
}

/// Value shown back in the entry box for a stored value.
///
/// Gross margin is displayed as a whole percent, churn with one decimal.
pub fn display_value(field: Field, stored: f64) -> f64 {
    match field {
        Field::GrossMarginPct => (stored * 100.0).round(),
        Field::ChurnMonthlyPct => (stored * 1000.0).round() / 10.0,
        _ => stored,
    }
}
