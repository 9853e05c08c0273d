use crate::config::DisplayConfig;
use crate::core::RatioReport;

/// Caption shown above the gauge, followed by the healthy ratio.
pub const TARGET_CAPTION_PREFIX: &str = "Target ≥";

/// Shown instead of the narrative while inputs are incomplete.
pub const INCOMPLETE_NARRATIVE: &str = "Enter inputs to calculate LTV/CAC ratio";

/// Insert `,` every three digits of an unsigned integer string.
fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Whole-unit currency with thousands separators, e.g. `$5,250` or `-$1,200`.
pub fn format_currency(value: f64, symbol: &str) -> String {
    let rounded = value.round();
    let sign = if rounded < 0.0 { "-" } else { "" };
    let digits = format!("{:.0}", rounded.abs());
    format!("{}{}{}", sign, symbol, group_thousands(&digits))
}

/// Plain number with thousands separators and up to three decimals.
pub fn format_number(value: f64) -> String {
    let sign = if value < 0.0 { "-" } else { "" };
    let fixed = format!("{:.3}", value.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let frac = frac_part.trim_end_matches('0');
    if frac.is_empty() {
        format!("{}{}", sign, group_thousands(int_part))
    } else {
        format!("{}{}.{}", sign, group_thousands(int_part), frac)
    }
}

/// Short signed currency: `$1.2M`, `-$3.4k`, `$120`.
pub fn format_compact_currency(value: f64, symbol: &str) -> String {
    let abs = value.abs();
    let sign = if value < 0.0 { "-" } else { "" };
    let body = if abs >= 1_000_000.0 {
        format!("{}{:.1}M", symbol, abs / 1_000_000.0)
    } else if abs >= 1_000.0 {
        format!("{}{:.1}k", symbol, abs / 1_000.0)
    } else {
        format!("{}{:.0}", symbol, abs)
    };
    format!("{}{}", sign, body)
}

/// `26.25x`, or the placeholder while the report is invalid.
pub fn format_ratio(report: &RatioReport, placeholder: &str) -> String {
    if report.valid {
        format!("{:.2}x", report.ratio)
    } else {
        placeholder.to_string()
    }
}

/// Sentence composing the formatted amounts and the ratio.
pub fn narrative(report: &RatioReport, symbol: &str) -> String {
    if !report.valid {
        return INCOMPLETE_NARRATIVE.to_string();
    }
    format!(
        "Ratio = LTV / CAC = {} / {} = {:.2}x",
        format_currency(report.ltv, symbol),
        format_currency(report.cac, symbol),
        report.ratio
    )
}

/// Display strings for one report, honoring the configured placeholder and currency.
#[derive(Debug, Clone, Default)]
pub struct ValueFormatter {
    display: DisplayConfig,
}

impl ValueFormatter {
    pub fn new(display: DisplayConfig) -> Self {
        Self { display }
    }

    pub fn placeholder(&self) -> &str {
        &self.display.placeholder
    }

    pub fn ratio(&self, report: &RatioReport) -> String {
        format_ratio(report, &self.display.placeholder)
    }

    pub fn cac(&self, report: &RatioReport) -> String {
        self.amount(report, report.cac)
    }

    pub fn ltv(&self, report: &RatioReport) -> String {
        self.amount(report, report.ltv)
    }

    /// LTV minus CAC in compact form, the margin earned per acquired customer.
    pub fn payback_margin(&self, report: &RatioReport) -> String {
        if !report.valid {
            return self.display.placeholder.clone();
        }
        format_compact_currency(report.ltv - report.cac, &self.display.currency_symbol)
    }

    pub fn lifespan(&self, report: &RatioReport) -> String {
        if report.valid {
            format!("{} mo", format_number((report.lifespan_months * 10.0).round() / 10.0))
        } else {
            self.display.placeholder.clone()
        }
    }

    pub fn narrative(&self, report: &RatioReport) -> String {
        narrative(report, &self.display.currency_symbol)
    }

    pub fn target_caption(&self, healthy_ratio: f64) -> String {
        format!("{} {:.1}", TARGET_CAPTION_PREFIX, healthy_ratio)
    }

    fn amount(&self, report: &RatioReport, value: f64) -> String {
        if report.valid {
            format_currency(value, &self.display.currency_symbol)
        } else {
            self.display.placeholder.clone()
        }
    }
}
