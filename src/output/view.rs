use serde::Serialize;

use crate::config::{GaugeConfig, RatioThresholds, SummitConfig};
use crate::core::{Field, InputSet, RatioReport};
use crate::formatting::ValueFormatter;
use crate::input;

/// One entry row as the user would see it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InputRow {
    pub field: Field,
    pub label: &'static str,
    /// Stored value (fractions for percent fields)
    pub value: Option<f64>,
    /// Value shown in the entry box (whole percents for percent fields)
    pub display: Option<f64>,
}

/// Display-ready strings for one report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderedValues {
    pub ratio: String,
    pub cac: String,
    pub ltv: String,
    pub lifespan: String,
    pub payback_margin: String,
    pub narrative: String,
    pub target: String,
    pub color: String,
}

/// Everything a writer needs to present one calculation.
#[derive(Debug, Clone, Serialize)]
pub struct CalculationView {
    pub inputs: Vec<InputRow>,
    pub missing: Vec<Field>,
    pub report: RatioReport,
    pub thresholds: RatioThresholds,
    pub rendered: RenderedValues,
    #[serde(skip)]
    pub gauge: GaugeConfig,
}

impl CalculationView {
    pub fn new(inputs: &InputSet, report: RatioReport, config: &SummitConfig) -> Self {
        let thresholds = config.thresholds();
        let gauge = config.gauge();
        let values = ValueFormatter::new(config.display());

        let rows = Field::ALL
            .into_iter()
            .map(|field| {
                let value = inputs.get(field);
                InputRow {
                    field,
                    label: field.label(),
                    value,
                    display: value.map(|v| input::display_value(field, v)),
                }
            })
            .collect();

        let rendered = RenderedValues {
            ratio: values.ratio(&report),
            cac: values.cac(&report),
            ltv: values.ltv(&report),
            lifespan: values.lifespan(&report),
            payback_margin: values.payback_margin(&report),
            narrative: values.narrative(&report),
            target: values.target_caption(thresholds.healthy_ratio),
            color: gauge.arc_color(report.is_healthy).to_string(),
        };

        Self {
            inputs: rows,
            missing: inputs.missing_fields(),
            report,
            thresholds,
            rendered,
            gauge,
        }
    }
}
