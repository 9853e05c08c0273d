use anyhow::{Context, Result};
use std::path::PathBuf;

use crate::calculator::RatioCalculator;
use crate::cli::{InputArgs, RenderOptions};
use crate::config::SummitConfig;
use crate::core::{Field, InputSet};
use crate::io::OutputDestination;
use crate::output::{self, CalculationView, OutputFormat};

pub struct CalcConfig {
    pub inputs: InputArgs,
    pub format: Option<OutputFormat>,
    pub output: Option<PathBuf>,
    pub render: RenderOptions,
}

/// Build an `InputSet` from raw flag text through the input boundary.
pub fn inputs_from_args(args: &InputArgs) -> InputSet {
    let raw = [
        (Field::MarketingSpend, &args.marketing_spend),
        (Field::SalesSpend, &args.sales_spend),
        (Field::NewCustomers, &args.new_customers),
        (Field::Arpa, &args.arpa),
        (Field::GrossMarginPct, &args.gross_margin),
        (Field::ChurnMonthlyPct, &args.churn),
    ];

    raw.into_iter()
        .fold(InputSet::new(), |mut inputs, (field, value)| {
            let accepted = value.as_deref().and_then(|text| field.accept(text));
            if value.is_some() && accepted.is_none() {
                log::warn!("Ignoring non-numeric value for {}", field);
            }
            inputs.set(field, accepted);
            inputs
        })
}

/// Explicit `--format`, then `output.default_format`, then terminal.
pub fn resolve_format(explicit: Option<OutputFormat>, config: &SummitConfig) -> OutputFormat {
    explicit
        .or_else(|| {
            let configured = config.default_format()?;
            let parsed = OutputFormat::parse(configured);
            if parsed.is_none() {
                log::warn!("Unknown output.default_format '{}'. Using terminal.", configured);
            }
            parsed
        })
        .unwrap_or(OutputFormat::Terminal)
}

pub fn handle_calc(config: CalcConfig) -> Result<()> {
    let summit_config = crate::cli::resolve_config(&config.render)?;
    let formatting = crate::cli::formatting_for(&config.render, &summit_config);
    let format = resolve_format(config.format, &summit_config);

    let inputs = inputs_from_args(&config.inputs);
    let report = RatioCalculator::new(summit_config.thresholds()).compute(&inputs);
    log::debug!("{:?} -> {:?}", inputs, report);

    let view = CalculationView::new(&inputs, report, &summit_config);
    let rendered = output::render_to_string(&view, format, formatting)?;

    OutputDestination::from_option(config.output)
        .write(&rendered)
        .context("Failed to write report")?;
    Ok(())
}
