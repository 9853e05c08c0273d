use anyhow::{Context, Result};
use std::path::PathBuf;

use crate::cli::RenderOptions;
use crate::config::GaugeConfig;
use crate::errors::SummitError;
use crate::gauge;
use crate::io::OutputDestination;

pub struct GaugeCommandConfig {
    pub fraction: f64,
    pub healthy: bool,
    pub size: Option<u32>,
    pub stroke: Option<u32>,
    pub output: Option<PathBuf>,
    pub config: Option<PathBuf>,
}

/// Apply command-line size overrides on top of the configured gauge.
pub fn gauge_with_overrides(
    base: GaugeConfig,
    size: Option<u32>,
    stroke: Option<u32>,
) -> Result<GaugeConfig, SummitError> {
    let gauge = GaugeConfig {
        size: size.unwrap_or(base.size),
        stroke: stroke.unwrap_or(base.stroke),
        ..base
    };
    gauge.validate().map_err(SummitError::InvalidInput)?;
    Ok(gauge)
}

pub fn render_gauge(
    fraction: f64,
    healthy: bool,
    gauge: &GaugeConfig,
) -> Result<String, SummitError> {
    if !fraction.is_finite() {
        return Err(SummitError::InvalidInput(format!(
            "--fraction must be a finite number, got {}",
            fraction
        )));
    }
    Ok(gauge::render_svg(fraction, healthy, gauge))
}

pub fn handle_gauge(config: GaugeCommandConfig) -> Result<()> {
    let render = RenderOptions {
        config: config.config,
        ..Default::default()
    };
    let summit_config = crate::cli::resolve_config(&render)?;
    let gauge = gauge_with_overrides(summit_config.gauge(), config.size, config.stroke)?;
    let svg = render_gauge(config.fraction, config.healthy, &gauge)?;

    OutputDestination::from_option(config.output)
        .write(&svg)
        .context("Failed to write gauge")?;
    Ok(())
}
