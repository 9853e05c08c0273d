//! Configuration for summit, read from `.summit.toml`.
//!
//! Every section is optional. Missing sections and fields take the
//! documented defaults, so an empty file behaves exactly like no file.

mod core;
mod display;
mod loader;
pub mod presets;
mod thresholds;

pub use core::{OutputConfig, SummitConfig};
pub use display::{DisplayConfig, GaugeConfig};
pub use loader::{
    load_config, load_config_from, load_config_from_path, parse_and_validate_config,
    parse_config_strict, CONFIG_FILE_NAME,
};
pub use presets::{merge_preset_with_config, PresetLevel};
pub use thresholds::{
    default_churn_floor, default_gauge_saturation_ratio, default_healthy_ratio, RatioThresholds,
};

/// Commented default configuration written by `summit init`.
pub const DEFAULT_CONFIG_TOML: &str = r##"# Summit Configuration

[thresholds]
# LTV/CAC at or above this ratio is shown in the healthy color
healthy_ratio = 3.0
# Ratio at which the gauge is completely filled
gauge_saturation_ratio = 5.0
# Monthly churn is floored at this value before computing customer lifespan
churn_floor = 0.0001

[gauge]
size = 180
stroke = 12
healthy_color = "#16a34a"
warning_color = "#e11d48"
track_color = "#e2e8f0"

[display]
placeholder = "—"
currency_symbol = "$"

[output]
default_format = "terminal"
"##;
