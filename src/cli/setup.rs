//! Runtime setup for the CLI: logging and configuration resolution.

use anyhow::{Context, Result};
use log::LevelFilter;

use super::args::RenderOptions;
use crate::config::{self, SummitConfig};
use crate::formatting::FormattingConfig;

/// Map `-v` repetitions to a log level. `RUST_LOG` still takes precedence.
pub fn level_for_verbosity(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Install the global logger once at startup. Logs go to stderr.
pub fn init_logging(verbosity: u8) {
    let mut builder = env_logger::Builder::new();
    builder
        .filter_level(level_for_verbosity(verbosity))
        .format_timestamp(None)
        .parse_default_env();
    // A logger may already be installed when running under a test harness.
    let _ = builder.try_init();
}

/// Load the explicit `--config` file, or discover `.summit.toml`, then apply any preset.
pub fn resolve_config(render: &RenderOptions) -> Result<SummitConfig> {
    let loaded = match &render.config {
        Some(path) => config::load_config_from_path(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => config::load_config(),
    };

    Ok(match render.threshold_preset {
        Some(preset) => {
            let preset: config::PresetLevel = preset.into();
            log::debug!("Applying {} threshold preset", preset);
            config::merge_preset_with_config(preset, loaded)
        }
        None => loaded,
    })
}

pub fn formatting_for(render: &RenderOptions, config: &SummitConfig) -> FormattingConfig {
    if render.plain {
        FormattingConfig::plain()
    } else {
        FormattingConfig::from_env()
            .with_config_preference(config.output.as_ref().and_then(|o| o.use_color))
    }
}
