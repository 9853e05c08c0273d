use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use super::core::SummitConfig;
use super::display::{DisplayConfig, GaugeConfig};
use super::thresholds::RatioThresholds;
use crate::errors::{Result, SummitError};

pub const CONFIG_FILE_NAME: &str = ".summit.toml";

/// Parse config from a TOML string, replacing invalid sections with defaults.
///
/// Syntax errors are returned; semantically invalid sections only produce a
/// warning so a typo in one color does not discard the whole file.
pub fn parse_and_validate_config(contents: &str) -> std::result::Result<SummitConfig, String> {
    let mut config = toml::from_str::<SummitConfig>(contents)
        .map_err(|e| format!("Failed to parse {}: {}", CONFIG_FILE_NAME, e))?;

    if let Some(thresholds) = config.thresholds {
        if let Err(e) = thresholds.validate() {
            log::warn!("Invalid thresholds: {}. Using defaults.", e);
            config.thresholds = Some(RatioThresholds::default());
        }
    }

    if let Some(ref gauge) = config.gauge {
        if let Err(e) = gauge.validate() {
            log::warn!("Invalid gauge settings: {}. Using defaults.", e);
            config.gauge = Some(GaugeConfig::default());
        }
    }

    if let Some(ref display) = config.display {
        if display.placeholder.is_empty() {
            log::warn!("Empty display.placeholder. Using default.");
            config.display = Some(DisplayConfig {
                placeholder: DisplayConfig::default().placeholder,
                ..display.clone()
            });
        }
    }

    Ok(config)
}

/// Strict variant used for an explicitly requested `--config` file.
pub fn parse_config_strict(contents: &str, path: Option<&Path>) -> Result<SummitConfig> {
    let to_err = |message: String| SummitError::config(message, path.map(Path::to_path_buf));

    let config = toml::from_str::<SummitConfig>(contents).map_err(|e| to_err(e.to_string()))?;
    config.thresholds().validate().map_err(to_err)?;
    config.gauge().validate().map_err(to_err)?;
    if config.display().placeholder.is_empty() {
        return Err(to_err("display.placeholder must not be empty".to_string()));
    }
    Ok(config)
}

/// Load the file named by `--config`. Any failure is an error.
pub fn load_config_from_path(path: &Path) -> Result<SummitConfig> {
    let contents = fs::read_to_string(path).map_err(|e| SummitError::io(path, e))?;
    let config = parse_config_strict(&contents, Some(path))?;
    log::debug!("Loaded config from {}", path.display());
    Ok(config)
}

/// Lenient load of a discovered file. A missing file is silent, anything
/// else unreadable or unparseable is logged and skipped.
pub(crate) fn try_load_config_from_path(config_path: &Path) -> Option<SummitConfig> {
    let contents = fs::read_to_string(config_path)
        .map_err(|e| {
            if e.kind() != ErrorKind::NotFound {
                log::warn!("Skipping unreadable {}: {}", config_path.display(), e);
            }
        })
        .ok()?;

    parse_and_validate_config(&contents)
        .map_err(|e| log::warn!("{}. Using defaults.", e))
        .ok()
        .inspect(|_| log::debug!("Loaded config from {}", config_path.display()))
}

/// Search `start` and its ancestors for `.summit.toml`.
pub fn load_config_from(start: &Path) -> SummitConfig {
    const MAX_TRAVERSAL_DEPTH: usize = 10;

    start
        .ancestors()
        .take(MAX_TRAVERSAL_DEPTH)
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find_map(|path| try_load_config_from_path(&path))
        .unwrap_or_else(|| {
            log::debug!(
                "No config found after checking {} directories. Using default config.",
                MAX_TRAVERSAL_DEPTH
            );
            SummitConfig::default()
        })
}

pub fn load_config() -> SummitConfig {
    match std::env::current_dir() {
        Ok(dir) => load_config_from(&dir),
        Err(e) => {
            log::warn!(
                "Failed to get current directory: {}. Using default config.",
                e
            );
            SummitConfig::default()
        }
    }
}
