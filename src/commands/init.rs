use crate::config::{CONFIG_FILE_NAME, DEFAULT_CONFIG_TOML};
use crate::errors::{Result, SummitError};
use crate::io;
use std::path::{Path, PathBuf};

/// Write the default configuration into `dir`, returning the created path.
pub fn write_default_config(dir: &Path, force: bool) -> Result<PathBuf> {
    let config_path = dir.join(CONFIG_FILE_NAME);

    if config_path.exists() && !force {
        return Err(SummitError::ConfigExists(config_path));
    }

    io::write_file(&config_path, DEFAULT_CONFIG_TOML)?;
    Ok(config_path)
}

pub fn init_config(force: bool) -> anyhow::Result<()> {
    write_default_config(Path::new("."), force)?;
    println!("Created {} configuration file", CONFIG_FILE_NAME);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{parse_config_strict, SummitConfig};
    use tempfile::TempDir;

    #[test]
    fn test_init_writes_default_config() {
        let dir = TempDir::new().unwrap();
        let path = write_default_config(dir.path(), false).unwrap();
        let contents = std::fs::read_to_string(&path).unwrap();
        let parsed = parse_config_strict(&contents, Some(&path)).unwrap();
        assert_eq!(parsed.thresholds(), SummitConfig::default().thresholds());
    }

    #[test]
    fn test_init_refuses_to_overwrite_without_force() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "# mine\n").unwrap();

        let err = write_default_config(dir.path(), false).unwrap_err();
        assert!(matches!(err, SummitError::ConfigExists(_)));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "# mine\n");

        write_default_config(dir.path(), true).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), DEFAULT_CONFIG_TOML);
    }
}
