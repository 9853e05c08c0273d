use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::errors::{Result, SummitError};

pub fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_dir(parent)?;
        }
    }
    fs::write(path, content).map_err(|e| SummitError::io(path, e))
}

pub fn ensure_dir(path: &Path) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path).map_err(|e| SummitError::io(path, e))?;
    }
    Ok(())
}

/// Where rendered output goes: stdout or a file.
pub enum OutputDestination {
    Stdout,
    File(PathBuf),
}

impl OutputDestination {
    pub fn from_option(path: Option<PathBuf>) -> Self {
        match path {
            Some(path) => Self::File(path),
            None => Self::Stdout,
        }
    }

    /// Writes `content` to the destination.
    pub fn write(&self, content: &str) -> Result<()> {
        match self {
            Self::Stdout => {
                let mut stdout = std::io::stdout().lock();
                stdout
                    .write_all(content.as_bytes())
                    .and_then(|_| stdout.flush())
                    .map_err(|e| SummitError::io("<stdout>", e))
            }
            Self::File(path) => {
                write_file(path, content)?;
                log::info!("Wrote {}", path.display());
                Ok(())
            }
        }
    }
}
