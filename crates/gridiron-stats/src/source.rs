// Shared CSV source plumbing: load errors, optional files, lenient cells.

use serde::{Deserialize, Deserializer};
use std::fs::File;
use std::path::Path;
use tracing::info;

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("CSV error in {path}: {source}")]
    Csv { path: String, source: csv::Error },
}

impl LoadError {
    pub(crate) fn io(path: &Path, source: std::io::Error) -> Self {
        LoadError::Io {
            path: path.display().to_string(),
            source,
        }
    }

    pub(crate) fn csv(path: &Path, source: csv::Error) -> Self {
        LoadError::Csv {
            path: path.display().to_string(),
            source,
        }
    }
}

/// Open a file that the dashboard can live without. A missing file is
/// `Ok(None)`; any other I/O failure is still an error.
pub(crate) fn open_optional(path: &Path) -> Result<Option<File>, LoadError> {
    match File::open(path) {
        Ok(file) => Ok(Some(file)),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            info!("optional file {} not found, feature unavailable", path.display());
            Ok(None)
        }
        Err(e) => Err(LoadError::io(path, e)),
    }
}

/// Numeric cell that reads as 0 when empty or unparseable.
pub(crate) fn lenient_f64<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(lenient_opt_f64(deserializer)?.unwrap_or(0.0))
}

/// Numeric cell that reads as `None` when empty, unparseable or non-finite.
pub(crate) fn lenient_opt_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw
        .and_then(|s| s.trim().parse::<f64>().ok())
        .filter(|v| v.is_finite()))
}

/// Non-negative whole-number cell (`"3"` or `"3.0"`); `None` otherwise.
pub(crate) fn lenient_opt_u32<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(lenient_opt_f64(deserializer)?
        .filter(|v| *v >= 0.0 && v.fract() == 0.0 && *v <= u32::MAX as f64)
        .map(|v| v as u32))
}
