//! Configuration loading
//!
//! Configuration is a single JSON file; missing fields fall back to the
//! defaults in [`schema`].

pub mod schema;

pub use schema::{AppConfig, ScrollConfig, TiltConfig, TrailConfig};

use crate::animator::host::TrailError;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur while loading configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error(transparent)]
    Invalid(#[from] TrailError),
}

/// Result type for configuration loading
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Read and validate a JSON configuration file
pub fn load(path: &Path) -> ConfigResult<AppConfig> {
    let content = std::fs::read_to_string(path)?;
    let config: AppConfig = serde_json::from_str(&content)?;
    config.validate()?;

    tracing::debug!("Loaded configuration from {}", path.display());
    Ok(config)
}

/// Load the file if one is given, otherwise use defaults
pub fn load_or_default(path: Option<&Path>) -> ConfigResult<AppConfig> {
    match path {
        Some(path) => load(path),
        None => Ok(AppConfig::default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"trail": {{"trailCount": 4}}, "frameRate": 30}}"#).unwrap();

        let config = load(file.path()).unwrap();
        assert_eq!(config.trail.trail_count, 4);
        assert_eq!(config.frame_rate, 30.0);
    }

    #[test]
    fn test_load_rejects_invalid_values() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"trail": {{"smoothingFactor": 0}}}}"#).unwrap();

        assert!(matches!(
            load(file.path()),
            Err(ConfigError::Invalid(TrailError::InvalidConfiguration(_)))
        ));
    }

    #[test]
    fn test_load_reports_parse_errors() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();

        assert!(matches!(load(file.path()), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = load(&dir.path().join("missing.json"));
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }

    #[test]
    fn test_load_or_default() {
        assert_eq!(load_or_default(None).unwrap(), AppConfig::default());
    }
}
