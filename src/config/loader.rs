//! Configuration loading from disk.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::config::schema::PipelineConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation failed: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Load and validate configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<PipelineConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    let config = parse_config(&content)?;
    tracing::debug!(path = %path.display(), layers = ?config.layers, "Configuration loaded");
    Ok(config)
}

/// Parse and validate configuration from TOML text.
pub fn parse_config(content: &str) -> Result<PipelineConfig, ConfigError> {
    let config: PipelineConfig = toml::from_str(content)?;
    validate_config(&config).map_err(ConfigError::Validation)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_validation_errors_are_joined() {
        let err = parse_config("[retry]\nmax_attempts = 0\n[observability]\nlog_level = \"loud\"")
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Validation failed: retry.max_attempts must be at least 1, unknown log level 'loud'"
        );
    }

    #[test]
    fn test_zero_transport_timeout_is_refused() {
        let err = parse_config("[transport]\ntimeout_secs = 0\n[retry]\nmax_attempts = 2\ndelay_ms = 1")
            .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Validation(ref errors) if errors == &[ValidationError::ZeroTransportTimeout]
        ));
    }

    #[test]
    fn test_parse_error() {
        let err = parse_config("layers = [\"sideways\"]").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir().join(format!("hottp-config-{}.toml", std::process::id()));
        let mut file = fs::File::create(&path).unwrap();
        writeln!(file, "[retry]\nmax_attempts = 5\ndelay_ms = 2000").unwrap();
        drop(file);

        let config = load_config(&path).unwrap();
        fs::remove_file(&path).unwrap();
        assert_eq!(config.retry.max_attempts, 5);
        assert_eq!(config.retry.delay_ms, 2000);
    }

    #[test]
    fn test_missing_file() {
        let err = load_config(Path::new("/nonexistent/hottp.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
