use super::{types::Config, ConfigError};

/// Validate configuration
/// Currently validates:
/// - Fetcher timeout is not 0
/// - Unknown category label is not empty
pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    if config.fetcher.timeout_secs == 0 {
        return Err(ConfigError::ValidationError(
            "fetcher.timeout_secs cannot be 0".to_string(),
        ));
    }

    if config.dest.unknown_category.trim().is_empty() {
        return Err(ConfigError::ValidationError(
            "dest.unknown_category cannot be empty".to_string(),
        ));
    }

    Ok(())
}
