use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use std::io::ErrorKind;
use std::path::Path;

use super::{types::Config, ConfigError};

/// Environment prefix for overriding individual configuration keys.
const ENV_PREFIX: &str = "VALET_";

/// Load configuration from a TOML file.
///
/// The file is read up front so a missing file and a malformed one surface
/// as distinct errors; `VALET_`-prefixed environment variables override
/// individual keys afterwards.
pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    let raw = std::fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => ConfigError::FileNotFound(path.display().to_string()),
        _ => ConfigError::ReadError(format!("{}: {}", path.display(), e)),
    })?;

    Figment::from(Toml::string(&raw))
        .merge(Env::prefixed(ENV_PREFIX).split("_"))
        .extract()
        .map_err(|e| ConfigError::ParseError(e.to_string()))
}

/// Parse configuration from a TOML string, without environment overrides
/// so tests stay deterministic.
pub fn load_config_from_str(toml_str: &str) -> Result<Config, ConfigError> {
    Figment::from(Toml::string(toml_str))
        .extract()
        .map_err(|e| ConfigError::ParseError(e.to_string()))
}
