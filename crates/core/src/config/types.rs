use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub source: SourceConfig,
    #[serde(default)]
    pub dest: DestConfig,
    #[serde(default)]
    pub fetcher: FetcherConfig,
    #[serde(default)]
    pub mover: MoverConfig,
}

/// Source directory configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SourceConfig {
    /// Directory scanned for .torrent files. Defaults to the platform
    /// Downloads directory when unset.
    #[serde(default)]
    pub root: Option<PathBuf>,
}

/// Destination configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DestConfig {
    /// Root under which category folders are created. Defaults to
    /// `<home>/torrents` when unset.
    #[serde(default)]
    pub dir: Option<PathBuf>,
    /// Category folder used for rules that declare no category of their own.
    #[serde(default = "default_unknown_category")]
    pub unknown_category: String,
}

impl Default for DestConfig {
    fn default() -> Self {
        Self {
            dir: None,
            unknown_category: default_unknown_category(),
        }
    }
}

fn default_unknown_category() -> String {
    "unknown".to_string()
}

/// Remote page fetcher configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FetcherConfig {
    /// Request timeout in seconds (default: 30)
    #[serde(default = "default_timeout")]
    pub timeout_secs: u32,
    /// User agent sent with enrichment requests
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for FetcherConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout(),
            user_agent: default_user_agent(),
        }
    }
}

fn default_timeout() -> u32 {
    30
}

fn default_user_agent() -> String {
    concat!("torrent-valet/", env!("CARGO_PKG_VERSION")).to_string()
}

/// File mover configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct MoverConfig {
    /// Whether an existing destination file may be replaced (default: false)
    #[serde(default)]
    pub overwrite: bool,
}
