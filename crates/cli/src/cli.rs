//! CLI argument parsing for torrent-valet

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "torrent-valet")]
#[command(version)]
#[command(about = "Classify downloaded torrent files into category folders", long_about = None)]
pub struct Cli {
    /// Source directory scanned for .torrent files (default: the platform Downloads directory)
    pub root: Option<PathBuf>,

    /// Destination root for category folders (default: <home>/torrents)
    #[arg(short = 'd', long = "dest", value_name = "DIR")]
    pub dest: Option<PathBuf>,

    /// Category folder for rules that declare none of their own
    #[arg(long = "unknown", value_name = "LABEL")]
    pub unknown: Option<String>,

    /// Configuration file (TOML)
    #[arg(short = 'c', long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Replace existing destination files
    #[arg(long = "overwrite")]
    pub overwrite: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_defaults() {
        let cli = Cli::parse_from(["torrent-valet"]);
        assert!(cli.root.is_none());
        assert!(cli.dest.is_none());
        assert!(cli.unknown.is_none());
        assert!(!cli.overwrite);
    }

    #[test]
    fn test_parse_all_flags() {
        let cli = Cli::parse_from([
            "torrent-valet",
            "/downloads",
            "--dest",
            "/srv/torrents",
            "--unknown",
            "misc",
            "--overwrite",
        ]);
        assert_eq!(cli.root, Some(PathBuf::from("/downloads")));
        assert_eq!(cli.dest, Some(PathBuf::from("/srv/torrents")));
        assert_eq!(cli.unknown.as_deref(), Some("misc"));
        assert!(cli.overwrite);
    }
}
