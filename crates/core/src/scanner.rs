//! Source directory listing.

use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

const TORRENT_EXTENSION: &str = "torrent";

/// Errors that can occur while listing the source directory.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("Failed to read source directory {path}")]
    ReadDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Lists the .torrent files directly inside `root`.
///
/// Non-recursive. Entries that are not regular files, have a different
/// extension, or carry a non-UTF-8 name are skipped. The result is sorted
/// so runs are deterministic.
pub async fn find_torrents(root: &Path) -> Result<Vec<String>, ScanError> {
    let mut entries = tokio::fs::read_dir(root).await.map_err(|e| ScanError::ReadDir {
        path: root.to_path_buf(),
        source: e,
    })?;

    let mut torrents = Vec::new();
    while let Some(entry) = entries.next_entry().await.map_err(|e| ScanError::ReadDir {
        path: root.to_path_buf(),
        source: e,
    })? {
        match entry.file_type().await {
            Ok(file_type) if file_type.is_file() => {}
            Ok(_) => continue,
            Err(e) => {
                debug!(entry = ?entry.path(), error = %e, "Skipping unreadable entry");
                continue;
            }
        }

        let name_os = entry.file_name();
        let Some(name) = name_os.to_str() else {
            debug!(entry = ?entry.path(), "Skipping non-UTF-8 filename");
            continue;
        };

        if Path::new(name).extension().and_then(|e| e.to_str()) == Some(TORRENT_EXTENSION) {
            torrents.push(name.to_string());
        }
    }

    torrents.sort();
    Ok(torrents)
}
