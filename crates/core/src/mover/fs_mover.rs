//! Filesystem mover implementation.

use async_trait::async_trait;
use std::path::Path;
use tokio::fs;
use tracing::debug;

use super::error::MoverError;
use super::traits::{Mover, RelocateRequest};

/// Filesystem based mover implementation.
pub struct FsMover;

impl FsMover {
    /// Creates a new filesystem mover.
    pub fn new() -> Self {
        Self
    }

    /// Attempts to move a file atomically (rename).
    ///
    /// Returns `Ok(false)` when the rename failed because source and
    /// destination are on different filesystems.
    async fn try_atomic_move(source: &Path, destination: &Path) -> Result<bool, std::io::Error> {
        match fs::rename(source, destination).await {
            Ok(()) => Ok(true),
            Err(e) => {
                // Cross-filesystem moves fail with EXDEV (18 on Linux)
                if e.kind() == std::io::ErrorKind::CrossesDevices || e.raw_os_error() == Some(18) {
                    Ok(false)
                } else {
                    Err(e)
                }
            }
        }
    }
}

impl Default for FsMover {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Mover for FsMover {
    fn name(&self) -> &str {
        "fs"
    }

    async fn relocate(&self, request: &RelocateRequest) -> Result<(), MoverError> {
        let source = request.source.as_path();
        let destination = request.destination.as_path();

        if !fs::try_exists(source).await.unwrap_or(false) {
            return Err(MoverError::SourceNotFound {
                path: source.to_path_buf(),
            });
        }

        if !request.overwrite && fs::try_exists(destination).await.unwrap_or(false) {
            return Err(MoverError::DestinationExists {
                path: destination.to_path_buf(),
            });
        }

        if let Some(parent) = destination.parent() {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| MoverError::DirectoryCreationFailed {
                    path: parent.to_path_buf(),
                    source: e,
                })?;
        }

        if Self::try_atomic_move(source, destination)
            .await
            .map_err(|e| {
                MoverError::move_failed(source.to_path_buf(), destination.to_path_buf(), e)
            })?
        {
            return Ok(());
        }

        debug!(
            source = %source.display(),
            destination = %destination.display(),
            "Rename crossed filesystems, copying instead"
        );

        fs::copy(source, destination).await.map_err(|e| {
            MoverError::copy_failed(source.to_path_buf(), destination.to_path_buf(), e)
        })?;

        fs::remove_file(source)
            .await
            .map_err(|e| MoverError::CleanupFailed {
                path: source.to_path_buf(),
                source: e,
            })?;

        Ok(())
    }
}
