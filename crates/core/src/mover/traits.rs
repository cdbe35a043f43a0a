//! Trait definitions for the mover module.

use async_trait::async_trait;
use std::path::PathBuf;

use super::error::MoverError;

/// A single relocation request.
#[derive(Debug, Clone)]
pub struct RelocateRequest {
    /// Source file path.
    pub source: PathBuf,
    /// Destination file path (category folder + resolved filename).
    pub destination: PathBuf,
    /// Whether to replace an existing destination file.
    pub overwrite: bool,
}

/// A mover that relocates files to their final destinations.
#[async_trait]
pub trait Mover: Send + Sync {
    /// Returns the name of this mover implementation.
    fn name(&self) -> &str;

    /// Relocates one file, creating missing destination directories.
    async fn relocate(&self, request: &RelocateRequest) -> Result<(), MoverError>;
}
