//! Sequential triage over one source directory.

use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn};

use crate::engine::{Classification, RuleEngine};
use crate::metadata::{LazyMetadata, MetadataSource};
use crate::mover::{Mover, RelocateRequest};
use crate::scanner::{find_torrents, ScanError};

use super::report::RunReport;

/// Runs the classify-and-relocate pass over a source directory.
pub struct Runner {
    root: PathBuf,
    dest: PathBuf,
    overwrite: bool,
    engine: RuleEngine,
    metadata: Arc<dyn MetadataSource>,
    mover: Arc<dyn Mover>,
}

impl Runner {
    /// Creates a runner moving files from `root` into category folders
    /// under `dest`.
    pub fn new(
        root: PathBuf,
        dest: PathBuf,
        engine: RuleEngine,
        metadata: Arc<dyn MetadataSource>,
        mover: Arc<dyn Mover>,
    ) -> Self {
        Self {
            root,
            dest,
            overwrite: false,
            engine,
            metadata,
            mover,
        }
    }

    /// Allows replacing existing destination files.
    pub fn with_overwrite(mut self, overwrite: bool) -> Self {
        self.overwrite = overwrite;
        self
    }

    /// Processes every candidate file once, strictly sequentially.
    ///
    /// Only a failure to list the source directory is fatal; any per-file
    /// failure is logged, counted, and the run moves on to the next file.
    pub async fn run(&self) -> Result<RunReport, ScanError> {
        let torrents = find_torrents(&self.root).await?;
        info!(
            root = %self.root.display(),
            candidates = torrents.len(),
            "Scanning for torrent files"
        );

        let mut report = RunReport::default();

        for filename in &torrents {
            let metadata = LazyMetadata::new(self.metadata.as_ref(), filename);

            let placement = match self.engine.classify(filename, &metadata).await {
                Ok(Classification::Placed(placement)) => placement,
                Ok(Classification::Unclassified) => {
                    info!(file = %filename, "No matching rule, leaving in place");
                    report.ignored += 1;
                    continue;
                }
                Err(e) => {
                    warn!(file = %filename, error = %e, "Classification failed, leaving in place");
                    report.failed += 1;
                    continue;
                }
            };

            let request = RelocateRequest {
                source: self.root.join(filename),
                destination: self
                    .dest
                    .join(&placement.category)
                    .join(&placement.filename),
                overwrite: self.overwrite,
            };

            match self.mover.relocate(&request).await {
                Ok(()) => {
                    info!(
                        file = %filename,
                        category = %placement.category,
                        destination = %request.destination.display(),
                        "Placed torrent"
                    );
                    report.placed += 1;
                }
                Err(e) => {
                    warn!(file = %filename, error = %e, "Relocation failed, leaving in place");
                    report.failed += 1;
                }
            }
        }

        info!(
            placed = report.placed,
            ignored = report.ignored,
            failed = report.failed,
            "Run complete"
        );

        Ok(report)
    }
}
