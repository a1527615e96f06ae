/// Backup pipeline — scan, copy and report for one device.
///
/// Phases run strictly one after another on the calling thread. A run
/// aborts only when a backup or report directory cannot be created or the
/// report cannot be written.
pub mod copier;

use crate::config::Config;
use crate::error::Result;
use crate::model::{CopyResult, ScanReport};
use crate::report::ReportEmitter;
use crate::scanner::Scanner;
use std::path::{Path, PathBuf};
use tracing::info;

pub use copier::{
    backup_dir_name, claim_fresh_dir, copy_file_chunked, copy_tree_into, Copier, CHUNK_SIZE,
};

/// Everything a completed run produced.
#[derive(Debug, Clone)]
pub struct BackupOutcome {
    pub scan: ScanReport,
    pub copy: CopyResult,
    pub report_path: PathBuf,
}

#[derive(Debug, Clone)]
pub struct BackupPipeline {
    config: Config,
    scanner: Scanner,
    copier: Copier,
    emitter: ReportEmitter,
}

impl BackupPipeline {
    pub fn new(config: Config) -> Self {
        Self {
            scanner: Scanner::new(config.scan.clone()),
            copier: Copier::new(config.backup_root.clone()),
            emitter: ReportEmitter::new(config.report_root.clone()),
            config,
        }
    }

    /// Scan, back up and report on the device mounted at `mount_path`.
    pub fn run(&self, mount_path: &Path) -> Result<BackupOutcome> {
        self.config.ensure_roots()?;

        let scan = self.scanner.scan(mount_path);
        let copy = self.copier.copy_tree(mount_path)?;
        let report_path = self.emitter.emit(&scan, &copy)?;

        info!(
            "Backup of '{}' complete: {} copied, {} skipped",
            scan.name, copy.copied, copy.skipped
        );
        Ok(BackupOutcome {
            scan,
            copy,
            report_path,
        })
    }
}
