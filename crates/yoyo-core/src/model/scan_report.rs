/// Aggregate statistics collected by one walk over a device.
use crate::model::device::{device_name, DiskUsage};
use crate::model::size;
use chrono::{DateTime, Local};
use std::path::PathBuf;

/// A file above the large-file threshold.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LargeFile {
    /// Path relative to the mount point.
    pub path: String,
    /// File size in bytes.
    pub size: u64,
}

impl LargeFile {
    /// Size in whole GiB, rounded down.
    pub fn size_gib(&self) -> u64 {
        size::whole_gib(self.size)
    }
}

/// Result of scanning one device.
///
/// Counters only ever grow during the walk. `large_files` and
/// `sensitive_files` keep the order in which files were visited.
#[derive(Debug, Clone)]
pub struct ScanReport {
    pub name: String,
    pub mount_path: PathBuf,
    pub total_bytes: u64,
    pub used_bytes: u64,
    pub free_bytes: u64,
    pub file_count: u64,
    pub folder_count: u64,
    pub hidden_file_count: u64,
    pub large_files: Vec<LargeFile>,
    pub sensitive_files: Vec<String>,
    /// Per-path diagnostics, already formatted for the report.
    pub errors: Vec<String>,
    /// Local time at which the scan started.
    pub scanned_at: DateTime<Local>,
}

impl ScanReport {
    /// Empty report for `mount_path`, stamped with the current time.
    pub fn new(mount_path: PathBuf) -> Self {
        Self {
            name: device_name(&mount_path),
            mount_path,
            total_bytes: 0,
            used_bytes: 0,
            free_bytes: 0,
            file_count: 0,
            folder_count: 0,
            hidden_file_count: 0,
            large_files: Vec::new(),
            sensitive_files: Vec::new(),
            errors: Vec::new(),
            scanned_at: Local::now(),
        }
    }

    pub fn set_usage(&mut self, usage: DiskUsage) {
        self.total_bytes = usage.total_bytes;
        self.used_bytes = usage.used_bytes;
        self.free_bytes = usage.free_bytes;
    }
}

/// Outcome of a bulk copy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopyResult {
    /// The `Backup_<device>_<timestamp>` directory files were copied into.
    pub destination: PathBuf,
    pub copied: u64,
    pub skipped: u64,
}

impl CopyResult {
    /// Number of regular files the copy walk visited.
    pub fn visited(&self) -> u64 {
        self.copied + self.skipped
    }
}
