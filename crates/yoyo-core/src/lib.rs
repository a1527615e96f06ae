/// YOYO Core — removable device discovery, content scanning, chunked
/// backup and forensic report emission.
///
/// This crate contains all business logic with zero terminal dependencies.
/// The interactive shell lives in `yoyo-cli`.
///
/// # Modules
///
/// - [`platform`] — Removable volume enumeration and capacity queries.
/// - [`scanner`] — Single-walk statistics and sensitive-keyword detection.
/// - [`backup`] — Chunked tree copy and the scan → copy → report pipeline.
/// - [`report`] — Plain-text report rendering and atomic write.
/// - [`model`] — Records handed between phases, plus size formatting.
/// - [`config`] — Backup/report roots and scan options.
/// - [`error`] — Per-item and run-fatal error types.
pub mod backup;
pub mod config;
pub mod error;
pub mod model;
pub mod platform;
pub mod report;
pub mod scanner;

pub use backup::{BackupOutcome, BackupPipeline};
pub use config::Config;
pub use error::RunError;
