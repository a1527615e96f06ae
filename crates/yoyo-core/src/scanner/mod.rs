/// Content scanner — one walk over a device collecting counts, large
/// files and sensitive-keyword hits.
///
/// The walk uses `jwalk` in serial mode and never follows symbolic links.
/// Anything that goes wrong below the mount point is recorded and the walk
/// moves on; a scan always produces a [`ScanReport`].
pub mod patterns;

use crate::error::ScanIssue;
use crate::model::size::{self, GIB};
use crate::model::{LargeFile, ScanReport};
use crate::platform::disk_usage;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, info};

/// Tunables for a scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanOptions {
    /// Files strictly larger than this are listed as large.
    pub large_file_threshold: u64,
    /// Leading bytes inspected for patterns.
    pub head_bytes: usize,
    pub patterns: Vec<String>,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            large_file_threshold: GIB,
            head_bytes: patterns::HEAD_BYTES,
            patterns: patterns::SENSITIVE_PATTERNS
                .iter()
                .map(|p| p.to_string())
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Scanner {
    options: ScanOptions,
}

impl Scanner {
    pub fn new(options: ScanOptions) -> Self {
        Self { options }
    }

    /// Scan the tree rooted at `mount_path`.
    pub fn scan(&self, mount_path: &Path) -> ScanReport {
        let start = Instant::now();
        let mut report = ScanReport::new(mount_path.to_path_buf());
        info!("Scanning {}", mount_path.display());

        match disk_usage(mount_path) {
            Ok(usage) => report.set_usage(usage),
            Err(err) => report.errors.push(ScanIssue::Usage(err).to_string()),
        }

        let walker = jwalk::WalkDir::new(mount_path)
            .skip_hidden(false)
            .follow_links(false)
            .sort(true)
            .parallelism(jwalk::Parallelism::Serial);

        for entry_result in walker {
            let entry = match entry_result {
                Ok(e) => e,
                Err(err) => {
                    record_issue(&mut report, walk_issue(&err, mount_path));
                    continue;
                }
            };

            // jwalk yields an unlistable directory as a normal entry and
            // keeps the failure on it.
            if let Some(err) = &entry.read_children_error {
                record_issue(&mut report, walk_issue(err, &entry.path()));
            }

            let path = entry.path();

            // Skip the root itself.
            if path == mount_path {
                continue;
            }

            let file_type = entry.file_type();
            if file_type.is_dir() {
                report.folder_count += 1;
            } else if file_type.is_file() {
                let hidden = entry.file_name().to_string_lossy().starts_with('.');
                self.visit_file(&mut report, mount_path, path, hidden);
            } else {
                debug!("Not following {}", path.display());
            }
        }

        debug!(
            "Scan complete: {} files, {} folders, {} errors in {:?}",
            size::format_count(report.file_count),
            size::format_count(report.folder_count),
            report.errors.len(),
            start.elapsed()
        );
        report
    }

    fn visit_file(&self, report: &mut ScanReport, root: &Path, path: PathBuf, hidden: bool) {
        report.file_count += 1;
        if hidden {
            report.hidden_file_count += 1;
        }

        let relative = relative_path(&path, root);

        match std::fs::symlink_metadata(&path) {
            Ok(meta) if meta.len() > self.options.large_file_threshold => {
                report.large_files.push(LargeFile {
                    path: relative.clone(),
                    size: meta.len(),
                });
            }
            Ok(_) => {}
            Err(err) => debug!("No size for {}: {err}", path.display()),
        }

        match patterns::read_head(&path, self.options.head_bytes) {
            Ok(head) => {
                if let Some(pattern) = patterns::first_match(&head, &self.options.patterns) {
                    debug!("{relative} contains {pattern:?}");
                    report.sensitive_files.push(relative);
                }
            }
            Err(err) => debug!("Content check skipped for {}: {err}", path.display()),
        }
    }
}

/// Classify a walker error. `fallback` names the directory when the error
/// carries no path of its own.
pub fn walk_issue(err: &jwalk::Error, fallback: &Path) -> ScanIssue {
    ScanIssue::from_walk(err.path().unwrap_or(fallback), err.io_error(), err)
}

fn record_issue(report: &mut ScanReport, issue: ScanIssue) {
    debug!("{issue}");
    report.errors.push(issue.to_string());
}

/// Scan `mount_path` with default options.
pub fn scan(mount_path: &Path) -> ScanReport {
    Scanner::default().scan(mount_path)
}

/// `path` relative to `root`, as displayed in reports.
pub fn relative_path(path: &Path, root: &Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .to_string_lossy()
        .into_owned()
}
