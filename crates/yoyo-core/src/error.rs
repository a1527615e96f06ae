/// Error types for the backup pipeline.
///
/// Per-item problems ([`ScanIssue`], [`CopyError`]) are caught where they
/// happen and folded into counters or report lines. Only [`RunError`]
/// escapes a run and aborts it.
use std::fmt::Display;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// A non-fatal problem seen while scanning. `Display` is the literal
/// line written to the report's error section.
#[derive(Debug, Error)]
pub enum ScanIssue {
    #[error("Usage info failed: {0}")]
    Usage(io::Error),

    #[error("Access denied: {}", .0.display())]
    AccessDenied(PathBuf),

    #[error("Error reading {}: {message}", .path.display())]
    Unreadable { path: PathBuf, message: String },
}

impl ScanIssue {
    /// Classify a failed directory listing.
    pub fn from_listing(path: &Path, err: &io::Error) -> Self {
        if err.kind() == io::ErrorKind::PermissionDenied {
            Self::AccessDenied(path.to_path_buf())
        } else {
            Self::Unreadable {
                path: path.to_path_buf(),
                message: err.to_string(),
            }
        }
    }

    /// Classify a walker failure on `path`. Without an underlying I/O error
    /// the walker's own message is used.
    pub fn from_walk(path: &Path, io_err: Option<&io::Error>, message: impl Display) -> Self {
        match io_err {
            Some(io_err) => Self::from_listing(path, io_err),
            None => Self::Unreadable {
                path: path.to_path_buf(),
                message: message.to_string(),
            },
        }
    }
}

/// Why a single file was not copied.
#[derive(Debug, Error)]
pub enum CopyError {
    #[error("source vanished before copy")]
    Vanished,

    #[error("source is not readable: {0}")]
    Open(#[source] io::Error),

    #[error("cannot create destination file: {0}")]
    Create(#[source] io::Error),

    #[error("read failed: {0}")]
    Read(#[source] io::Error),

    #[error("write failed: {0}")]
    Write(#[source] io::Error),
}

/// A failure that aborts the run for one device.
#[derive(Debug, Error)]
pub enum RunError {
    #[error("cannot create directory {}: {source}", .path.display())]
    CreateDir { path: PathBuf, source: io::Error },

    #[error("cannot write report {}: {source}", .path.display())]
    WriteReport { path: PathBuf, source: io::Error },

    #[error("home directory could not be determined")]
    NoHomeDir,
}

pub type Result<T> = std::result::Result<T, RunError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_listing_permission_denied_message() {
        let err = io::Error::from(io::ErrorKind::PermissionDenied);
        let issue = ScanIssue::from_listing(Path::new("/mnt/usb/private"), &err);
        assert_eq!(issue.to_string(), "Access denied: /mnt/usb/private");
    }

    #[test]
    fn test_listing_other_error_message() {
        let err = io::Error::new(io::ErrorKind::Other, "device gone");
        let issue = ScanIssue::from_listing(Path::new("/mnt/usb/dcim"), &err);
        assert_eq!(issue.to_string(), "Error reading /mnt/usb/dcim: device gone");
    }

    #[test]
    fn test_walk_error_with_io_cause() {
        let err = io::Error::from(io::ErrorKind::PermissionDenied);
        let issue = ScanIssue::from_walk(Path::new("/mnt/usb/locked"), Some(&err), "ignored");
        assert_eq!(issue.to_string(), "Access denied: /mnt/usb/locked");
    }

    #[test]
    fn test_walk_error_without_io_cause() {
        let issue = ScanIssue::from_walk(
            Path::new("/mnt/usb/loop"),
            None,
            "File system loop found",
        );
        assert_eq!(
            issue.to_string(),
            "Error reading /mnt/usb/loop: File system loop found"
        );
    }
}
