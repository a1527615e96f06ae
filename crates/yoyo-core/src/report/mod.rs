/// Report emitter — renders a scan and its backup into the plain-text
/// forensic report.
///
/// The text is built in memory, written to a `.part` sibling and renamed
/// into place, so a report is either complete under its final name or
/// absent.
use crate::error::{Result, RunError};
use crate::model::size::format_gb;
use crate::model::{file_name_safe, CopyResult, ScanReport};
use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::info;

pub const REPORT_HEADER: &str = "=== YOYO FULL USB FORENSIC REPORT ===";
pub const REPORT_TRAILER: &str =
    "YOYO v3.4 — Full USB Backup & Forensics Tool\nAll files backed up. Silent mode active.";

/// Render the report body.
pub fn render_report(scan: &ScanReport, copy: &CopyResult) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = write_report(&mut out, scan, copy);
    out
}

fn write_report(out: &mut String, scan: &ScanReport, copy: &CopyResult) -> std::fmt::Result {
    writeln!(out, "{REPORT_HEADER}")?;
    writeln!(out)?;
    writeln!(out, "Device Name: {}", scan.name)?;
    writeln!(out, "Mount Point: {}", scan.mount_path.display())?;
    writeln!(out, "Total Size: {} GB", format_gb(scan.total_bytes))?;
    writeln!(out, "Used Space: {} GB", format_gb(scan.used_bytes))?;
    writeln!(out, "Free Space: {} GB", format_gb(scan.free_bytes))?;
    writeln!(out, "Files Copied: {}", scan.file_count)?;
    writeln!(out, "Folders: {}", scan.folder_count)?;
    writeln!(out, "Hidden Files: {}", scan.hidden_file_count)?;
    writeln!(out, "Backup Location: {}", copy.destination.display())?;
    writeln!(
        out,
        "Scan Time: {}",
        scan.scanned_at.format("%Y-%m-%d %H:%M:%S")
    )?;
    writeln!(out)?;

    if !scan.large_files.is_empty() {
        writeln!(out, "Large Files (>1GB):")?;
        for lf in &scan.large_files {
            writeln!(out, "  • {} ({} GB)", lf.path, lf.size_gib())?;
        }
        writeln!(out)?;
    }

    writeln!(out, "Sensitive Keywords Found:")?;
    if scan.sensitive_files.is_empty() {
        writeln!(out, "  None")?;
    } else {
        for sf in &scan.sensitive_files {
            writeln!(out, "  🔍 {sf}")?;
        }
    }
    writeln!(out)?;

    if !scan.errors.is_empty() {
        writeln!(out, "Errors Encountered:")?;
        for err in &scan.errors {
            writeln!(out, "  ⚠️  {err}")?;
        }
    }
    writeln!(out)?;
    writeln!(out, "{REPORT_TRAILER}")
}

#[derive(Debug, Clone)]
pub struct ReportEmitter {
    report_root: PathBuf,
}

impl ReportEmitter {
    pub fn new(report_root: PathBuf) -> Self {
        Self { report_root }
    }

    /// Write the report and return its path.
    pub fn emit(&self, scan: &ScanReport, copy: &CopyResult) -> Result<PathBuf> {
        fs::create_dir_all(&self.report_root).map_err(|source| RunError::CreateDir {
            path: self.report_root.clone(),
            source,
        })?;

        let path = self.unused_report_path(&scan.name, unix_now());
        let body = render_report(scan, copy);
        write_atomically(&path, body.as_bytes())?;

        info!("Report saved: {}", path.display());
        Ok(path)
    }

    /// `YOYO_USB_Report_<device>_<unixtime>.txt`, bumping the time suffix
    /// past any existing file.
    fn unused_report_path(&self, device: &str, mut stamp: u64) -> PathBuf {
        let device = file_name_safe(device);
        loop {
            let candidate = self
                .report_root
                .join(format!("YOYO_USB_Report_{device}_{stamp}.txt"));
            if !candidate.exists() {
                return candidate;
            }
            stamp += 1;
        }
    }
}

fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

fn write_atomically(path: &Path, bytes: &[u8]) -> Result<()> {
    let mut partial = path.as_os_str().to_owned();
    partial.push(".part");
    let partial = PathBuf::from(partial);

    let wrap = |source: std::io::Error| RunError::WriteReport {
        path: path.to_path_buf(),
        source,
    };
    fs::write(&partial, bytes).map_err(wrap)?;
    if let Err(source) = fs::rename(&partial, path) {
        let _ = fs::remove_file(&partial);
        return Err(wrap(source));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::size::GIB;
    use crate::model::LargeFile;
    use chrono::{Local, TimeZone};
    use tempfile::TempDir;

    fn sample_scan() -> ScanReport {
        let mut scan = ScanReport::new(PathBuf::from("/media/alice/KINGSTON"));
        scan.total_bytes = 16 * GIB;
        scan.used_bytes = 4 * GIB + GIB / 4;
        scan.free_bytes = 11 * GIB + 3 * GIB / 4;
        scan.file_count = 3;
        scan.folder_count = 1;
        scan.scanned_at = Local.with_ymd_and_hms(2024, 3, 9, 7, 5, 1).unwrap();
        scan
    }

    fn sample_copy() -> CopyResult {
        CopyResult {
            destination: PathBuf::from("/home/alice/Desktop/YOYO_USB_Backups/Backup_KINGSTON_20240309_070501"),
            copied: 3,
            skipped: 0,
        }
    }

    #[test]
    fn test_render_minimal_report() {
        let text = render_report(&sample_scan(), &sample_copy());
        let expected = "\
=== YOYO FULL USB FORENSIC REPORT ===

Device Name: KINGSTON
Mount Point: /media/alice/KINGSTON
Total Size: 16.00 GB
Used Space: 4.25 GB
Free Space: 11.75 GB
Files Copied: 3
Folders: 1
Hidden Files: 0
Backup Location: /home/alice/Desktop/YOYO_USB_Backups/Backup_KINGSTON_20240309_070501
Scan Time: 2024-03-09 07:05:01

Sensitive Keywords Found:
  None


YOYO v3.4 — Full USB Backup & Forensics Tool
All files backed up. Silent mode active.
";
        assert_eq!(text, expected);
    }

    #[test]
    fn test_render_optional_sections() {
        let mut scan = sample_scan();
        scan.large_files.push(LargeFile {
            path: "video/big.mkv".into(),
            size: 2 * GIB + 5,
        });
        scan.sensitive_files.push("conf/app.env".into());
        scan.errors.push("Access denied: /media/alice/KINGSTON/private".into());

        let text = render_report(&scan, &sample_copy());
        let large = text.find("Large Files (>1GB):\n  • video/big.mkv (2 GB)\n").unwrap();
        let sensitive = text.find("Sensitive Keywords Found:\n  🔍 conf/app.env\n").unwrap();
        let errors = text
            .find("Errors Encountered:\n  ⚠️  Access denied: /media/alice/KINGSTON/private\n")
            .unwrap();
        assert!(large < sensitive && sensitive < errors);
        assert!(!text.contains("None"));
        assert!(text.ends_with("Silent mode active.\n"));
    }

    #[test]
    fn test_emit_writes_file_without_leftovers() {
        let tmp = TempDir::new().unwrap();
        let emitter = ReportEmitter::new(tmp.path().join("reports"));
        let path = emitter.emit(&sample_scan(), &sample_copy()).unwrap();

        let name = path.file_name().unwrap().to_string_lossy().into_owned();
        assert!(name.starts_with("YOYO_USB_Report_KINGSTON_"));
        assert!(name.ends_with(".txt"));
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            render_report(&sample_scan(), &sample_copy())
        );
        let entries = fs::read_dir(tmp.path().join("reports")).unwrap().count();
        assert_eq!(entries, 1);
    }

    #[test]
    fn test_repeated_emits_do_not_collide() {
        let tmp = TempDir::new().unwrap();
        let emitter = ReportEmitter::new(tmp.path().to_path_buf());
        let first = emitter.emit(&sample_scan(), &sample_copy()).unwrap();
        let second = emitter.emit(&sample_scan(), &sample_copy()).unwrap();
        assert_ne!(first, second);
        assert!(first.exists() && second.exists());
    }

    #[test]
    fn test_emit_into_unwritable_root_fails() {
        let tmp = TempDir::new().unwrap();
        let blocker = tmp.path().join("blocker");
        fs::write(&blocker, b"x").unwrap();
        let emitter = ReportEmitter::new(blocker.join("reports"));
        let err = emitter.emit(&sample_scan(), &sample_copy()).unwrap_err();
        assert!(matches!(err, RunError::CreateDir { .. }));
    }
}
