/// Bulk copier — mirrors a device tree into a timestamped backup directory.
///
/// The copy walk is independent of the scan walk, so files may have
/// vanished or changed permissions in between. Each file is checked right
/// before it is opened; any per-file failure is counted as a skip.
use crate::error::{CopyError, Result, RunError};
use crate::model::size::format_size;
use crate::model::{device_name, file_name_safe, CopyResult};
use crate::scanner::walk_issue;
use chrono::{DateTime, Local};
use std::fs::{self, File};
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, info, warn};

/// Bytes moved per read/write while copying one file.
pub const CHUNK_SIZE: usize = 64 * 1024;

/// `Backup_<device>_<YYYYmmdd_HHMMSS>`.
pub fn backup_dir_name(device: &str, at: DateTime<Local>) -> String {
    format!(
        "Backup_{}_{}",
        file_name_safe(device),
        at.format("%Y%m%d_%H%M%S")
    )
}

/// Copy `src` to `dst` in [`CHUNK_SIZE`] pieces. Returns bytes copied.
///
/// A failure part-way leaves whatever was written at `dst`.
pub fn copy_file_chunked(src: &Path, dst: &Path) -> std::result::Result<u64, CopyError> {
    match fs::symlink_metadata(src) {
        Ok(meta) if meta.is_file() => {}
        _ => return Err(CopyError::Vanished),
    }

    let mut reader = File::open(src).map_err(CopyError::Open)?;
    let mut writer = File::create(dst).map_err(CopyError::Create)?;
    let mut buf = vec![0u8; CHUNK_SIZE];
    let mut total: u64 = 0;

    loop {
        let n = match reader.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(CopyError::Read(e)),
        };
        writer.write_all(&buf[..n]).map_err(CopyError::Write)?;
        total += n as u64;
    }
    writer.flush().map_err(CopyError::Write)?;

    Ok(total)
}

#[derive(Debug, Clone)]
pub struct Copier {
    backup_root: PathBuf,
}

impl Copier {
    pub fn new(backup_root: PathBuf) -> Self {
        Self { backup_root }
    }

    /// Copy everything under `mount_path` into a fresh
    /// `Backup_<device>_<timestamp>` directory under the backup root.
    pub fn copy_tree(&self, mount_path: &Path) -> Result<CopyResult> {
        let name = backup_dir_name(&device_name(mount_path), Local::now());
        let destination = claim_fresh_dir(&self.backup_root, &name)?;
        copy_tree_into(mount_path, &destination)
    }
}

/// Create and return `root/<name>`, or `root/<name>_2`, `_3`, ... when a
/// run in the same second already took the name.
pub fn claim_fresh_dir(root: &Path, name: &str) -> Result<PathBuf> {
    create_dir(root)?;
    let mut attempt: u32 = 1;
    loop {
        let candidate = if attempt == 1 {
            root.join(name)
        } else {
            root.join(format!("{name}_{attempt}"))
        };
        match fs::create_dir(&candidate) {
            Ok(()) => return Ok(candidate),
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists => attempt += 1,
            Err(source) => {
                return Err(RunError::CreateDir {
                    path: candidate,
                    source,
                })
            }
        }
    }
}

/// Copy everything under `source` into `destination`, mirroring the
/// directory structure.
///
/// Only failure to create `destination` or a mirrored directory is fatal.
pub fn copy_tree_into(source: &Path, destination: &Path) -> Result<CopyResult> {
    let start = Instant::now();
    create_dir(destination)?;
    info!(
        "Backing up {} to {}",
        source.display(),
        destination.display()
    );

    let mut copied: u64 = 0;
    let mut skipped: u64 = 0;

    let walker = jwalk::WalkDir::new(source)
        .skip_hidden(false)
        .follow_links(false)
        .sort(true)
        .parallelism(jwalk::Parallelism::Serial);

    for entry_result in walker {
        let entry = match entry_result {
            Ok(e) => e,
            Err(err) => {
                warn!("Backup walk: {}", walk_issue(&err, source));
                continue;
            }
        };

        if let Some(err) = &entry.read_children_error {
            warn!("Backup walk: {}", walk_issue(err, &entry.path()));
        }

        let path = entry.path();
        let relative = match path.strip_prefix(source) {
            Ok(r) if !r.as_os_str().is_empty() => r.to_path_buf(),
            _ => continue,
        };
        let target = destination.join(&relative);

        let file_type = entry.file_type();
        if file_type.is_dir() {
            create_dir(&target)?;
        } else if file_type.is_file() {
            if let Some(parent) = target.parent() {
                create_dir(parent)?;
            }
            match copy_file_chunked(&path, &target) {
                Ok(bytes) => {
                    debug!("Copied {} ({})", relative.display(), format_size(bytes));
                    copied += 1;
                }
                Err(err) => {
                    warn!("Skipped {}: {err}", relative.display());
                    skipped += 1;
                }
            }
        }
    }

    info!(
        "Backup finished: {copied} copied, {skipped} skipped in {:?}",
        start.elapsed()
    );
    Ok(CopyResult {
        destination: destination.to_path_buf(),
        copied,
        skipped,
    })
}

fn create_dir(path: &Path) -> Result<()> {
    fs::create_dir_all(path).map_err(|source| RunError::CreateDir {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use tempfile::TempDir;

    #[test]
    fn test_backup_dir_name_format() {
        let at = Local.with_ymd_and_hms(2024, 3, 9, 7, 5, 1).unwrap();
        assert_eq!(backup_dir_name("KINGSTON", at), "Backup_KINGSTON_20240309_070501");
        assert_eq!(backup_dir_name("a:b", at), "Backup_a_b_20240309_070501");
    }

    #[test]
    fn test_chunked_copy_spans_chunks() {
        let tmp = TempDir::new().unwrap();
        let src = tmp.path().join("src.bin");
        let dst = tmp.path().join("dst.bin");
        let data: Vec<u8> = (0..CHUNK_SIZE * 2 + 17).map(|i| (i % 251) as u8).collect();
        fs::write(&src, &data).unwrap();

        let n = copy_file_chunked(&src, &dst).unwrap();
        assert_eq!(n, data.len() as u64);
        assert_eq!(fs::read(&dst).unwrap(), data);
    }

    #[test]
    fn test_missing_source_is_vanished() {
        let tmp = TempDir::new().unwrap();
        let err = copy_file_chunked(&tmp.path().join("gone"), &tmp.path().join("out")).unwrap_err();
        assert!(matches!(err, CopyError::Vanished));
    }

    #[test]
    fn test_claim_fresh_dir_never_reuses() {
        let tmp = TempDir::new().unwrap();
        let first = claim_fresh_dir(tmp.path(), "Backup_DEV_20240309_070501").unwrap();
        let second = claim_fresh_dir(tmp.path(), "Backup_DEV_20240309_070501").unwrap();
        let third = claim_fresh_dir(tmp.path(), "Backup_DEV_20240309_070501").unwrap();
        assert_eq!(first, tmp.path().join("Backup_DEV_20240309_070501"));
        assert_eq!(second, tmp.path().join("Backup_DEV_20240309_070501_2"));
        assert_eq!(third, tmp.path().join("Backup_DEV_20240309_070501_3"));
        assert!(first.is_dir() && second.is_dir() && third.is_dir());
    }

    #[test]
    fn test_unwritable_destination_is_create_error() {
        let tmp = TempDir::new().unwrap();
        let src = tmp.path().join("src");
        fs::write(&src, b"data").unwrap();
        let dst = tmp.path().join("no-such-dir").join("dst");
        let err = copy_file_chunked(&src, &dst).unwrap_err();
        assert!(matches!(err, CopyError::Create(_)));
    }
}
