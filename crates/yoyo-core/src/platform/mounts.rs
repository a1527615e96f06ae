/// Mount-root enumeration for Unix-like hosts.
///
/// Removable media show up as `/media/<user>/<volume>` (desktop automounters)
/// or `/mnt/<volume>` (manual mounts). Both roots are listed; each candidate
/// must be a mount point or readable, and must list cleanly.
use crate::platform::permissions::{is_mount_point, is_readable};
use crate::platform::VolumeEnumerator;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Directory name never offered as a device.
pub const RESERVED_DIR_NAME: &str = "lost+found";

#[derive(Debug, Clone)]
pub struct MountRootEnumerator {
    /// Root whose per-user subdirectories hold volumes (`/media`).
    pub user_media_root: PathBuf,
    /// Root whose direct children are volumes (`/mnt`).
    pub mount_root: PathBuf,
}

impl Default for MountRootEnumerator {
    fn default() -> Self {
        Self::new(PathBuf::from("/media"), PathBuf::from("/mnt"))
    }
}

impl MountRootEnumerator {
    pub fn new(user_media_root: PathBuf, mount_root: PathBuf) -> Self {
        Self {
            user_media_root,
            mount_root,
        }
    }

    /// All candidate directories in discovery order, before acceptance checks.
    fn candidates(&self) -> Vec<PathBuf> {
        let mut out = Vec::new();
        for user_dir in child_dirs(&self.user_media_root) {
            out.extend(child_dirs(&user_dir));
        }
        out.extend(child_dirs(&self.mount_root));
        out.retain(|p| p.file_name().is_some_and(|n| n != RESERVED_DIR_NAME));
        out
    }
}

impl VolumeEnumerator for MountRootEnumerator {
    fn enumerate_removable_volumes(&self) -> Vec<PathBuf> {
        self.candidates()
            .into_iter()
            .filter(|path| is_acceptable(path))
            .collect()
    }
}

fn is_acceptable(path: &Path) -> bool {
    if !(is_mount_point(path) || is_readable(path)) {
        debug!("Skipping {}: not mounted and not readable", path.display());
        return false;
    }
    match fs::read_dir(path) {
        Ok(_) => true,
        Err(err) => {
            debug!("Skipping {}: {err}", path.display());
            false
        }
    }
}

/// Subdirectories of `root`, sorted by name. Missing or unreadable roots
/// yield nothing.
fn child_dirs(root: &Path) -> Vec<PathBuf> {
    let entries = match fs::read_dir(root) {
        Ok(entries) => entries,
        Err(err) => {
            if err.kind() != std::io::ErrorKind::NotFound {
                warn!("Cannot read {}: {err}", root.display());
            }
            return Vec::new();
        }
    };
    let mut dirs: Vec<PathBuf> = entries
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| p.is_dir())
        .collect();
    dirs.sort();
    dirs
}
