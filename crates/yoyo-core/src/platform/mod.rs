/// Platform-specific functionality — removable volume discovery,
/// capacity queries and access checks.
///
/// Discovery sits behind [`VolumeEnumerator`]: drive letters on Windows,
/// mount roots everywhere else. Both feed the same [`DeviceHandle`] list.
pub mod capacity;
#[cfg(windows)]
pub mod drives;
pub mod mounts;
pub mod permissions;

use crate::model::DeviceHandle;
use std::collections::HashSet;
use std::path::PathBuf;
use tracing::{debug, info};

pub use capacity::disk_usage;
#[cfg(windows)]
pub use drives::{DriveLetterEnumerator, DriveType};
pub use mounts::MountRootEnumerator;

/// Source of candidate removable-volume mount paths.
pub trait VolumeEnumerator {
    fn enumerate_removable_volumes(&self) -> Vec<PathBuf>;
}

/// The enumerator for the host platform.
pub fn default_enumerator() -> Box<dyn VolumeEnumerator> {
    #[cfg(windows)]
    {
        Box::new(DriveLetterEnumerator)
    }
    #[cfg(not(windows))]
    {
        Box::new(MountRootEnumerator::default())
    }
}

/// List removable devices on this host with their capacity.
///
/// An empty list is a normal outcome.
pub fn list_removable_devices() -> Vec<DeviceHandle> {
    list_devices_with(default_enumerator().as_ref())
}

/// List devices from `enumerator`, deduplicated by absolute path in
/// discovery order. Capacity failures leave `usage` as `None`.
pub fn list_devices_with(enumerator: &dyn VolumeEnumerator) -> Vec<DeviceHandle> {
    let mut seen = HashSet::new();
    let mut devices = Vec::new();

    for path in enumerator.enumerate_removable_volumes() {
        let key = std::fs::canonicalize(&path).unwrap_or_else(|_| path.clone());
        if !seen.insert(key) {
            continue;
        }
        let usage = match disk_usage(&path) {
            Ok(usage) => Some(usage),
            Err(err) => {
                debug!("Capacity unknown for {}: {err}", path.display());
                None
            }
        };
        devices.push(DeviceHandle::new(path, usage));
    }

    info!("Found {} removable device(s)", devices.len());
    devices
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    struct FixedEnumerator(Vec<PathBuf>);

    impl VolumeEnumerator for FixedEnumerator {
        fn enumerate_removable_volumes(&self) -> Vec<PathBuf> {
            self.0.clone()
        }
    }

    #[test]
    fn test_duplicates_removed_in_order() {
        let tmp = TempDir::new().unwrap();
        let a = tmp.path().join("a");
        let b = tmp.path().join("b");
        std::fs::create_dir(&a).unwrap();
        std::fs::create_dir(&b).unwrap();

        let e = FixedEnumerator(vec![b.clone(), a.clone(), b.clone()]);
        let devices = list_devices_with(&e);
        let paths: Vec<_> = devices.iter().map(|d| d.path.clone()).collect();
        assert_eq!(paths, vec![b, a]);
        assert!(devices.iter().all(|d| d.usage.is_some()));
    }

    #[test]
    fn test_capacity_failure_keeps_device() {
        let tmp = TempDir::new().unwrap();
        let gone = tmp.path().join("unplugged");
        let devices = list_devices_with(&FixedEnumerator(vec![gone.clone()]));
        assert_eq!(devices.len(), 1);
        assert_eq!(devices[0].path, gone);
        assert!(devices[0].usage.is_none());
    }

    #[test]
    fn test_empty_enumeration() {
        assert!(list_devices_with(&FixedEnumerator(Vec::new())).is_empty());
    }
}
