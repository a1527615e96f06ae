/// Discovered removable volumes and their capacity figures.
use crate::model::size;
use std::path::{Path, PathBuf};

/// Name used when a mount path has no usable final component (e.g. `/`).
pub const UNKNOWN_DEVICE_NAME: &str = "Unknown_Device";

/// Capacity of the filesystem backing a path, in bytes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DiskUsage {
    pub total_bytes: u64,
    pub used_bytes: u64,
    pub free_bytes: u64,
}

/// A mount point returned by device enumeration.
///
/// `usage` is `None` when the capacity query failed; the device is still
/// listed and shown as "size unknown".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceHandle {
    pub path: PathBuf,
    pub usage: Option<DiskUsage>,
}

impl DeviceHandle {
    pub fn new(path: PathBuf, usage: Option<DiskUsage>) -> Self {
        Self { path, usage }
    }

    /// Short device name derived from the mount path.
    pub fn name(&self) -> String {
        device_name(&self.path)
    }

    /// Total capacity as whole GiB, or `None` when unknown.
    pub fn total_gib(&self) -> Option<u64> {
        self.usage.map(|u| size::whole_gib(u.total_bytes))
    }
}

/// Derive a device name from its mount path.
///
/// Takes the final path component after stripping trailing separators.
/// A drive root such as `E:\` yields `E`; `/` yields [`UNKNOWN_DEVICE_NAME`].
pub fn device_name(mount_path: &Path) -> String {
    let raw = mount_path.to_string_lossy();
    let trimmed = raw.trim_end_matches(['/', '\\']);
    let last = trimmed.rsplit(['/', '\\']).next().unwrap_or("");
    let last = last.trim_end_matches(':');
    if last.is_empty() {
        UNKNOWN_DEVICE_NAME.to_string()
    } else {
        last.to_string()
    }
}

/// Make a device name safe to embed in a file or directory name.
pub fn file_name_safe(name: &str) -> String {
    let cleaned: String = name
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || matches!(c, '-' | '_' | '.' | ' ') {
                c
            } else {
                '_'
            }
        })
        .collect();
    if cleaned.trim().is_empty() {
        UNKNOWN_DEVICE_NAME.to_string()
    } else {
        cleaned
    }
}

/// A 1-based selection index is valid iff `1 <= index <= len`.
pub fn is_valid_selection(index: usize, len: usize) -> bool {
    index >= 1 && index <= len
}

/// Resolve a 1-based selection index into the device list.
pub fn select_device(devices: &[DeviceHandle], index: usize) -> Option<&DeviceHandle> {
    if is_valid_selection(index, devices.len()) {
        devices.get(index - 1)
    } else {
        None
    }
}
