/// Mount and access checks used to accept a candidate mount point.
use std::path::Path;

/// Whether `path` is a mount point: its device differs from its parent's,
/// or it is the filesystem root.
#[cfg(unix)]
pub fn is_mount_point(path: &Path) -> bool {
    use std::os::unix::fs::MetadataExt;

    let meta = match std::fs::symlink_metadata(path) {
        Ok(m) if !m.file_type().is_symlink() => m,
        _ => return false,
    };
    match std::fs::metadata(path.join("..")) {
        Ok(parent) => meta.dev() != parent.dev() || meta.ino() == parent.ino(),
        Err(_) => false,
    }
}

#[cfg(not(unix))]
pub fn is_mount_point(_path: &Path) -> bool {
    false
}

/// Whether the current user has read access to `path`.
#[cfg(unix)]
pub fn is_readable(path: &Path) -> bool {
    use std::ffi::CString;
    use std::os::unix::ffi::OsStrExt;

    match CString::new(path.as_os_str().as_bytes()) {
        Ok(c_path) => unsafe { libc::access(c_path.as_ptr(), libc::R_OK) == 0 },
        Err(_) => false,
    }
}

#[cfg(not(unix))]
pub fn is_readable(path: &Path) -> bool {
    std::fs::metadata(path).is_ok()
}
