/// Filesystem capacity queries.
///
/// One call per path: total, used and free bytes of the volume that
/// backs it. Used both when listing devices and before a scan.
use crate::model::DiskUsage;
use std::io;
use std::path::Path;

/// Query capacity of the filesystem containing `path`.
///
/// `used` follows the `total - all free blocks` convention while `free` is
/// what an unprivileged caller may still write, so `used + free` can be
/// less than `total` on filesystems with reserved blocks.
#[cfg(unix)]
pub fn disk_usage(path: &Path) -> io::Result<DiskUsage> {
    use std::ffi::CString;
    use std::os::unix::ffi::OsStrExt;

    let c_path = CString::new(path.as_os_str().as_bytes())
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;
    let mut stat: libc::statvfs = unsafe { std::mem::zeroed() };
    let rc = unsafe { libc::statvfs(c_path.as_ptr(), &mut stat) };
    if rc != 0 {
        return Err(io::Error::last_os_error());
    }

    let fragment = stat.f_frsize as u64;
    let blocks = stat.f_blocks as u64;
    let free_all = stat.f_bfree as u64;
    let free_caller = stat.f_bavail as u64;

    Ok(DiskUsage {
        total_bytes: blocks * fragment,
        used_bytes: blocks.saturating_sub(free_all) * fragment,
        free_bytes: free_caller * fragment,
    })
}

#[cfg(windows)]
pub fn disk_usage(path: &Path) -> io::Result<DiskUsage> {
    use std::os::windows::ffi::OsStrExt;
    use windows::Win32::Storage::FileSystem::GetDiskFreeSpaceExW;

    let wide: Vec<u16> = path
        .as_os_str()
        .encode_wide()
        .chain(std::iter::once(0))
        .collect();
    let root_pcwstr = windows::core::PCWSTR(wide.as_ptr());

    let mut free_caller: u64 = 0;
    let mut total: u64 = 0;
    let mut free_total: u64 = 0;
    let queried = unsafe {
        GetDiskFreeSpaceExW(
            root_pcwstr,
            Some(&mut free_caller as *mut u64),
            Some(&mut total as *mut u64),
            Some(&mut free_total as *mut u64),
        )
    };
    queried.map_err(|e| io::Error::other(e.to_string()))?;

    Ok(DiskUsage {
        total_bytes: total,
        used_bytes: total.saturating_sub(free_total),
        free_bytes: free_caller,
    })
}

#[cfg(not(any(unix, windows)))]
pub fn disk_usage(_path: &Path) -> io::Result<DiskUsage> {
    Err(io::Error::new(
        io::ErrorKind::Unsupported,
        "capacity query is not supported on this platform",
    ))
}
