/// Drive-letter enumeration using the Windows API.
///
/// Probes `A:\` through `Z:\` and keeps roots whose drive type is
/// removable.
use crate::platform::VolumeEnumerator;
use std::path::{Path, PathBuf};
use windows::Win32::Storage::FileSystem::GetDriveTypeW;

// Drive type constants from the Windows API.
const DRIVE_REMOVABLE_VAL: u32 = 2;
const DRIVE_FIXED_VAL: u32 = 3;
const DRIVE_REMOTE_VAL: u32 = 4;
const DRIVE_CDROM_VAL: u32 = 5;

/// Drive type classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriveType {
    Fixed,
    Removable,
    Network,
    CdRom,
    Unknown,
}

impl DriveType {
    fn from_raw(raw: u32) -> Self {
        match raw {
            DRIVE_FIXED_VAL => Self::Fixed,
            DRIVE_REMOVABLE_VAL => Self::Removable,
            DRIVE_REMOTE_VAL => Self::Network,
            DRIVE_CDROM_VAL => Self::CdRom,
            _ => Self::Unknown,
        }
    }
}

/// Platform-reported type of the drive rooted at `root` (e.g. `E:\`).
pub fn drive_type(root: &str) -> DriveType {
    let root_wide: Vec<u16> = root.encode_utf16().chain(std::iter::once(0)).collect();
    let root_pcwstr = windows::core::PCWSTR(root_wide.as_ptr());
    let raw_type = unsafe { GetDriveTypeW(root_pcwstr) };
    DriveType::from_raw(raw_type)
}

#[derive(Debug, Clone, Copy, Default)]
pub struct DriveLetterEnumerator;

impl VolumeEnumerator for DriveLetterEnumerator {
    fn enumerate_removable_volumes(&self) -> Vec<PathBuf> {
        ('A'..='Z')
            .map(|letter| format!("{letter}:\\"))
            .filter(|root| Path::new(root).exists())
            .filter(|root| drive_type(root) == DriveType::Removable)
            .map(PathBuf::from)
            .collect()
    }
}
