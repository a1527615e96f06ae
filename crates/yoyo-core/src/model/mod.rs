/// Data model for devices, scans and backups.
///
/// Re-exports the record types handed from phase to phase.
pub mod device;
pub mod scan_report;
pub mod size;

pub use device::{device_name, file_name_safe, select_device, DeviceHandle, DiskUsage};
pub use scan_report::{CopyResult, LargeFile, ScanReport};
