/// Device selection — lists detected devices and asks for a number.
use crate::prompt::{parse_device_choice, read_line, DeviceChoice};
use crate::theme::{paint, Tone};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use yoyo_core::model::{select_device, DeviceHandle};

/// One listing line, e.g. `[1] /media/alice/KINGSTON (14 GB)`.
pub fn device_line(index: usize, device: &DeviceHandle) -> String {
    match device.total_gib() {
        Some(gib) => format!("  [{index}] {} ({gib} GB)", device.path.display()),
        None => format!("  [{index}] {} (size unknown)", device.path.display()),
    }
}

/// Show `devices` and ask for one. Returns `None` on cancel or end of input.
pub fn pick_device<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    devices: &[DeviceHandle],
) -> io::Result<Option<PathBuf>> {
    if devices.is_empty() {
        writeln!(
            out,
            "{}",
            paint(
                "  ❌ No USB devices found. Check connection and mounting.",
                Tone::Error
            )
        )?;
        return Ok(None);
    }

    writeln!(out, "{}", paint("  ✅ Devices detected:", Tone::Success))?;
    for (i, device) in devices.iter().enumerate() {
        writeln!(out, "{}", device_line(i + 1, device))?;
    }

    let prompt = format!("\n  Choose device [1-{}] or 0 to cancel: ", devices.len());
    loop {
        let Some(answer) = read_line(input, out, &prompt)? else {
            return Ok(None);
        };
        match parse_device_choice(&answer, devices.len()) {
            DeviceChoice::Cancel => return Ok(None),
            DeviceChoice::Select(n) => {
                return Ok(select_device(devices, n).map(|device| device.path.clone()))
            }
            DeviceChoice::OutOfRange => writeln!(
                out,
                "{}",
                paint("  ❌ Invalid number. Try again.", Tone::Error)
            )?,
            DeviceChoice::NotANumber => writeln!(
                out,
                "{}",
                paint("  ❌ Please enter a number.", Tone::Error)
            )?,
        }
    }
}
