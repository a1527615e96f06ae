/// Interactive shell — main menu, device selection and run summary.
///
/// All I/O goes through the reader/writer passed in, so the whole loop is
/// testable without a terminal.
use crate::drive_picker::pick_device;
use crate::prompt::read_line;
use crate::theme::{self, paint, Tone};
use anyhow::Context;
use std::io::{BufRead, Write};
use std::path::Path;
use std::time::Duration;
use tracing::error;
use yoyo_core::model::size::format_count;
use yoyo_core::platform::{self, VolumeEnumerator};
use yoyo_core::{BackupOutcome, BackupPipeline, Config};

pub struct YoyoApp {
    pipeline: BackupPipeline,
    enumerator: Box<dyn VolumeEnumerator>,
    /// Clear the screen and pause after errors; off when not on a terminal.
    interactive: bool,
}

impl YoyoApp {
    /// App using the host's removable-volume enumerator.
    pub fn new(config: Config) -> Self {
        Self::with_enumerator(config, platform::default_enumerator())
    }

    pub fn with_enumerator(config: Config, enumerator: Box<dyn VolumeEnumerator>) -> Self {
        Self {
            pipeline: BackupPipeline::new(config),
            enumerator,
            interactive: false,
        }
    }

    pub fn interactive(mut self, interactive: bool) -> Self {
        self.interactive = interactive;
        self
    }

    /// Run the main menu until the user exits or input ends.
    pub fn run_menu<R: BufRead, W: Write>(&self, input: &mut R, out: &mut W) -> anyhow::Result<()> {
        loop {
            self.show_banner(out)?;
            writeln!(out, "    [1] 🔍 Scan & Backup USB Now")?;
            writeln!(out, "    [2] 🚪 Exit")?;
            writeln!(out)?;

            let Some(choice) = read_line(input, out, "    Choose [1-2] > ")? else {
                return Ok(());
            };

            match choice.as_str() {
                "1" => {
                    self.scan_and_backup(input, out)?;
                    if read_line(input, out, "\n    Press Enter to continue...")?.is_none() {
                        return Ok(());
                    }
                }
                "2" => {
                    writeln!(out, "{}", paint("\n  🔐 YOYO closed. Stay secure.", Tone::Success))?;
                    return Ok(());
                }
                _ => {
                    writeln!(out, "{}", paint("  ❌ Invalid choice. Try again.", Tone::Error))?;
                    if self.interactive {
                        std::thread::sleep(Duration::from_secs(1));
                    }
                }
            }
        }
    }

    /// Detect devices, let the user pick one and back it up.
    ///
    /// A failed run is reported on `out`; the menu carries on.
    fn scan_and_backup<R: BufRead, W: Write>(&self, input: &mut R, out: &mut W) -> anyhow::Result<()> {
        writeln!(
            out,
            "{}",
            paint("\n🔍 Scanning for connected USB devices...", Tone::Warning)
        )?;
        let devices = platform::list_devices_with(self.enumerator.as_ref());
        let Some(mount_path) = pick_device(input, out, &devices)? else {
            return Ok(());
        };

        if let Err(err) = self.run_device(&mount_path, out) {
            error!("Backup of {} failed: {err:#}", mount_path.display());
            writeln!(
                out,
                "{}",
                paint(&format!("  ❌ Backup failed: {err:#}"), Tone::Error)
            )?;
        }
        Ok(())
    }

    /// Back up one device and print the summary.
    pub fn run_device<W: Write>(&self, mount_path: &Path, out: &mut W) -> anyhow::Result<BackupOutcome> {
        writeln!(
            out,
            "{}",
            paint(
                &format!("  📥 Starting full backup of: {}", mount_path.display()),
                Tone::Warning
            )
        )?;

        let outcome = self
            .pipeline
            .run(mount_path)
            .with_context(|| format!("backing up {}", mount_path.display()))?;

        self.print_summary(&outcome, out)?;
        Ok(outcome)
    }

    fn print_summary<W: Write>(&self, outcome: &BackupOutcome, out: &mut W) -> std::io::Result<()> {
        let copy = &outcome.copy;
        writeln!(
            out,
            "{}",
            paint(
                &format!("  📁 Backup location: {}", copy.destination.display()),
                Tone::Plain
            )
        )?;
        writeln!(
            out,
            "{}",
            paint(
                &format!(
                    "  ✅ Backup completed: {} files copied.",
                    format_count(copy.copied)
                ),
                Tone::Success
            )
        )?;
        if copy.skipped > 0 {
            writeln!(
                out,
                "{}",
                paint(
                    &format!("    ⚠️  {} files skipped.", format_count(copy.skipped)),
                    Tone::Warning
                )
            )?;
        }
        writeln!(
            out,
            "{}",
            paint(
                &format!("  📄 Report saved: {}", outcome.report_path.display()),
                Tone::Success
            )
        )?;
        writeln!(
            out,
            "{}",
            paint(
                &format!("\n  ✅ FULL BACKUP COMPLETED for '{}'", outcome.scan.name),
                Tone::Banner
            )
        )
    }

    fn show_banner<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        if self.interactive {
            write!(out, "{}", theme::CLEAR_SCREEN)?;
        }
        writeln!(out, "{}", paint(&theme::banner(), Tone::Banner))?;
        writeln!(
            out,
            "{}",
            paint(
                "    [+] YOYO – Professional USB Forensics & Backup Tool",
                Tone::Success
            )
        )?;
        writeln!(
            out,
            "{}",
            paint(
                "    [+] Supports all file types, hidden files, and large files.\n",
                Tone::Warning
            )
        )
    }
}
