/// Command-line flags for the `yoyo` binary.
use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use yoyo_core::Config;

#[derive(Debug, Parser)]
#[command(name = "yoyo", version)]
#[command(about = "Back up removable devices and write a forensic report", long_about = None)]
pub struct Args {
    /// Directory that receives Backup_<device>_<timestamp> folders
    #[arg(long, value_name = "DIR")]
    pub backup_root: Option<PathBuf>,

    /// Directory that receives report files
    #[arg(long, value_name = "DIR")]
    pub report_root: Option<PathBuf>,

    /// Back up this mount path once and exit instead of showing the menu
    #[arg(long, value_name = "PATH")]
    pub device: Option<PathBuf>,

    /// Log progress to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// Default roots under the home directory, with any overrides applied.
    pub fn config(&self) -> anyhow::Result<Config> {
        let mut config = match (&self.backup_root, &self.report_root) {
            (Some(backup), Some(report)) => Config::with_roots(backup.clone(), report.clone()),
            _ => Config::from_home().context("cannot resolve default backup locations")?,
        };
        if let Some(backup) = &self.backup_root {
            config.backup_root = backup.clone();
        }
        if let Some(report) = &self.report_root {
            config.report_root = report.clone();
        }
        Ok(config)
    }

    /// Default `tracing` filter when `RUST_LOG` is unset.
    pub fn default_log_filter(&self) -> &'static str {
        if self.verbose {
            "info"
        } else {
            "warn"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_roots() {
        let args =
            Args::try_parse_from(["yoyo", "--backup-root", "/tmp/b", "--report-root", "/tmp/r"])
                .unwrap();
        let config = args.config().unwrap();
        assert_eq!(config.backup_root, PathBuf::from("/tmp/b"));
        assert_eq!(config.report_root, PathBuf::from("/tmp/r"));
        assert!(args.device.is_none());
        assert_eq!(args.default_log_filter(), "warn");
    }

    #[test]
    fn test_device_and_verbose() {
        let args = Args::try_parse_from(["yoyo", "--device", "/media/u/KEY", "-v"]).unwrap();
        assert_eq!(args.device, Some(PathBuf::from("/media/u/KEY")));
        assert_eq!(args.default_log_filter(), "info");
    }
}
