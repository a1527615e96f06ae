/// Run configuration — where backups and reports go, and what the
/// scanner looks for.
///
/// Built once by the shell and handed to each component at construction.
use crate::error::{Result, RunError};
use crate::scanner::ScanOptions;
use std::fs;
use std::path::{Path, PathBuf};

pub const BACKUP_DIR_NAME: &str = "YOYO_USB_Backups";
pub const REPORT_DIR_NAME: &str = "YOYO_USB_Reports";

#[derive(Debug, Clone)]
pub struct Config {
    /// Parent of every `Backup_<device>_<timestamp>` directory.
    pub backup_root: PathBuf,
    /// Directory that receives report files.
    pub report_root: PathBuf,
    pub scan: ScanOptions,
}

impl Config {
    /// Roots under `<home>/Desktop`, or `<home>` when there is no Desktop.
    pub fn from_home() -> Result<Self> {
        let home = dirs::home_dir().ok_or(RunError::NoHomeDir)?;
        Ok(Self::under(&home))
    }

    /// Roots under `home`, applying the Desktop fallback.
    pub fn under(home: &Path) -> Self {
        let desktop = home.join("Desktop");
        let base = if desktop.is_dir() {
            desktop
        } else {
            home.to_path_buf()
        };
        Self::with_roots(base.join(BACKUP_DIR_NAME), base.join(REPORT_DIR_NAME))
    }

    pub fn with_roots(backup_root: PathBuf, report_root: PathBuf) -> Self {
        Self {
            backup_root,
            report_root,
            scan: ScanOptions::default(),
        }
    }

    /// Create both roots. Failure is fatal for the run.
    pub fn ensure_roots(&self) -> Result<()> {
        for dir in [&self.backup_root, &self.report_root] {
            fs::create_dir_all(dir).map_err(|source| RunError::CreateDir {
                path: dir.clone(),
                source,
            })?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_roots_prefer_desktop() {
        let home = TempDir::new().unwrap();
        fs::create_dir(home.path().join("Desktop")).unwrap();
        let config = Config::under(home.path());
        assert_eq!(
            config.backup_root,
            home.path().join("Desktop").join(BACKUP_DIR_NAME)
        );
        assert_eq!(
            config.report_root,
            home.path().join("Desktop").join(REPORT_DIR_NAME)
        );
    }

    #[test]
    fn test_roots_fall_back_to_home() {
        let home = TempDir::new().unwrap();
        let config = Config::under(home.path());
        assert_eq!(config.backup_root, home.path().join(BACKUP_DIR_NAME));
        assert_eq!(config.report_root, home.path().join(REPORT_DIR_NAME));
    }

    #[test]
    fn test_ensure_roots_creates_both() {
        let tmp = TempDir::new().unwrap();
        let config = Config::with_roots(tmp.path().join("b/nested"), tmp.path().join("r"));
        config.ensure_roots().unwrap();
        assert!(config.backup_root.is_dir());
        assert!(config.report_root.is_dir());
    }

    #[test]
    fn test_ensure_roots_fails_on_file() {
        let tmp = TempDir::new().unwrap();
        let blocker = tmp.path().join("blocker");
        fs::write(&blocker, b"x").unwrap();
        let config = Config::with_roots(blocker.join("backups"), tmp.path().join("r"));
        let err = config.ensure_roots().unwrap_err();
        assert!(matches!(err, RunError::CreateDir { .. }));
    }
}
