//! Platform directory resolution.

use std::path::{Path, PathBuf};

/// Errors that can occur during platform operations.
#[derive(Debug, thiserror::Error)]
pub enum PlatformError {
    /// The OS did not provide a configuration directory.
    #[error("could not determine OS configuration directory")]
    NoConfigDir,
    /// An I/O error occurred (e.g., directory creation failed).
    #[error("platform I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// OS-specific directories for the sky map.
///
/// Follows OS conventions (XDG on Linux, Known Folders on Windows, Library on
/// macOS).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlatformDirs {
    /// User configuration: `config.ron`.
    pub config_dir: PathBuf,
    /// Log files.
    pub log_dir: PathBuf,
}

const APP_NAME: &str = "skymap";

impl PlatformDirs {
    /// Resolve platform-specific directories without creating them on disk.
    ///
    /// # Errors
    ///
    /// Returns [`PlatformError::NoConfigDir`] if the OS does not expose a
    /// configuration directory.
    pub fn resolve() -> Result<Self, PlatformError> {
        let config_base = dirs::config_dir().ok_or(PlatformError::NoConfigDir)?;
        let app_dir = config_base.join(APP_NAME);
        let log_dir = dirs::state_dir()
            .map(|d| d.join(APP_NAME).join("logs"))
            .unwrap_or_else(|| app_dir.join("logs"));
        Ok(Self {
            config_dir: app_dir,
            log_dir,
        })
    }

    /// Directories rooted under a custom base path, e.g. from `--config`.
    pub fn resolve_with_root(root: &Path) -> Self {
        Self {
            config_dir: root.to_path_buf(),
            log_dir: root.join("logs"),
        }
    }

    /// Create all directories on disk.
    ///
    /// # Errors
    ///
    /// Returns [`PlatformError::Io`] if any directory cannot be created.
    pub fn create_dirs(&self) -> Result<(), PlatformError> {
        std::fs::create_dir_all(&self.config_dir)?;
        std::fs::create_dir_all(&self.log_dir)?;
        Ok(())
    }
}
