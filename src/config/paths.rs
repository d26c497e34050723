//! Path management for ledgerlens
//!
//! ## Path Resolution Order
//!
//! 1. `LEDGERLENS_CONFIG_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/ledgerlens` or `~/.config/ledgerlens`
//! 3. Windows: `%APPDATA%\ledgerlens`

use std::path::PathBuf;

use crate::error::LensError;

/// Environment variable that overrides the configuration directory
pub const CONFIG_DIR_ENV: &str = "LEDGERLENS_CONFIG_DIR";

/// Manages the paths used by ledgerlens
#[derive(Debug, Clone)]
pub struct LensPaths {
    base_dir: PathBuf,
}

impl LensPaths {
    /// Create a new LensPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if neither the override nor a home directory can be
    /// determined.
    pub fn new() -> Result<Self, LensError> {
        let base_dir = if let Ok(custom) = std::env::var(CONFIG_DIR_ENV) {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create LensPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory (~/.config/ledgerlens/ or equivalent)
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Ensure the base directory exists
    pub fn ensure_directories(&self) -> Result<(), LensError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| LensError::Io(format!("Failed to create config directory: {}", e)))
    }

    /// Check if a settings file has been written
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, LensError> {
    let config_base = match std::env::var("XDG_CONFIG_HOME") {
        Ok(xdg) => PathBuf::from(xdg),
        Err(_) => {
            let home = std::env::var("HOME").map_err(|_| {
                LensError::Config("HOME environment variable not set".into())
            })?;
            PathBuf::from(home).join(".config")
        }
    };
    Ok(config_base.join("ledgerlens"))
}

#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, LensError> {
    let appdata = std::env::var("APPDATA")
        .map_err(|_| LensError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("ledgerlens"))
}
