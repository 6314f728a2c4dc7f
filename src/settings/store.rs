//! Settings file I/O

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::settings as settings_config;
use crate::error::{Result, SanntiError};

use super::models::Settings;

/// Reads and writes the YAML settings file
#[derive(Debug, Clone)]
pub struct SettingsStore {
    path: PathBuf,
}

impl Default for SettingsStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SettingsStore {
    /// Store at the default path (~/.sannti/config.yaml)
    pub fn new() -> Self {
        Self {
            path: Self::default_path(),
        }
    }

    /// Store at a custom path (for testing)
    pub fn with_path(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn default_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(settings_config::DIR_NAME)
            .join(settings_config::FILE_NAME)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load settings; a missing file yields empty settings, a corrupt one errors
    pub fn load(&self) -> Result<Settings> {
        if !self.path.exists() {
            return Ok(Settings::default());
        }

        let content = fs::read_to_string(&self.path).map_err(|e| {
            SanntiError::Config(format!(
                "Failed to read settings {}: {}",
                self.path.display(),
                e
            ))
        })?;

        if content.trim().is_empty() {
            return Ok(Settings::default());
        }

        serde_yml::from_str(&content).map_err(|e| {
            SanntiError::Config(format!(
                "Failed to parse settings {}: {}",
                self.path.display(),
                e
            ))
        })
    }

    /// Save settings atomically (tmp file + rename), owner-only on Unix
    pub fn save(&self, settings: &Settings) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                SanntiError::Config(format!(
                    "Failed to create settings directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }

        let yaml = serde_yml::to_string(settings)
            .map_err(|e| SanntiError::Config(format!("Failed to serialize settings: {}", e)))?;

        let tmp_path = self.path.with_extension("yaml.tmp");
        fs::write(&tmp_path, &yaml).map_err(|e| {
            SanntiError::Config(format!(
                "Failed to write temp settings file {}: {}",
                tmp_path.display(),
                e
            ))
        })?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&tmp_path, fs::Permissions::from_mode(0o600)).map_err(|e| {
                SanntiError::Config(format!("Failed to set permissions on settings file: {}", e))
            })?;
        }

        fs::rename(&tmp_path, &self.path).map_err(|e| {
            SanntiError::Config(format!(
                "Failed to rename temp settings file to {}: {}",
                self.path.display(),
                e
            ))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn test_store(dir: &TempDir) -> SettingsStore {
        SettingsStore::with_path(dir.path().join("config.yaml"))
    }

    #[test]
    fn test_load_missing_file_returns_default() {
        let dir = TempDir::new().unwrap();
        let settings = test_store(&dir).load().unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_load_empty_file_returns_default() {
        let dir = TempDir::new().unwrap();
        let store = test_store(&dir);
        fs::write(store.path(), "").unwrap();
        assert_eq!(store.load().unwrap(), Settings::default());
    }

    #[test]
    fn test_load_corrupt_yaml_errors() {
        let dir = TempDir::new().unwrap();
        let store = test_store(&dir);
        fs::write(store.path(), "access_key: [unclosed").unwrap();

        let err = store.load().unwrap_err();
        assert!(matches!(err, SanntiError::Config(_)));
        assert!(err.to_string().contains("Failed to parse settings"));
    }

    #[test]
    fn test_save_creates_parent_dir() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(".sannti").join("config.yaml");
        let store = SettingsStore::with_path(path.clone());
        store.save(&Settings::default()).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_save_load_roundtrip() {
        let dir = TempDir::new().unwrap();
        let store = test_store(&dir);
        let settings = Settings {
            access_key: Some("AK".to_string()),
            secret_key: Some("SK".to_string()),
            default_region: Some("br-southeast-1".to_string()),
        };

        store.save(&settings).unwrap();
        assert_eq!(store.load().unwrap(), settings);
        assert!(!dir.path().join("config.yaml.tmp").exists());
    }

    #[cfg(unix)]
    #[test]
    fn test_save_sets_permissions() {
        use std::os::unix::fs::PermissionsExt;

        let dir = TempDir::new().unwrap();
        let store = test_store(&dir);
        store.save(&Settings::default()).unwrap();

        let mode = fs::metadata(store.path()).unwrap().permissions().mode() & 0o777;
        assert_eq!(mode, 0o600);
    }

    #[test]
    fn test_default_path() {
        let path = SettingsStore::default_path();
        assert!(path.ends_with(".sannti/config.yaml"));
    }
}
