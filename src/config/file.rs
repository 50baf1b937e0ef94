//! Configuration file handling

use crate::error::{ConfigError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Configuration file structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfigFile {
    /// Global settings
    #[serde(default)]
    pub settings: Settings,
}

/// Global settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    /// Path of the persisted RPC document
    #[serde(default)]
    pub document: Option<PathBuf>,

    /// Whether the optional broker HTTP slot participates by default
    #[serde(default)]
    pub include_broker: bool,
}

impl ConfigFile {
    /// Get the default config file path
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("rpc-allocator")
            .join("config.toml")
    }

    /// Default path of the persisted RPC document
    pub fn default_document_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("rpc-allocator")
            .join("rpcs.json")
    }

    /// Path of the persisted RPC document, configured or default
    pub fn document_path(&self) -> PathBuf {
        self.settings
            .document
            .clone()
            .unwrap_or_else(Self::default_document_path)
    }

    /// Load from default path
    pub fn load_default() -> Result<Option<Self>> {
        let path = Self::default_path();
        if path.exists() {
            Ok(Some(Self::load(&path)?))
        } else {
            Ok(None)
        }
    }

    /// Load from a specific path
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::InvalidFile(format!("{}: {}", path.display(), e)))?;

        let config: Self = toml::from_str(&content).map_err(ConfigError::from)?;
        Ok(config)
    }

    /// Save to a specific path
    pub fn save(&self, path: &Path) -> Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                ConfigError::InvalidFile(format!("Failed to create directory: {}", e))
            })?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::InvalidFile(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(path, content)
            .map_err(|e| ConfigError::InvalidFile(format!("Failed to write config: {}", e)))?;

        Ok(())
    }

    /// Save to default path
    pub fn save_default(&self) -> Result<()> {
        self.save(&Self::default_path())
    }

    /// Set the RPC document path and save
    pub fn set_document(&mut self, path: PathBuf) -> Result<()> {
        self.settings.document = Some(path);
        self.save_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_config() {
        let toml = r#"
[settings]
document = "/srv/deploy/prod.rpcs.json"
include_broker = true
"#;

        let config: ConfigFile = toml::from_str(toml).unwrap();
        assert_eq!(
            config.settings.document,
            Some(PathBuf::from("/srv/deploy/prod.rpcs.json"))
        );
        assert!(config.settings.include_broker);
        assert_eq!(
            config.document_path(),
            PathBuf::from("/srv/deploy/prod.rpcs.json")
        );
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: ConfigFile = toml::from_str("").unwrap();
        assert!(config.settings.document.is_none());
        assert!(!config.settings.include_broker);
        assert!(config
            .document_path()
            .to_string_lossy()
            .contains("rpc-allocator"));
    }

    #[test]
    fn test_default_path() {
        let path = ConfigFile::default_path();
        assert!(path.to_string_lossy().contains("rpc-allocator"));
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let mut config = ConfigFile::default();
        config.settings.include_broker = true;
        config.save(&path).unwrap();

        let back = ConfigFile::load(&path).unwrap();
        assert!(back.settings.include_broker);
    }
}
