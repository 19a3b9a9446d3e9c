use crate::model::{default_sections, CatalogError, SectionCatalog, SectionDescriptor, SectionId};
use crate::state::NavigationSettings;
use crate::state::navigation::{DEFAULT_COOL_DOWN_MS, DEFAULT_INITIAL_SECTION};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;
use tracing::warn;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not determine config directory")]
    NoConfigDir,
    #[error("failed to read or write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Application configuration
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct Config {
    pub navigation: NavigationConfig,
    pub theme: ThemeConfig,
    pub sections: Vec<SectionDescriptor>,
}

/// Section transition behaviour
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct NavigationConfig {
    /// Minimum spacing between accepted section changes (in milliseconds)
    pub cool_down_ms: u64,
    /// Section shown at startup; need not be listed in `sections`
    pub initial_section: String,
}

/// Theme configuration
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct ThemeConfig {
    /// "dark" or "light"
    pub mode: String,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        NavigationConfig {
            cool_down_ms: DEFAULT_COOL_DOWN_MS,
            initial_section: DEFAULT_INITIAL_SECTION.to_string(),
        }
    }
}

impl Default for ThemeConfig {
    fn default() -> Self {
        ThemeConfig {
            mode: "dark".to_string(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            navigation: NavigationConfig::default(),
            theme: ThemeConfig::default(),
            sections: default_sections(),
        }
    }
}

impl Config {
    /// Get the path to the config file
    pub fn config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "folio-nav")
            .map(|dirs| dirs.config_dir().join("config.toml"))
    }

    /// Load configuration from the default location, or return defaults
    pub fn load() -> Self {
        let Some(path) = Self::config_path() else {
            return Config::default();
        };
        if !path.exists() {
            return Config::default();
        }
        match Self::load_from(&path) {
            Ok(config) => config,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "using default configuration");
                Config::default()
            }
        }
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(toml::from_str(&contents)?)
    }

    /// Save configuration to the default location
    pub fn save(&self) -> Result<(), ConfigError> {
        let path = Self::config_path().ok_or(ConfigError::NoConfigDir)?;
        self.save_to(&path)
    }

    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let io_err = |source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        };
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(io_err)?;
        }
        let contents = toml::to_string_pretty(self)?;
        fs::write(path, contents).map_err(io_err)
    }

    /// Create a default config file if it doesn't exist
    pub fn create_default() -> Result<(), ConfigError> {
        if let Some(path) = Self::config_path() {
            if !path.exists() {
                Config::default().save()?;
            }
        }
        Ok(())
    }

    pub fn catalog(&self) -> Result<SectionCatalog, CatalogError> {
        SectionCatalog::new(self.sections.clone())
    }

    pub fn navigation_settings(&self) -> NavigationSettings {
        NavigationSettings {
            cool_down: Duration::from_millis(self.navigation.cool_down_ms),
            initial_section: SectionId::from(self.navigation.initial_section.as_str()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.navigation.cool_down_ms, 800);
        assert_eq!(config.navigation.initial_section, "hero");
        assert_eq!(config.theme.mode, "dark");
        assert_eq!(config.sections.len(), 4);

        let settings = config.navigation_settings();
        assert_eq!(settings, NavigationSettings::default());
    }

    #[test]
    fn test_config_serialization() {
        let config = Config::default();
        let toml_str = toml::to_string(&config).expect("Failed to serialize");
        let deserialized: Config = toml::from_str(&toml_str).expect("Failed to deserialize");
        assert_eq!(config, deserialized);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: Config = toml::from_str("[navigation]\ncool_down_ms = 250\n").unwrap();
        assert_eq!(config.navigation.cool_down_ms, 250);
        assert_eq!(config.navigation.initial_section, "hero");
        assert_eq!(config.theme.mode, "dark");
        assert_eq!(config.sections, default_sections());
    }

    #[test]
    fn test_custom_sections() {
        let toml_str = r#"
            [[sections]]
            id = "intro"
            title = "Intro"
            icon = "*"

            [[sections]]
            id = "intro"
            title = "Twice"
            icon = "!"
        "#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.sections[0].id.as_str(), "intro");
        assert!(matches!(config.catalog(), Err(CatalogError::DuplicateId(_))));
    }

    #[test]
    fn test_save_and_load_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.navigation.initial_section = "about".to_string();
        config.theme.mode = "light".to_string();
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded, config);
        assert_eq!(loaded.navigation_settings().initial_section.as_str(), "about");
    }

    #[test]
    fn test_malformed_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[navigation\ncool_down_ms = ").unwrap();

        assert!(matches!(Config::load_from(&path), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = Config::load_from(&dir.path().join("absent.toml"));
        assert!(matches!(result, Err(ConfigError::Io { .. })));
    }
}
