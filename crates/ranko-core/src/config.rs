use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration structure
///
/// Loaded from the config file, then CLI flags are layered on top.
/// Priority: CLI > File > Defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub picker: PickerConfig,
}

impl Config {
    /// Load config from the default location, falling back to defaults
    pub fn load() -> crate::Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load config from an explicit path. A missing file is not an error.
    pub fn load_from(path: &Path) -> crate::Result<Self> {
        if !path.exists() {
            tracing::debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path)?;
        toml::from_str(&contents)
            .map_err(|e| crate::Error::ConfigError(format!("Failed to parse config: {}", e)))
    }

    /// Save config to the default location
    pub fn save(&self) -> crate::Result<PathBuf> {
        let path = Self::config_path()?;
        self.save_to(&path)?;
        Ok(path)
    }

    pub fn save_to(&self, path: &Path) -> crate::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(path, self.to_toml()?)?;
        Ok(())
    }

    /// The config as it would be written to disk
    pub fn to_toml(&self) -> crate::Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| crate::Error::ConfigError(format!("Failed to serialize config: {}", e)))
    }

    /// `<config_dir>/ranko/config.toml` - XDG on Linux, the usual spots elsewhere
    pub fn config_path() -> crate::Result<PathBuf> {
        let dir = dirs::config_dir()
            .ok_or_else(|| crate::Error::ConfigError("Could not find config directory".into()))?;
        Ok(dir.join("ranko").join("config.toml"))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UiConfig {
    /// Theme name (Default Dark, Light, Nord)
    #[serde(default = "default_theme")]
    pub theme: String,

    #[serde(default = "default_mouse")]
    pub mouse_enabled: bool,
}

fn default_theme() -> String {
    "Default Dark".to_string()
}

fn default_mouse() -> bool {
    true
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            theme: default_theme(),
            mouse_enabled: default_mouse(),
        }
    }
}

/// Which picker the TUI opens on
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum StartScreen {
    #[default]
    Filters,
    Categories,
    Layouts,
}

impl std::str::FromStr for StartScreen {
    type Err = crate::Error;

    fn from_str(s: &str) -> crate::Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "filters" => Ok(Self::Filters),
            "categories" => Ok(Self::Categories),
            "layouts" => Ok(Self::Layouts),
            other => Err(crate::Error::ConfigError(format!(
                "Unknown screen '{}' (expected filters, categories or layouts)",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PickerConfig {
    /// List unavailable chips (greyed out, inert). Off hides them entirely.
    #[serde(default = "default_show_unavailable")]
    pub show_unavailable: bool,

    #[serde(default)]
    pub start_screen: StartScreen,
}

fn default_show_unavailable() -> bool {
    true
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            show_unavailable: default_show_unavailable(),
            start_screen: StartScreen::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.ui.theme, "Default Dark");
        assert!(config.ui.mouse_enabled);
        assert!(config.picker.show_unavailable);
        assert_eq!(config.picker.start_screen, StartScreen::Filters);
    }

    #[test]
    fn test_config_serialization() {
        let config = Config::default();
        let toml = toml::to_string(&config).unwrap();
        assert!(toml.contains("theme"));
        assert!(toml.contains("start_screen = \"filters\""));
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let config: Config = toml::from_str("[picker]\nstart_screen = \"layouts\"\n").unwrap();
        assert_eq!(config.picker.start_screen, StartScreen::Layouts);
        assert!(config.picker.show_unavailable);
        assert_eq!(config.ui, UiConfig::default());
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.ui.theme = "Nord".to_string();
        config.picker.show_unavailable = false;
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let loaded = Config::load_from(&dir.path().join("nope.toml")).unwrap();
        assert_eq!(loaded, Config::default());
    }

    #[test]
    fn test_garbage_file_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "ui = [not toml").unwrap();
        assert!(matches!(
            Config::load_from(&path),
            Err(crate::Error::ConfigError(_))
        ));
    }

    #[test]
    fn test_start_screen_parsing() {
        assert_eq!("Layouts".parse::<StartScreen>().unwrap(), StartScreen::Layouts);
        assert!("settings".parse::<StartScreen>().is_err());
    }
}
