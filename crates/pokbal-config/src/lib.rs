//! Configuration file handling for pokbal.
//!
//! The configuration lives in `config.toml` inside the platform config
//! directory. A missing file means defaults.

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use pokbal_core::{MAX_EASE, MIN_SPACING, MarginStyle, Physics, Theme};
use serde::{Deserialize, Serialize};

/// File name inside the config directory.
const CONFIG_FILE: &str = "config.toml";

/// Errors raised while reading or writing the configuration.
#[derive(Debug)]
pub enum ConfigError {
    /// No home directory to derive a config path from.
    NoConfigDir,
    Io(io::Error),
    Parse(toml::de::Error),
    Serialize(toml::ser::Error),
    /// A value is out of its allowed range.
    Invalid(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoConfigDir => write!(f, "could not determine a config directory"),
            Self::Io(e) => write!(f, "config file I/O failed: {e}"),
            Self::Parse(e) => write!(f, "invalid config file: {e}"),
            Self::Serialize(e) => write!(f, "could not serialize config: {e}"),
            Self::Invalid(msg) => write!(f, "invalid config value: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Parse(e) => Some(e),
            Self::Serialize(e) => Some(e),
            Self::NoConfigDir | Self::Invalid(_) => None,
        }
    }
}

impl From<io::Error> for ConfigError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        Self::Parse(e)
    }
}

impl From<toml::ser::Error> for ConfigError {
    fn from(e: toml::ser::Error) -> Self {
        Self::Serialize(e)
    }
}

/// User configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Pixels between neighbouring grid particles.
    pub spacing: f32,
    pub theme: Theme,
    pub margin_style: MarginStyle,
    /// Delay between animation frames.
    pub frame_interval_ms: u64,
    pub physics: Physics,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            spacing: 3.0,
            theme: Theme::default(),
            margin_style: MarginStyle::default(),
            frame_interval_ms: 16,
            physics: Physics::default(),
        }
    }
}

impl Config {
    /// Default location of the config file.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        ProjectDirs::from("", "", "pokbal")
            .map(|dirs| dirs.config_dir().join(CONFIG_FILE))
            .ok_or(ConfigError::NoConfigDir)
    }

    /// Load from the default location.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load from `path`, falling back to defaults if the file does not exist.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(e) => return Err(e.into()),
        };
        let config: Config = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Save to the default location.
    pub fn save(&self) -> Result<PathBuf, ConfigError> {
        let path = Self::config_path()?;
        self.save_to(&path)?;
        Ok(path)
    }

    /// Write to `path`, creating parent directories as needed.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        self.validate()?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml::to_string_pretty(self)?)?;
        Ok(())
    }

    /// Check every value is in range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.spacing.is_finite() && self.spacing >= MIN_SPACING) {
            return Err(ConfigError::Invalid(format!(
                "spacing must be at least {MIN_SPACING}, got {}",
                self.spacing
            )));
        }
        if self.frame_interval_ms == 0 {
            return Err(ConfigError::Invalid(
                "frame_interval_ms must be at least 1".to_string(),
            ));
        }
        let drag = self.physics.drag;
        if !(drag > 0.0 && drag < 1.0) {
            return Err(ConfigError::Invalid(format!(
                "physics.drag must be in (0, 1), got {drag}"
            )));
        }
        let ease = self.physics.ease;
        if !(ease >= 0.0 && ease < MAX_EASE) {
            return Err(ConfigError::Invalid(format!(
                "physics.ease must be in [0, {MAX_EASE}), got {ease}"
            )));
        }
        if !self.physics.mouse_factor.is_finite() {
            return Err(ConfigError::Invalid(
                "physics.mouse_factor must be finite".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("pokbal-config-test-{}", std::process::id()))
            .join(name)
    }

    #[test]
    fn test_defaults_are_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.spacing, 3.0);
        assert_eq!(config.theme, Theme::Dark);
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let path = temp_path("does-not-exist.toml");
        assert_eq!(Config::load_from(&path).unwrap(), Config::default());
    }

    #[test]
    fn test_save_and_load() {
        let path = temp_path("saved/config.toml");
        let config = Config {
            spacing: 2.5,
            theme: Theme::Light,
            margin_style: MarginStyle::Banner,
            ..Default::default()
        };
        config.save_to(&path).unwrap();
        assert_eq!(Config::load_from(&path).unwrap(), config);
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let config: Config = toml::from_str(
            r#"
            theme = "light"

            [physics]
            drag = 0.9
            "#,
        )
        .unwrap();
        assert_eq!(config.theme, Theme::Light);
        assert_eq!(config.physics.drag, 0.9);
        assert_eq!(config.physics.ease, 0.25);
        assert_eq!(config.spacing, 3.0);
    }

    #[test]
    fn test_rejects_bad_spacing() {
        let path = temp_path("zero-spacing.toml");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "spacing = 0.0\n").unwrap();
        assert!(matches!(
            Config::load_from(&path),
            Err(ConfigError::Invalid(_))
        ));
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_rejects_sub_pixel_spacing() {
        let mut config = Config::default();
        for spacing in [1e-30, 0.5, f32::NAN] {
            config.spacing = spacing;
            assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
        }
        config.spacing = MIN_SPACING;
        assert!(config.validate().is_ok());

        let path = temp_path("tiny-spacing.toml");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "spacing = 1e-30\n").unwrap();
        assert!(matches!(
            Config::load_from(&path),
            Err(ConfigError::Invalid(_))
        ));
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_rejects_bad_drag() {
        let mut config = Config::default();
        config.physics.drag = 1.5;
        assert!(config.validate().is_err());
        config.physics.drag = 1.0;
        assert!(config.validate().is_err());
        config.physics.drag = 0.0;
        assert!(config.validate().is_err());
        config.physics.drag = 0.99;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_unstable_ease() {
        let mut config = Config::default();
        for ease in [MAX_EASE, 1.0, -0.1, f32::NAN] {
            config.physics.ease = ease;
            assert!(config.validate().is_err(), "ease {ease} accepted");
        }
        config.physics.ease = 0.0;
        assert!(config.validate().is_ok());
        config.physics.ease = 0.3;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_error() {
        let path = temp_path("garbage.toml");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "spacing = \"wide\"\n").unwrap();
        assert!(matches!(Config::load_from(&path), Err(ConfigError::Parse(_))));
        let _ = fs::remove_file(&path);
    }
}
