//! Command-line flags.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use pokbal_config::{Config, ConfigError};
use pokbal_core::Theme;

/// An interactive particle explosion for the terminal.
#[derive(Debug, Parser)]
#[command(version, about)]
pub struct Args {
    /// Config file to read and save (defaults to the platform config directory)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Pixels between grid particles
    #[arg(long)]
    pub spacing: Option<f32>,

    /// Starting theme
    #[arg(long, value_enum)]
    pub theme: Option<ThemeArg>,

    /// Target frames per second
    #[arg(long)]
    pub fps: Option<u32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ThemeArg {
    Light,
    Dark,
}

impl From<ThemeArg> for Theme {
    fn from(arg: ThemeArg) -> Self {
        match arg {
            ThemeArg::Light => Theme::Light,
            ThemeArg::Dark => Theme::Dark,
        }
    }
}

impl Args {
    /// Load the config file and apply command-line overrides.
    pub fn resolve(&self) -> Result<Config, ConfigError> {
        let config = match &self.config {
            Some(path) => Config::load_from(path)?,
            None => Config::load()?,
        };
        self.apply(config)
    }

    fn apply(&self, mut config: Config) -> Result<Config, ConfigError> {
        if let Some(spacing) = self.spacing {
            config.spacing = spacing;
        }
        if let Some(theme) = self.theme {
            config.theme = theme.into();
        }
        if let Some(fps) = self.fps {
            config.frame_interval_ms = 1000 / u64::from(fps.max(1));
        }
        config.validate()?;
        Ok(config)
    }
}
