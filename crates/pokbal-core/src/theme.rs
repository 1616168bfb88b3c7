//! Light and dark themes.

use serde::{Deserialize, Serialize};

use crate::color::Rgba;

/// Colour theme for the page chrome and the particles.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

/// Named colours making up a theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemePalette {
    /// Page background.
    pub main: Rgba,
    /// Text drawn on the background.
    pub contrast: Rgba,
    /// Secondary text.
    pub contrast_darker: Rgba,
}

impl Theme {
    /// Switch between light and dark.
    pub fn toggle(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Display name of the theme.
    pub fn name(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Colour the particles are drawn in.
    pub fn particle_color(self) -> Rgba {
        match self {
            Theme::Light => Rgba::BLACK,
            Theme::Dark => Rgba::WHITE,
        }
    }

    pub fn palette(self) -> ThemePalette {
        match self {
            Theme::Light => ThemePalette {
                main: Rgba::rgb(204, 204, 204),
                contrast: Rgba::rgb(17, 17, 17),
                contrast_darker: Rgba::rgb(90, 90, 90),
            },
            Theme::Dark => ThemePalette {
                main: Rgba::rgb(17, 17, 17),
                contrast: Rgba::rgb(204, 204, 204),
                contrast_darker: Rgba::rgb(130, 130, 130),
            },
        }
    }
}
