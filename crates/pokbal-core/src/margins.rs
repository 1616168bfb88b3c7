//! Margins around the particle grid.

use serde::{Deserialize, Serialize};

/// Per-edge margins in pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Margins {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
}

impl Margins {
    /// The same margin on every edge.
    pub fn uniform(margin: f32) -> Self {
        Self {
            left: margin,
            right: margin,
            top: margin,
            bottom: margin,
        }
    }
}

/// How margins are derived from the canvas size.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarginStyle {
    /// An eighth of the height on every edge.
    #[default]
    Uniform,
    /// A thin frame with the lower half left empty for text.
    Banner,
}

impl MarginStyle {
    /// Cycle to the next margin style.
    pub fn next(self) -> Self {
        match self {
            MarginStyle::Uniform => MarginStyle::Banner,
            MarginStyle::Banner => MarginStyle::Uniform,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            MarginStyle::Uniform => "uniform",
            MarginStyle::Banner => "banner",
        }
    }

    /// Resolve the margins for a canvas of the given height.
    pub fn margins(self, height: f32) -> Margins {
        match self {
            MarginStyle::Uniform => Margins::uniform(height / 8.0),
            MarginStyle::Banner => {
                let edge = height.floor() / 16.0;
                Margins {
                    left: edge,
                    right: edge,
                    top: edge,
                    bottom: height.floor() / 2.0 + edge,
                }
            }
        }
    }
}
