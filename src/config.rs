//! Mind-map options
//!
//! Options can be built in code or loaded from TOML. Every key is optional:
//!
//! ```toml
//! theme = "dark"
//! h_margin = 100.0
//! v_margin = 50.0
//! undo_limit = 10000
//!
//! [layout]
//! h_space = 30.0
//! v_space = 20.0
//!
//! [export]
//! corner_radius = 4.0
//! ```

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::layout::LayoutConfig;
use crate::renderer::SvgConfig;
use crate::undo::DEFAULT_UNDO_LIMIT;

/// Errors that can occur when loading options
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read options file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse options TOML: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// Options for a [`MindMap`](crate::MindMap)
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct MindMapOptions {
    /// Styling namespace applied to the container as `theme-<name>`
    pub theme: Option<String>,

    /// Horizontal margin added on both sides of the laid-out tree
    pub h_margin: f64,

    /// Vertical margin added above and below the laid-out tree
    pub v_margin: f64,

    /// Maximum number of undo snapshots kept
    pub undo_limit: usize,

    pub layout: LayoutConfig,

    /// Settings for SVG export
    pub export: SvgConfig,
}

impl Default for MindMapOptions {
    fn default() -> Self {
        Self {
            theme: None,
            h_margin: 100.0,
            v_margin: 50.0,
            undo_limit: DEFAULT_UNDO_LIMIT,
            layout: LayoutConfig::default(),
            export: SvgConfig::default(),
        }
    }
}

impl MindMapOptions {
    /// Create options with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Load options from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Load options from a TOML string
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Set the theme; an empty name clears it
    pub fn with_theme(mut self, theme: impl Into<String>) -> Self {
        let theme = theme.into();
        self.theme = (!theme.is_empty()).then_some(theme);
        self
    }

    /// Set both canvas margins
    pub fn with_margins(mut self, h_margin: f64, v_margin: f64) -> Self {
        self.h_margin = h_margin;
        self.v_margin = v_margin;
        self
    }

    /// Set the undo stack capacity
    pub fn with_undo_limit(mut self, limit: usize) -> Self {
        self.undo_limit = limit;
        self
    }

    /// Set the layout configuration
    pub fn with_layout(mut self, layout: LayoutConfig) -> Self {
        self.layout = layout;
        self
    }

    pub fn with_export(mut self, export: SvgConfig) -> Self {
        self.export = export;
        self
    }

    /// Container class for the configured theme
    pub fn theme_class(&self) -> Option<String> {
        self.theme
            .as_deref()
            .filter(|t| !t.is_empty())
            .map(|t| format!("theme-{}", t))
    }
}
