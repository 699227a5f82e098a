//! Pipeline configuration and its TOML file form
//!
//! ```toml
//! strict = false
//!
//! [layout]
//! target_bond_length = 60.0
//!
//! [spatial]
//! lateral_offset = 0.12
//!
//! [view]
//! show_lone_pairs = true
//! ```
//!
//! Every table and key is optional; missing values keep their defaults.

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::layout::LayoutConfig;
use crate::renderer::SvgConfig;
use crate::spatial::SpatialConfig;
use crate::stylesheet::Stylesheet;

/// Errors that can occur when loading a configuration file
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse config TOML: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// Toggles for optional decorations in the planar view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ViewOptions {
    pub show_lone_pairs: bool,
    pub show_charges: bool,
    pub show_labels: bool,
}

impl Default for ViewOptions {
    fn default() -> Self {
        Self {
            show_lone_pairs: true,
            show_charges: true,
            show_labels: true,
        }
    }
}

/// Configuration for the complete render pipeline
#[derive(Debug, Clone, Default)]
pub struct RenderConfig {
    /// Planar layout configuration
    pub layout: LayoutConfig,
    /// 3D geometry configuration
    pub spatial: SpatialConfig,
    /// SVG output configuration
    pub svg: SvgConfig,
    /// Element styles and palette
    pub stylesheet: Stylesheet,
    /// Decoration toggles
    pub view: ViewOptions,
    /// Treat skipped atoms and bonds as errors
    pub strict: bool,
}

/// TOML structure for deserializing config files
#[derive(Deserialize, Default)]
#[serde(default)]
struct TomlConfig {
    layout: LayoutConfig,
    spatial: SpatialConfig,
    view: ViewOptions,
    strict: bool,
}

impl RenderConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Load the layout, spatial and view settings from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Load the layout, spatial and view settings from a TOML string
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let parsed: TomlConfig = toml::from_str(content)?;
        Ok(Self {
            layout: parsed.layout,
            spatial: parsed.spatial,
            view: parsed.view,
            strict: parsed.strict,
            ..Self::default()
        })
    }

    /// Set the layout configuration
    pub fn with_layout(mut self, config: LayoutConfig) -> Self {
        self.layout = config;
        self
    }

    /// Set the 3D geometry configuration
    pub fn with_spatial(mut self, config: SpatialConfig) -> Self {
        self.spatial = config;
        self
    }

    /// Set the SVG configuration
    pub fn with_svg(mut self, config: SvgConfig) -> Self {
        self.svg = config;
        self
    }

    /// Set the stylesheet
    pub fn with_stylesheet(mut self, stylesheet: Stylesheet) -> Self {
        self.stylesheet = stylesheet;
        self
    }

    /// Set the decoration toggles
    pub fn with_view(mut self, view: ViewOptions) -> Self {
        self.view = view;
        self
    }

    /// Enable or disable strict mode
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }
}
