//! Element styles and palette colors
//!
//! A stylesheet maps element symbols to a display color and radius (CPK
//! convention by default) and names the handful of colors used for bonds,
//! labels and charge badges. Stylesheets are TOML; a user stylesheet only
//! needs the entries it changes, everything else comes from the default.

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

/// Errors that can occur when loading or parsing stylesheets
#[derive(Error, Debug)]
pub enum StylesheetError {
    #[error("Failed to read stylesheet file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse stylesheet TOML: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// Display style of one element
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ElementStyle {
    /// Fill color, as a CSS color string
    pub color: String,
    /// Sphere radius in 3D scene units
    pub radius: f32,
}

/// Element styles plus named palette colors
#[derive(Debug, Clone, PartialEq)]
pub struct Stylesheet {
    /// Optional name for the stylesheet
    pub name: Option<String>,
    /// Optional description
    pub description: Option<String>,
    /// Named colors: token -> CSS color
    pub colors: BTreeMap<String, String>,
    /// Element symbol -> style
    pub elements: BTreeMap<String, ElementStyle>,
    /// Style for elements missing from `elements`
    pub fallback: ElementStyle,
}

/// TOML structure for deserializing stylesheets
#[derive(Deserialize)]
struct TomlStylesheet {
    metadata: Option<TomlMetadata>,
    #[serde(default)]
    colors: BTreeMap<String, String>,
    #[serde(default)]
    elements: BTreeMap<String, ElementStyle>,
    fallback: Option<ElementStyle>,
}

#[derive(Deserialize)]
struct TomlMetadata {
    name: Option<String>,
    description: Option<String>,
}

/// Default palette - Jmol CPK colors with display radii in scene units
const DEFAULT_PALETTE: &str = r##"
[metadata]
name = "cpk"
description = "CPK element colors"

[colors]
bond = "#555555"
atom-stroke = "#333333"
label-dark = "#1a1a1a"
label-light = "#ffffff"
lone-pair = "#333333"
charge-positive = "#1e88e5"
charge-negative = "#e53935"
charge-text = "#ffffff"

[fallback]
color = "#ff1493"
radius = 0.40

[elements]
H  = { color = "#ffffff", radius = 0.25 }
He = { color = "#d9ffff", radius = 0.22 }
Li = { color = "#cc80ff", radius = 0.55 }
Be = { color = "#c2ff00", radius = 0.45 }
B  = { color = "#ffb5b5", radius = 0.42 }
C  = { color = "#909090", radius = 0.40 }
N  = { color = "#3050f8", radius = 0.38 }
O  = { color = "#ff0d0d", radius = 0.36 }
F  = { color = "#90e050", radius = 0.34 }
Ne = { color = "#b3e3f5", radius = 0.26 }
Na = { color = "#ab5cf2", radius = 0.60 }
Mg = { color = "#8aff00", radius = 0.55 }
Al = { color = "#bfa6a6", radius = 0.55 }
Si = { color = "#f0c8a0", radius = 0.50 }
P  = { color = "#ff8000", radius = 0.48 }
S  = { color = "#ffff30", radius = 0.48 }
Cl = { color = "#1ff01f", radius = 0.45 }
Ar = { color = "#80d1e3", radius = 0.36 }
K  = { color = "#8f40d4", radius = 0.70 }
Ca = { color = "#3dff00", radius = 0.65 }
Fe = { color = "#e06633", radius = 0.52 }
Cu = { color = "#c88033", radius = 0.50 }
Zn = { color = "#7d80b0", radius = 0.50 }
Se = { color = "#ffa100", radius = 0.50 }
Br = { color = "#a62929", radius = 0.50 }
Kr = { color = "#5cb8d1", radius = 0.42 }
I  = { color = "#940094", radius = 0.56 }
Xe = { color = "#429eb0", radius = 0.48 }
"##;

impl Stylesheet {
    /// Load stylesheet from TOML file
    pub fn from_file(path: &Path) -> Result<Self, StylesheetError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Load stylesheet from TOML string, filling gaps from the default palette
    pub fn from_str(content: &str) -> Result<Self, StylesheetError> {
        let parsed = Self::parse(content)?;
        Ok(Self::default().overlay(parsed))
    }

    fn parse(content: &str) -> Result<TomlStylesheet, StylesheetError> {
        Ok(toml::from_str(content)?)
    }

    fn overlay(mut self, parsed: TomlStylesheet) -> Self {
        if let Some(meta) = parsed.metadata {
            self.name = meta.name;
            self.description = meta.description;
        }
        self.colors.extend(parsed.colors);
        for (symbol, style) in parsed.elements {
            self.elements.insert(normalize_symbol(&symbol), style);
        }
        if let Some(fallback) = parsed.fallback {
            self.fallback = fallback;
        }
        self
    }

    /// Style for an element symbol; lookup ignores case and surrounding space
    pub fn element(&self, symbol: &str) -> &ElementStyle {
        self.elements
            .get(&normalize_symbol(symbol))
            .unwrap_or(&self.fallback)
    }

    /// Resolve a named color
    ///
    /// Returns None if the token is not defined in this stylesheet.
    pub fn resolve(&self, token: &str) -> Option<&str> {
        self.colors.get(token).map(|s| s.as_str())
    }

    /// Resolve a named color, falling back to dark gray
    pub fn resolve_or_default(&self, token: &str) -> String {
        self.resolve(token).unwrap_or("#333333").to_string()
    }

    /// Label color readable on top of the given element's fill
    pub fn label_color(&self, symbol: &str) -> String {
        let fill = &self.element(symbol).color;
        match relative_luminance(fill) {
            Some(l) if l < 0.45 => self.resolve_or_default("label-light"),
            _ => self.resolve_or_default("label-dark"),
        }
    }
}

impl Default for Stylesheet {
    fn default() -> Self {
        let parsed = Self::parse(DEFAULT_PALETTE).expect("Default palette should be valid TOML");
        let empty = Stylesheet {
            name: None,
            description: None,
            colors: BTreeMap::new(),
            elements: BTreeMap::new(),
            fallback: ElementStyle {
                color: "#ff1493".to_string(),
                radius: 0.4,
            },
        };
        empty.overlay(parsed)
    }
}

/// "cl" / " CL " -> "Cl"
fn normalize_symbol(symbol: &str) -> String {
    let mut chars = symbol.trim().chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Perceived luminance in [0, 1] of a `#rrggbb` or `#rgb` color
fn relative_luminance(color: &str) -> Option<f64> {
    let hex = color.strip_prefix('#')?;
    let channel = |s: &str| u8::from_str_radix(s, 16).ok().map(|v| v as f64 / 255.0);
    let (r, g, b) = match hex.len() {
        6 => (channel(&hex[0..2])?, channel(&hex[2..4])?, channel(&hex[4..6])?),
        3 => {
            let short = |i: usize| channel(&hex[i..i + 1]).map(|v| v * 17.0);
            (short(0)?, short(1)?, short(2)?)
        }
        _ => return None,
    };
    Some(0.299 * r + 0.587 * g + 0.114 * b)
}
