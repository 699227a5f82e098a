//! Molscene - planar and spatial renderings of small molecules
//!
//! This library turns a molecule record (atoms with 2D and 3D positions,
//! bonds with an order) into a normalized, padded planar diagram and an
//! oriented ball-and-stick scene.
//!
//! # Example
//!
//! ```rust
//! let json = r#"{
//!     "formula": "H2", "name": "Hydrogen", "molecularGeometry": "linear",
//!     "atoms": [{"id": 0, "element": "H", "x2d": 0, "y2d": 0},
//!               {"id": 1, "element": "H", "x2d": 1, "y2d": 0}],
//!     "bonds": [{"source": 0, "target": 1, "order": 1}]
//! }"#;
//!
//! let svg = molscene::render(json).unwrap();
//! assert!(svg.contains("<svg"));
//! ```

pub mod config;
pub mod error;
pub mod layout;
pub mod molecule;
pub mod renderer;
pub mod spatial;
pub mod stylesheet;

pub use config::{ConfigError, RenderConfig, ViewOptions};
pub use error::ParseError;
pub use layout::{LayoutConfig, LayoutResult};
pub use molecule::{parse, DataWarning, Molecule};
pub use renderer::{render_scene_svg, render_svg, SvgConfig};
pub use spatial::{build_scene, SpatialConfig, SpatialScene, Spin};
pub use stylesheet::Stylesheet;

use thiserror::Error;

/// Errors that can occur during the render pipeline
#[derive(Debug, Error)]
pub enum RenderError {
    /// The record is not valid JSON or lacks required fields
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    /// Strict mode: parts of the record had to be skipped
    #[error("data errors: {}", format_warnings(.0))]
    Data(Vec<DataWarning>),

    /// The scene could not be serialized
    #[error("failed to encode scene: {0}")]
    Encode(#[from] serde_json::Error),
}

fn format_warnings(warnings: &[DataWarning]) -> String {
    warnings
        .iter()
        .map(|w| w.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

/// Parse and resolve a record, applying the strict-mode policy
pub fn load(source: &str, config: &RenderConfig) -> Result<Molecule, RenderError> {
    let molecule = parse(source)?;
    if config.strict && !molecule.is_clean() {
        return Err(RenderError::Data(molecule.warnings));
    }
    Ok(molecule)
}

/// Render a molecule record to a planar SVG with default configuration
pub fn render(source: &str) -> Result<String, RenderError> {
    render_with_config(source, &RenderConfig::default())
}

/// Render a molecule record to a planar SVG with custom configuration
///
/// # Example
///
/// ```rust
/// use molscene::{render_with_config, LayoutConfig, RenderConfig};
///
/// let config = RenderConfig::new()
///     .with_layout(LayoutConfig::default().with_target_bond_length(40.0));
///
/// let json = r#"{"formula": "He", "name": "Helium", "molecularGeometry": "",
///                "atoms": [{"id": 0, "element": "He"}], "bonds": []}"#;
/// let svg = render_with_config(json, &config).unwrap();
/// assert!(svg.contains("He"));
/// ```
pub fn render_with_config(source: &str, config: &RenderConfig) -> Result<String, RenderError> {
    let molecule = load(source, config)?;
    let result = layout::compute(&molecule, &config.layout);
    Ok(render_svg(&molecule, &result, config))
}

/// Render one frame of the spinning 3D view as SVG
pub fn render_spatial_with_config(
    source: &str,
    config: &RenderConfig,
    spin: &Spin,
) -> Result<String, RenderError> {
    let molecule = load(source, config)?;
    let scene = build_scene(&molecule, &config.stylesheet, &config.spatial, spin);
    log::debug!(
        "scene for {}: {} primitives at angle {:.3}",
        molecule.formula,
        scene.primitives().len(),
        spin.angle()
    );
    Ok(render_scene_svg(&molecule, &scene, config))
}

/// Build the 3D scene description and encode it as JSON
pub fn scene_json(source: &str, config: &RenderConfig, spin: &Spin) -> Result<String, RenderError> {
    let molecule = load(source, config)?;
    let scene = build_scene(&molecule, &config.stylesheet, &config.spatial, spin);
    Ok(serde_json::to_string_pretty(&scene)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    const WATER: &str = r#"{
        "formula": "H2O", "name": "Water", "molecularGeometry": "bent",
        "atoms": [
            {"id": 0, "element": "O", "x2d": 0, "y2d": 0, "z3d": 0.12, "lonePairs": 2},
            {"id": 1, "element": "H", "x2d": 1, "y2d": 0, "x3d": 0.76, "y3d": 0.59},
            {"id": 2, "element": "H", "x2d": -0.5, "y2d": 0.8, "x3d": -0.76, "y3d": 0.59}
        ],
        "bonds": [
            {"source": 0, "target": 1, "order": 1},
            {"source": 0, "target": 2, "order": 1},
            {"source": 0, "target": 9, "order": 1}
        ]
    }"#;

    #[test]
    fn test_render_planar() {
        let svg = render(WATER).unwrap();
        assert!(svg.contains("<svg"));
        assert!(svg.contains("</svg>"));
        assert!(svg.contains("Water"));
    }

    #[test]
    fn test_render_spatial() {
        let svg = render_spatial_with_config(WATER, &RenderConfig::default(), &Spin::new(0.5))
            .unwrap();
        assert!(svg.contains("<svg"));
        assert_eq!(svg.matches(r#"class="mol-atom""#).count(), 3);
    }

    #[test]
    fn test_scene_json() {
        let json = scene_json(WATER, &RenderConfig::default(), &Spin::stopped()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["formula"], "H2O");
        assert_eq!(value["root"]["kind"], "group");
    }

    #[test]
    fn test_strict_mode_rejects_skipped_bond() {
        let config = RenderConfig::default().with_strict(true);
        let err = render_with_config(WATER, &config).unwrap_err();
        assert!(matches!(err, RenderError::Data(ref w) if w.len() == 1));
        assert!(err.to_string().contains("unknown atom id 9"));
    }

    #[test]
    fn test_parse_error() {
        let err = render("not json").unwrap_err();
        assert!(matches!(err, RenderError::Parse(_)));
    }
}
