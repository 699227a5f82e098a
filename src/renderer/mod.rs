//! SVG renderers for layout results and 3D scenes
//!
//! [`render_svg`] draws the planar diagram; [`render_scene_svg`] draws an
//! orthographic snapshot of the spatial scene. Both share [`SvgBuilder`].

pub mod config;
pub mod projection;
pub mod svg;

pub use config::SvgConfig;
pub use projection::render_scene_svg;
pub use svg::{render_svg, SvgBuilder};
