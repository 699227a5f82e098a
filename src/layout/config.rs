//! Configuration for the planar layout engine

use serde::Deserialize;

/// Smallest gap kept between decorations and the frame edge
pub const MIN_FRAME_MARGIN: f64 = 0.5;

/// Configuration options for layout computation
///
/// All lengths are in output (SVG user) units except `min_mean_bond_length`,
/// which is compared against raw input coordinates.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Mean rendered bond length after normalization
    pub target_bond_length: f64,

    /// Scale used when the raw mean bond length is too small to divide by
    pub default_scale: f64,

    /// Raw mean bond lengths at or below this fall back to `default_scale`
    pub min_mean_bond_length: f64,

    /// Radius of the atom circle
    pub atom_radius: f64,

    /// Distance from the atom center to each lone-pair marker
    pub lone_pair_distance: f64,

    /// Half the gap between the two dots of a lone pair
    pub lone_pair_dot_spacing: f64,

    /// Radius of a single lone-pair dot
    pub lone_pair_dot_radius: f64,

    /// Diagonal offset of the charge badge from the atom center (per axis)
    pub charge_offset: f64,

    /// Radius of the charge badge
    pub charge_radius: f64,

    /// Perpendicular offset of each strand of a double bond
    pub bond_offset: f64,

    /// Multiplier applied to `bond_offset` for the outer strands of a triple bond
    pub triple_offset_scale: f64,

    /// Extra space between the outermost decoration and the frame edge
    ///
    /// Values below [`MIN_FRAME_MARGIN`] are raised to it, so decorations
    /// never touch the frame edge.
    pub frame_margin: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            target_bond_length: 60.0,
            default_scale: 50.0,
            min_mean_bond_length: 1e-6,
            atom_radius: 14.0,
            lone_pair_distance: 22.0,
            lone_pair_dot_spacing: 4.0,
            lone_pair_dot_radius: 2.0,
            charge_offset: 12.0,
            charge_radius: 6.0,
            bond_offset: 4.0,
            triple_offset_scale: 1.5,
            frame_margin: 8.0,
        }
    }
}

impl LayoutConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the target bond length
    pub fn with_target_bond_length(mut self, length: f64) -> Self {
        self.target_bond_length = length;
        self
    }

    /// Set the atom circle radius
    pub fn with_atom_radius(mut self, radius: f64) -> Self {
        self.atom_radius = radius;
        self
    }

    /// Set the double-bond strand offset
    pub fn with_bond_offset(mut self, offset: f64) -> Self {
        self.bond_offset = offset;
        self
    }

    /// Set the frame margin
    pub fn with_frame_margin(mut self, margin: f64) -> Self {
        self.frame_margin = margin;
        self
    }

    /// Farthest extent of any lone-pair dot from the atom center
    pub fn lone_pair_extent(&self) -> f64 {
        self.lone_pair_distance.hypot(self.lone_pair_dot_spacing) + self.lone_pair_dot_radius
    }

    /// Farthest extent of the charge badge from the atom center
    pub fn charge_extent(&self) -> f64 {
        self.charge_offset * std::f64::consts::SQRT_2 + self.charge_radius
    }

    /// Largest distance any per-atom decoration reaches from the atom center
    pub fn decoration_radius(&self) -> f64 {
        self.atom_radius
            .max(self.lone_pair_extent())
            .max(self.charge_extent())
    }

    /// Padding added around the bounding box of atom centers
    pub fn frame_padding(&self) -> f64 {
        self.decoration_radius() + self.frame_margin.max(MIN_FRAME_MARGIN)
    }
}
