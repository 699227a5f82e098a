//! Oriented cylinder geometry for 3D bonds

use glam::{Quat, Vec3};
use serde::Serialize;

use crate::molecule::BondOrder;

use super::config::SpatialConfig;

/// Axis along which a unit cylinder is authored
pub const CANONICAL_AXIS: Vec3 = Vec3::Y;

/// Axis that, once rotated by the bond orientation, gives the strand offset direction
pub const REFERENCE_AXIS: Vec3 = Vec3::X;

/// A cylinder ready to be instantiated by a renderer
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CylinderPlacement {
    /// Center of the cylinder
    pub position: Vec3,
    /// Rotation taking [`CANONICAL_AXIS`] onto the bond direction
    pub orientation: Quat,
    pub length: f32,
    pub radius: f32,
}

impl CylinderPlacement {
    /// The two end-cap centers
    pub fn ends(&self) -> (Vec3, Vec3) {
        let half = self.orientation * CANONICAL_AXIS * (self.length * 0.5);
        (self.position - half, self.position + half)
    }
}

/// Rotation mapping [`CANONICAL_AXIS`] onto a unit direction
pub fn bond_orientation(direction: Vec3) -> Quat {
    Quat::from_rotation_arc(CANONICAL_AXIS, direction)
}

/// Cylinders for one bond
///
/// All strands share the bond's orientation and length; double bonds are
/// offset to both sides of the axis, triple bonds add a strand on the axis.
/// A bond too short to have a direction yields nothing.
pub fn bond_geometry(
    start: Vec3,
    end: Vec3,
    order: BondOrder,
    config: &SpatialConfig,
) -> Vec<CylinderPlacement> {
    let direction = end - start;
    let length = direction.length();
    // Written so a NaN length also bails out
    if !(length > config.min_bond_length) || !length.is_finite() {
        return Vec::new();
    }

    let orientation = bond_orientation(direction / length);
    let midpoint = (start + end) * 0.5;
    let lateral = orientation * REFERENCE_AXIS * config.lateral_offset;
    let radius = match order {
        BondOrder::Single => config.bond_radius,
        BondOrder::Double | BondOrder::Triple => config.bond_radius * config.strand_radius_scale,
    };

    let strand = |offset: Vec3| CylinderPlacement {
        position: midpoint + offset,
        orientation,
        length,
        radius,
    };

    match order {
        BondOrder::Single => vec![strand(Vec3::ZERO)],
        BondOrder::Double => vec![strand(lateral), strand(-lateral)],
        BondOrder::Triple => vec![strand(lateral), strand(Vec3::ZERO), strand(-lateral)],
    }
}
