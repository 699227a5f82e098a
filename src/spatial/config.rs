//! Configuration for the spatial scene builder

use serde::Deserialize;

/// Configuration options for 3D bond and atom geometry
///
/// Lengths are in the units of the record's 3D coordinates.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SpatialConfig {
    /// Radius of a single-bond cylinder
    pub bond_radius: f32,

    /// Radius multiplier for the strands of double and triple bonds
    pub strand_radius_scale: f32,

    /// Distance of the outer strands from the bond axis
    pub lateral_offset: f32,

    /// Multiplier applied to element radii for atom spheres
    pub atom_scale: f32,

    /// Bonds shorter than this have no usable direction and are not emitted
    pub min_bond_length: f32,

    /// Turntable speed in radians per second
    pub spin_rate: f32,
}

impl Default for SpatialConfig {
    fn default() -> Self {
        Self {
            bond_radius: 0.08,
            strand_radius_scale: 0.7,
            lateral_offset: 0.12,
            atom_scale: 1.0,
            min_bond_length: 1e-6,
            spin_rate: 0.5,
        }
    }
}

impl SpatialConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the single-bond radius
    pub fn with_bond_radius(mut self, radius: f32) -> Self {
        self.bond_radius = radius;
        self
    }

    /// Set the lateral offset of multi-bond strands
    pub fn with_lateral_offset(mut self, offset: f32) -> Self {
        self.lateral_offset = offset;
        self
    }

    /// Set the turntable speed
    pub fn with_spin_rate(mut self, rate: f32) -> Self {
        self.spin_rate = rate;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SpatialConfig::default();
        assert_eq!(config.bond_radius, 0.08);
        assert_eq!(config.lateral_offset, 0.12);
        assert_eq!(config.spin_rate, 0.5);
    }

    #[test]
    fn test_builder_pattern() {
        let config = SpatialConfig::new()
            .with_bond_radius(0.1)
            .with_lateral_offset(0.2)
            .with_spin_rate(1.0);
        assert_eq!(config.bond_radius, 0.1);
        assert_eq!(config.lateral_offset, 0.2);
        assert_eq!(config.spin_rate, 1.0);
    }
}
