//! Spatial bond engine and 3D scene construction
//!
//! Atoms become spheres at their raw 3D positions; each bond becomes one to
//! three oriented cylinders (see [`bond_geometry`]). The molecule is wrapped
//! in a recentring group inside a spinning root group, so a renderer can turn
//! it about its own vertical axis.

pub mod bond;
pub mod config;
pub mod scene;
pub mod spin;

pub use bond::{bond_geometry, bond_orientation, CylinderPlacement, CANONICAL_AXIS, REFERENCE_AXIS};
pub use config::SpatialConfig;
pub use scene::{CylinderNode, Primitive, SceneNode, SpatialScene, SpherePlacement, Transform};
pub use spin::Spin;

use crate::molecule::Molecule;
use crate::stylesheet::Stylesheet;

/// Build the 3D scene for a molecule at the given spin
pub fn build_scene(
    molecule: &Molecule,
    stylesheet: &Stylesheet,
    config: &SpatialConfig,
    spin: &Spin,
) -> SpatialScene {
    let bond_color = stylesheet.resolve_or_default("bond");
    let mut children = Vec::with_capacity(molecule.atoms.len() + molecule.bonds.len());

    for bond in &molecule.bonds {
        let Some((a, b)) = molecule.bond_endpoints(bond) else {
            continue;
        };
        let strands = bond_geometry(a.position_3d, b.position_3d, bond.order, config);
        if strands.is_empty() {
            log::debug!("bond {}-{} has no length; not drawn", a.id, b.id);
        }
        children.extend(strands.into_iter().map(|placement| {
            SceneNode::Cylinder(CylinderNode {
                placement,
                color: bond_color.clone(),
            })
        }));
    }

    for atom in &molecule.atoms {
        let style = stylesheet.element(&atom.element);
        children.push(SceneNode::Sphere(SpherePlacement {
            atom: atom.id,
            element: atom.element.clone(),
            position: atom.position_3d,
            radius: style.radius * config.atom_scale,
            color: style.color.clone(),
        }));
    }

    let recentred = SceneNode::Group {
        transform: Transform::from_translation(-molecule.centroid_3d()),
        children,
    };

    SpatialScene {
        name: molecule.name.clone(),
        formula: molecule.formula.clone(),
        root: SceneNode::Group {
            transform: Transform::from_rotation(spin.orientation()),
            children: vec![recentred],
        },
    }
}
