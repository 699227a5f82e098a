//! Normalization of raw planar coordinates into a padded view frame

use crate::molecule::Molecule;

use super::config::LayoutConfig;
use super::types::{BondLayout, BoundingBox, LayoutResult, NormalizedAtom, Point};

/// Mean raw 2D length over all bonds, or 1.0 when there are none
pub fn mean_bond_length(molecule: &Molecule) -> f64 {
    let lengths: Vec<f64> = molecule
        .bonds
        .iter()
        .filter_map(|bond| molecule.bond_endpoints(bond))
        .map(|(a, b)| a.position_2d.distance(b.position_2d))
        .collect();

    if lengths.is_empty() {
        return 1.0;
    }
    lengths.iter().sum::<f64>() / lengths.len() as f64
}

/// Uniform scale mapping the mean raw bond length onto the target length
pub fn scale_factor(molecule: &Molecule, config: &LayoutConfig) -> f64 {
    let mean = mean_bond_length(molecule);
    if !mean.is_finite() || mean <= config.min_mean_bond_length {
        log::debug!(
            "mean bond length {} too small; using default scale {}",
            mean,
            config.default_scale
        );
        return config.default_scale;
    }
    config.target_bond_length / mean
}

/// Largest absolute coordinate a normalized atom may have
///
/// Anything beyond this (including infinities from overflowing raw input) is
/// dropped together with its bonds, so the frame always stays finite.
pub const MAX_COORDINATE: f64 = 1.0e12;

fn within_bounds(p: Point) -> bool {
    p.x.abs() <= MAX_COORDINATE && p.y.abs() <= MAX_COORDINATE
}

/// Compute the planar layout of a molecule
///
/// Every atom is scaled by the same factor so bond angles survive, and the
/// frame is the bounding box of atom centers grown by
/// [`LayoutConfig::frame_padding`] so no decoration is clipped. Atoms whose
/// scaled position exceeds [`MAX_COORDINATE`] are left out.
pub fn compute(molecule: &Molecule, config: &LayoutConfig) -> LayoutResult {
    let padding = config.frame_padding();

    if molecule.atoms.is_empty() {
        return LayoutResult {
            atoms: Vec::new(),
            bonds: Vec::new(),
            frame: BoundingBox::zero().inflate(padding),
            scale: config.default_scale,
        };
    }

    let scale = scale_factor(molecule, config);

    // Position in `atoms` for each molecule atom that survived placement
    let mut placed: Vec<Option<usize>> = Vec::with_capacity(molecule.atoms.len());
    let mut atoms: Vec<NormalizedAtom> = Vec::with_capacity(molecule.atoms.len());
    for atom in &molecule.atoms {
        let position = atom.position_2d * scale;
        if !within_bounds(position) {
            log::warn!(
                "atom {} lands at ({}, {}) after scaling; left out of the layout",
                atom.id,
                position.x,
                position.y
            );
            placed.push(None);
            continue;
        }
        placed.push(Some(atoms.len()));
        atoms.push(NormalizedAtom {
            id: atom.id,
            element: atom.element.clone(),
            position,
            lone_pairs: atom.lone_pairs,
            charge: atom.charge,
        });
    }

    let bonds = molecule
        .bonds
        .iter()
        .filter_map(|bond| {
            Some(BondLayout {
                source: (*placed.get(bond.source)?)?,
                target: (*placed.get(bond.target)?)?,
                order: bond.order,
            })
        })
        .collect();

    let frame = BoundingBox::from_points(atoms.iter().map(|a| a.position))
        .unwrap_or_default()
        .inflate(padding);

    log::debug!(
        "laid out {} atoms at scale {:.3}; frame {:.1}x{:.1}",
        atoms.len(),
        scale,
        frame.width,
        frame.height
    );

    LayoutResult {
        atoms,
        bonds,
        frame,
        scale,
    }
}
