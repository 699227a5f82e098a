//! Molecule records and their validated, id-indexed form
//!
//! Records arrive as JSON from an external provider. Bond endpoints name atom
//! ids, which are resolved through an explicit lookup table rather than by
//! trusting that `atoms[i].id == i`. Anything that cannot be resolved is
//! skipped and reported as a [`DataWarning`]; nothing here is fatal.

pub mod record;

use std::collections::HashMap;
use std::fmt;

use glam::Vec3;
use serde::Serialize;
use thiserror::Error;

use crate::error::ParseError;
use crate::layout::Point;

pub use record::{AtomRecord, BondRecord, MoleculeRecord};

/// Identifier of an atom, unique within a molecule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct AtomId(pub u32);

impl fmt::Display for AtomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Number of shared electron pairs in a bond
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BondOrder {
    Single,
    Double,
    Triple,
}

impl BondOrder {
    /// Number of parallel strands drawn for this order
    pub fn count(self) -> usize {
        match self {
            BondOrder::Single => 1,
            BondOrder::Double => 2,
            BondOrder::Triple => 3,
        }
    }
}

impl TryFrom<f64> for BondOrder {
    type Error = f64;

    /// Only the integral values 1, 2 and 3 are bond orders
    fn try_from(value: f64) -> Result<Self, Self::Error> {
        if value.fract() != 0.0 || !value.is_finite() {
            return Err(value);
        }
        BondOrder::try_from(value as i64).map_err(|_| value)
    }
}

impl TryFrom<i64> for BondOrder {
    type Error = i64;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(BondOrder::Single),
            2 => Ok(BondOrder::Double),
            3 => Ok(BondOrder::Triple),
            other => Err(other),
        }
    }
}

/// Data-quality problems found while resolving a record
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DataWarning {
    #[error("atom #{index} has invalid id {id}; skipped")]
    InvalidAtomId { index: usize, id: i64 },

    #[error("atom #{index} reuses id {id}; skipped")]
    DuplicateAtomId { index: usize, id: AtomId },

    #[error("bond #{index} references unknown atom id {id}; skipped")]
    UnknownAtomId { index: usize, id: i64 },

    #[error("bond #{index} has unsupported order {order}; skipped")]
    UnsupportedBondOrder { index: usize, order: f64 },
}

/// A validated atom
#[derive(Debug, Clone, PartialEq)]
pub struct Atom {
    pub id: AtomId,
    pub element: String,
    pub position_2d: Point,
    pub position_3d: Vec3,
    pub lone_pairs: u32,
    pub charge: i32,
}

/// A validated bond; endpoints are indices into [`Molecule::atoms`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bond {
    pub source: usize,
    pub target: usize,
    pub order: BondOrder,
}

/// A molecule whose bonds all resolve to atoms
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Molecule {
    pub formula: String,
    pub name: String,
    pub description: String,
    pub geometry: String,
    pub hybridization: String,
    pub resonance: String,
    pub atoms: Vec<Atom>,
    pub bonds: Vec<Bond>,
    pub warnings: Vec<DataWarning>,
}

impl Molecule {
    /// Resolve a raw record, skipping anything that does not resolve
    pub fn from_record(record: MoleculeRecord) -> Self {
        let mut warnings = Vec::new();
        let mut index_of: HashMap<AtomId, usize> = HashMap::new();
        let mut atoms = Vec::with_capacity(record.atoms.len());

        for (index, raw) in record.atoms.into_iter().enumerate() {
            let Ok(id) = u32::try_from(raw.id).map(AtomId) else {
                warnings.push(DataWarning::InvalidAtomId { index, id: raw.id });
                continue;
            };
            if index_of.contains_key(&id) {
                warnings.push(DataWarning::DuplicateAtomId { index, id });
                continue;
            }
            index_of.insert(id, atoms.len());
            atoms.push(Atom {
                id,
                element: raw.element,
                position_2d: Point::new(raw.x2d, raw.y2d),
                position_3d: Vec3::new(raw.x3d, raw.y3d, raw.z3d),
                lone_pairs: raw.lone_pairs,
                charge: raw.charge,
            });
        }

        let mut bonds = Vec::with_capacity(record.bonds.len());
        for (index, raw) in record.bonds.iter().enumerate() {
            let order = match BondOrder::try_from(raw.order) {
                Ok(order) => order,
                Err(order) => {
                    warnings.push(DataWarning::UnsupportedBondOrder { index, order });
                    continue;
                }
            };
            let lookup = |id: i64| {
                u32::try_from(id)
                    .ok()
                    .and_then(|id| index_of.get(&AtomId(id)).copied())
                    .ok_or(DataWarning::UnknownAtomId { index, id })
            };
            match (lookup(raw.source), lookup(raw.target)) {
                (Ok(source), Ok(target)) => bonds.push(Bond {
                    source,
                    target,
                    order,
                }),
                (Err(warning), _) | (_, Err(warning)) => warnings.push(warning),
            }
        }

        for warning in &warnings {
            log::warn!("{}: {}", record.formula, warning);
        }

        Molecule {
            formula: record.formula,
            name: record.name,
            description: record.description,
            geometry: record.molecular_geometry,
            hybridization: record.hybridization,
            resonance: record.resonance_info,
            atoms,
            bonds,
            warnings,
        }
    }

    /// Both endpoint atoms of a bond, if the indices are in range
    pub fn bond_endpoints(&self, bond: &Bond) -> Option<(&Atom, &Atom)> {
        Some((self.atoms.get(bond.source)?, self.atoms.get(bond.target)?))
    }

    /// Mean 3D position of all atoms
    pub fn centroid_3d(&self) -> Vec3 {
        if self.atoms.is_empty() {
            return Vec3::ZERO;
        }
        let sum: Vec3 = self.atoms.iter().map(|a| a.position_3d).sum();
        sum / self.atoms.len() as f32
    }

    /// Whether every atom and bond in the record was usable
    pub fn is_clean(&self) -> bool {
        self.warnings.is_empty()
    }
}

/// Parse a JSON molecule record and resolve it
pub fn parse(source: &str) -> Result<Molecule, ParseError> {
    let record: MoleculeRecord =
        serde_json::from_str(source).map_err(|e| ParseError::from_json(&e, source))?;
    log::debug!(
        "parsed '{}' ({}): {} atoms, {} bonds",
        record.name,
        record.formula,
        record.atoms.len(),
        record.bonds.len()
    );
    Ok(Molecule::from_record(record))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn atom(id: i64, element: &str) -> AtomRecord {
        AtomRecord {
            id,
            element: element.to_string(),
            x2d: id as f64,
            y2d: 0.0,
            x3d: id as f32,
            y3d: 0.0,
            z3d: 0.0,
            lone_pairs: 0,
            charge: 0,
        }
    }

    fn record(atoms: Vec<AtomRecord>, bonds: Vec<BondRecord>) -> MoleculeRecord {
        MoleculeRecord {
            formula: "X".to_string(),
            name: "test".to_string(),
            description: String::new(),
            molecular_geometry: "linear".to_string(),
            hybridization: String::new(),
            resonance_info: String::new(),
            atoms,
            bonds,
        }
    }

    fn bond(source: i64, target: i64, order: f64) -> BondRecord {
        BondRecord {
            source,
            target,
            order,
        }
    }

    #[test]
    fn test_bond_order_conversion() {
        assert_eq!(BondOrder::try_from(1_i64), Ok(BondOrder::Single));
        assert_eq!(BondOrder::try_from(3_i64), Ok(BondOrder::Triple));
        assert_eq!(BondOrder::try_from(4_i64), Err(4));
        assert_eq!(BondOrder::try_from(0_i64), Err(0));
    }

    #[test]
    fn test_bond_order_snapshot() {
        insta::assert_debug_snapshot!(BondOrder::try_from(2_i64), @r"
        Ok(
            Double,
        )
        ");
    }

    #[test]
    fn test_bonds_resolve_by_id_not_position() {
        // Atoms listed out of id order
        let rec = record(vec![atom(7, "O"), atom(3, "H")], vec![bond(3, 7, 1.0)]);
        let mol = Molecule::from_record(rec);
        assert!(mol.is_clean());
        assert_eq!(mol.bonds.len(), 1);
        assert_eq!(mol.atoms[mol.bonds[0].source].element, "H");
        assert_eq!(mol.atoms[mol.bonds[0].target].element, "O");
    }

    #[test]
    fn test_unknown_atom_id_skips_bond() {
        let rec = record(vec![atom(0, "O"), atom(1, "H")], vec![bond(0, 5, 1.0)]);
        let mol = Molecule::from_record(rec);
        assert!(mol.bonds.is_empty());
        assert_eq!(
            mol.warnings,
            vec![DataWarning::UnknownAtomId { index: 0, id: 5 }]
        );
    }

    #[test]
    fn test_unsupported_order_skips_bond() {
        let rec = record(
            vec![atom(0, "C"), atom(1, "C")],
            vec![bond(0, 1, 4.0), bond(0, 1, 2.0)],
        );
        let mol = Molecule::from_record(rec);
        assert_eq!(mol.bonds.len(), 1);
        assert_eq!(mol.bonds[0].order, BondOrder::Double);
        assert_eq!(
            mol.warnings,
            vec![DataWarning::UnsupportedBondOrder {
                index: 0,
                order: 4.0
            }]
        );
    }

    #[test]
    fn test_fractional_order_skips_only_that_bond() {
        let json = r#"{
            "formula": "C3", "name": "aromatic fragment", "molecularGeometry": "",
            "atoms": [{"id": 0, "element": "C"}, {"id": 1, "element": "C", "x2d": 1},
                      {"id": 2, "element": "C", "x2d": 2}],
            "bonds": [{"source": 0, "target": 1, "order": 1.5},
                      {"source": 1, "target": 2, "order": 1}]
        }"#;
        let mol = parse(json).unwrap();
        assert_eq!(
            mol.bonds,
            vec![Bond {
                source: 1,
                target: 2,
                order: BondOrder::Single
            }]
        );
        assert_eq!(
            mol.warnings,
            vec![DataWarning::UnsupportedBondOrder {
                index: 0,
                order: 1.5
            }]
        );
    }

    #[test]
    fn test_negative_endpoint_skips_only_that_bond() {
        let json = r#"{
            "formula": "CO", "name": "fragment", "molecularGeometry": "",
            "atoms": [{"id": 0, "element": "C"}, {"id": 1, "element": "O", "x2d": 1}],
            "bonds": [{"source": 0, "target": -1, "order": 1},
                      {"source": 0, "target": 1, "order": 2}]
        }"#;
        let mol = parse(json).unwrap();
        assert_eq!(mol.bonds.len(), 1);
        assert_eq!(mol.bonds[0].order, BondOrder::Double);
        assert_eq!(
            mol.warnings,
            vec![DataWarning::UnknownAtomId { index: 0, id: -1 }]
        );
    }

    #[test]
    fn test_oversized_endpoint_is_unknown() {
        let too_big = i64::from(u32::MAX) + 1;
        let rec = record(
            vec![atom(0, "C"), atom(1, "C")],
            vec![bond(0, too_big, 1.0)],
        );
        let mol = Molecule::from_record(rec);
        assert!(mol.bonds.is_empty());
        assert_eq!(
            mol.warnings,
            vec![DataWarning::UnknownAtomId {
                index: 0,
                id: too_big
            }]
        );
    }

    #[test]
    fn test_negative_atom_id_skips_atom() {
        let rec = record(vec![atom(-3, "N"), atom(0, "H")], vec![]);
        let mol = Molecule::from_record(rec);
        assert_eq!(mol.atoms.len(), 1);
        assert_eq!(mol.atoms[0].id, AtomId(0));
        assert_eq!(
            mol.warnings,
            vec![DataWarning::InvalidAtomId { index: 0, id: -3 }]
        );
    }

    #[test]
    fn test_bond_order_from_float() {
        assert_eq!(BondOrder::try_from(2.0), Ok(BondOrder::Double));
        assert_eq!(BondOrder::try_from(1.5), Err(1.5));
        assert_eq!(BondOrder::try_from(4.0), Err(4.0));
        assert!(BondOrder::try_from(f64::NAN).is_err());
    }

    #[test]
    fn test_duplicate_atom_id_skipped() {
        let rec = record(vec![atom(0, "C"), atom(0, "N")], vec![]);
        let mol = Molecule::from_record(rec);
        assert_eq!(mol.atoms.len(), 1);
        assert_eq!(mol.atoms[0].element, "C");
        assert_eq!(mol.warnings.len(), 1);
    }

    #[test]
    fn test_centroid() {
        let mol = Molecule::from_record(record(vec![atom(0, "H"), atom(2, "H")], vec![]));
        assert_eq!(mol.centroid_3d(), Vec3::new(1.0, 0.0, 0.0));
        assert_eq!(Molecule::default().centroid_3d(), Vec3::ZERO);
    }

    #[test]
    fn test_parse_reports_malformed_json() {
        let result = parse("{\"formula\": \"H2\",");
        assert!(result.is_err());
    }

    #[test]
    fn test_warning_display() {
        let warning = DataWarning::UnknownAtomId {
            index: 2,
            id: 9,
        };
        assert_eq!(
            warning.to_string(),
            "bond #2 references unknown atom id 9; skipped"
        );
    }
}
