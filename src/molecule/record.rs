//! Wire shape of a molecule record as supplied by the data provider

use serde::Deserialize;

/// A complete molecule record
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoleculeRecord {
    pub formula: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub molecular_geometry: String,
    #[serde(default)]
    pub hybridization: String,
    #[serde(default)]
    pub resonance_info: String,
    pub atoms: Vec<AtomRecord>,
    pub bonds: Vec<BondRecord>,
}

/// One atom entry in a record
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AtomRecord {
    pub id: i64,
    pub element: String,
    #[serde(default)]
    pub x2d: f64,
    #[serde(default)]
    pub y2d: f64,
    #[serde(default)]
    pub x3d: f32,
    #[serde(default)]
    pub y3d: f32,
    #[serde(default)]
    pub z3d: f32,
    #[serde(default)]
    pub lone_pairs: u32,
    #[serde(default)]
    pub charge: i32,
}

/// One bond entry; `source` and `target` name atom ids
///
/// Fields are kept wide so that odd values (negative ids, fractional
/// aromatic orders) reach validation instead of failing the whole record.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BondRecord {
    pub source: i64,
    pub target: i64,
    pub order: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_optional_fields_default() {
        let json = r#"{
            "formula": "H2",
            "name": "Hydrogen",
            "molecularGeometry": "linear",
            "atoms": [{"id": 0, "element": "H"}],
            "bonds": []
        }"#;
        let record: MoleculeRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.description, "");
        assert_eq!(record.atoms[0].lone_pairs, 0);
        assert_eq!(record.atoms[0].charge, 0);
        assert_eq!(record.atoms[0].x3d, 0.0);
    }

    #[test]
    fn test_camel_case_fields() {
        let json = r#"{
            "formula": "NH4+",
            "name": "Ammonium",
            "molecularGeometry": "tetrahedral",
            "hybridization": "sp3",
            "resonanceInfo": "none",
            "atoms": [{"id": 0, "element": "N", "lonePairs": 0, "charge": 1}],
            "bonds": []
        }"#;
        let record: MoleculeRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.molecular_geometry, "tetrahedral");
        assert_eq!(record.resonance_info, "none");
        assert_eq!(record.atoms[0].charge, 1);
    }

    #[test]
    fn test_wide_bond_fields_deserialize() {
        let json = r#"{"source": 0, "target": -1, "order": 1.5}"#;
        let bond: BondRecord = serde_json::from_str(json).unwrap();
        assert_eq!(bond.target, -1);
        assert_eq!(bond.order, 1.5);

        let json = r#"{"source": 0, "target": 1, "order": 2}"#;
        let bond: BondRecord = serde_json::from_str(json).unwrap();
        assert_eq!(bond.order, 2.0);
    }

    #[test]
    fn test_missing_required_field_fails() {
        let json = r#"{"formula": "H2", "atoms": [], "bonds": []}"#;
        assert!(serde_json::from_str::<MoleculeRecord>(json).is_err());
    }
}
