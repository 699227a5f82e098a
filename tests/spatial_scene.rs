//! Integration tests for the 3D bond engine and scene tree

use std::fs;
use std::time::Duration;

use glam::Vec3;
use molscene::molecule::{parse, BondOrder, Molecule};
use molscene::spatial::{
    bond_geometry, build_scene, Primitive, SpatialConfig, Spin, CANONICAL_AXIS, REFERENCE_AXIS,
};
use molscene::Stylesheet;
use pretty_assertions::assert_eq;

const EPS: f32 = 1e-4;

fn fixture(name: &str) -> Molecule {
    let path = format!("{}/tests/fixtures/{}", env!("CARGO_MANIFEST_DIR"), name);
    let source = fs::read_to_string(&path).expect("fixture should exist");
    parse(&source).expect("fixture should parse")
}

#[test]
fn test_triple_bond_scenario() {
    let config = SpatialConfig::default();
    let start = Vec3::new(0.0, 0.0, 0.0);
    let end = Vec3::new(1.5, 0.0, 0.0);
    let strands = bond_geometry(start, end, BondOrder::Triple, &config);

    assert_eq!(strands.len(), 3);
    let midpoint = Vec3::new(0.75, 0.0, 0.0);
    for strand in &strands {
        assert!((strand.length - 1.5).abs() < EPS);
        let axis = strand.orientation * CANONICAL_AXIS;
        assert!(axis.abs().abs_diff_eq(Vec3::X, EPS));
        // Offsets stay perpendicular to the bond
        assert!((strand.position - midpoint).dot(Vec3::X).abs() < EPS);
    }
    assert!(strands[1].position.abs_diff_eq(midpoint, EPS));
    let spread = strands[0].position - strands[2].position;
    assert!((spread.length() - 2.0 * config.lateral_offset).abs() < EPS);
}

#[test]
fn test_strand_counts_follow_bond_order() {
    let config = SpatialConfig::default();
    let a = Vec3::new(0.2, -0.4, 1.0);
    let b = Vec3::new(-0.9, 0.3, 0.1);
    for (order, expected) in [
        (BondOrder::Single, 1),
        (BondOrder::Double, 2),
        (BondOrder::Triple, 3),
    ] {
        let strands = bond_geometry(a, b, order, &config);
        assert_eq!(strands.len(), expected);
        let lateral = strands[0].orientation * REFERENCE_AXIS;
        assert!(lateral.dot((b - a).normalize()).abs() < EPS);
    }
}

#[test]
fn test_coincident_endpoints_yield_no_cylinders() {
    let p = Vec3::new(1.0, 1.0, 1.0);
    assert!(bond_geometry(p, p, BondOrder::Double, &SpatialConfig::default()).is_empty());
}

#[test]
fn test_acetylene_scene_contents() {
    let molecule = fixture("acetylene.json");
    let scene = build_scene(
        &molecule,
        &Stylesheet::default(),
        &SpatialConfig::default(),
        &Spin::stopped(),
    );
    assert_eq!(scene.spheres().len(), 4);
    // 3 strands for C≡C and one per C-H
    assert_eq!(scene.cylinders().len(), 5);
    assert_eq!(scene.formula, "C2H2");
}

#[test]
fn test_scene_is_centred_on_centroid() {
    let molecule = fixture("water.json");
    let scene = build_scene(
        &molecule,
        &Stylesheet::default(),
        &SpatialConfig::default(),
        &Spin::stopped(),
    );
    let spheres = scene.spheres();
    let centroid = spheres.iter().map(|s| s.position).sum::<Vec3>() / spheres.len() as f32;
    assert!(centroid.abs_diff_eq(Vec3::ZERO, EPS));
}

#[test]
fn test_spin_turns_scene_about_vertical_axis() {
    let molecule = fixture("carbonate.json");
    let stylesheet = Stylesheet::default();
    let config = SpatialConfig::default();

    let still = build_scene(&molecule, &stylesheet, &config, &Spin::stopped());
    let mut spin = Spin::new(std::f32::consts::PI);
    spin.advance(Duration::from_millis(500));
    let turned = build_scene(&molecule, &stylesheet, &config, &spin);

    // A quarter turn about +Y maps (x, y, z) to (z, y, -x)
    for (a, b) in still.spheres().iter().zip(turned.spheres()) {
        let expected = Vec3::new(a.position.z, a.position.y, -a.position.x);
        assert!(b.position.abs_diff_eq(expected, EPS), "{:?} vs {:?}", b.position, expected);
    }
}

#[test]
fn test_paused_spin_keeps_angle() {
    let mut spin = Spin::new(1.0);
    spin.advance(Duration::from_secs(1));
    spin.pause();
    spin.advance(Duration::from_secs(10));
    assert!((spin.angle() - 1.0).abs() < EPS);
    spin.resume();
    spin.advance(Duration::from_secs(1));
    assert!((spin.angle() - 2.0).abs() < EPS);
}

#[test]
fn test_messy_scene_skips_unresolved_bonds() {
    let molecule = fixture("ammonium_messy.json");
    let scene = build_scene(
        &molecule,
        &Stylesheet::default(),
        &SpatialConfig::default(),
        &Spin::stopped(),
    );
    let kinds: Vec<&str> = scene
        .primitives()
        .iter()
        .map(|p| match p {
            Primitive::Sphere(_) => "sphere",
            Primitive::Cylinder(_) => "cylinder",
        })
        .collect();
    assert_eq!(
        kinds,
        vec!["cylinder", "cylinder", "cylinder", "sphere", "sphere", "sphere", "sphere"]
    );
}
