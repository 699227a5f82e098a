//! Scene description tree for the 3D view
//!
//! A renderer walks the tree, composing each group's local transform with its
//! parent's. [`SceneNode::flatten`] does that walk and returns world-space
//! primitives, which is what the SVG projection and the tests consume.

use glam::{Quat, Vec3};
use serde::Serialize;

use crate::molecule::AtomId;

use super::bond::CylinderPlacement;

/// Rigid transform: rotate, then translate
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Transform {
    pub translation: Vec3,
    pub rotation: Quat,
}

impl Transform {
    pub const IDENTITY: Transform = Transform {
        translation: Vec3::ZERO,
        rotation: Quat::IDENTITY,
    };

    pub fn from_translation(translation: Vec3) -> Self {
        Self {
            translation,
            ..Self::IDENTITY
        }
    }

    pub fn from_rotation(rotation: Quat) -> Self {
        Self {
            rotation,
            ..Self::IDENTITY
        }
    }

    pub fn apply(&self, point: Vec3) -> Vec3 {
        self.rotation * point + self.translation
    }

    /// `self` applied after `child`
    pub fn compose(&self, child: &Transform) -> Transform {
        Transform {
            translation: self.apply(child.translation),
            rotation: self.rotation * child.rotation,
        }
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// An atom sphere
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpherePlacement {
    pub atom: AtomId,
    pub element: String,
    pub position: Vec3,
    pub radius: f32,
    pub color: String,
}

/// A bond strand with its color
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CylinderNode {
    #[serde(flatten)]
    pub placement: CylinderPlacement,
    pub color: String,
}

/// A node in the scene tree
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SceneNode {
    Group {
        transform: Transform,
        children: Vec<SceneNode>,
    },
    Sphere(SpherePlacement),
    Cylinder(CylinderNode),
}

/// A leaf primitive expressed in world space
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    Sphere(SpherePlacement),
    Cylinder(CylinderNode),
}

impl SceneNode {
    /// World-space primitives in tree order
    pub fn flatten(&self) -> Vec<Primitive> {
        let mut out = Vec::new();
        self.collect(&Transform::IDENTITY, &mut out);
        out
    }

    fn collect(&self, parent: &Transform, out: &mut Vec<Primitive>) {
        match self {
            SceneNode::Group {
                transform,
                children,
            } => {
                let world = parent.compose(transform);
                for child in children {
                    child.collect(&world, out);
                }
            }
            SceneNode::Sphere(sphere) => out.push(Primitive::Sphere(SpherePlacement {
                position: parent.apply(sphere.position),
                ..sphere.clone()
            })),
            SceneNode::Cylinder(cylinder) => {
                let local = cylinder.placement;
                out.push(Primitive::Cylinder(CylinderNode {
                    placement: CylinderPlacement {
                        position: parent.apply(local.position),
                        orientation: parent.rotation * local.orientation,
                        ..local
                    },
                    color: cylinder.color.clone(),
                }));
            }
        }
    }
}

/// The complete 3D view of one molecule
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpatialScene {
    pub name: String,
    pub formula: String,
    pub root: SceneNode,
}

impl SpatialScene {
    pub fn primitives(&self) -> Vec<Primitive> {
        self.root.flatten()
    }

    pub fn spheres(&self) -> Vec<SpherePlacement> {
        self.primitives()
            .into_iter()
            .filter_map(|p| match p {
                Primitive::Sphere(s) => Some(s),
                Primitive::Cylinder(_) => None,
            })
            .collect()
    }

    pub fn cylinders(&self) -> Vec<CylinderNode> {
        self.primitives()
            .into_iter()
            .filter_map(|p| match p {
                Primitive::Cylinder(c) => Some(c),
                Primitive::Sphere(_) => None,
            })
            .collect()
    }
}
