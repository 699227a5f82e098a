//! Orthographic SVG snapshot of the 3D scene
//!
//! The camera looks down −Z with +Y up. Primitives are painted back to front
//! by the depth of their center, which is adequate for ball-and-stick scenes.

use glam::Vec3;

use crate::config::RenderConfig;
use crate::layout::{BoundingBox, Point};
use crate::molecule::Molecule;
use crate::spatial::{Primitive, SpatialScene};

use super::svg::{describe, SvgBuilder};

/// Project a world-space point onto the SVG plane (y flipped)
fn project(p: Vec3, scale: f64) -> Point {
    Point::new(p.x as f64 * scale, -(p.y as f64) * scale)
}

fn depth(primitive: &Primitive) -> f32 {
    match primitive {
        Primitive::Sphere(s) => s.position.z,
        Primitive::Cylinder(c) => c.placement.position.z,
    }
}

/// Render one frame of the 3D scene as SVG
pub fn render_scene_svg(molecule: &Molecule, scene: &SpatialScene, config: &RenderConfig) -> String {
    let scale = config.svg.pixels_per_unit;
    let mut builder = SvgBuilder::new(config.svg.clone());
    describe(molecule, &mut builder);

    let mut primitives = scene.primitives();
    primitives.sort_by(|a, b| depth(a).total_cmp(&depth(b)));

    let mut frame: Option<BoundingBox> = None;
    let mut grow = |p: Point, r: f64| {
        let corners = [Point::new(p.x - r, p.y - r), Point::new(p.x + r, p.y + r)];
        for corner in corners {
            frame = Some(match frame {
                Some(bb) => bb.expand_to_include(corner),
                None => BoundingBox::new(corner.x, corner.y, 0.0, 0.0),
            });
        }
    };

    for primitive in &primitives {
        match primitive {
            Primitive::Cylinder(cylinder) => {
                let (a, b) = cylinder.placement.ends();
                let (a, b) = (project(a, scale), project(b, scale));
                let width = cylinder.placement.radius as f64 * 2.0 * scale;
                grow(a, width / 2.0);
                grow(b, width / 2.0);
                builder.add_line(
                    a.x,
                    a.y,
                    b.x,
                    b.y,
                    "bond",
                    &format!(
                        r#" stroke="{}" stroke-width="{}" stroke-linecap="round""#,
                        cylinder.color,
                        super::svg::num(width)
                    ),
                );
            }
            Primitive::Sphere(sphere) => {
                let c = project(sphere.position, scale);
                let r = sphere.radius as f64 * scale;
                grow(c, r);
                builder.add_circle(
                    c.x,
                    c.y,
                    r,
                    "atom",
                    &format!(
                        r#" fill="{}" stroke="{}" stroke-width="1""#,
                        sphere.color,
                        config.stylesheet.resolve_or_default("atom-stroke")
                    ),
                );
            }
        }
    }

    let frame = frame.unwrap_or_default().inflate(config.svg.projection_margin);
    builder.build(frame)
}
