//! Strand geometry for planar bonds
//!
//! Segments are derived on demand at draw time from the two endpoint
//! centers; nothing here is cached on the layout.

use crate::molecule::BondOrder;

use super::config::LayoutConfig;
use super::types::{LineSegment, Point};

/// Segments drawn for a bond of the given order
///
/// - single: the center line
/// - double: two lines offset by `bond_offset` on either side
/// - triple: the center line plus two lines offset by
///   `bond_offset * triple_offset_scale`
///
/// A bond whose endpoints coincide has no direction and yields no segments.
pub fn bond_segments(
    start: Point,
    end: Point,
    order: BondOrder,
    config: &LayoutConfig,
) -> Vec<LineSegment> {
    let Some(normal) = (end - start).unit_normal() else {
        return Vec::new();
    };
    let shifted = |distance: f64| {
        let delta = normal * distance;
        LineSegment::new(start + delta, end + delta)
    };

    match order {
        BondOrder::Single => vec![LineSegment::new(start, end)],
        BondOrder::Double => vec![shifted(config.bond_offset), shifted(-config.bond_offset)],
        BondOrder::Triple => {
            let offset = config.bond_offset * config.triple_offset_scale;
            vec![shifted(offset), LineSegment::new(start, end), shifted(-offset)]
        }
    }
}
