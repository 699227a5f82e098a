//! Per-atom decorations: lone-pair markers and charge badges

use std::f64::consts::{FRAC_PI_2, TAU};

use super::config::LayoutConfig;
use super::types::{ChargeBadge, ChargeSign, LonePairMarker, Point};

/// Lone-pair markers evenly spaced around an atom, the first pointing up
///
/// Each marker is a pair of dots placed perpendicular to its radial direction.
pub fn lone_pair_markers(center: Point, count: u32, config: &LayoutConfig) -> Vec<LonePairMarker> {
    if count == 0 {
        return Vec::new();
    }
    let step = TAU / count as f64;

    (0..count)
        .map(|i| {
            let angle = -FRAC_PI_2 + step * i as f64;
            let (sin, cos) = angle.sin_cos();
            let radial = Point::new(cos, sin);
            let across = Point::new(-sin, cos) * config.lone_pair_dot_spacing;
            let anchor = center + radial * config.lone_pair_distance;
            LonePairMarker {
                angle,
                center: anchor,
                dots: [anchor + across, anchor - across],
            }
        })
        .collect()
}

/// Badge at the atom's top-right corner showing the sign of a nonzero charge
pub fn charge_badge(center: Point, charge: i32, config: &LayoutConfig) -> Option<ChargeBadge> {
    let sign = match charge.signum() {
        1 => ChargeSign::Positive,
        -1 => ChargeSign::Negative,
        _ => return None,
    };
    Some(ChargeBadge {
        center: center + Point::new(config.charge_offset, -config.charge_offset),
        radius: config.charge_radius,
        sign,
    })
}
