//! Turntable rotation state for the 3D view
//!
//! The render loop owns a [`Spin`] and advances it once per frame with the
//! elapsed time; the resulting orientation is fed into the next
//! [`build_scene`](super::build_scene). Geometry derivation never reads it.

use std::f32::consts::TAU;
use std::time::Duration;

use glam::Quat;

/// Constant-rate rotation about the vertical (Y) axis
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spin {
    rate: f32,
    angle: f32,
    paused: bool,
}

impl Spin {
    /// A spin turning at `rate` radians per second, starting at angle zero
    pub fn new(rate: f32) -> Self {
        Self {
            rate,
            angle: 0.0,
            paused: false,
        }
    }

    /// A fixed orientation that never advances
    pub fn stopped() -> Self {
        Self::new(0.0)
    }

    /// Start from a given angle in radians
    pub fn with_angle(mut self, angle: f32) -> Self {
        self.angle = angle.rem_euclid(TAU);
        self
    }

    /// Advance by `rate × elapsed`; a paused spin does not move
    pub fn advance(&mut self, elapsed: Duration) {
        if self.paused {
            return;
        }
        self.angle = (self.angle + self.rate * elapsed.as_secs_f32()).rem_euclid(TAU);
    }

    pub fn pause(&mut self) {
        self.paused = true;
    }

    pub fn resume(&mut self) {
        self.paused = false;
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Current angle in [0, 2π)
    pub fn angle(&self) -> f32 {
        self.angle
    }

    pub fn orientation(&self) -> Quat {
        Quat::from_rotation_y(self.angle)
    }
}

impl Default for Spin {
    fn default() -> Self {
        Self::stopped()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-5;

    #[test]
    fn test_advance_by_rate_times_elapsed() {
        let mut spin = Spin::new(0.5);
        spin.advance(Duration::from_secs(2));
        assert!((spin.angle() - 1.0).abs() < EPS);
        spin.advance(Duration::from_millis(500));
        assert!((spin.angle() - 1.25).abs() < EPS);
    }

    #[test]
    fn test_angle_wraps() {
        let mut spin = Spin::new(TAU);
        spin.advance(Duration::from_millis(1250));
        assert!((spin.angle() - TAU * 0.25).abs() < 1e-4);
        assert!(Spin::stopped().with_angle(-1.0).angle() >= 0.0);
    }

    #[test]
    fn test_paused_spin_holds_angle() {
        let mut spin = Spin::new(1.0);
        spin.pause();
        spin.advance(Duration::from_secs(3));
        assert_eq!(spin.angle(), 0.0);
        assert!(spin.is_paused());
        spin.resume();
        spin.advance(Duration::from_secs(1));
        assert!((spin.angle() - 1.0).abs() < EPS);
    }

    #[test]
    fn test_orientation_turns_about_vertical() {
        let spin = Spin::stopped().with_angle(std::f32::consts::PI);
        let turned = spin.orientation() * glam::Vec3::X;
        assert!(turned.abs_diff_eq(glam::Vec3::NEG_X, EPS));
        assert!((spin.orientation() * glam::Vec3::Y).abs_diff_eq(glam::Vec3::Y, EPS));
    }
}
