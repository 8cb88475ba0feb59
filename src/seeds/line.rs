//! The rotating partition line
//!
//! The line is a finite segment through a fixed center, described by an
//! angle. Classification is a sign test against the line's unit normal;
//! collision testing measures point distance to the finite segment, so
//! seeds beyond the tips are out of reach even when they straddle the
//! infinite line.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::consts::LINE_HALF_LENGTH;
use crate::{normalize_angle, polar_to_cartesian};

/// Which half-plane a seed falls in. The labels are arbitrary; what
/// matters is that the same sign rule is applied to every seed, every
/// frame, and once more at lock time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    Left,
    Right,
}

/// A finite dividing segment through `center` at angle `theta`.
///
/// The previous frame's angle is retained so a rotation step can tell a
/// sweeping line from a stationary one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PartitionLine {
    center: Vec2,
    theta: f32,
    theta_prev: f32,
    half_len: f32,
}

impl PartitionLine {
    pub fn new(center: Vec2, theta: f32) -> Self {
        Self {
            center,
            theta,
            theta_prev: theta,
            half_len: LINE_HALF_LENGTH,
        }
    }

    /// Rounds open with the line at a uniformly random orientation.
    pub fn with_random_angle(center: Vec2, rng: &mut impl Rng) -> Self {
        Self::new(center, rng.random_range(0.0..std::f32::consts::TAU))
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.center
    }

    #[inline]
    pub fn theta(&self) -> f32 {
        self.theta
    }

    /// Push this frame's angle; the old angle becomes the sweep origin.
    pub fn rotate_to(&mut self, theta: f32) {
        self.theta_prev = self.theta;
        self.theta = theta;
    }

    /// This frame's angular travel, wrapped so a crossing of ±π does not
    /// read as a full turn.
    #[inline]
    pub fn sweep_delta(&self) -> f32 {
        normalize_angle(self.theta - self.theta_prev)
    }

    /// Unit normal of the line: the direction 90° counter-clockwise from
    /// the segment.
    #[inline]
    pub fn normal(&self) -> Vec2 {
        let n = self.theta + std::f32::consts::FRAC_PI_2;
        Vec2::new(n.cos(), n.sin())
    }

    /// The two segment tips, `half_len` out from the center both ways.
    pub fn endpoints(&self) -> (Vec2, Vec2) {
        let tip = polar_to_cartesian(self.half_len, self.theta);
        (self.center - tip, self.center + tip)
    }

    /// Which side of the line `pos` falls on: positive dot product with
    /// the normal is Left, everything else Right.
    pub fn classify(&self, pos: Vec2) -> Side {
        let d = pos - self.center;
        if d.dot(self.normal()) > 0.0 {
            Side::Left
        } else {
            Side::Right
        }
    }

    /// Distance from `p` to the finite segment: project onto the segment,
    /// clamp the parameter to [0, 1], measure to the clamped point.
    pub fn distance_to_segment(&self, p: Vec2) -> f32 {
        let (a, b) = self.endpoints();
        let ab = b - a;
        let len_sq = ab.length_squared();
        if len_sq < f32::EPSILON {
            return (p - a).length();
        }
        let t = ((p - a).dot(ab) / len_sq).clamp(0.0, 1.0);
        (p - (a + ab * t)).length()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::{FRAC_PI_2, PI};

    #[test]
    fn test_classify_against_horizontal_line() {
        // theta = 0: the line runs along +x, normal points along +y
        let line = PartitionLine::new(Vec2::ZERO, 0.0);
        assert_eq!(line.classify(Vec2::new(0.0, 10.0)), Side::Left);
        assert_eq!(line.classify(Vec2::new(0.0, -10.0)), Side::Right);
        // Exactly on the line: non-positive dot lands Right
        assert_eq!(line.classify(Vec2::new(25.0, 0.0)), Side::Right);
    }

    #[test]
    fn test_classify_is_idempotent() {
        let line = PartitionLine::new(Vec2::ZERO, 1.234);
        let pos = Vec2::new(57.0, -113.0);
        assert_eq!(line.classify(pos), line.classify(pos));
    }

    #[test]
    fn test_classify_quadrants() {
        // Four seeds at 10°, 100°, 190°, 280° against a 0° line: two per side
        let line = PartitionLine::new(Vec2::ZERO, 0.0);
        let seeds: Vec<Side> = [10.0f32, 100.0, 190.0, 280.0]
            .iter()
            .map(|deg| line.classify(polar_to_cartesian(100.0, deg.to_radians())))
            .collect();
        let left = seeds.iter().filter(|&&s| s == Side::Left).count();
        assert_eq!(left, 2);
        assert_eq!(seeds.len() - left, 2);
    }

    #[test]
    fn test_sweep_delta_wraps() {
        let mut line = PartitionLine::new(Vec2::ZERO, PI - 0.05);
        line.rotate_to(-PI + 0.05);
        // Crossing ±π reads as a small positive sweep, not a full turn
        assert!((line.sweep_delta() - 0.1).abs() < 1e-4);
    }

    #[test]
    fn test_new_line_has_no_sweep() {
        let line = PartitionLine::new(Vec2::ZERO, 2.0);
        assert_eq!(line.sweep_delta(), 0.0);
    }

    #[test]
    fn test_distance_to_segment() {
        let line = PartitionLine::new(Vec2::ZERO, 0.0);
        // Right above the center
        assert!((line.distance_to_segment(Vec2::new(0.0, 40.0)) - 40.0).abs() < 1e-4);
        // Beyond a tip: measured to the tip, not the infinite line
        let beyond = Vec2::new(LINE_HALF_LENGTH + 30.0, 0.0);
        assert!((line.distance_to_segment(beyond) - 30.0).abs() < 1e-3);
        // On the segment
        assert!(line.distance_to_segment(Vec2::new(100.0, 0.0)) < 1e-4);
    }

    #[test]
    fn test_endpoints_straddle_center() {
        let center = Vec2::new(3.0, -2.0);
        let line = PartitionLine::new(center, FRAC_PI_2);
        let (a, b) = line.endpoints();
        assert!((a + b - center * 2.0).length() < 1e-4);
        assert!(((b - a).length() - 2.0 * LINE_HALF_LENGTH).abs() < 1e-3);

        // A centered line's tip sits at the segment radius along theta
        let centered = PartitionLine::new(Vec2::ZERO, 0.75);
        let (_, tip) = centered.endpoints();
        let (r, theta) = crate::cartesian_to_polar(tip);
        assert!((r - LINE_HALF_LENGTH).abs() < 1e-2);
        assert!((theta - 0.75).abs() < 1e-4);
    }
}
