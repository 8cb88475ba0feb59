//! Featherplay - deterministic minigame cores
//!
//! Core modules:
//! - `maze`: Penguin Pursuit: grid maze generation, pathfinding, pursuit rounds
//! - `seeds`: Splitting Seeds: rotating partition line, seed classification
//! - `score`: pure score formulas fed by round data
//!
//! Everything here is pure computation: seeded RNG only, no rendering,
//! no timers, no input devices. A presentation layer mirrors the state
//! these modules return and calls back in with plain inputs (a grid size,
//! a movement request, a rotation angle).

pub mod maze;
pub mod score;
pub mod seeds;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Smallest playable maze (a single cell, all walls intact)
    pub const GRID_MIN_SIZE: usize = 1;
    /// Largest maze the level curve ever asks for
    pub const GRID_MAX_SIZE: usize = 15;

    /// Half-length of the partition line segment, from center to either tip
    pub const LINE_HALF_LENGTH: f32 = 300.0;

    /// A seed within this distance of the line segment counts as struck
    pub const SEED_HIT_RADIUS: f32 = 15.0;
    /// Seeds scatter into the annulus between these radii around the center
    pub const SEED_MIN_RADIUS: f32 = 50.0;
    pub const SEED_MAX_RADIUS: f32 = 280.0;
    /// Minimum center-to-center spacing between scattered seeds
    pub const SEED_SPACING: f32 = 40.0;
    /// Rejection-sampling budget for one scatter
    pub const SEED_PLACEMENT_ATTEMPTS: u32 = 1000;
    /// How far a struck seed is knocked off its rest position
    pub const BOUNCE_DISTANCE: f32 = 8.0;
    /// Angular deltas below this are treated as a stationary line
    pub const MIN_SWEEP_DELTA: f32 = 0.001;

    /// Level cap shared by both minigames
    pub const MAX_LEVEL: u32 = 10;
}

/// Normalized angle to [-π, π)
#[inline]
pub fn normalize_angle(mut angle: f32) -> f32 {
    use std::f32::consts::PI;
    while angle >= PI {
        angle -= 2.0 * PI;
    }
    while angle < -PI {
        angle += 2.0 * PI;
    }
    angle
}

/// Convert polar (r, theta) to cartesian (x, y)
#[inline]
pub fn polar_to_cartesian(r: f32, theta: f32) -> Vec2 {
    Vec2::new(r * theta.cos(), r * theta.sin())
}

/// Convert cartesian (x, y) to polar (r, theta)
#[inline]
pub fn cartesian_to_polar(pos: Vec2) -> (f32, f32) {
    (pos.length(), pos.y.atan2(pos.x))
}
