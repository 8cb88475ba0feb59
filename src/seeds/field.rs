//! Seed entities and the scattered field
//!
//! Seeds are point entities scattered in an annulus around the line's
//! center. Each frame the field reclassifies every resting seed against
//! the line and starts a bounce on any seed the sweeping line passes
//! through. A bouncing seed is frozen out of classification and re-hit
//! detection until the caller's animation finishes and it settles back on
//! its rest position.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::line::{PartitionLine, Side};
use crate::consts::{
    BOUNCE_DISTANCE, MIN_SWEEP_DELTA, SEED_HIT_RADIUS, SEED_MAX_RADIUS, SEED_MIN_RADIUS,
    SEED_PLACEMENT_ATTEMPTS, SEED_SPACING,
};
use crate::polar_to_cartesian;

/// Bounce lifecycle. `Animating` is set by a hit and cleared exactly once
/// by `SeedField::settle`, driven by the caller when its visual bounce
/// completes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SeedState {
    #[default]
    Idle,
    Animating,
}

/// One seed: where it currently sits, where it rests, and its latest
/// side classification.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Seed {
    pos: Vec2,
    rest: Vec2,
    side: Side,
    state: SeedState,
}

impl Seed {
    #[inline]
    pub fn pos(&self) -> Vec2 {
        self.pos
    }

    /// The placement position the seed returns to after a bounce.
    #[inline]
    pub fn rest(&self) -> Vec2 {
        self.rest
    }

    #[inline]
    pub fn side(&self) -> Side {
        self.side
    }

    #[inline]
    pub fn state(&self) -> SeedState {
        self.state
    }

    #[inline]
    pub fn is_animating(&self) -> bool {
        self.state == SeedState::Animating
    }
}

/// Left/right cardinalities of a classification pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SplitCounts {
    pub left: u32,
    pub right: u32,
}

impl SplitCounts {
    #[inline]
    pub fn total(&self) -> u32 {
        self.left + self.right
    }

    /// Penalty driver: how far from an even split this count is.
    #[inline]
    pub fn difference(&self) -> u32 {
        self.left.abs_diff(self.right)
    }

    /// An exactly even split is the winning condition.
    #[inline]
    pub fn is_balanced(&self) -> bool {
        self.left == self.right
    }
}

/// The round's scattered seeds.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedField {
    seeds: Vec<Seed>,
}

impl SeedField {
    /// Scatter `count` seeds into the annulus around the line's center.
    ///
    /// Positions are rejection-sampled: uniform angle, uniform radius in
    /// [SEED_MIN_RADIUS, SEED_MAX_RADIUS], retried while any already
    /// placed seed sits closer than SEED_SPACING. If the attempt budget
    /// runs out the field simply holds fewer seeds.
    pub fn scatter(count: usize, line: &PartitionLine, rng: &mut impl Rng) -> Self {
        let center = line.center();
        let mut seeds: Vec<Seed> = Vec::with_capacity(count);
        let mut attempts = 0;

        while seeds.len() < count && attempts < SEED_PLACEMENT_ATTEMPTS {
            attempts += 1;
            let angle = rng.random_range(0.0..std::f32::consts::TAU);
            let radius = rng.random_range(SEED_MIN_RADIUS..SEED_MAX_RADIUS);
            let pos = center + polar_to_cartesian(radius, angle);

            let overlapping = seeds
                .iter()
                .any(|s| s.rest.distance_squared(pos) < SEED_SPACING * SEED_SPACING);
            if overlapping {
                continue;
            }

            seeds.push(Seed {
                pos,
                rest: pos,
                side: line.classify(pos),
                state: SeedState::Idle,
            });
        }

        if seeds.len() < count {
            log::warn!(
                "placed only {} of {count} seeds before running out of attempts",
                seeds.len()
            );
        }

        Self { seeds }
    }

    #[inline]
    pub fn seeds(&self) -> &[Seed] {
        &self.seeds
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.seeds.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.seeds.is_empty()
    }

    /// Refresh the side classification of every resting seed. Bouncing
    /// seeds keep the side they had when they were struck.
    pub fn reclassify(&mut self, line: &PartitionLine) {
        for seed in &mut self.seeds {
            if seed.is_animating() {
                continue;
            }
            seed.side = line.classify(seed.pos);
        }
    }

    /// Detect seeds the sweeping line passed through this frame and start
    /// their bounce. Returns how many were struck (the caller keys its
    /// impact feedback off this).
    ///
    /// A stationary line never strikes: the angular delta must clear
    /// MIN_SWEEP_DELTA. A seed exactly at SEED_HIT_RADIUS is not a hit.
    pub fn detect_crossings(&mut self, line: &PartitionLine) -> usize {
        let delta = line.sweep_delta();
        if delta.abs() < MIN_SWEEP_DELTA {
            return 0;
        }

        let normal = line.normal();
        let center = line.center();
        let mut struck = 0;

        for seed in &mut self.seeds {
            if seed.is_animating() {
                continue;
            }
            if line.distance_to_segment(seed.pos) >= SEED_HIT_RADIUS {
                continue;
            }

            // Push away from the line: with the rotation for seeds ahead
            // of the sweep, against it for seeds behind.
            let side_dot = (seed.pos - center).dot(normal);
            let outward = if delta.signum() * side_dot.signum() < 0.0 {
                -normal
            } else {
                normal
            };
            seed.pos = seed.rest + outward * BOUNCE_DISTANCE;
            seed.state = SeedState::Animating;
            struck += 1;
        }

        struck
    }

    /// Finish seed `index`'s bounce: restore the exact rest position and
    /// make it eligible for classification and hits again. Returns false
    /// for out-of-range indices and seeds that were not bouncing.
    pub fn settle(&mut self, index: usize) -> bool {
        match self.seeds.get_mut(index) {
            Some(seed) if seed.is_animating() => {
                seed.pos = seed.rest;
                seed.state = SeedState::Idle;
                true
            }
            _ => false,
        }
    }

    /// Counts over the resting seeds' stored sides: the live tally shown
    /// while the line sweeps. Bouncing seeds are excluded.
    pub fn live_counts(&self) -> SplitCounts {
        let mut counts = SplitCounts { left: 0, right: 0 };
        for seed in self.seeds.iter().filter(|s| !s.is_animating()) {
            match seed.side {
                Side::Left => counts.left += 1,
                Side::Right => counts.right += 1,
            }
        }
        counts
    }

    /// The definitive lock-time tally: every seed, freshly classified at
    /// its rest position. Matches a direct reclassification at the locked
    /// angle no matter what bounces were in flight.
    pub fn counts_at(&self, line: &PartitionLine) -> SplitCounts {
        let mut counts = SplitCounts { left: 0, right: 0 };
        for seed in &self.seeds {
            match line.classify(seed.rest) {
                Side::Left => counts.left += 1,
                Side::Right => counts.right += 1,
            }
        }
        counts
    }
}
