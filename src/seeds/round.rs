//! One round of Splitting Seeds, plus the level progression
//!
//! The round glues the line and the field together behind the per-frame
//! contract: the caller pushes the pointer angle once per frame while the
//! round is live, settles seeds when their bounce animation finishes, and
//! confirms to lock the split. Progression tracks the four level dots
//! across rounds.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::field::{SeedField, SplitCounts};
use super::line::PartitionLine;
use crate::consts::MAX_LEVEL;

/// How many seeds a round at this level may scatter. Past the tuned
/// levels the hardest row applies.
pub fn seed_count_options(level: u32) -> &'static [usize] {
    match level {
        0 | 1 => &[4, 6, 8],
        2 => &[10, 12],
        3 => &[12, 14, 16],
        4 => &[14, 16, 18],
        5 => &[18, 20],
        _ => &[20, 22, 24],
    }
}

/// A live splitting round.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SplitRound {
    line: PartitionLine,
    field: SeedField,
    locked: Option<SplitCounts>,
}

impl SplitRound {
    /// Open a round for `level`: random seed count from the level's
    /// options (rounded up to even), random initial line angle, fresh
    /// scatter around `center`.
    pub fn new(level: u32, center: Vec2, rng: &mut impl Rng) -> Self {
        let options = seed_count_options(level);
        let mut count = options[rng.random_range(0..options.len())];
        if count % 2 != 0 {
            count += 1;
        }

        let line = PartitionLine::with_random_angle(center, rng);
        let field = SeedField::scatter(count, &line, rng);
        log::info!(
            "split round: level {level}, {} seeds, opening angle {:.3}",
            field.len(),
            line.theta()
        );

        Self {
            line,
            field,
            locked: None,
        }
    }

    #[inline]
    pub fn line(&self) -> &PartitionLine {
        &self.line
    }

    #[inline]
    pub fn field(&self) -> &SeedField {
        &self.field
    }

    #[inline]
    pub fn is_locked(&self) -> bool {
        self.locked.is_some()
    }

    /// The confirmed tally, once `confirm` has run.
    #[inline]
    pub fn locked_counts(&self) -> Option<SplitCounts> {
        self.locked
    }

    /// Per-frame rotation push while the gesture is active. Runs crossing
    /// detection against the sweep, then reclassifies the resting seeds.
    /// Returns how many seeds started bouncing. Ignored once locked.
    pub fn rotate_to(&mut self, theta: f32) -> usize {
        if self.is_locked() {
            return 0;
        }
        self.line.rotate_to(theta);
        let struck = self.field.detect_crossings(&self.line);
        self.field.reclassify(&self.line);
        struck
    }

    /// Caller signal that seed `index`'s bounce animation finished.
    pub fn settle(&mut self, index: usize) -> bool {
        self.field.settle(index)
    }

    /// Lock the line and produce the definitive tally. Computed fresh from
    /// rest positions, so it equals a direct reclassification at the
    /// locked angle regardless of in-flight bounces.
    pub fn confirm(&mut self) -> SplitCounts {
        if let Some(counts) = self.locked {
            return counts;
        }
        let counts = self.field.counts_at(&self.line);
        self.locked = Some(counts);
        log::info!(
            "split locked at {:.3}: {} left / {} right",
            self.line.theta(),
            counts.left,
            counts.right
        );
        counts
    }
}

/// The four-dot level meter shared across rounds of a session.
///
/// A balanced split fills a dot; four dots is a level up. An unbalanced
/// split clears dots in proportion to how lopsided it was, and a debit
/// the filled dots cannot cover drops the level (above level 2).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SplitProgress {
    level: u32,
    dots: u32,
}

/// Dots needed for a level up.
const DOTS_PER_LEVEL: u32 = 4;

impl Default for SplitProgress {
    fn default() -> Self {
        Self::new()
    }
}

impl SplitProgress {
    pub fn new() -> Self {
        Self { level: 1, dots: 0 }
    }

    #[inline]
    pub fn level(&self) -> u32 {
        self.level
    }

    #[inline]
    pub fn dots(&self) -> u32 {
        self.dots
    }

    /// Fold one confirmed round into the meter. Returns whether the split
    /// was balanced.
    pub fn record(&mut self, counts: SplitCounts) -> bool {
        if counts.is_balanced() {
            self.dots += 1;
            if self.dots >= DOTS_PER_LEVEL {
                if self.level < MAX_LEVEL {
                    self.level += 1;
                    self.dots = 0;
                    log::info!("split level up -> {}", self.level);
                } else {
                    self.dots = DOTS_PER_LEVEL;
                }
            }
            true
        } else {
            let debit = (counts.difference() / 2).min(DOTS_PER_LEVEL);
            // The first two levels are forgiving
            let debit = if self.level <= 2 {
                (debit / 2).max(1)
            } else {
                debit
            };

            let cleared = debit.min(self.dots);
            self.dots -= cleared;
            if cleared < debit && self.level > 2 {
                self.level -= 1;
                self.dots = 0;
                log::info!("split level down -> {}", self.level);
            }
            false
        }
    }
}
