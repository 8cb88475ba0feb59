//! Score formulas
//!
//! Pure arithmetic over the data the round types expose. Kept separate so
//! the cores return data and never score themselves; the presentation
//! layer owns when (and whether) to apply these.

use crate::maze::RoundOutcome;
use crate::seeds::SplitCounts;

/// Points for a finished pursuit round. Doubled stakes when the player
/// wins; a rival win can cost points when the player wandered.
pub fn pursuit_points(
    outcome: RoundOutcome,
    player_distance: usize,
    rival_distance: usize,
    level: u32,
) -> i64 {
    let margin = player_distance as i64 - rival_distance as i64;
    let stake = 10 * level as i64;
    match outcome {
        RoundOutcome::PlayerWon => margin * 2 * stake,
        RoundOutcome::RivalWon => margin * stake,
        RoundOutcome::InProgress => 0,
    }
}

/// Points for a balanced split.
pub fn split_points(counts: SplitCounts, level: u32) -> u64 {
    if counts.is_balanced() {
        200 * level as u64
    } else {
        0
    }
}

/// End-of-session bonus for the level reached.
pub fn session_bonus(level: u32) -> u64 {
    1000 * level as u64
}
