//! Featherplay headless demo
//!
//! Plays one round of each minigame from a seeded RNG and logs the
//! results. Useful for eyeballing determinism: the same seed argument
//! replays the same rounds.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use featherplay::maze::{
    Direction, PursuitRound, RoundOutcome, maze_size_for_level, shortest_path,
};
use featherplay::score::{pursuit_points, session_bonus, split_points};
use featherplay::seeds::{SplitProgress, SplitRound};

fn main() {
    env_logger::init();

    let seed = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(0xF3A7);
    let mut rng = Pcg32::seed_from_u64(seed);
    log::info!("demo seed {seed}");

    let level = 3;
    play_pursuit(level, &mut rng);
    play_split(level, &mut rng);

    log::info!("session bonus at level {level}: {}", session_bonus(level));
}

/// Race the rival: the demo player follows its own shortest path to the
/// fish but only moves every other tick, so either side can win.
fn play_pursuit(level: u32, rng: &mut Pcg32) {
    let size = maze_size_for_level(level);
    let mut round = PursuitRound::new(size, rng);
    log::info!(
        "pursuit: {size}x{size} maze, fish at ({}, {})",
        round.fish().x,
        round.fish().y
    );

    let mut tick = 0u32;
    while !round.is_over() {
        if tick % 2 == 0 {
            let path = shortest_path(round.grid(), round.player().cell(), round.fish());
            if path.len() >= 2 {
                if let Some(dir) = Direction::between(path[0], path[1]) {
                    round.move_player(dir);
                }
            }
        }
        if !round.is_over() {
            round.advance_rival();
        }
        tick += 1;
    }

    let outcome = round.outcome();
    let points = pursuit_points(
        outcome,
        round.player().distance_traveled(),
        round.rival().distance_traveled(),
        level,
    );
    let winner = match outcome {
        RoundOutcome::PlayerWon => "player",
        RoundOutcome::RivalWon => "rival",
        RoundOutcome::InProgress => "nobody",
    };
    println!(
        "pursuit: {winner} won (player {} moves, rival {} moves) -> {points} points",
        round.player().distance_traveled(),
        round.rival().distance_traveled(),
    );

    if std::env::args().any(|arg| arg == "--dump") {
        match serde_json::to_string(&round) {
            Ok(json) => println!("{json}"),
            Err(err) => log::error!("snapshot failed: {err}"),
        }
    }
}

/// Sweep the line through a half turn, settling bounced seeds a frame
/// after they are struck, then lock and tally.
fn play_split(level: u32, rng: &mut Pcg32) {
    let mut round = SplitRound::new(level, Vec2::ZERO, rng);
    let start = round.line().theta();

    for frame in 1..=90 {
        let struck = round.rotate_to(start + frame as f32 * (std::f32::consts::PI / 90.0));
        if struck > 0 {
            log::debug!("frame {frame}: {struck} seed(s) bounced");
        }
        // Stand in for the animation layer: every bounce settles next frame
        for index in 0..round.field().len() {
            round.settle(index);
        }
    }

    let counts = round.confirm();
    let mut progress = SplitProgress::new();
    progress.record(counts);
    log::info!(
        "progress after one round: level {}, {} dots",
        progress.level(),
        progress.dots()
    );
    println!(
        "split: {} left / {} right ({}) -> {} points",
        counts.left,
        counts.right,
        if counts.is_balanced() {
            "balanced"
        } else {
            "unbalanced"
        },
        split_points(counts, level),
    );
}
