//! Greedy auto-player that completes a round through the public operations.

use serde::Serialize;

use crate::die::FACES;
use crate::error::{EngineError, EngineResult};
use crate::game::DiceGame;
use crate::state::GameState;

/// Summary of one finished round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RoundReport {
    /// Roll actions taken.
    pub rolls: u32,
    /// Seconds on the clock when the round was won.
    pub seconds: u64,
    /// Final score.
    pub score: u64,
    /// The face every die ended on.
    pub value: u8,
}

/// Play the current round of `game` to a win.
///
/// Freezes every die showing the target face and releases any other
/// frozen die, then advances the clock by
/// `seconds_per_roll` and rolls, until all dice are frozen. Fails with
/// [`EngineError::RollLimit`] if `max_rolls` is reached first.
pub fn play_round(
    game: &mut DiceGame,
    seconds_per_roll: u32,
    max_rolls: u32,
) -> EngineResult<RoundReport> {
    loop {
        let target = target_value(game.state());
        let to_toggle: Vec<usize> = game
            .state()
            .dice()
            .iter()
            .filter(|d| d.frozen != (d.value == target))
            .map(|d| d.index)
            .collect();
        for index in to_toggle {
            game.toggle_freeze(index)?;
        }

        let state = game.state();
        if state.won() {
            return Ok(RoundReport {
                rolls: state.roll_count(),
                seconds: state.final_time_seconds().unwrap_or(state.elapsed_seconds()),
                score: game.score(),
                value: target,
            });
        }
        if state.roll_count() >= max_rolls {
            return Err(EngineError::RollLimit(max_rolls));
        }

        for _ in 0..seconds_per_roll {
            game.tick();
        }
        game.roll_all();
    }
}

/// The face to collect: the frozen value if any die is frozen, otherwise
/// the most common face, preferring the higher face on ties.
fn target_value(state: &GameState) -> u8 {
    if let Some(value) = state.frozen_value() {
        return value;
    }
    let mut counts = [0usize; FACES as usize];
    for die in state.dice() {
        counts[usize::from(die.value - 1)] += 1;
    }
    let mut best = FACES;
    for face in (1..=FACES).rev() {
        if counts[usize::from(face - 1)] > counts[usize::from(best - 1)] {
            best = face;
        }
    }
    best
}
