//! The dice game engine: one owned round and the operations that mutate it.

use log::{debug, info};
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::config::EngineConfig;
use crate::die::{DIE_COUNT, Die};
use crate::error::{EngineError, EngineResult};
use crate::state::GameState;

/// Points awarded per roll in the final score.
pub const POINTS_PER_ROLL: u32 = 100;

/// Owns the state of the current round and the RNG that feeds it.
///
/// Every mutation goes through the methods below, each of which returns
/// the updated snapshot. Rounds are in progress until [`GameState::won`]
/// becomes true, which only a freeze toggle can cause and only
/// [`DiceGame::new_game`] can undo.
#[derive(Debug)]
pub struct DiceGame {
    state: GameState,
    rng: StdRng,
}

impl DiceGame {
    /// Start the first round.
    pub fn new(config: &EngineConfig) -> Self {
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        let state = fresh_state(&mut rng);
        Self { state, rng }
    }

    /// The current snapshot.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Reroll every unfrozen die and count the roll.
    ///
    /// Allowed after a win; hosts decide whether to offer it.
    pub fn roll_all(&mut self) -> &GameState {
        for die in &mut self.state.dice {
            die.reroll(&mut self.rng);
        }
        self.state.roll_count = self.state.roll_count.saturating_add(1);
        debug!("roll {}: {}", self.state.roll_count, self.state);
        &self.state
    }

    /// Flip the frozen flag of the die at `index` and re-check the win.
    pub fn toggle_freeze(&mut self, index: usize) -> EngineResult<&GameState> {
        let count = self.state.dice.len();
        let die = self
            .state
            .dice
            .get_mut(index)
            .ok_or(EngineError::InvalidArgument { index, count })?;
        die.frozen = !die.frozen;
        debug!(
            "die {index} {} at {}",
            if die.frozen { "frozen" } else { "released" },
            die.value
        );

        if !self.state.won && self.state.is_winning() {
            self.state.won = true;
            self.state.final_time_seconds = Some(self.state.elapsed_seconds);
            info!(
                "round won after {} rolls in {}s",
                self.state.roll_count, self.state.elapsed_seconds
            );
        }
        Ok(&self.state)
    }

    /// Advance the round clock by one second.
    pub fn tick(&mut self) -> &GameState {
        self.state.elapsed_seconds += 1;
        &self.state
    }

    /// Discard the current round and start a fresh one.
    pub fn new_game(&mut self) -> &GameState {
        self.state = fresh_state(&mut self.rng);
        info!("new round: {}", self.state);
        &self.state
    }

    /// Roll count times [`POINTS_PER_ROLL`].
    pub fn score(&self) -> u64 {
        u64::from(self.state.roll_count) * u64::from(POINTS_PER_ROLL)
    }
}

/// A new round with every die unfrozen and freshly rolled.
fn fresh_state(rng: &mut StdRng) -> GameState {
    GameState {
        dice: (0..DIE_COUNT).map(|i| Die::rolled(i, rng)).collect(),
        roll_count: 0,
        elapsed_seconds: 0,
        won: false,
        final_time_seconds: None,
    }
}
