//! Rules engine for Tenzies, a single-player dice-freezing game.
//!
//! Ten six-sided dice are rolled; the player freezes dice to keep their
//! values across rerolls and wins once every die is frozen on the same
//! face. The engine owns the whole round state, tracks elapsed seconds
//! through an explicit tick, and derives the score from the roll count.
//! A caller-owned [`RoundTimer`] drives the clock and a greedy
//! [`autoplay`] strategy can play rounds unattended.

pub mod autoplay;
pub mod config;
pub mod die;
pub mod error;
pub mod game;
pub mod state;
pub mod timer;

pub use autoplay::{RoundReport, play_round};
pub use config::EngineConfig;
pub use die::{DIE_COUNT, Die, FACES};
pub use error::{EngineError, EngineResult};
pub use game::{DiceGame, POINTS_PER_ROLL};
pub use state::GameState;
pub use timer::RoundTimer;
