//! The round snapshot observed by hosts.

use serde::Serialize;

use crate::die::Die;

/// All mutable state of one round, owned by [`crate::DiceGame`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameState {
    pub(crate) dice: Vec<Die>,
    pub(crate) roll_count: u32,
    pub(crate) elapsed_seconds: u64,
    pub(crate) won: bool,
    pub(crate) final_time_seconds: Option<u64>,
}

impl GameState {
    /// The dice in index order.
    pub fn dice(&self) -> &[Die] {
        &self.dice
    }

    /// Number of roll actions taken this round.
    pub fn roll_count(&self) -> u32 {
        self.roll_count
    }

    /// Seconds since the round started.
    pub fn elapsed_seconds(&self) -> u64 {
        self.elapsed_seconds
    }

    /// Whether the round has been won.
    pub fn won(&self) -> bool {
        self.won
    }

    /// Elapsed seconds captured at the moment the round was won.
    pub fn final_time_seconds(&self) -> Option<u64> {
        self.final_time_seconds
    }

    /// Number of frozen dice.
    pub fn frozen_count(&self) -> usize {
        self.dice.iter().filter(|d| d.frozen).count()
    }

    /// True when every die is frozen and all show the same face.
    pub fn is_winning(&self) -> bool {
        let Some(first) = self.dice.first() else {
            return false;
        };
        self.dice
            .iter()
            .all(|d| d.frozen && d.value == first.value)
    }

    /// The shared face of the frozen dice, if all frozen dice agree.
    pub fn frozen_value(&self) -> Option<u8> {
        let mut frozen = self.dice.iter().filter(|d| d.frozen).map(|d| d.value);
        let first = frozen.next()?;
        frozen.all(|v| v == first).then_some(first)
    }
}

impl std::fmt::Display for GameState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let faces: Vec<String> = self.dice.iter().map(|d| d.to_string()).collect();
        write!(
            f,
            "{} | rolls {} | {}s",
            faces.join(" "),
            self.roll_count,
            self.elapsed_seconds
        )?;
        if let Some(t) = self.final_time_seconds {
            write!(f, " | won in {t}s")?;
        }
        Ok(())
    }
}
