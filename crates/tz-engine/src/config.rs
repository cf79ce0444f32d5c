//! Configuration for a dice game engine.

use std::time::Duration;

/// Configuration for a [`crate::DiceGame`] and its clock.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// RNG seed for reproducible rounds. `None` seeds from the OS.
    pub seed: Option<u64>,
    /// Period of the round clock.
    pub tick_period: Duration,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            seed: None,
            tick_period: Duration::from_secs(1),
        }
    }
}

impl EngineConfig {
    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the clock period. Zero is raised to one millisecond.
    pub fn with_tick_period(mut self, period: Duration) -> Self {
        self.tick_period = period.max(Duration::from_millis(1));
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let cfg = EngineConfig::default();
        assert_eq!(cfg.seed, None);
        assert_eq!(cfg.tick_period, Duration::from_secs(1));
    }

    #[test]
    fn builder_methods() {
        let cfg = EngineConfig::default()
            .with_seed(123)
            .with_tick_period(Duration::from_millis(250));
        assert_eq!(cfg.seed, Some(123));
        assert_eq!(cfg.tick_period, Duration::from_millis(250));
    }

    #[test]
    fn zero_period_clamped() {
        let cfg = EngineConfig::default().with_tick_period(Duration::ZERO);
        assert_eq!(cfg.tick_period, Duration::from_millis(1));
    }
}
