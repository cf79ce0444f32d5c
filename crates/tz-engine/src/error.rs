//! Error types for the dice game engine.

/// Errors that can occur while driving a round.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    /// A die index outside `0..count` was passed to a freeze toggle.
    #[error("invalid die index {index}: expected 0..{count}")]
    InvalidArgument {
        /// The rejected index.
        index: usize,
        /// Number of dice in the round.
        count: usize,
    },

    /// The auto-player rolled this many times without winning.
    #[error("round not won after {0} rolls")]
    RollLimit(u32),
}

/// Convenience result type for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_argument_message() {
        let err = EngineError::InvalidArgument {
            index: 12,
            count: 10,
        };
        assert_eq!(err.to_string(), "invalid die index 12: expected 0..10");
    }

    #[test]
    fn roll_limit_message() {
        assert_eq!(
            EngineError::RollLimit(500).to_string(),
            "round not won after 500 rolls"
        );
    }
}
