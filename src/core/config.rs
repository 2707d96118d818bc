//! Engine configuration parameters.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Engine configuration parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Seed for the enemy policy's RNG.
    /// Same seed and same player inputs produce the same match.
    pub seed: u64,

    /// Pause after each enemy animation before the next enemy acts, in
    /// milliseconds. Purely presentational; the engine only forwards it.
    pub enemy_pause_ms: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            enemy_pause_ms: 250,
        }
    }
}

impl EngineConfig {
    /// Create a new config with custom seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Create a new config with a custom inter-unit enemy pause.
    pub fn with_enemy_pause_ms(mut self, ms: u64) -> Self {
        self.enemy_pause_ms = ms;
        self
    }

    /// The enemy pause as a `Duration`.
    #[must_use]
    pub fn enemy_pause(&self) -> Duration {
        Duration::from_millis(self.enemy_pause_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = EngineConfig::default();
        assert_eq!(config.seed, 42);
        assert_eq!(config.enemy_pause(), Duration::from_millis(250));
    }

    #[test]
    fn test_builder_pattern() {
        let config = EngineConfig::default().with_seed(123).with_enemy_pause_ms(0);

        assert_eq!(config.seed, 123);
        assert_eq!(config.enemy_pause(), Duration::ZERO);
    }

    #[test]
    fn test_serialization() {
        let config = EngineConfig::default().with_seed(7);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: EngineConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
