//! Session configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Language tag passed to the dictionary oracle when none is configured.
pub const DEFAULT_LANGUAGE: &str = "en";

/// Session configuration parameters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Language tag handed to the dictionary oracle on every lookup.
    pub language: String,

    /// Seed for root-word draws.
    /// `None` seeds from OS entropy when the session is created.
    pub seed: Option<u64>,

    /// Upper bound on a single dictionary lookup.
    /// `None` trusts the oracle to answer promptly.
    pub oracle_timeout: Option<Duration>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            language: DEFAULT_LANGUAGE.to_string(),
            seed: None,
            oracle_timeout: None,
        }
    }
}

impl GameConfig {
    /// Set the dictionary language tag.
    #[must_use]
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    /// Set a fixed seed for root-word draws.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Bound every dictionary lookup by `timeout`.
    #[must_use]
    pub fn with_oracle_timeout(mut self, timeout: Duration) -> Self {
        self.oracle_timeout = Some(timeout);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.language, "en");
        assert_eq!(config.seed, None);
        assert_eq!(config.oracle_timeout, None);
    }

    #[test]
    fn test_builder_pattern() {
        let config = GameConfig::default()
            .with_language("en_GB")
            .with_seed(123)
            .with_oracle_timeout(Duration::from_millis(250));

        assert_eq!(config.language, "en_GB");
        assert_eq!(config.seed, Some(123));
        assert_eq!(config.oracle_timeout, Some(Duration::from_millis(250)));
    }

    #[test]
    fn test_serialization() {
        let config = GameConfig::default().with_seed(9);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: GameConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
